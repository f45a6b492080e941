use honggfuzz::fuzz;
use sha1_engine::sha1;

fn do_test(data: &[u8]) {
    let hash = sha1::Hash::hash(data);

    // First byte picks a split point so buffered and direct block paths get mixed.
    let split = data.first().map_or(0, |b| usize::from(*b) % (data.len() + 1));
    let mut engine = sha1::Hash::engine();
    engine.input(&data[..split]);
    let peek = engine.sum();
    engine.input(&data[split..]);

    assert_eq!(peek, sha1::hash(&data[..split]));
    assert_eq!(engine.sum(), hash);
    assert_eq!(sha1::Hash::from_engine(engine), hash);
}

fn main() {
    loop {
        fuzz!(|d| { do_test(d) });
    }
}

#[cfg(all(test, fuzzing))]
mod tests {
    fn extend_vec_from_hex(hex: &str, out: &mut Vec<u8>) {
        let mut b = 0;
        for (idx, c) in hex.as_bytes().iter().enumerate() {
            b <<= 4;
            match *c {
                b'A'..=b'F' => b |= c - b'A' + 10,
                b'a'..=b'f' => b |= c - b'a' + 10,
                b'0'..=b'9' => b |= c - b'0',
                _ => panic!("Bad hex"),
            }
            if (idx & 1) == 1 {
                out.push(b);
                b = 0;
            }
        }
    }

    #[test]
    fn duplicate_crash() {
        let mut a = Vec::new();
        extend_vec_from_hex("3f00", &mut a);
        super::do_test(&a);
    }
}
