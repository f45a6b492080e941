// SPDX-License-Identifier: CC0-1.0

use super::{HashEngine, BLOCK_SIZE};

const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

impl HashEngine {
    /// Runs the compression function over every block in `blocks`.
    ///
    /// `blocks.len()` must be a multiple of [`BLOCK_SIZE`].
    pub(super) fn process_blocks(state: &mut [u32; 5], blocks: &[u8]) {
        debug_assert_eq!(blocks.len() % BLOCK_SIZE, 0);

        for block in blocks.chunks_exact(BLOCK_SIZE) {
            process_block(state, block);
        }
    }
}

// Straightforward algorithm from RFC 3174 section 6.1, schedule and registers on the stack.
#[inline]
fn process_block(state: &mut [u32; 5], block: &[u8]) {
    let mut w = [0u32; 80];
    for (w_val, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *w_val = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &wi) in w.iter().enumerate() {
        let f = match i / 20 {
            0 => (b & c) | (!b & d),
            2 => (b & c) | (b & d) | (c & d),
            _ => b ^ c ^ d,
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[i / 20])
            .wrapping_add(wi);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (h, v) in state.iter_mut().zip([a, b, c, d, e]) {
        *h = h.wrapping_add(v);
    }
}
