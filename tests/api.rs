// SPDX-License-Identifier: CC0-1.0

//! Test the API surface of `sha1-engine`.
//!
//! The point of these tests is to check the API surface as opposed to test the API functionality.
//!
//! ref: <https://rust-lang.github.io/api-guidelines/about.html>

#![allow(dead_code)]
#![allow(unused_imports)]

// Import using module style e.g., `sha1::Hash`.
use sha1_engine::{sha1, FromSliceError, HashEngine, HexToArrayError};
// Import using type alias style e.g., `Sha1`.
use sha1_engine::{Sha1, Sha1Engine};

/// The hash type.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)] // C-COMMON-TRAITS
#[derive(Debug)] // All public types implement Debug (C-DEBUG).
struct Hashes {
    a: sha1::Hash,
}

impl Hashes {
    fn new() -> Self { Self { a: Sha1::hash(&[]) } }
}

/// The hash engine.
#[derive(Clone)] // C-COMMON-TRAITS
#[derive(Debug)] // All public types implement Debug (C-DEBUG).
struct Engines {
    a: sha1::HashEngine,
}

impl Engines {
    fn new() -> Self { Self { a: sha1::HashEngine::new() } }
}

/// Public structs that are not hashes, engines, or errors.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)] // C-COMMON-TRAITS
#[derive(Debug)] // All public types implement Debug (C-DEBUG).
struct OtherStructs {
    a: sha1::Midstate,
}

impl OtherStructs {
    fn new() -> Self { Self { a: sha1::Midstate::new([0xab; 20], 0) } }
}

/// All hash engine types that implement `Default`.
#[derive(Default)]
struct Default {
    a: sha1::HashEngine,
}

/// A struct that includes all public error types.
// These derives are our own policy, not Rust API guidelines.
#[derive(Debug, Clone, PartialEq, Eq)] // All public types implement Debug (C-DEBUG).
struct Errors {
    a: FromSliceError,
    b: HexToArrayError,
    c: sha1::MidstateError,
}

#[test]
fn api_can_use_modules_from_crate_root() {
    use sha1_engine::sha1;
}

#[test]
fn api_can_use_alias_from_crate_root() {
    use sha1_engine::{Sha1, Sha1Engine};
}

#[test]
fn api_exposes_sizes() {
    assert_eq!(sha1::DIGEST_SIZE, 20);
    assert_eq!(sha1::BLOCK_SIZE, 64);
    assert_eq!(sha1::Hash::LEN, sha1::DIGEST_SIZE);
    assert_eq!(<Sha1Engine as HashEngine>::BLOCK_SIZE, 64);
    assert_eq!(<Sha1Engine as HashEngine>::DIGEST_SIZE, 20);
}

// `Debug` representation is never empty (C-DEBUG-NONEMPTY).
#[test]
fn api_all_non_error_types_have_non_empty_debug() {
    macro_rules! check_debug {
        ($t:tt; $($field:tt),* $(,)?) => {
            $(
                let debug = format!("{:?}", $t.$field);
                assert!(!debug.is_empty());
            )*
        }
    }

    let t = Hashes::new();
    check_debug!(t; a);

    let t = Engines::new();
    check_debug!(t; a);

    let t = OtherStructs::new();
    check_debug!(t; a);
}

#[test]
fn all_types_implement_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    //  Types are `Send` and `Sync` where possible (C-SEND-SYNC).
    assert_send::<Hashes>();
    assert_sync::<Hashes>();
    assert_send::<Engines>();
    assert_sync::<Engines>();
    assert_send::<OtherStructs>();
    assert_sync::<OtherStructs>();

    // Error types should implement the Send and Sync traits (C-GOOD-ERR).
    assert_send::<Errors>();
    assert_sync::<Errors>();
}

#[test]
fn engine_trait_drives_sha1() {
    fn hash_in_two<E: HashEngine + std::default::Default>(a: &[u8], b: &[u8]) -> E::Hash {
        let mut engine = E::default();
        engine.input(a);
        engine.input(b);
        assert_eq!(engine.n_bytes_hashed(), (a.len() + b.len()) as u64);
        engine.finalize()
    }

    let got = hash_in_two::<Sha1Engine>(b"ab", b"c");
    assert_eq!(got, sha1::hash(b"abc"));
    assert_eq!(sha1_engine::hash_with::<Sha1Engine>(b"abc"), got);
}

#[test]
fn hash_byte_accessors() {
    let hash = sha1::hash(b"abc");
    let bytes: [u8; 20] = hash.into();

    assert_eq!(hash.to_byte_array(), bytes);
    assert_eq!(hash.as_byte_array(), &bytes);
    assert_eq!(hash.as_bytes(), &bytes[..]);
    assert_eq!(hash.to_bytes(), bytes.to_vec());
    assert_eq!(AsRef::<[u8]>::as_ref(&hash), &bytes[..]);
    assert_eq!(sha1::Hash::from_byte_array(bytes), hash);
    assert_eq!(hash[0], 0xa9);
    assert_eq!(&hash[18..], &[0xd8, 0x9d]);

    assert_ne!(sha1::Hash::all_zeros(), hash);
    assert_eq!(sha1::Hash::all_zeros().to_string(), "0".repeat(40));
}

#[test]
fn hash_works_as_map_key() {
    use std::borrow::Borrow;
    use std::collections::HashSet;

    let hash = sha1::hash(b"key");
    let mut set = HashSet::new();
    set.insert(hash);
    let as_slice: &[u8] = hash.borrow();
    assert!(set.contains(as_slice));
}
