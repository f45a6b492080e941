// SPDX-License-Identifier: CC0-1.0

//! Incremental SHA1 hashing.
//!
//! This library implements the SHA1 hash function as specified in RFC 3174. It is a small,
//! `no_std`-friendly crate: the engine works purely on byte slices held in memory and never
//! allocates while hashing.
//!
//! SHA1 is broken as a collision-resistant hash. It is provided here because legacy wire formats
//! and MAC constructions still require it; do not pick it for anything new.
//!
//! ## Commonly used operations
//!
//! Hashing a single byte slice or a string:
//!
//! ```rust
//! use sha1_engine::sha1;
//!
//! let bytes = [0u8; 5];
//! let hash_of_bytes = sha1::hash(&bytes);
//! let hash_of_string = sha1::Hash::hash("some string".as_bytes());
//! ```
//!
//! Hashing content incrementally, peeking at the digest along the way:
//!
//! ```rust
//! use sha1_engine::sha1;
//!
//! let mut engine = sha1::HashEngine::new();
//! engine.input(b"hello");
//! let partial = engine.sum(); // `engine` is still usable.
//! engine.input(b" world");
//! let full = engine.sum();
//!
//! assert_eq!(partial, sha1::hash(b"hello"));
//! assert_eq!(full, sha1::hash(b"hello world"));
//! ```
//!
//! ## Available feature flags
//!
//! * `std` - the usual dependency on `std` (default).
//! * `alloc` - enables `Hash::to_bytes`.
//! * `serde` - (dependency), implements `serde`-based serialization and deserialization.

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "serde")]
/// A generic serialization/deserialization framework.
pub extern crate serde;

/// Re-export the `hex-conservative` crate.
pub extern crate hex;

mod error;
#[macro_use]
pub mod serde_macros;
pub mod sha1;

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::{
    error::{FromSliceError, HexToArrayError},
    sha1::{Hash as Sha1, HashEngine as Sha1Engine},
};

/// A hashing engine which bytes can be serialized into.
///
/// This is the seam that lets generic code (registries, HMAC-style wrappers, dynamic dispatch
/// tables) drive an engine without knowing which one it is. The engine itself does not depend on
/// anything defined here beyond the trait impl.
pub trait HashEngine: Clone {
    /// The `Hash` type returned when finalizing this engine.
    type Hash;

    /// Length of the hash's internal block size, in bytes.
    const BLOCK_SIZE: usize;

    /// Length of the finalized digest, in bytes.
    const DIGEST_SIZE: usize;

    /// Adds data to the hash engine.
    fn input(&mut self, data: &[u8]);

    /// Returns the number of bytes already input into the engine.
    fn n_bytes_hashed(&self) -> u64;

    /// Finalizes this engine, consuming it.
    fn finalize(self) -> Self::Hash;
}

/// Hashes `data` with a freshly constructed engine of type `E`.
pub fn hash_with<E: HashEngine + Default>(data: &[u8]) -> E::Hash {
    let mut engine = E::default();
    engine.input(data);
    engine.finalize()
}
