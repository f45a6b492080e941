// SPDX-License-Identifier: CC0-1.0

//! SHA1 implementation.
//!
//! The engine follows the Merkle-Damgård construction from RFC 3174: input is buffered into
//! 64-byte blocks, each block is folded into a five word chaining value by the compression
//! function, and finalization appends `0x80`, zero padding and the 64-bit big-endian message
//! length in bits.

mod crypto;

use core::{borrow, cmp, convert, fmt, ops, slice, str};

use hex::DisplayHex;

use crate::{FromSliceError, HexToArrayError};

/// Length of a SHA1 digest, in bytes.
pub const DIGEST_SIZE: usize = 20;

/// Size of the blocks consumed by the SHA1 compression function, in bytes.
pub const BLOCK_SIZE: usize = 64;

const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Computes the SHA1 digest of `data`.
pub fn hash(data: &[u8]) -> Hash {
    let mut engine = HashEngine::new();
    engine.input(data);
    Hash::from_engine(engine)
}

/// Computes the SHA1 digest of `data`, starting from the chaining value `h` instead of the
/// standard initial constants.
///
/// The engine is set up as though exactly one 64-byte block had already been compressed into
/// `h`, so the encoded length covers that block plus `data`. This is what MAC constructions that
/// seed the compression function with a secret-derived state expect.
///
/// Use [`HashEngine::from_midstate`] if more than one block has been processed.
pub fn hash_with_initial_state(data: &[u8], h: [u32; 5]) -> Hash {
    let mut engine = HashEngine::new();
    engine.set_initial_state(h);
    engine.bytes_hashed = BLOCK_SIZE as u64;
    engine.input(data);
    Hash::from_engine(engine)
}

/// Engine to compute SHA1 hash function.
#[derive(Debug, Clone)]
pub struct HashEngine {
    h: [u32; 5],
    buffer: [u8; BLOCK_SIZE],
    // INVARIANT: always less than `BLOCK_SIZE` between calls.
    buffer_len: usize,
    bytes_hashed: u64,
}

impl HashEngine {
    /// Constructs a new SHA1 hash engine.
    pub const fn new() -> Self {
        Self { h: INITIAL_STATE, buffer: [0; BLOCK_SIZE], buffer_len: 0, bytes_hashed: 0 }
    }

    /// Constructs a new [`HashEngine`] from a [`Midstate`].
    ///
    /// Please see docs on [`Midstate`] before using this function.
    pub fn from_midstate(midstate: Midstate) -> HashEngine {
        HashEngine {
            h: midstate.to_state_words(),
            buffer: [0; BLOCK_SIZE],
            buffer_len: 0,
            bytes_hashed: midstate.bytes_hashed,
        }
    }

    /// Restores the engine to the state returned by [`HashEngine::new`].
    pub fn reset(&mut self) {
        self.h = INITIAL_STATE;
        self.buffer_len = 0;
        self.bytes_hashed = 0;
    }

    /// Overwrites the chaining value without touching the buffered data or the byte count.
    ///
    /// Only meaningful on a freshly reset engine, before any input. Most callers want
    /// [`hash_with_initial_state`] or [`HashEngine::from_midstate`] instead.
    pub fn set_initial_state(&mut self, h: [u32; 5]) {
        debug_assert_eq!(self.buffer_len, 0, "initial state set after input");
        self.h = h;
    }

    /// Adds data to the engine.
    ///
    /// Whole blocks are compressed straight out of `data`; only a partial block at either end
    /// goes through the internal buffer.
    pub fn input(&mut self, mut data: &[u8]) {
        // Cast usize to u64 is ok.
        self.bytes_hashed = self.bytes_hashed.wrapping_add(data.len() as u64);

        if self.buffer_len > 0 {
            let n = cmp::min(BLOCK_SIZE - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + n].copy_from_slice(&data[..n]);
            self.buffer_len += n;
            if self.buffer_len == BLOCK_SIZE {
                Self::process_blocks(&mut self.h, &self.buffer);
                self.buffer_len = 0;
            }
            data = &data[n..];
        }

        if data.len() >= BLOCK_SIZE {
            let n = data.len() - data.len() % BLOCK_SIZE;
            Self::process_blocks(&mut self.h, &data[..n]);
            data = &data[n..];
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buffer_len = data.len();
        }
    }

    /// Returns the digest of everything input so far.
    ///
    /// Finalization happens on a copy, the engine can keep accepting input afterwards.
    pub fn sum(&self) -> Hash { Hash(self.clone().checksum()) }

    /// Returns the number of bytes waiting in the partial block buffer.
    pub fn buffered_len(&self) -> usize { self.buffer_len }

    /// Returns `true` if the midstate can be extracted from this engine.
    ///
    /// The midstate can only be extracted if the number of bytes input into
    /// the hash engine is a multiple of 64.
    pub const fn can_extract_midstate(&self) -> bool { self.bytes_hashed % 64 == 0 }

    /// Outputs the midstate of the hash engine.
    ///
    /// Please see docs on [`Midstate`] before using this function.
    pub fn midstate(&self) -> Result<Midstate, MidstateError> {
        if !self.can_extract_midstate() {
            return Err(MidstateError { invalid_n_bytes_hashed: self.bytes_hashed });
        }
        Ok(Midstate::from_state_words(self.h, self.bytes_hashed))
    }

    // Pads the message, leaving the engine unusable for further input.
    fn checksum(&mut self) -> [u8; DIGEST_SIZE] {
        let bit_len = self.bytes_hashed.wrapping_mul(8);
        let idx = (self.bytes_hashed % BLOCK_SIZE as u64) as usize;

        // A single 0x80 then zeroes, until 8 bytes short of a block boundary. When there is
        // no room left for the length the padding spills into one more block.
        let mut padding = [0u8; BLOCK_SIZE];
        padding[0] = 0x80;
        let pad_len =
            if idx < BLOCK_SIZE - 8 { BLOCK_SIZE - 8 - idx } else { 2 * BLOCK_SIZE - 8 - idx };
        self.input(&padding[..pad_len]);
        self.input(&bit_len.to_be_bytes());

        assert_eq!(self.buffer_len, 0, "sha1 padding left {} bytes unprocessed", self.buffer_len);

        state_to_bytes(&self.h)
    }
}

impl Default for HashEngine {
    fn default() -> Self { Self::new() }
}

impl crate::HashEngine for HashEngine {
    type Hash = Hash;
    const BLOCK_SIZE: usize = BLOCK_SIZE;
    const DIGEST_SIZE: usize = DIGEST_SIZE;

    fn input(&mut self, data: &[u8]) { HashEngine::input(self, data) }

    fn n_bytes_hashed(&self) -> u64 { self.bytes_hashed }

    fn finalize(self) -> Self::Hash { Hash::from_engine(self) }
}

fn state_to_bytes(h: &[u32; 5]) -> [u8; DIGEST_SIZE] {
    let mut ret = [0; DIGEST_SIZE];
    for (val, ret_bytes) in h.iter().zip(ret.chunks_exact_mut(4)) {
        ret_bytes.copy_from_slice(&val.to_be_bytes());
    }
    ret
}

/// Output of the SHA1 hash function.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Hash([u8; DIGEST_SIZE]);

impl Hash {
    /// Length of the hash, in bytes.
    pub const LEN: usize = DIGEST_SIZE;

    /// Creates a default hash engine, adds `bytes` to it, then finalizes the engine.
    #[allow(clippy::self_named_constructors)] // `hash` is a verb but `Hash` is a noun.
    pub fn hash(bytes: &[u8]) -> Self { hash(bytes) }

    /// Returns a hash engine that is ready to be used for data.
    pub fn engine() -> HashEngine { HashEngine::new() }

    /// Finalizes a hash engine to produce a hash.
    pub fn from_engine(mut e: HashEngine) -> Self { Hash(e.checksum()) }

    /// Copies a byte slice into a hash object.
    pub fn from_slice(sl: &[u8]) -> Result<Self, FromSliceError> {
        if sl.len() != DIGEST_SIZE {
            Err(FromSliceError { expected: DIGEST_SIZE, got: sl.len() })
        } else {
            let mut ret = [0; DIGEST_SIZE];
            ret.copy_from_slice(sl);
            Ok(Self::from_byte_array(ret))
        }
    }

    /// Constructs a hash from the underlying byte array.
    pub const fn from_byte_array(bytes: [u8; DIGEST_SIZE]) -> Self { Self(bytes) }

    /// Returns the underlying byte array.
    pub const fn to_byte_array(self) -> [u8; DIGEST_SIZE] { self.0 }

    /// Returns a reference to the underlying byte array.
    pub const fn as_byte_array(&self) -> &[u8; DIGEST_SIZE] { &self.0 }

    /// Returns a reference to the underlying byte array as a slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    /// Copies the underlying bytes into a new `Vec`.
    #[cfg(feature = "alloc")]
    #[inline]
    pub fn to_bytes(&self) -> alloc::vec::Vec<u8> { self.0.to_vec() }

    /// Returns an all zero hash.
    ///
    /// No known input hashes to this value, it is only useful as a placeholder.
    pub const fn all_zeros() -> Self { Self([0x00; DIGEST_SIZE]) }
}

impl str::FromStr for Hash {
    type Err = HexToArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use hex::FromHex;

        let bytes = <[u8; DIGEST_SIZE]>::from_hex(s)?;
        Ok(Self::from_byte_array(bytes))
    }
}

impl fmt::LowerHex for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0[..].as_hex(), f)
    }
}

impl fmt::UpperHex for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0[..].as_hex(), f)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

impl<I: slice::SliceIndex<[u8]>> ops::Index<I> for Hash {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output { &self.0[index] }
}

impl convert::AsRef<[u8; DIGEST_SIZE]> for Hash {
    #[inline]
    fn as_ref(&self) -> &[u8; DIGEST_SIZE] { &self.0 }
}

impl convert::AsRef<[u8]> for Hash {
    #[inline]
    fn as_ref(&self) -> &[u8] { &self.0 }
}

impl borrow::Borrow<[u8]> for Hash {
    fn borrow(&self) -> &[u8] { &self.0 }
}

impl From<Hash> for [u8; DIGEST_SIZE] {
    fn from(hash: Hash) -> Self { hash.0 }
}

crate::serde_impl!(Hash, DIGEST_SIZE);

/// Unfinalized output of the SHA1 hash function.
///
/// The `Midstate` type is obscure and specialized and should not be used unless you are sure of
/// what you are doing.
///
/// It represents "partially hashed data" but does not itself have properties of cryptographic
/// hashes. For example, when (ab)used as hashes, midstates are vulnerable to trivial
/// length-extension attacks. They exist to resume a computation from a chaining value produced
/// elsewhere, for example a keyed prefix that was compressed once and is reused for many
/// messages.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Midstate {
    /// Raw bytes of the midstate i.e., the already-hashed contents of the hash engine.
    bytes: [u8; DIGEST_SIZE],
    /// Number of bytes hashed to achieve this midstate.
    // INVARIANT must always be a multiple of 64.
    bytes_hashed: u64,
}

impl Midstate {
    /// Constructs a new [`Midstate`] from the `state` and the `bytes_hashed` to get to that state.
    ///
    /// # Panics
    ///
    /// Panics if `bytes_hashed` is not a multiple of 64.
    pub const fn new(state: [u8; DIGEST_SIZE], bytes_hashed: u64) -> Self {
        if bytes_hashed % 64 != 0 {
            panic!("bytes hashed is not a multiple of 64");
        }

        Midstate { bytes: state, bytes_hashed }
    }

    /// Constructs a new [`Midstate`] from the five chaining words.
    ///
    /// # Panics
    ///
    /// Panics if `bytes_hashed` is not a multiple of 64.
    pub fn from_state_words(h: [u32; 5], bytes_hashed: u64) -> Self {
        Self::new(state_to_bytes(&h), bytes_hashed)
    }

    /// Returns the chaining value as five big-endian decoded words.
    pub fn to_state_words(self) -> [u32; 5] {
        let mut ret = [0; 5];
        for (ret_val, bytes) in ret.iter_mut().zip(self.bytes.chunks_exact(4)) {
            *ret_val = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        ret
    }

    /// Returns a reference to the underlying byte array and the number of bytes hashed.
    pub const fn as_parts(&self) -> (&[u8; DIGEST_SIZE], u64) { (&self.bytes, self.bytes_hashed) }

    /// Deconstructs the [`Midstate`], returning the byte array and number of bytes hashed.
    pub const fn to_parts(self) -> ([u8; DIGEST_SIZE], u64) { (self.bytes, self.bytes_hashed) }
}

impl fmt::Debug for Midstate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        struct Encoder<'a> {
            bytes: &'a [u8; DIGEST_SIZE],
        }
        impl fmt::Debug for Encoder<'_> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::LowerHex::fmt(&self.bytes[..].as_hex(), f)
            }
        }

        f.debug_struct("Midstate")
            .field("bytes", &Encoder { bytes: &self.bytes })
            .field("length", &self.bytes_hashed)
            .finish()
    }
}

impl convert::AsRef<[u8]> for Midstate {
    fn as_ref(&self) -> &[u8] { &self.bytes }
}

/// `Midstate` invariant violated (not a multiple of 64).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidstateError {
    /// The invalid number of bytes hashed.
    invalid_n_bytes_hashed: u64,
}

impl MidstateError {
    /// Returns the byte count that could not be turned into a midstate.
    pub fn invalid_n_bytes_hashed(&self) -> u64 { self.invalid_n_bytes_hashed }
}

impl fmt::Display for MidstateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid number of bytes hashed {} (should have been a multiple of 64)",
            self.invalid_n_bytes_hashed
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MidstateError {}
