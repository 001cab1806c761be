//! Narrow interfaces onto the symmetric services used by hybrid encryption.
//!
//! The hybrid scheme never implements a hash or a block cipher itself; it
//! only calls through these traits.

use crate::error::Result;

/// A cryptographic hash with a fixed-length digest.
pub trait HashFunction {
    /// Digest length in bytes
    const OUTPUT_SIZE: usize;

    /// Returns the hash algorithm name.
    fn name() -> &'static str;

    /// Hashes `data` in one shot.
    fn digest(data: &[u8]) -> Vec<u8>;
}

/// A block cipher in a chaining mode with reversible block padding.
pub trait PaddedBlockCipher {
    /// Key length in bytes
    const KEY_SIZE: usize;

    /// Block (and IV) length in bytes
    const BLOCK_SIZE: usize;

    /// Returns the cipher and mode name.
    fn name() -> &'static str;

    /// Pads `plaintext` to the block size and encrypts it.
    fn encrypt_padded(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts `ciphertext` and strips the padding.
    ///
    /// Fails explicitly when the padding is invalid or the length is not a
    /// whole number of blocks.
    fn decrypt_padded(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;
}
