//! Trait definition for Public Key Encryption (PKE) schemes.

use crate::error::Result;
use rand::{CryptoRng, RngCore};

/// Trait for text-oriented public key encryption schemes.
///
/// Implementors carry their own domain parameters, so every operation takes
/// `&self`.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone;

    /// Secret key type for the PKE scheme.
    type SecretKey: Clone;

    /// Ciphertext type produced by the PKE scheme, a printable cryptogram.
    type Ciphertext: AsRef<str> + Clone;

    /// Returns the PKE algorithm name.
    fn name(&self) -> &'static str;

    /// Generates a new key pair for the PKE scheme.
    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext message using the recipient's public key.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `plaintext` - The message to encrypt.
    /// * `rng` - A cryptographically secure random number generator.
    fn encrypt<R: CryptoRng + RngCore>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &str,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a cryptogram using the recipient's secret key.
    fn decrypt(&self, sk_recipient: &Self::SecretKey, ciphertext: &str) -> Result<String>;
}
