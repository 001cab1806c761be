//! Public Key Encryption (PKE) schemes for monecc.
//!
//! One scheme lives here: an ECIES-style construction on the monECC curve.
//! An ephemeral Diffie-Hellman exchange yields a shared point, SHA-256 of its
//! coordinates gives an AES-128 key and IV, and the plaintext is encrypted
//! with AES-128-CBC. The cryptogram is the text
//! `base64("Rx;Ry") ":" base64(ciphertext)`.
//!
//! The envelope carries no authentication tag. Tampering is only noticed
//! when it happens to break the padding or the UTF-8 decoding of the result.

pub mod ecies;
pub mod error;

// Re-export key items
pub use ecies::{
    decrypt_message, encrypt_message, generate_keypair, Domain, Ecies, EciesPublicKey,
    EciesSecretKey, Envelope,
};
pub use error::{Error, Result};
