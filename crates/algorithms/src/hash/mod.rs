//! Hash function adapters
//!
//! Key derivation only needs one-shot hashing, so each adapter implements
//! [`monecc_api::HashFunction`] over an audited implementation.

mod sha256;

pub use sha256::Sha256;
