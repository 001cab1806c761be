//! Trait definitions shared across the monecc crates

pub mod pke;
pub mod symmetric;

pub use pke::Pke;
pub use symmetric::{HashFunction, PaddedBlockCipher};
