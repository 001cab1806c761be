//! Constants for traditional cryptographic algorithms

pub mod ecies;
pub mod monecc;
