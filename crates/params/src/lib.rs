//! Constant values for monecc cryptographic operations
//!
//! This crate provides the configuration constants shared across the monecc
//! workspace: the fixed curve and generator, the ECIES defaults, symmetric
//! primitive sizes and the key-file markers.

pub mod traditional;
pub mod utils;
