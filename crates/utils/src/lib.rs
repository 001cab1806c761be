//! Utilities for the monecc workspace
//!
//! Currently this is the monECC key-file format used by the command-line
//! front end to persist key pairs.

pub mod keyfile;

pub use keyfile::{read_private_key, read_public_key, write_private_key, write_public_key, KeyFile};
