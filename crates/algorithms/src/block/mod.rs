//! Block cipher adapters
//!
//! Padding and chaining come from the RustCrypto `cbc` crate; this module
//! only checks lengths and maps failures onto monecc errors.

mod aes_cbc;

pub use aes_cbc::Aes128Cbc;
