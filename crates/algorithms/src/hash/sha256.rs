//! SHA-256 through the RustCrypto `sha2` crate

use monecc_api::HashFunction;
use monecc_params::utils::hash::SHA256_OUTPUT_SIZE;
use sha2::Digest;

/// SHA-256 hash service
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl HashFunction for Sha256 {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;

    fn name() -> &'static str {
        "SHA-256"
    }

    fn digest(data: &[u8]) -> Vec<u8> {
        sha2::Sha256::digest(data).to_vec()
    }
}
