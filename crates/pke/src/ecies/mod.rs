//! Elliptic Curve Integrated Encryption Scheme (ECIES) on the monECC curve.

use log::debug;
use monecc_algorithms::ec::{Curve, Point};
use monecc_algorithms::block::Aes128Cbc;
use monecc_algorithms::hash::Sha256;
use monecc_api::{HashFunction, PaddedBlockCipher, SecretBytes};
use monecc_params::traditional::ecies::{MAX_SAMPLING_ATTEMPTS, MIN_SCALAR_RANGE};
use monecc_params::utils::symmetric::{AES128_KEY_SIZE, AES_BLOCK_SIZE};
use num_bigint::{BigInt, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{Error as PkeError, Result as PkeResult};

// Declare submodules
mod domain;
mod envelope;
mod keys;
mod scheme;

pub use domain::Domain;
pub use envelope::Envelope;
pub use keys::{generate_keypair, generate_keypair_in_range, EciesPublicKey, EciesSecretKey};
pub use scheme::{decrypt_message, encrypt_message, Ecies};

/// Hash used to derive key material from the shared point
pub(crate) type Kdf = Sha256;

/// Cipher keyed by the derived material
pub(crate) type Cipher = Aes128Cbc;

/// Symmetric key derived from a shared point
pub(crate) type SymmetricKey = SecretBytes<AES128_KEY_SIZE>;

/// CBC initialization vector derived from a shared point
pub(crate) type SymmetricIv = SecretBytes<AES_BLOCK_SIZE>;

/// Draw a scalar uniformly from `[1, max_scalar]`.
///
/// Fails when `max_scalar` is below 2.
pub fn random_scalar<R: CryptoRng + RngCore>(
    max_scalar: &BigInt,
    rng: &mut R,
) -> PkeResult<BigInt> {
    if max_scalar < &BigInt::from(MIN_SCALAR_RANGE) {
        return Err(PkeError::InvalidParameter(
            format!("scalar range must be at least {}, got {}", MIN_SCALAR_RANGE, max_scalar).into(),
        ));
    }
    let upper = max_scalar + BigInt::one();
    Ok(rng.gen_bigint_range(&BigInt::one(), &upper))
}

/// Draw an ephemeral scalar r and return (r·G, r·Q).
///
/// Draws whose ephemeral point or shared point is the identity are rejected;
/// after [`MAX_SAMPLING_ATTEMPTS`] rejections the call fails.
pub(crate) fn sample_ephemeral<R: CryptoRng + RngCore>(
    curve: &Curve,
    generator: &Point,
    recipient: &Point,
    max_scalar: &BigInt,
    rng: &mut R,
) -> PkeResult<(Point, Point)> {
    for attempt in 1..=MAX_SAMPLING_ATTEMPTS {
        let r = random_scalar(max_scalar, rng)?;

        let ephemeral = curve.scalar_mul(&r, generator)?;
        if ephemeral.is_identity() {
            debug!("ephemeral draw {} rejected: r·G is the identity", attempt);
            continue;
        }

        let shared = curve.scalar_mul(&r, recipient)?;
        if shared.is_identity() {
            debug!("ephemeral draw {} rejected: r·Q is the identity", attempt);
            continue;
        }

        return Ok((ephemeral, shared));
    }

    Err(PkeError::SamplingExhausted {
        what: "ephemeral scalar",
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}

/// Derive the AES key and CBC IV from a shared point.
///
/// SHA-256 of the decimal text `"Sx;Sy"`: the first 16 bytes are the IV,
/// the last 16 bytes the key.
pub(crate) fn derive_key_iv(shared: &Point) -> PkeResult<(SymmetricKey, SymmetricIv)> {
    if shared.is_identity() {
        return Err(PkeError::KeyDerivationFailed(
            "shared secret is the point at infinity",
        ));
    }
    let mut encoded = shared.serialize_coordinates()?;
    let mut digest = Kdf::digest(encoded.as_bytes());
    encoded.zeroize();

    let iv_end = Cipher::BLOCK_SIZE;
    let key_end = iv_end + Cipher::KEY_SIZE;
    if Kdf::OUTPUT_SIZE < key_end || digest.len() < key_end {
        digest.zeroize();
        return Err(PkeError::KeyDerivationFailed("digest too short"));
    }
    let iv = SymmetricIv::from_slice(&digest[..iv_end]);
    let key = SymmetricKey::from_slice(&digest[iv_end..key_end]);
    digest.zeroize();

    Ok((key?, iv?))
}
