//! ECIES key pairs and their generation

use core::fmt;

use log::debug;
use monecc_algorithms::ec::Point;
use monecc_params::traditional::ecies::MAX_SAMPLING_ATTEMPTS;
use num_bigint::BigInt;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

use super::{random_scalar, Domain};
use crate::error::{Error as PkeError, Result as PkeResult};

/// ECIES public key: the point Q = k·G
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EciesPublicKey(Point);

impl EciesPublicKey {
    /// Wrap a point that has been validated against `domain`.
    ///
    /// The identity is rejected.
    pub fn from_point(domain: &Domain, point: Point) -> PkeResult<Self> {
        domain.curve().check_point(&point, "ECIES public key")?;
        if point.is_identity() {
            return Err(PkeError::InvalidPoint("public key is the point at infinity"));
        }
        Ok(EciesPublicKey(point))
    }

    /// The underlying point
    pub fn point(&self) -> &Point {
        &self.0
    }
}

/// ECIES secret key: the scalar k
#[derive(Clone, PartialEq, Eq)]
pub struct EciesSecretKey(BigInt);

impl EciesSecretKey {
    /// Wrap a scalar, rejecting zero
    pub fn new(scalar: BigInt) -> PkeResult<Self> {
        if scalar.is_zero() {
            return Err(PkeError::InvalidParameter(
                "secret scalar must be non-zero".into(),
            ));
        }
        Ok(EciesSecretKey(scalar))
    }

    /// The secret scalar
    pub fn scalar(&self) -> &BigInt {
        &self.0
    }

    /// Recompute the public key k·G
    pub fn public_key(&self, domain: &Domain) -> PkeResult<EciesPublicKey> {
        let point = domain.curve().scalar_mul(&self.0, domain.generator())?;
        EciesPublicKey::from_point(domain, point)
    }
}

impl fmt::Debug for EciesSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EciesSecretKey([REDACTED])")
    }
}

/// Generate a key pair with k drawn from `[1, n − 1]`
pub fn generate_keypair<R: CryptoRng + RngCore>(
    domain: &Domain,
    rng: &mut R,
) -> PkeResult<(EciesPublicKey, EciesSecretKey)> {
    generate_keypair_in_range(domain, &domain.max_private_scalar(), rng)
}

/// Generate a key pair with k drawn from `[1, min(upper, n − 1)]`.
///
/// Draws whose public point is the identity, off the curve, or has y = 0
/// are rejected. After [`MAX_SAMPLING_ATTEMPTS`] rejections the call fails.
pub fn generate_keypair_in_range<R: CryptoRng + RngCore>(
    domain: &Domain,
    upper: &BigInt,
    rng: &mut R,
) -> PkeResult<(EciesPublicKey, EciesSecretKey)> {
    let max = domain.max_private_scalar();
    let upper = if upper < &max { upper } else { &max };

    let curve = domain.curve();
    for attempt in 1..=MAX_SAMPLING_ATTEMPTS {
        let k = random_scalar(upper, rng)?;
        let q = curve.scalar_mul(&k, domain.generator())?;

        let degenerate = match q.y() {
            None => Some("k·G is the identity"),
            Some(_) if !curve.is_on_curve(&q) => Some("k·G is off the curve"),
            Some(y) if y.is_zero() => Some("k·G has y = 0"),
            Some(_) => None,
        };
        if let Some(reason) = degenerate {
            debug!("key draw {} rejected: {}", attempt, reason);
            continue;
        }

        return Ok((EciesPublicKey(q), EciesSecretKey(k)));
    }

    Err(PkeError::SamplingExhausted {
        what: "private scalar",
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}
