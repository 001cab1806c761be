//! Curve, generator and generator order bundled as one immutable value

use monecc_algorithms::ec::{Curve, Point};
use monecc_params::traditional::ecies::MIN_SCALAR_RANGE;
use monecc_params::traditional::monecc::MONECC_CURVE;
use num_bigint::BigInt;
use num_traits::One;

use crate::error::{Error as PkeError, Result as PkeResult};

/// Domain parameters shared by every key and cryptogram of a deployment.
///
/// Built once at startup and passed by reference; it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    curve: Curve,
    generator: Point,
    order: BigInt,
}

impl Domain {
    /// Validate `generator` on `curve` and compute its order
    pub fn new(curve: Curve, generator: Point) -> PkeResult<Self> {
        curve.check_point(&generator, "domain generator")?;
        if generator.is_identity() {
            return Err(PkeError::InvalidPoint("generator is the point at infinity"));
        }
        let order = curve.point_order(&generator)?;
        Ok(Domain {
            curve,
            generator,
            order,
        })
    }

    /// The fixed monECC domain: y² = x³ + 35x + 3 over 𝔽₁₀₁ with G = (2, 9)
    pub fn monecc() -> PkeResult<Self> {
        Self::new(
            Curve::monecc(),
            Point::new(MONECC_CURVE.g_x, MONECC_CURVE.g_y),
        )
    }

    /// The curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The generator G
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// The order n of G
    pub fn order(&self) -> &BigInt {
        &self.order
    }

    /// Largest private scalar, n − 1
    pub fn max_private_scalar(&self) -> BigInt {
        &self.order - BigInt::one()
    }

    /// Clamp a user-supplied scalar range to `[2, n − 1]`.
    ///
    /// Ranges below 2 are rejected; ranges above n − 1 are lowered to it.
    pub fn scalar_range(&self, size: u64) -> PkeResult<BigInt> {
        if size < MIN_SCALAR_RANGE {
            return Err(PkeError::InvalidParameter(
                format!("scalar range must be at least {}, got {}", MIN_SCALAR_RANGE, size).into(),
            ));
        }
        let max = self.max_private_scalar();
        let size = BigInt::from(size);
        Ok(if size < max { size } else { max })
    }
}
