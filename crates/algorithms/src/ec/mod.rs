//! Elliptic Curve Primitives
//!
//! Short Weierstrass curves y² = x³ + ax + b over a prime field 𝔽ₚ, with
//! affine points and an explicit point at infinity.
//!
//! Implements:
//! - on-curve validation and negation,
//! - the chord-and-tangent group law with all identity/inverse cases,
//! - least-significant-bit-first double-and-add scalar multiplication,
//!   negative scalars included,
//! - point order search bounded by the Hasse interval.
//!
//! None of these operations is constant-time.

mod curve;
mod point;

pub use curve::Curve;
pub use point::Point;

use crate::error::Result;
use num_bigint::BigInt;

/// Scalar multiplication of an arbitrary point: `k·point`
pub fn scalar_mult(curve: &Curve, k: &BigInt, point: &Point) -> Result<Point> {
    curve.scalar_mul(k, point)
}
