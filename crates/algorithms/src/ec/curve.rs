//! Curve parameters and the group law

use log::trace;
use monecc_params::traditional::monecc::{WeierstrassParams, MONECC_CURVE, ORDER_SEARCH_MARGIN};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use super::point::Point;
use crate::error::{validate, Error, Result};
use crate::field::{modular_inverse, reduce};

/// A short Weierstrass curve y² = x³ + ax + b over 𝔽ₚ.
///
/// `p` is assumed prime, which the Fermat inverse depends on. The curve is
/// assumed non-singular (4a³ + 27b² ≢ 0); this is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    p: BigInt,
    a: BigInt,
    b: BigInt,
}

impl Curve {
    /// Create a curve from its modulus and coefficients.
    ///
    /// The coefficients are reduced modulo `p`.
    pub fn new(p: impl Into<BigInt>, a: impl Into<BigInt>, b: impl Into<BigInt>) -> Result<Self> {
        let p = p.into();
        validate::parameter(p > BigInt::from(2u8), "p", "modulus must be an odd prime")?;
        let a = reduce(&a.into(), &p);
        let b = reduce(&b.into(), &p);
        Ok(Curve { p, a, b })
    }

    /// Build a curve from compile-time parameters
    pub fn from_params(params: &WeierstrassParams) -> Result<Self> {
        Self::new(params.p, params.a, params.b)
    }

    /// The fixed monECC curve y² = x³ + 35x + 3 over 𝔽₁₀₁
    pub fn monecc() -> Self {
        Curve {
            p: BigInt::from(MONECC_CURVE.p),
            a: BigInt::from(MONECC_CURVE.a),
            b: BigInt::from(MONECC_CURVE.b),
        }
    }

    /// Prime modulus p
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// Coefficient a, in `[0, p)`
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient b, in `[0, p)`
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Check the curve equation y² ≡ x³ + ax + b (mod p).
    ///
    /// The point at infinity is always on the curve.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let lhs = y * y;
                let rhs = x * x * x + &self.a * x + &self.b;
                reduce(&(lhs - rhs), &self.p).is_zero()
            }
        }
    }

    /// Validate a point for use in group operations: on the curve, with
    /// coordinates in `[0, p)`.
    pub fn check_point(&self, point: &Point, context: &'static str) -> Result<()> {
        if let Point::Affine { x, y } = point {
            if !self.is_canonical(x) || !self.is_canonical(y) {
                return Err(Error::invalid_point(
                    context,
                    format!("coordinates of {} are not reduced modulo {}", point, self.p),
                ));
            }
        }
        if !self.is_on_curve(point) {
            return Err(Error::invalid_point(
                context,
                format!("{} is not on the curve", point),
            ));
        }
        Ok(())
    }

    fn is_canonical(&self, v: &BigInt) -> bool {
        !v.is_negative() && v < &self.p
    }

    /// Negation: (x, y) ↦ (x, −y mod p); the identity maps to itself
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: reduce(&-y, &self.p),
            },
        }
    }

    /// Add two points (group law).
    ///
    /// Both operands must pass [`check_point`](Self::check_point).
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        self.check_point(lhs, "point addition")?;
        self.check_point(rhs, "point addition")?;
        self.add_unchecked(lhs, rhs)
    }

    /// Double a point: 2P
    pub fn double(&self, point: &Point) -> Result<Point> {
        self.add(point, point)
    }

    /// Group law on points already known to be valid
    fn add_unchecked(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        let (px, py) = match lhs {
            Point::Infinity => return Ok(rhs.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let (qx, qy) = match rhs {
            Point::Infinity => return Ok(lhs.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let p = &self.p;

        // P + (−P) = O, which also covers doubling a point with y = 0
        if px == qx && reduce(&(py + qy), p).is_zero() {
            return Ok(Point::Infinity);
        }

        // The inverse case above leaves den ≢ 0 for valid operands
        let (num, den) = if px == qx && py == qy {
            (BigInt::from(3u8) * px * px + &self.a, BigInt::from(2u8) * py)
        } else {
            (qy - py, qx - px)
        };
        let lambda = reduce(&(num * modular_inverse(p, &den)?), p);

        let rx = reduce(&(&lambda * &lambda - px - qx), p);
        let ry = reduce(&(&lambda * (px - &rx) - py), p);
        Ok(Point::Affine { x: rx, y: ry })
    }

    /// Scalar multiplication `k·point` by double-and-add.
    ///
    /// `k = 0` or the identity yields the identity; a negative `k` multiplies
    /// the negated point by `|k|`. Runs in time dependent on `k`.
    pub fn scalar_mul(&self, k: &BigInt, point: &Point) -> Result<Point> {
        self.check_point(point, "scalar multiplication")?;
        if k.is_zero() || point.is_identity() {
            return Ok(Point::Infinity);
        }

        let base = if k.is_negative() {
            self.negate(point)
        } else {
            point.clone()
        };
        let k = k.magnitude();

        let mut result = Point::Infinity;
        let mut addend = base;
        let bits = k.bits();
        for i in 0..bits {
            if k.bit(i) {
                result = self.add_unchecked(&result, &addend)?;
            }
            if i + 1 < bits {
                addend = self.add_unchecked(&addend, &addend)?;
            }
        }
        Ok(result)
    }

    /// Order of `point`: the smallest n > 0 with n·point = O.
    ///
    /// Found by repeated addition, up to p + 1 + 2⌊√p⌋ plus a margin. Fails
    /// with [`Error::OrderNotFound`] rather than guess past that bound.
    pub fn point_order(&self, point: &Point) -> Result<BigInt> {
        self.find_order(point, &self.order_search_bound())
    }

    /// Upper end of the Hasse interval plus [`ORDER_SEARCH_MARGIN`]
    pub fn order_search_bound(&self) -> BigInt {
        &self.p + BigInt::one() + BigInt::from(2u8) * self.p.sqrt() + BigInt::from(ORDER_SEARCH_MARGIN)
    }

    pub(crate) fn find_order(&self, point: &Point, max_steps: &BigInt) -> Result<BigInt> {
        self.check_point(point, "point order")?;
        if point.is_identity() {
            return Ok(BigInt::one());
        }

        let mut acc = Point::Infinity;
        let mut n = BigInt::zero();
        while &n < max_steps {
            n += 1u32;
            acc = self.add_unchecked(&acc, point)?;
            if acc.is_identity() {
                trace!("order of {} is {}", point, n);
                return Ok(n);
            }
        }

        Err(Error::OrderNotFound {
            bound: max_steps.clone(),
        })
    }
}
