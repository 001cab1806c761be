//! Affine points with an explicit point at infinity

use core::fmt;

use monecc_params::traditional::ecies::COORDINATE_SEPARATOR;
use num_bigint::BigInt;

use crate::error::{Error, Result};

/// A point of a short Weierstrass curve.
///
/// A `Point` on its own knows nothing about the curve; validation against a
/// curve happens in [`Curve`](super::Curve).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    /// The point at infinity, identity of the group
    Infinity,
    /// An affine point (x, y)
    Affine {
        /// x-coordinate
        x: BigInt,
        /// y-coordinate
        y: BigInt,
    },
}

impl Point {
    /// Create an affine point from its coordinates
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point::Infinity
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Affine coordinates, or `None` for the identity
    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// x-coordinate, or `None` for the identity
    pub fn x(&self) -> Option<&BigInt> {
        self.coordinates().map(|(x, _)| x)
    }

    /// y-coordinate, or `None` for the identity
    pub fn y(&self) -> Option<&BigInt> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Serialize as decimal coordinates `"x;y"`.
    ///
    /// The identity has no affine coordinates and cannot be serialized.
    pub fn serialize_coordinates(&self) -> Result<String> {
        match self {
            Point::Infinity => Err(Error::invalid_point(
                "point serialization",
                "the point at infinity has no coordinates",
            )),
            Point::Affine { x, y } => Ok(format!("{}{}{}", x, COORDINATE_SEPARATOR, y)),
        }
    }

    /// Parse decimal coordinates `"x;y"`.
    ///
    /// Exactly two integer fields are required; surrounding whitespace is
    /// tolerated. The result is not checked against any curve.
    pub fn deserialize_coordinates(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split(COORDINATE_SEPARATOR).collect();
        if fields.len() != 2 {
            return Err(Error::format(
                "point coordinates",
                format!("expected 2 coordinates, found {}", fields.len()),
            ));
        }

        let parse = |field: &str| {
            field.trim().parse::<BigInt>().map_err(|_| {
                Error::format(
                    "point coordinates",
                    format!("'{}' is not an integer", field.trim()),
                )
            })
        };

        Ok(Point::Affine {
            x: parse(fields[0])?,
            y: parse(fields[1])?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "O"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
