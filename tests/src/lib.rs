//! Shared fixtures for the monecc integration tests and benchmarks

use monecc_algorithms::ec::{Curve, Point};
use monecc_pke::Domain;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Known multiples k·G of the monECC generator, for k = 0..4
pub const GENERATOR_MULTIPLES: [Option<(i64, i64)>; 5] =
    [None, Some((2, 9)), Some((5, 0)), Some((2, 92)), None];

/// Number of points on the monECC curve, including the identity
pub const GROUP_ORDER: usize = 112;

/// The fixed monECC domain
pub fn monecc_domain() -> Domain {
    Domain::monecc().expect("monECC domain parameters are valid")
}

/// A reproducible RNG for tests that must not depend on OS entropy
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Every affine point of `curve`, by brute force over 𝔽ₚ × 𝔽ₚ.
///
/// Only usable for tiny moduli.
pub fn affine_points(curve: &Curve) -> Vec<Point> {
    let p = u32::try_from(curve.p()).expect("modulus fits in u32");
    let mut points = Vec::new();
    for x in 0..p {
        for y in 0..p {
            let candidate = Point::new(x, y);
            if curve.is_on_curve(&candidate) {
                points.push(candidate);
            }
        }
    }
    points
}

/// Order of the monECC generator
pub const GENERATOR_ORDER: usize = 4;

/// k·G for any k ≥ 0, read from [`GENERATOR_MULTIPLES`]
pub fn generator_multiple(k: usize) -> Point {
    match GENERATOR_MULTIPLES[k % GENERATOR_ORDER] {
        None => Point::Infinity,
        Some((x, y)) => Point::new(x, y),
    }
}
