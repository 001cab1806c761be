//! Parameters of the monECC teaching curve
//!
//! y² = x³ + 35x + 3 over 𝔽₁₀₁, with base point (2, 9). The base point has
//! order 4 and the whole group has 112 points: this curve is for teaching and
//! offers no security.

/// Short Weierstrass curve parameters with an affine base point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeierstrassParams {
    /// Prime modulus p
    pub p: u64,
    /// Coefficient a
    pub a: u64,
    /// Coefficient b
    pub b: u64,
    /// Base point x-coordinate
    pub g_x: u64,
    /// Base point y-coordinate
    pub g_y: u64,
}

/// The fixed monECC curve and generator
pub const MONECC_CURVE: WeierstrassParams = WeierstrassParams {
    p: 101,
    a: 35,
    b: 3,
    g_x: 2,
    g_y: 9,
};

/// Slack added to the Hasse bound p + 1 + 2√p when searching a point order
pub const ORDER_SEARCH_MARGIN: u64 = 20;
