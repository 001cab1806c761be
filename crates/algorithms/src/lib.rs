//! Arithmetic primitives for monecc
//!
//! This crate provides the mathematical core of monecc and the adapters onto
//! the symmetric services the hybrid scheme relies on:
//!
//! - [`field`]: reduction and Fermat-inverse in 𝔽ₚ, the only division primitive
//! - [`ec`]: short Weierstrass curves, affine points with an explicit point at
//!   infinity, the group law, double-and-add scalar multiplication and point
//!   order search
//! - [`hash`] and [`block`]: SHA-256 and AES-128-CBC with PKCS#7 padding,
//!   exposed through the narrow traits of `monecc-api`
//!
//! # Limitations
//!
//! Nothing here is constant-time. Arithmetic runs on arbitrary-precision
//! integers and scalar multiplication branches on the bits of the scalar.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Prime-field arithmetic
pub mod field;
pub use field::modular_inverse;

// Elliptic curve group
pub mod ec;
pub use ec::{Curve, Point};

// Hash function adapters
pub mod hash;
pub use hash::Sha256;

// Block cipher adapters
pub mod block;
pub use block::Aes128Cbc;
