//! # monecc
//!
//! A small elliptic-curve toolkit built from first principles: group
//! arithmetic on a short Weierstrass curve over a prime field, and an
//! ECIES-style hybrid encryption scheme on top of it.
//!
//! ## Usage
//!
//! ```no_run
//! use monecc::prelude::*;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> monecc::api::Result<()> {
//! let ecies = Ecies::new(Domain::monecc()?)?;
//! let (pk, sk) = ecies.keypair(&mut OsRng)?;
//! let cryptogram = ecies.encrypt(&pk, "attack at dawn", &mut OsRng)?;
//! assert_eq!(ecies.decrypt(&sk, &cryptogram)?, "attack at dawn");
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`monecc-api`]: Error type and the traits shared by every crate
//! - [`monecc-params`]: Curve parameters and scheme constants
//! - [`monecc-algorithms`]: Field and curve arithmetic, SHA-256 and AES-CBC adapters
//! - [`monecc-pke`]: The ECIES scheme
//! - [`monecc-utils`]: Key files
//!
//! ## Security
//!
//! The curve has 112 points and the arithmetic is not constant-time. The
//! cryptogram carries no authentication tag. This is teaching material, not
//! a library for protecting real data.

pub use monecc_algorithms as algorithms;
pub use monecc_api as api;
pub use monecc_params as params;
pub use monecc_pke as pke;
pub use monecc_utils as utils;

/// Common imports for monecc users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{HashFunction, PaddedBlockCipher, Pke};

    // Curve arithmetic
    pub use crate::algorithms::{modular_inverse, Curve, Point};

    // Hybrid encryption
    pub use crate::pke::{
        decrypt_message, encrypt_message, generate_keypair, Domain, Ecies, EciesPublicKey,
        EciesSecretKey,
    };

    // Key files
    pub use crate::utils::KeyFile;
}
