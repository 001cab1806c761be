//! Public API traits and types for the monecc workspace
//!
//! This crate provides the public API surface shared by every monecc crate:
//! the unified error type, the public-key encryption trait and the narrow
//! interfaces through which the hybrid scheme reaches its symmetric services.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::SecretBytes;

pub use traits::{HashFunction, PaddedBlockCipher, Pke};

// Re-export trait modules for direct access
pub use traits::{pke, symmetric};
