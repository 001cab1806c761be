//! Constants for the monECC hybrid encryption scheme

/// Default upper bound of the random scalar range (`-s` switch)
pub const DEFAULT_SCALAR_RANGE: u64 = 1000;

/// Smallest accepted scalar range
pub const MIN_SCALAR_RANGE: u64 = 2;

/// Draws allowed before rejection sampling reports failure
pub const MAX_SAMPLING_ATTEMPTS: usize = 256;

/// Separator between the ephemeral point and the ciphertext in a cryptogram
pub const CRYPTOGRAM_SEPARATOR: char = ':';

/// Separator between the two coordinates of an encoded point
pub const COORDINATE_SEPARATOR: char = ';';
