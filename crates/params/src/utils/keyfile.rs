//! Markers of the monECC key-file format

/// First line of a private key file
pub const PRIVATE_KEY_BEGIN: &str = "---begin monECC private key---";

/// First line of a public key file
pub const PUBLIC_KEY_BEGIN: &str = "---begin monECC public key---";

/// Last line of every key file
pub const KEY_END: &str = "---end monECC key---";

/// Default base name for generated key files
pub const DEFAULT_KEY_NAME: &str = "monECC";

/// Extension of private key files
pub const PRIVATE_KEY_EXTENSION: &str = "priv";

/// Extension of public key files
pub const PUBLIC_KEY_EXTENSION: &str = "pub";
