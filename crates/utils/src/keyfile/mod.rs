//! monECC key files.
//!
//! A key file is three lines of text: a begin marker naming the key kind, a
//! base64 payload and a common end marker. The payload of a private key is
//! the decimal scalar `k`; the payload of a public key is `"Qx;Qy"`.
//!
//! ```text
//! ---begin monECC public key---
//! Mjs5
//! ---end monECC key---
//! ```
//!
//! Blank lines and surrounding whitespace are ignored when parsing.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::info;
use monecc_algorithms::ec::Point;
use monecc_api::error::ResultExt;
use monecc_api::{Error, Result};
use monecc_params::utils::keyfile::{KEY_END, PRIVATE_KEY_BEGIN, PUBLIC_KEY_BEGIN};
use num_bigint::BigInt;

/// A decoded key file
#[derive(Clone, PartialEq, Eq)]
pub enum KeyFile {
    /// Private scalar k
    Private(BigInt),
    /// Public point Q
    Public(Point),
}

impl core::fmt::Debug for KeyFile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KeyFile::Private(_) => f.write_str("KeyFile::Private([REDACTED])"),
            KeyFile::Public(q) => write!(f, "KeyFile::Public({})", q),
        }
    }
}

fn invalid_key(context: &'static str, message: impl Into<String>) -> Error {
    Error::InvalidKey {
        context,
        message: message.into(),
    }
}

impl KeyFile {
    fn begin_marker(&self) -> &'static str {
        match self {
            KeyFile::Private(_) => PRIVATE_KEY_BEGIN,
            KeyFile::Public(_) => PUBLIC_KEY_BEGIN,
        }
    }

    /// Render the key file text, with a trailing newline.
    ///
    /// A public key at infinity has no coordinates and cannot be written.
    pub fn render(&self) -> Result<String> {
        let payload = match self {
            KeyFile::Private(k) => k.to_string(),
            KeyFile::Public(q) => q
                .serialize_coordinates()
                .map_err(|_| invalid_key("public key file", "the point at infinity cannot be written"))?,
        };
        Ok(format!(
            "{}\n{}\n{}\n",
            self.begin_marker(),
            STANDARD.encode(payload.as_bytes()),
            KEY_END
        ))
    }

    /// Parse private key file text
    pub fn parse_private(text: &str) -> Result<BigInt> {
        const CONTEXT: &str = "private key file";
        let payload = payload(text, PRIVATE_KEY_BEGIN, CONTEXT)?;
        payload
            .trim()
            .parse::<BigInt>()
            .map_err(|_| invalid_key(CONTEXT, "payload is not an integer"))
    }

    /// Parse public key file text.
    ///
    /// The point is not checked against any curve.
    pub fn parse_public(text: &str) -> Result<Point> {
        const CONTEXT: &str = "public key file";
        let payload = payload(text, PUBLIC_KEY_BEGIN, CONTEXT)?;
        Point::deserialize_coordinates(&payload).map_err(|e| invalid_key(CONTEXT, e.to_string()))
    }
}

/// Check the markers and decode the payload line
fn payload(text: &str, begin: &'static str, context: &'static str) -> Result<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 3 {
        return Err(invalid_key(
            context,
            format!("expected 3 lines, found {}", lines.len()),
        ));
    }
    if lines[0] != begin {
        return Err(invalid_key(context, format!("expected '{}'", begin)));
    }
    if lines[lines.len() - 1] != KEY_END {
        return Err(invalid_key(context, format!("expected '{}'", KEY_END)));
    }

    let bytes = STANDARD
        .decode(lines[1])
        .map_err(|e| invalid_key(context, format!("payload is not base64: {}", e)))?;
    String::from_utf8(bytes).map_err(|_| invalid_key(context, "payload is not UTF-8"))
}

/// Read a private key file
pub fn read_private_key(path: impl AsRef<Path>) -> Result<BigInt> {
    KeyFile::parse_private(&fs::read_to_string(path).with_context("private key file")?)
}

/// Read a public key file
pub fn read_public_key(path: impl AsRef<Path>) -> Result<Point> {
    KeyFile::parse_public(&fs::read_to_string(path).with_context("public key file")?)
}

/// Write a private key file
pub fn write_private_key(path: impl AsRef<Path>, k: &BigInt) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, KeyFile::Private(k.clone()).render()?).with_context("private key file")?;
    info!("wrote private key to {}", path.display());
    Ok(())
}

/// Write a public key file
pub fn write_public_key(path: impl AsRef<Path>, q: &Point) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, KeyFile::Public(q.clone()).render()?).with_context("public key file")?;
    info!("wrote public key to {}", path.display());
    Ok(())
}
