//! Cryptogram text framing: `base64("Rx;Ry") ":" base64(ciphertext)`

use base64::{engine::general_purpose::STANDARD, Engine as _};
use monecc_algorithms::ec::Point;
use monecc_algorithms::Error as PrimitiveError;
use monecc_params::traditional::ecies::CRYPTOGRAM_SEPARATOR;

use crate::error::{Error as PkeError, Result as PkeResult};

/// One ECIES cryptogram: the ephemeral public point R and the AES-CBC
/// ciphertext. No authentication tag is carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Ephemeral public point R = r·G
    pub ephemeral_public_key: Point,
    /// Padded CBC ciphertext
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Build an envelope from its parts
    pub fn new(ephemeral_public_key: Point, ciphertext: Vec<u8>) -> Self {
        Envelope {
            ephemeral_public_key,
            ciphertext,
        }
    }

    /// Render the cryptogram text
    pub fn serialize(&self) -> PkeResult<String> {
        let coordinates = self.ephemeral_public_key.serialize_coordinates()?;
        Ok(format!(
            "{}{}{}",
            STANDARD.encode(coordinates.as_bytes()),
            CRYPTOGRAM_SEPARATOR,
            STANDARD.encode(&self.ciphertext)
        ))
    }

    /// Parse cryptogram text.
    ///
    /// Splits on the first separator. The point is parsed but not validated
    /// against any curve; that is left to the caller.
    pub fn deserialize(text: &str) -> PkeResult<Self> {
        let (point_b64, ciphertext_b64) = text
            .trim()
            .split_once(CRYPTOGRAM_SEPARATOR)
            .ok_or_else(|| {
                PkeError::MalformedCryptogram(
                    format!("missing '{}' separator", CRYPTOGRAM_SEPARATOR).into(),
                )
            })?;

        let point_bytes = STANDARD.decode(point_b64).map_err(|e| {
            PkeError::MalformedCryptogram(format!("ephemeral point is not base64: {}", e).into())
        })?;
        let point_text = String::from_utf8(point_bytes).map_err(|_| {
            PkeError::MalformedCryptogram("ephemeral point is not UTF-8 text".into())
        })?;
        let ephemeral_public_key =
            Point::deserialize_coordinates(&point_text).map_err(|e| match e {
                PrimitiveError::Format { reason, .. } => PkeError::MalformedCryptogram(reason),
                other => PkeError::Primitive(other),
            })?;

        let ciphertext = STANDARD.decode(ciphertext_b64).map_err(|e| {
            PkeError::MalformedCryptogram(format!("ciphertext is not base64: {}", e).into())
        })?;

        Ok(Envelope {
            ephemeral_public_key,
            ciphertext,
        })
    }
}
