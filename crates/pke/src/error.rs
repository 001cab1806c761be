//! Error handling for PKE operations.

use std::borrow::Cow;

use monecc_algorithms::error::Error as PrimitiveError;
use monecc_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("PKE primitive error: {0}")]
    Primitive(#[from] PrimitiveError),
    #[error("PKE API error: {0}")]
    Api(#[from] CoreError),
    #[error("Malformed ECIES cryptogram: {0}")]
    MalformedCryptogram(Cow<'static, str>),
    #[error("Invalid ECIES point: {0}")]
    InvalidPoint(&'static str),
    #[error("ECIES plaintext is not valid UTF-8: {0}")]
    Encoding(String),
    #[error("ECIES key derivation failed: {0}")]
    KeyDerivationFailed(&'static str),
    #[error("No acceptable {what} after {attempts} draws")]
    SamplingExhausted {
        what: &'static str,
        attempts: usize,
    },
    #[error("Invalid ECIES parameter: {0}")]
    InvalidParameter(Cow<'static, str>),
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::MalformedCryptogram(reason) => CoreError::MalformedCryptogram {
                context: "ECIES",
                message: reason.into_owned(),
            },
            Error::InvalidPoint(reason) => CoreError::InvalidPoint {
                context: "ECIES",
                message: reason.to_string(),
            },
            Error::Encoding(message) => CoreError::Encoding {
                context: "ECIES Decryption",
                message,
            },
            Error::KeyDerivationFailed(reason) => CoreError::DecryptionFailed {
                context: "ECIES KDF",
                message: reason.to_string(),
            },
            Error::SamplingExhausted { what, attempts } => CoreError::RandomGenerationError {
                context: "ECIES",
                message: format!("no acceptable {} after {} draws", what, attempts),
            },
            Error::InvalidParameter(reason) => CoreError::InvalidParameter {
                context: "ECIES",
                message: reason.into_owned(),
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
