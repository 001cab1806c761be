//! Error handling for arithmetic primitives

use std::borrow::Cow;

use monecc_api::Error as CoreError;
use num_bigint::BigInt;

/// The error type for arithmetic primitives
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Inverse of a residue congruent to zero
    #[error("Division by zero in {context}")]
    DivisionByZero {
        /// Operation that needed the inverse
        context: &'static str,
    },

    /// A point is off the curve or has non-canonical coordinates
    #[error("Invalid point in {context}: {reason}")]
    InvalidPoint {
        /// Operation that received the point
        context: &'static str,
        /// Why the point was rejected
        reason: Cow<'static, str>,
    },

    /// Repeated addition did not reach the identity within the search bound
    #[error("Point order not found within {bound} steps")]
    OrderNotFound {
        /// Number of additions attempted
        bound: BigInt,
    },

    /// Textual encoding could not be parsed
    #[error("Invalid encoding of {context}: {reason}")]
    Format {
        /// What was being decoded
        context: &'static str,
        /// Why decoding failed
        reason: Cow<'static, str>,
    },

    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Block padding rejected on decryption
    #[error("Invalid padding for {algorithm}")]
    Padding {
        /// Cipher that rejected the padding
        algorithm: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create an InvalidPoint error
    pub fn invalid_point<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::InvalidPoint {
            context,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Format error
    pub fn format<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Format {
            context,
            reason: reason.into(),
        }
    }
}

/// Result type for arithmetic primitives
pub type Result<T> = core::result::Result<T, Error>;

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::DivisionByZero { context } => CoreError::DivisionByZero { context },
            Error::InvalidPoint { context, reason } => CoreError::InvalidPoint {
                context,
                message: reason.into_owned(),
            },
            Error::OrderNotFound { bound } => CoreError::OrderNotFound {
                context: "point order",
                bound: bound.to_string(),
            },
            Error::Format { context, reason } => CoreError::InvalidParameter {
                context,
                message: reason.into_owned(),
            },
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidParameter {
                context,
                message: format!("expected {} bytes, got {}", expected, actual),
            },
            Error::Padding { algorithm } => CoreError::Padding { context: algorithm },
        }
    }
}

// Include the validation submodule
pub mod validate;
