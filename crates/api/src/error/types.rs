//! Error type definitions for monecc operations

/// Primary error type for monecc operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Modular inverse of a zero residue
    #[error("Division by zero: {context}")]
    DivisionByZero { context: &'static str },

    /// A point failed on-curve validation
    #[error("Invalid point: {context}: {message}")]
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// The point-order search exceeded its bound
    #[error("{context}: point order not found within {bound} steps")]
    OrderNotFound {
        context: &'static str,
        bound: String,
    },

    /// Wrong cryptogram framing, coordinate count or coordinate syntax
    #[error("Malformed cryptogram: {context}: {message}")]
    MalformedCryptogram {
        context: &'static str,
        message: String,
    },

    /// Invalid block padding reported by the cipher service
    #[error("Invalid padding: {context}")]
    Padding { context: &'static str },

    /// Decryption error
    #[error("Decryption failed: {context}: {message}")]
    DecryptionFailed {
        context: &'static str,
        message: String,
    },

    /// Decrypted bytes are not valid UTF-8
    #[error("Encoding error: {context}: {message}")]
    Encoding {
        context: &'static str,
        message: String,
    },

    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Rejection sampling gave up
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for monecc operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::OrderNotFound { bound, .. } => Self::OrderNotFound { context, bound },
            Self::MalformedCryptogram { message, .. } => {
                Self::MalformedCryptogram { context, message }
            }
            Self::Padding { .. } => Self::Padding { context },
            Self::DecryptionFailed { message, .. } => Self::DecryptionFailed { context, message },
            Self::Encoding { message, .. } => Self::Encoding { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}
