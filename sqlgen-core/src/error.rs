//! Error types for sqlgen

use thiserror::Error;

/// The main error type for sqlgen operations
///
/// Statement building itself never fails; these cover the few edges where
/// input has to be rejected outright.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing
    #[error("Invalid argument: '{name}' must be provided")]
    InvalidArgument { name: String },

    /// Statement kind string did not match any known kind
    #[error("Unknown statement kind '{kind}'")]
    UnknownStatementKind { kind: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for sqlgen operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument(name: impl Into<String>) -> Self {
        Self::InvalidArgument { name: name.into() }
    }

    /// Create a new unknown statement kind error
    pub fn unknown_statement_kind(kind: impl Into<String>) -> Self {
        Self::UnknownStatementKind { kind: kind.into() }
    }
}
