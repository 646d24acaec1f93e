//! Typed error handling for the fusion-mock facade
//!
//! The mock is an in-memory, deterministic system: every failure here is
//! local and synchronous, and none of them are worth retrying. Callers see
//! either a successful (possibly empty) collection, a successful single
//! entity, or one of the named conditions below.
//!
//! # Error Categories
//!
//! - [`MockError::SourceNotFound`]: the dataset document is missing — a
//!   setup bug, surfaced immediately at load time
//! - [`MockError::EntityNotFound`]: a specific-identifier lookup missed
//! - [`MockError::InvalidArgument`]: malformed pagination input
//! - [`MockError::Parse`] / [`MockError::Io`]: the dataset document exists
//!   but could not be read or is not the expected JSON shape
//!
//! Note that a malformed filter clause is *not* an error: it silently
//! contributes no restriction (see [`crate::core::query`]).

use std::path::PathBuf;
use thiserror::Error;

/// The error type for all fusion-mock operations
#[derive(Debug, Error)]
pub enum MockError {
    /// The dataset document does not exist at the declared location
    #[error("mock data file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// A lookup by a specific identifier found no matching record
    #[error("{entity_type} with id '{id}' not found")]
    EntityNotFound { entity_type: String, id: String },

    /// Malformed caller input (e.g. negative limit/offset)
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The dataset document is not the expected JSON shape
    #[error("failed to parse mock data: {message}")]
    Parse { message: String },

    /// IO failure while reading the dataset document
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal invariant violation (should not happen in normal operation)
    #[error("internal error: {0}")]
    Internal(String),
}

impl MockError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MockError::SourceNotFound { .. } => "SOURCE_NOT_FOUND",
            MockError::EntityNotFound { .. } => "ENTITY_NOT_FOUND",
            MockError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            MockError::Parse { .. } => "PARSE_ERROR",
            MockError::Io(_) => "IO_ERROR",
            MockError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Shorthand for an [`MockError::EntityNotFound`] naming the requested id
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        MockError::EntityNotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<serde_json::Error> for MockError {
    fn from(err: serde_json::Error) -> Self {
        MockError::Parse {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for fusion-mock operations
pub type MockResult<T> = Result<T, MockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_the_id() {
        let err = MockError::not_found("purchaseOrders", 999_999_999);
        assert!(err.to_string().contains("999999999"));
        assert!(err.to_string().contains("purchaseOrders"));
        assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
    }

    #[test]
    fn test_source_not_found_code() {
        let err = MockError::SourceNotFound {
            path: PathBuf::from("/missing/db.json"),
        };
        assert_eq!(err.error_code(), "SOURCE_NOT_FOUND");
        assert!(err.to_string().contains("/missing/db.json"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: MockError = json_err.into();
        assert!(matches!(err, MockError::Parse { .. }));
    }
}
