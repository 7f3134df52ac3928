//! Field Error Types (Standalone)
//!
//! Validation failure is *data* (see [`crate::core::ValidationReport`]);
//! this error type covers API misuse only: bad keys, duplicate
//! registrations, malformed constraint JSON.

use anketa_core::{FieldKey, KeyParseError};
use thiserror::Error;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Field framework errors
///
/// All fallible field-framework operations return this error type.
/// No central error crate dependency - this is self-contained.
#[non_exhaustive]
#[derive(Error, Debug, Clone)]
pub enum FieldError {
    /// Invalid format or content for a field-type key string
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(#[from] KeyParseError),

    /// A field type with the same key is already registered
    #[error("Field type already registered: {key}")]
    AlreadyRegistered {
        /// The field-type key
        key: FieldKey,
    },

    /// The referenced field type is not registered
    #[error("Unknown field type: {key}")]
    UnknownFieldType {
        /// The field-type key
        key: FieldKey,
    },

    /// Error (de)serializing field configuration
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl FieldError {
    /// Create an "already registered" error
    #[must_use]
    pub fn already_registered(key: FieldKey) -> Self {
        Self::AlreadyRegistered { key }
    }

    /// Create an "unknown field type" error
    #[must_use]
    pub fn unknown_field_type(key: FieldKey) -> Self {
        Self::UnknownFieldType { key }
    }

    /// Create a "serialization error"
    pub fn serialization_error(error: impl Into<String>) -> Self {
        Self::SerializationError(error.into())
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl FieldError {
    /// Get the error category for logging/metrics
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidKeyFormat(_) => "invalid_key_format",
            Self::AlreadyRegistered { .. } => "already_registered",
            Self::UnknownFieldType { .. } => "unknown_field_type",
            Self::SerializationError(_) => "serialization_error",
        }
    }
}

// ============================================================================
// EXTERNAL ERROR CONVERSIONS
// ============================================================================

/// Convert from `serde_json` errors
impl From<serde_json::Error> for FieldError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerializationError(error.to_string())
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result type alias for field framework operations
pub type Result<T> = std::result::Result<T, FieldError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_already_registered() {
        let key = FieldKey::new("number").unwrap();
        let err = FieldError::already_registered(key);
        assert!(matches!(err, FieldError::AlreadyRegistered { .. }));
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn test_error_unknown_field_type() {
        let key = FieldKey::new("carousel").unwrap();
        let err = FieldError::unknown_field_type(key);
        assert!(matches!(err, FieldError::UnknownFieldType { .. }));
        assert!(err.to_string().contains("carousel"));
    }

    #[test]
    fn test_error_category() {
        let key = FieldKey::new("number").unwrap();
        assert_eq!(
            FieldError::already_registered(key.clone()).category(),
            "already_registered"
        );
        assert_eq!(
            FieldError::unknown_field_type(key).category(),
            "unknown_field_type"
        );
        assert_eq!(
            FieldError::serialization_error("bad json").category(),
            "serialization_error"
        );
    }

    #[test]
    fn test_error_from_key_parse() {
        let err: FieldError = FieldKey::new("").unwrap_err().into();
        assert!(matches!(err, FieldError::InvalidKeyFormat(_)));
        assert_eq!(err.category(), "invalid_key_format");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json");
        assert!(json_err.is_err());

        let field_err: FieldError = json_err.unwrap_err().into();
        assert!(matches!(field_err, FieldError::SerializationError(_)));
    }
}
