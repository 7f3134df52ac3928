use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum allowed length for a [`FieldKey`].
const FIELD_KEY_MAX_LEN: usize = 64;

/// Errors from constructing a [`FieldKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    /// The input was empty or contained only whitespace.
    #[error("field key cannot be empty or whitespace")]
    Empty,
    /// The normalized key contains characters other than `a-z`, `0-9` and `_`.
    #[error("field key contains invalid characters (only a-z, 0-9 and _ allowed)")]
    InvalidCharacters,
    /// The normalized key exceeds [`FIELD_KEY_MAX_LEN`] characters.
    #[error("field key exceeds maximum length of {FIELD_KEY_MAX_LEN} characters")]
    TooLong,
}

/// A normalized, validated identifier for a field type or schema type.
///
/// Normalization rules:
/// - Leading/trailing whitespace is trimmed.
/// - The string is lowercased.
/// - Whitespace and hyphens are replaced with underscores.
/// - Consecutive underscores are collapsed to one.
/// - Leading/trailing underscores are stripped.
///
/// After normalization the key must:
/// - Be non-empty.
/// - Contain only `a-z`, `0-9` and `_`.
/// - Be at most 64 characters long.
///
/// # Examples
///
/// ```
/// use anketa_core::FieldKey;
///
/// let key: FieldKey = "number".parse().unwrap();
/// assert_eq!(key.as_str(), "number");
///
/// let key: FieldKey = " Number Field ".parse().unwrap();
/// assert_eq!(key.as_str(), "number_field");
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldKey(String);

impl FieldKey {
    /// Create a new `FieldKey`, normalizing and validating the input.
    pub fn new(raw: &str) -> Result<Self, KeyParseError> {
        let mut normalized = String::with_capacity(raw.len());
        for c in raw.trim().chars() {
            if c.is_ascii_whitespace() || c == '-' || c == '_' {
                // Collapse separator runs; never start with one.
                if !normalized.ends_with('_') && !normalized.is_empty() {
                    normalized.push('_');
                }
            } else {
                normalized.extend(c.to_lowercase());
            }
        }
        // Strip trailing separator left by input like "number-".
        if normalized.ends_with('_') {
            normalized.pop();
        }

        if normalized.is_empty() {
            return Err(KeyParseError::Empty);
        }
        if !normalized
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
        {
            return Err(KeyParseError::InvalidCharacters);
        }
        if normalized.len() > FIELD_KEY_MAX_LEN {
            return Err(KeyParseError::TooLong);
        }

        Ok(Self(normalized))
    }

    /// Return the inner string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FieldKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for FieldKey {
    type Error = KeyParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for FieldKey {
    type Error = KeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<FieldKey> for String {
    fn from(key: FieldKey) -> Self {
        key.0
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FieldKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for FieldKey {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_whitespace_and_case() {
        let key: FieldKey = "Number Field".parse().unwrap();
        assert_eq!(key.as_str(), "number_field");
    }

    #[test]
    fn normalizes_hyphens() {
        let key: FieldKey = "multi-select".parse().unwrap();
        assert_eq!(key.as_str(), "multi_select");
    }

    #[test]
    fn accepts_digits() {
        let key: FieldKey = "address4".parse().unwrap();
        assert_eq!(key.as_str(), "address4");
    }

    #[test]
    fn collapses_separator_runs() {
        let key: FieldKey = "a -_ b".parse().unwrap();
        assert_eq!(key.as_str(), "a_b");
    }

    #[test]
    fn strips_leading_trailing_separators() {
        let key: FieldKey = "__number__".parse().unwrap();
        assert_eq!(key.as_str(), "number");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let key: FieldKey = "  text  ".parse().unwrap();
        assert_eq!(key.as_str(), "text");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(FieldKey::new(""), Err(KeyParseError::Empty));
        assert_eq!(FieldKey::new("   "), Err(KeyParseError::Empty));
        assert_eq!(FieldKey::new("___"), Err(KeyParseError::Empty));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(
            FieldKey::new("number!"),
            Err(KeyParseError::InvalidCharacters)
        );
        assert_eq!(FieldKey::new("a.b"), Err(KeyParseError::InvalidCharacters));
    }

    #[test]
    fn rejects_too_long() {
        let long = "a".repeat(65);
        assert_eq!(FieldKey::new(&long), Err(KeyParseError::TooLong));
    }

    #[test]
    fn accepts_max_length() {
        let exact = "a".repeat(64);
        assert!(FieldKey::new(&exact).is_ok());
    }

    #[test]
    fn display_and_equality() {
        let key: FieldKey = "number".parse().unwrap();
        assert_eq!(key.to_string(), "number");
        assert_eq!(key, "number");
        assert_eq!(key, "number".to_string());
    }

    #[test]
    fn serde_roundtrip() {
        let key: FieldKey = "number".parse().unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"number\"");

        let back: FieldKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn serde_normalizes_on_deserialize() {
        let back: FieldKey = serde_json::from_str("\"Number Field\"").unwrap();
        assert_eq!(back.as_str(), "number_field");
    }

    #[test]
    fn serde_rejects_invalid() {
        let result: Result<FieldKey, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
