//! Text field - single-line text control
//!
//! Also the base every derived control composes: its report carries the
//! host-level checks (required, length bounds) that derived fields AND
//! into their own verdict.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use anketa_core::FieldKey;

use crate::core::{
    EditableField, Field, FieldDescriptor, FieldKind, FieldMetadata, FieldRegistry, MessageCatalog,
    ValidationReport,
};
use crate::error::FieldError;

/// Rule key recorded by the required check.
pub const RULE_REQUIRED: &str = "required";
/// Rule key recorded by the minimum-length check.
pub const RULE_TOO_SHORT: &str = "stringTooShort";
/// Rule key recorded by the maximum-length check.
pub const RULE_TOO_LONG: &str = "stringTooLong";

// =============================================================================
// LengthRange
// =============================================================================

/// Character-count constraints for text input
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LengthRange {
    /// Minimum number of characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,

    /// Maximum number of characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
}

impl LengthRange {
    /// Create a new length range with both min and max
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Create a length range with only a minimum
    #[must_use]
    pub fn min_only(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Create a length range with only a maximum
    #[must_use]
    pub fn max_only(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Check if a character count is within this range
    #[must_use]
    pub fn contains(&self, len: usize) -> bool {
        let above_min = self.min.is_none_or(|min| len >= min);
        let below_max = self.max.is_none_or(|max| len <= max);
        above_min && below_max
    }
}

// =============================================================================
// TextOptions
// =============================================================================

/// Configuration options for text fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextOptions {
    /// Length constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<LengthRange>,
}

impl TextOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum length
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.length = Some(match self.length {
            Some(mut range) => {
                range.min = Some(min);
                range
            }
            None => LengthRange::min_only(min),
        });
        self
    }

    /// Set maximum length
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.length = Some(match self.length {
            Some(mut range) => {
                range.max = Some(max);
                range
            }
            None => LengthRange::max_only(max),
        });
        self
    }
}

// =============================================================================
// TextField
// =============================================================================

/// Single-line text control
///
/// # Examples
///
/// ```
/// use anketa_field::prelude::*;
///
/// let field = TextField::new(FieldMetadata::new("username").required(true))
///     .options(TextOptions::new().min_length(3));
///
/// let catalog = default_catalog();
/// assert!(field.handle_validate("alice", &catalog).is_valid());
/// assert!(!field.handle_validate("", &catalog).is_valid());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextField {
    /// Instance metadata (property name, label, UI hints)
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    /// Configuration options for this instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TextOptions>,
}

impl TextField {
    /// Create a text field for the given metadata
    #[must_use]
    pub fn new(metadata: FieldMetadata) -> Self {
        Self {
            metadata,
            options: None,
        }
    }

    /// Set configuration options
    #[must_use]
    pub fn options(mut self, options: TextOptions) -> Self {
        self.options = Some(options);
        self
    }
}

impl std::fmt::Display for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TextField({})", self.metadata.name)
    }
}

impl Field for TextField {
    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }

    fn metadata(&self) -> &FieldMetadata {
        &self.metadata
    }

    fn field_type(&self) -> &'static str {
        "text"
    }

    fn title(&self) -> &'static str {
        "Text Field"
    }

    fn description(&self) -> &'static str {
        "Field for simple text entry."
    }

    fn container_class(&self) -> Option<&'static str> {
        Some("anketa-field-text")
    }

    fn schema_of_schema(&self) -> Value {
        json!({
            "properties": {
                "title": {
                    "title": "Title",
                    "description": "Short title of the property",
                    "type": "string"
                },
                "description": {
                    "title": "Description",
                    "description": "Detailed description of the property",
                    "type": "string"
                },
                "required": {
                    "title": "Required",
                    "description": "Whether the property must be supplied",
                    "type": "boolean",
                    "default": false
                },
                "default": {
                    "title": "Default",
                    "description": "Default value of the property",
                    "type": "any"
                }
            }
        })
    }

    fn options_for_schema(&self) -> Value {
        json!({
            "fields": {
                "title": {
                    "title": "Title",
                    "type": "text"
                },
                "description": {
                    "title": "Description",
                    "type": "textarea"
                },
                "required": {
                    "rightLabel": "Required ?",
                    "helper": "Validation fails on blank input if checked",
                    "type": "checkbox"
                }
            }
        })
    }
}

impl EditableField for TextField {
    type Value = String;

    fn get_value(&self, raw: &str) -> String {
        raw.trim().to_string()
    }

    fn handle_validate(&self, raw: &str, catalog: &MessageCatalog) -> ValidationReport {
        let mut report = ValidationReport::new();
        let text = raw.trim();

        let status = !(self.metadata.required && text.is_empty());
        let message = if status {
            String::new()
        } else {
            catalog.get(RULE_REQUIRED).to_string()
        };
        report.record(RULE_REQUIRED, status, message);

        // Length rules apply only once there is something to measure;
        // blank input is the required rule's business.
        if let Some(length) = self.options.as_ref().and_then(|options| options.length.as_ref()) {
            if !text.is_empty() {
                let count = text.chars().count();
                if let Some(min) = length.min {
                    let status = count >= min;
                    let message = if status {
                        String::new()
                    } else {
                        catalog.format(RULE_TOO_SHORT, &[min.to_string().as_str()])
                    };
                    report.record(RULE_TOO_SHORT, status, message);
                }
                if let Some(max) = length.max {
                    let status = count <= max;
                    let message = if status {
                        String::new()
                    } else {
                        catalog.format(RULE_TOO_LONG, &[max.to_string().as_str()])
                    };
                    report.record(RULE_TOO_LONG, status, message);
                }
            }
        }

        report
    }
}

/// Message templates contributed by the text field
pub(crate) fn register_messages(catalog: &mut MessageCatalog) {
    catalog.register_all(&[
        (RULE_REQUIRED, "This field is required"),
        (
            RULE_TOO_SHORT,
            "This field should contain at least {0} characters",
        ),
        (
            RULE_TOO_LONG,
            "This field should contain at most {0} characters",
        ),
    ]);
}

/// Register the text field type and its default schema-type mapping
pub(crate) fn register(registry: &mut FieldRegistry) -> Result<(), FieldError> {
    let template = TextField::new(FieldMetadata::new("template"));
    let descriptor = FieldDescriptor::describe(&template)?;
    let key = descriptor.key.clone();
    registry.register_field(descriptor)?;
    registry.map_schema_type(FieldKey::new("string")?, key)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::default_catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_length_range_contains() {
        let range = LengthRange::new(3, 10);
        assert!(!range.contains(2));
        assert!(range.contains(3));
        assert!(range.contains(10));
        assert!(!range.contains(11));
    }

    #[test]
    fn test_options_min_then_max() {
        let options = TextOptions::new().min_length(3).max_length(10);
        let length = options.length.unwrap();
        assert_eq!(length.min, Some(3));
        assert_eq!(length.max, Some(10));
    }

    #[test]
    fn test_get_value_trims() {
        let field = TextField::new(FieldMetadata::new("username"));
        assert_eq!(field.get_value("  alice  "), "alice");
    }

    #[test]
    fn test_optional_blank_is_valid() {
        let field = TextField::new(FieldMetadata::new("nickname"));
        let catalog = default_catalog();

        let report = field.handle_validate("   ", &catalog);
        assert!(report.is_valid());
        assert_eq!(report.status(RULE_REQUIRED), Some(true));
    }

    #[test]
    fn test_required_blank_fails() {
        let field = TextField::new(FieldMetadata::new("username").required(true));
        let catalog = default_catalog();

        let report = field.handle_validate("", &catalog);
        assert!(!report.is_valid());
        assert_eq!(report.message(RULE_REQUIRED), Some("This field is required"));
    }

    #[test]
    fn test_length_rules() {
        let field = TextField::new(FieldMetadata::new("code"))
            .options(TextOptions::new().min_length(3).max_length(5));
        let catalog = default_catalog();

        let report = field.handle_validate("ab", &catalog);
        assert_eq!(report.status(RULE_TOO_SHORT), Some(false));
        assert_eq!(
            report.message(RULE_TOO_SHORT),
            Some("This field should contain at least 3 characters")
        );

        let report = field.handle_validate("abcd", &catalog);
        assert!(report.is_valid());

        let report = field.handle_validate("abcdef", &catalog);
        assert_eq!(report.status(RULE_TOO_LONG), Some(false));
    }

    #[test]
    fn test_length_rules_skip_blank_input() {
        let field =
            TextField::new(FieldMetadata::new("code")).options(TextOptions::new().min_length(3));
        let catalog = default_catalog();

        let report = field.handle_validate("", &catalog);
        assert!(report.is_valid());
        assert!(report.get(RULE_TOO_SHORT).is_none());
    }

    #[test]
    fn test_schema_of_schema_declares_required() {
        let field = TextField::new(FieldMetadata::new("username"));
        let schema = field.schema_of_schema();
        assert_eq!(schema["properties"]["required"]["type"], "boolean");
        assert_eq!(schema["properties"]["required"]["default"], false);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let field = TextField::new(FieldMetadata::new("username").label("Username"))
            .options(TextOptions::new().max_length(20));

        let json = serde_json::to_string(&field).unwrap();
        let back: TextField = serde_json::from_str(&json).unwrap();
        assert_eq!(back.metadata, field.metadata);
        assert_eq!(back.options, field.options);
    }
}
