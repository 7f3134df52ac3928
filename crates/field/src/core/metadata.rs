// =============================================================================
// Field Metadata - Identification and UI hints for a field instance
// =============================================================================
//!
//! Metadata carries what every field instance needs regardless of its widget
//! kind: the property name it binds to in the form data, the label shown to
//! the user, and the optional UI hints.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Core metadata for all field instances
///
/// # Examples
///
/// ```
/// use anketa_field::FieldMetadata;
///
/// let metadata = FieldMetadata::new("age")
///     .label("Age")
///     .required(true)
///     .placeholder("18")
///     .helper("Your age in years");
///
/// assert_eq!(metadata.name, "age");
/// assert!(metadata.is_required());
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Property name this field binds to in the form data
    pub name: String,

    /// Human-readable label shown next to the control
    pub label: Option<String>,

    /// Whether a value must be provided
    ///
    /// When `true`, validation fails on blank input. Defaults to `false`
    /// (optional field).
    #[serde(default)]
    pub required: bool,

    /// Placeholder text shown in the empty control
    pub placeholder: Option<String>,

    /// Additional help text rendered near the control
    pub helper: Option<String>,
}

impl FieldMetadata {
    /// Create metadata for the given property name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            required: false,
            placeholder: None,
            helper: None,
        }
    }

    /// Set the display label
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set whether a value must be provided
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set placeholder text
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set help text
    #[must_use]
    pub fn helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    /// Check if this field is required
    #[inline]
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Label if set, otherwise the property name
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

// =============================================================================
// Tests
// =============================================================================
