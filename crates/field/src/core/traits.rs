//! Core field traits

use std::fmt::Debug;

use serde_json::Value;

use crate::core::{FieldKind, FieldMetadata, MessageCatalog, ValidationReport};

/// Descriptive surface every field type exposes to the rendering host
pub trait Field: Debug {
    /// Widget kind for this field
    fn kind(&self) -> FieldKind;

    /// Instance metadata (property name, label, UI hints)
    fn metadata(&self) -> &FieldMetadata;

    /// Field-type identifier used for registration and discovery
    fn field_type(&self) -> &'static str;

    /// Human-readable field-type title
    fn title(&self) -> &'static str;

    /// Human-readable field-type description
    fn description(&self) -> &'static str;

    /// Marker class the host adds to the rendered container, if any
    fn container_class(&self) -> Option<&'static str> {
        None
    }

    /// Schema-of-schema fragment describing this type's constraint
    /// properties to a form-builder UI
    fn schema_of_schema(&self) -> Value;

    /// Editor-widget fragment describing how a form-builder UI edits those
    /// constraint properties
    fn options_for_schema(&self) -> Value;

    /// Property name this field binds to
    #[inline]
    fn name(&self) -> &str {
        &self.metadata().name
    }

    /// Whether a value must be supplied
    #[inline]
    fn is_required(&self) -> bool {
        self.metadata().required
    }
}

/// Fields that extract and validate a value from raw control text
///
/// The raw text is owned by the host and read fresh on every call; the
/// field never stores it.
pub trait EditableField: Field {
    /// The parsed value type
    type Value;

    /// Extract the field value from the raw control text
    ///
    /// Purely syntactic conversion; no constraints are enforced here.
    fn get_value(&self, raw: &str) -> Self::Value;

    /// Run every validation rule against the raw control text
    ///
    /// All rules are evaluated unconditionally (no short-circuit) so the
    /// host can display every failure message at once. The overall verdict
    /// is [`ValidationReport::is_valid`].
    fn handle_validate(&self, raw: &str, catalog: &MessageCatalog) -> ValidationReport;
}
