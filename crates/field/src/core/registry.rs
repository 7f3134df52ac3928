//! Field-type registry
//!
//! Central registry mapping field-type keys to their descriptors, plus the
//! default schema-type to field-type mapping used when a schema does not
//! name a field type explicitly. Lifecycle: populated once at startup,
//! read-only afterwards - consumers receive a shared reference rather than
//! reaching into ambient global state.

use std::collections::HashMap;

use anketa_core::FieldKey;
use serde_json::Value;
use tracing::debug;

use crate::core::{Field, FieldKind};
use crate::error::FieldError;

/// Registration record for one field type
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field-type key (`number`, `text`, ...)
    pub key: FieldKey,
    /// Widget kind rendered for this type
    pub kind: FieldKind,
    /// Human-readable title
    pub title: String,
    /// Human-readable description
    pub description: String,
    /// Marker class for the rendered container
    pub container_class: Option<String>,
    /// Schema-of-schema fragment for the form-builder UI
    pub schema_of_schema: Value,
    /// Editor-widget fragment for the form-builder UI
    pub options_for_schema: Value,
}

impl FieldDescriptor {
    /// Build a registration record from a representative field instance
    pub fn describe<F: Field>(field: &F) -> Result<Self, FieldError> {
        Ok(Self {
            key: FieldKey::new(field.field_type())?,
            kind: field.kind(),
            title: field.title().to_string(),
            description: field.description().to_string(),
            container_class: field.container_class().map(str::to_string),
            schema_of_schema: field.schema_of_schema(),
            options_for_schema: field.options_for_schema(),
        })
    }
}

/// Central registry for field types and schema-type mappings
///
/// # Examples
///
/// ```
/// use anketa_field::prelude::*;
///
/// let mut registry = FieldRegistry::new();
/// let mut catalog = MessageCatalog::new();
/// register_defaults(&mut registry, &mut catalog).unwrap();
///
/// let number = FieldKey::new("number").unwrap();
/// assert!(registry.get(&number).is_some());
/// assert_eq!(registry.resolve_schema_type(&number).unwrap().key, number);
/// ```
#[derive(Debug, Default)]
pub struct FieldRegistry {
    fields: HashMap<FieldKey, FieldDescriptor>,
    schema_types: HashMap<FieldKey, FieldKey>,
}

impl FieldRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field type
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::AlreadyRegistered`] when a descriptor with the
    /// same key is already present.
    pub fn register_field(&mut self, descriptor: FieldDescriptor) -> Result<(), FieldError> {
        if self.fields.contains_key(&descriptor.key) {
            return Err(FieldError::already_registered(descriptor.key));
        }
        debug!(key = %descriptor.key, kind = %descriptor.kind, "registering field type");
        self.fields.insert(descriptor.key.clone(), descriptor);
        Ok(())
    }

    /// Map a schema type to its default field type
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::UnknownFieldType`] when the target field type
    /// has not been registered.
    pub fn map_schema_type(
        &mut self,
        schema_type: FieldKey,
        field_type: FieldKey,
    ) -> Result<(), FieldError> {
        if !self.fields.contains_key(&field_type) {
            return Err(FieldError::unknown_field_type(field_type));
        }
        debug!(schema_type = %schema_type, field_type = %field_type, "mapping schema type");
        self.schema_types.insert(schema_type, field_type);
        Ok(())
    }

    /// Get a field-type descriptor by key
    #[must_use]
    pub fn get(&self, key: &FieldKey) -> Option<&FieldDescriptor> {
        self.fields.get(key)
    }

    /// Check whether a field type is registered
    #[must_use]
    pub fn contains(&self, key: &FieldKey) -> bool {
        self.fields.contains_key(key)
    }

    /// Resolve a schema type to the descriptor of its default field type
    #[must_use]
    pub fn resolve_schema_type(&self, schema_type: &FieldKey) -> Option<&FieldDescriptor> {
        self.schema_types
            .get(schema_type)
            .and_then(|field_type| self.fields.get(field_type))
    }

    /// Iterate over all registered field-type descriptors
    pub fn list(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Number of registered field types
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field types are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(key: &str) -> FieldDescriptor {
        FieldDescriptor {
            key: FieldKey::new(key).unwrap(),
            kind: FieldKind::Text,
            title: "Test Field".to_string(),
            description: "A field for tests".to_string(),
            container_class: None,
            schema_of_schema: json!({}),
            options_for_schema: json!({}),
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = FieldRegistry::new();
        registry.register_field(descriptor("text")).unwrap();

        let key = FieldKey::new("text").unwrap();
        assert!(registry.contains(&key));
        assert_eq!(registry.get(&key).unwrap().title, "Test Field");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = FieldRegistry::new();
        registry.register_field(descriptor("text")).unwrap();

        let err = registry.register_field(descriptor("text")).unwrap_err();
        assert!(matches!(err, FieldError::AlreadyRegistered { .. }));
    }

    #[test]
    fn test_schema_type_mapping() {
        let mut registry = FieldRegistry::new();
        registry.register_field(descriptor("text")).unwrap();
        registry
            .map_schema_type(FieldKey::new("string").unwrap(), FieldKey::new("text").unwrap())
            .unwrap();

        let resolved = registry
            .resolve_schema_type(&FieldKey::new("string").unwrap())
            .unwrap();
        assert_eq!(resolved.key, "text");
    }

    #[test]
    fn test_mapping_to_unregistered_type_fails() {
        let mut registry = FieldRegistry::new();
        let err = registry
            .map_schema_type(
                FieldKey::new("number").unwrap(),
                FieldKey::new("number").unwrap(),
            )
            .unwrap_err();
        assert!(matches!(err, FieldError::UnknownFieldType { .. }));
    }

    #[test]
    fn test_unknown_schema_type_resolves_to_none() {
        let registry = FieldRegistry::new();
        assert!(
            registry
                .resolve_schema_type(&FieldKey::new("object").unwrap())
                .is_none()
        );
    }
}
