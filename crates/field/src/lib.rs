//! # Anketa Field
//!
//! The field framework slice of the Anketa toolkit: field metadata, the
//! field trait surface, per-rule validation reports, the message catalog,
//! the field-type registry, and the built-in text/number fields.
//!
//! A rendering host instantiates fields from a schema, feeds them raw
//! control text, and displays the messages collected in the returned
//! [`ValidationReport`]. Validation itself is synchronous and pure: no
//! I/O, no shared mutable state.

pub mod core;
pub mod error;
pub mod fields;

// Re-export core functionality
pub use crate::core::*;

// Re-export built-in field types
pub use crate::fields::*;

pub use crate::error::{FieldError, Result};

// Re-export key types from anketa-core
pub use anketa_core::{FieldKey, KeyParseError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        EditableField, Field, FieldDescriptor, FieldKind, FieldMetadata, FieldRegistry,
        MessageCatalog, RuleOutcome, ValidationReport,
    };

    pub use crate::error::{FieldError, Result};

    pub use crate::fields::{
        LengthRange, NumberConstraints, NumberField, TextField, TextOptions, default_catalog,
        register_defaults,
    };

    pub use anketa_core::{FieldKey, KeyParseError};
}
