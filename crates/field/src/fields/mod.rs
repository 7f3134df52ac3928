//! Built-in field implementations

mod number;
mod text;

pub use number::{
    MSG_VALUE_TOO_LARGE_EXCLUSIVE, MSG_VALUE_TOO_SMALL_EXCLUSIVE, NumberConstraints, NumberField,
    RULE_DIVISIBLE_BY, RULE_NOT_A_NUMBER, RULE_VALUE_TOO_LARGE, RULE_VALUE_TOO_SMALL, parse_value,
    validate_is_number,
};
pub use text::{LengthRange, RULE_REQUIRED, RULE_TOO_LONG, RULE_TOO_SHORT, TextField, TextOptions};

use tracing::info;

use crate::core::{FieldRegistry, MessageCatalog};
use crate::error::FieldError;

/// Register the built-in field types, their default schema-type mappings,
/// and their message templates
///
/// Call once during host startup, before the registry and catalog are
/// shared with the rendering side.
pub fn register_defaults(
    registry: &mut FieldRegistry,
    catalog: &mut MessageCatalog,
) -> Result<(), FieldError> {
    text::register(registry)?;
    number::register(registry)?;
    text::register_messages(catalog);
    number::register_messages(catalog);
    info!(fields = registry.len(), "registered built-in field types");
    Ok(())
}

/// Message catalog pre-populated with the built-in field templates
#[must_use]
pub fn default_catalog() -> MessageCatalog {
    let mut catalog = MessageCatalog::new();
    text::register_messages(&mut catalog);
    number::register_messages(&mut catalog);
    catalog
}
