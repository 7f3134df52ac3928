//! Number field - numeric input control
//!
//! Renders as a text box whose contents are parsed as a float and checked
//! against the JSON-Schema numeric constraint dialect:
//!
//! ```json
//! {
//!    "minimum": 5,
//!    "maximum": 100,
//!    "exclusiveMinimum": false,
//!    "exclusiveMaximum": true,
//!    "divisibleBy": 5
//! }
//! ```
//!
//! The base text field is composed in explicitly: its report is computed
//! first and the four numeric rules are recorded on top of it, so the
//! overall verdict is the conjunction of base and numeric statuses.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use anketa_core::FieldKey;

use crate::core::{
    EditableField, Field, FieldDescriptor, FieldKind, FieldMetadata, FieldRegistry, MessageCatalog,
    ValidationReport, number_token, schema,
};
use crate::error::FieldError;
use crate::fields::text::{TextField, TextOptions};

/// Rule key recorded by the strict numeric-grammar check.
pub const RULE_NOT_A_NUMBER: &str = "stringNotANumber";
/// Rule key recorded by the divisibility check.
pub const RULE_DIVISIBLE_BY: &str = "stringDivisibleBy";
/// Rule key recorded by the maximum check.
pub const RULE_VALUE_TOO_LARGE: &str = "stringValueTooLarge";
/// Rule key recorded by the minimum check.
pub const RULE_VALUE_TOO_SMALL: &str = "stringValueTooSmall";
/// Message key used for maximum failures when the bound is exclusive;
/// the outcome is still reported under [`RULE_VALUE_TOO_LARGE`].
pub const MSG_VALUE_TOO_LARGE_EXCLUSIVE: &str = "stringValueTooLargeExclusive";
/// Message key used for minimum failures when the bound is exclusive;
/// the outcome is still reported under [`RULE_VALUE_TOO_SMALL`].
pub const MSG_VALUE_TOO_SMALL_EXCLUSIVE: &str = "stringValueTooSmallExclusive";

/// Strict grammar for a complete numeric literal: optional sign, digits
/// with an optional trailing decimal point or a decimal fraction, then an
/// optional exponent.
static NUMERIC_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(([0-9]+\.?)|([0-9]*\.[0-9]+))([eE][+-]?[0-9]+)?$")
        .expect("numeric grammar pattern is a valid regex")
});

/// Extract a float from raw control text, leniently
///
/// Mirrors standard leading-prefix float parsing: surrounding whitespace is
/// ignored and the longest valid numeric prefix is converted, so `"12abc"`
/// yields `12.0`. Returns `NAN` when no numeric prefix exists. Purely
/// syntactic - constraints are not enforced here.
#[must_use]
pub fn parse_value(raw: &str) -> f64 {
    let text = raw.trim();
    let bytes = text.as_bytes();

    let mut pos = usize::from(matches!(bytes.first(), Some(&(b'+' | b'-'))));
    let mut saw_digit = false;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
        saw_digit = true;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return f64::NAN;
    }

    // The exponent only counts when at least one digit follows it;
    // "1e" parses as 1.
    let mut end = pos;
    if matches!(bytes.get(pos), Some(&(b'e' | b'E'))) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(&(b'+' | b'-'))) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            while bytes.get(exp).is_some_and(u8::is_ascii_digit) {
                exp += 1;
            }
            end = exp;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Check that raw control text is canonically a number
///
/// Blank input is valid (an optional field left empty is not a type
/// error). Otherwise the text must parse *and* the entire trimmed input
/// must match the strict numeric grammar - stricter than [`parse_value`],
/// which silently ignores trailing garbage like `"12abc"`.
#[must_use]
pub fn validate_is_number(raw: &str) -> bool {
    let text = raw.trim();
    if text.is_empty() {
        return true;
    }
    if parse_value(text).is_nan() {
        return false;
    }
    NUMERIC_GRAMMAR.is_match(text)
}

// =============================================================================
// NumberConstraints
// =============================================================================

/// JSON-Schema numeric constraints attached to one number field instance
///
/// Presence is modeled explicitly: `Some(0.0)` is a real bound and `None`
/// disables the check. The exclusivity flags only matter alongside their
/// bound.
///
/// # Examples
///
/// ```
/// use anketa_field::NumberConstraints;
///
/// let constraints = NumberConstraints::new()
///     .minimum(0.0)
///     .maximum(100.0)
///     .exclusive_maximum(true)
///     .divisible_by(5.0);
///
/// assert!(constraints.validate_minimum(0.0));
/// assert!(!constraints.validate_maximum(100.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberConstraints {
    /// Smallest allowed value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Largest allowed value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Reject the value equal to `minimum` itself
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclusive_minimum: bool,

    /// Reject the value equal to `maximum` itself
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclusive_maximum: bool,

    /// The value must divide evenly by this number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divisible_by: Option<f64>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl NumberConstraints {
    /// Create an empty constraint set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum bound
    #[must_use]
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the maximum bound
    #[must_use]
    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Set whether the minimum bound itself is rejected
    #[must_use]
    pub fn exclusive_minimum(mut self, exclusive: bool) -> Self {
        self.exclusive_minimum = exclusive;
        self
    }

    /// Set whether the maximum bound itself is rejected
    #[must_use]
    pub fn exclusive_maximum(mut self, exclusive: bool) -> Self {
        self.exclusive_maximum = exclusive;
        self
    }

    /// Set the divisibility requirement
    #[must_use]
    pub fn divisible_by(mut self, divisor: f64) -> Self {
        self.divisible_by = Some(divisor);
        self
    }

    /// Check if no constraint is configured
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.minimum.is_none()
            && self.maximum.is_none()
            && !self.exclusive_minimum
            && !self.exclusive_maximum
            && self.divisible_by.is_none()
    }

    /// Divisibility rule: exact floating-point remainder test
    ///
    /// A missing or zero divisor disables the check (no meaningful
    /// remainder exists for zero). A NaN value passes - the grammar rule
    /// already flags it. Note the exact `%` test can surprise for
    /// non-integral divisors: `0.3 % 0.1` is not `0.0` in binary floating
    /// point.
    #[must_use]
    pub fn validate_divisible_by(&self, value: f64) -> bool {
        let Some(divisor) = self.divisible_by else {
            return true;
        };
        if divisor == 0.0 || value.is_nan() {
            return true;
        }
        value % divisor == 0.0
    }

    /// Maximum rule
    ///
    /// Fails when the value exceeds the bound, or equals it while
    /// `exclusive_maximum` is set. A NaN value passes - the grammar rule
    /// already flags it.
    #[must_use]
    pub fn validate_maximum(&self, value: f64) -> bool {
        let Some(maximum) = self.maximum else {
            return true;
        };
        if value.is_nan() {
            return true;
        }
        if value > maximum {
            return false;
        }
        !(value == maximum && self.exclusive_maximum)
    }

    /// Minimum rule, symmetric to [`Self::validate_maximum`]
    #[must_use]
    pub fn validate_minimum(&self, value: f64) -> bool {
        let Some(minimum) = self.minimum else {
            return true;
        };
        if value.is_nan() {
            return true;
        }
        if value < minimum {
            return false;
        }
        !(value == minimum && self.exclusive_minimum)
    }
}

// =============================================================================
// NumberField
// =============================================================================

/// Numeric input control
///
/// # Examples
///
/// ```
/// use anketa_field::prelude::*;
///
/// let field = NumberField::new(FieldMetadata::new("percent"))
///     .constraints(NumberConstraints::new().minimum(0.0).maximum(100.0));
///
/// let catalog = default_catalog();
/// assert!(field.handle_validate("42.5", &catalog).is_valid());
/// assert!(!field.handle_validate("101", &catalog).is_valid());
/// assert_eq!(field.get_value("42.5"), 42.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberField {
    /// Base text control supplying the host-level checks
    #[serde(flatten)]
    pub base: TextField,

    /// Numeric constraint set for this instance
    #[serde(flatten, skip_serializing_if = "NumberConstraints::is_unconstrained")]
    pub constraints: NumberConstraints,
}

impl NumberField {
    /// Create a number field for the given metadata
    #[must_use]
    pub fn new(metadata: FieldMetadata) -> Self {
        Self {
            base: TextField::new(metadata),
            constraints: NumberConstraints::new(),
        }
    }

    /// Set the numeric constraint set
    #[must_use]
    pub fn constraints(mut self, constraints: NumberConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Set the base text options
    #[must_use]
    pub fn text_options(mut self, options: TextOptions) -> Self {
        self.base = self.base.options(options);
        self
    }
}

impl std::fmt::Display for NumberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NumberField({})", self.base.metadata.name)
    }
}

impl Field for NumberField {
    fn kind(&self) -> FieldKind {
        FieldKind::Number
    }

    fn metadata(&self) -> &FieldMetadata {
        &self.base.metadata
    }

    fn field_type(&self) -> &'static str {
        "number"
    }

    fn title(&self) -> &'static str {
        "Number Field"
    }

    fn description(&self) -> &'static str {
        "Field for float numbers."
    }

    fn container_class(&self) -> Option<&'static str> {
        Some("anketa-field-number")
    }

    fn schema_of_schema(&self) -> Value {
        schema::merged(
            self.base.schema_of_schema(),
            json!({
                "properties": {
                    "minimum": {
                        "title": "Minimum",
                        "description": "Minimum value of the property",
                        "type": "number"
                    },
                    "maximum": {
                        "title": "Maximum",
                        "description": "Maximum value of the property",
                        "type": "number"
                    },
                    "exclusiveMinimum": {
                        "title": "Exclusive Minimum",
                        "description": "Field value can not equal the number defined by the minimum attribute",
                        "type": "boolean",
                        "default": false
                    },
                    "exclusiveMaximum": {
                        "title": "Exclusive Maximum",
                        "description": "Field value can not equal the number defined by the maximum attribute",
                        "type": "boolean",
                        "default": false
                    }
                }
            }),
        )
    }

    fn options_for_schema(&self) -> Value {
        schema::merged(
            self.base.options_for_schema(),
            json!({
                "fields": {
                    "minimum": {
                        "title": "Minimum",
                        "description": "Minimum value of the property",
                        "type": "number"
                    },
                    "maximum": {
                        "title": "Maximum",
                        "description": "Maximum value of the property",
                        "type": "number"
                    },
                    "exclusiveMinimum": {
                        "rightLabel": "Exclusive minimum ?",
                        "helper": "Field value must be greater than but not equal to this number if checked",
                        "type": "checkbox"
                    },
                    "exclusiveMaximum": {
                        "rightLabel": "Exclusive maximum ?",
                        "helper": "Field value must be less than but not equal to this number if checked",
                        "type": "checkbox"
                    }
                }
            }),
        )
    }
}

impl EditableField for NumberField {
    type Value = f64;

    fn get_value(&self, raw: &str) -> f64 {
        parse_value(raw)
    }

    fn handle_validate(&self, raw: &str, catalog: &MessageCatalog) -> ValidationReport {
        let mut report = self.base.handle_validate(raw, catalog);
        let value = parse_value(raw);

        let status = validate_is_number(raw);
        let message = if status {
            String::new()
        } else {
            catalog.get(RULE_NOT_A_NUMBER).to_string()
        };
        report.record(RULE_NOT_A_NUMBER, status, message);

        let status = self.constraints.validate_divisible_by(value);
        let message = match (status, self.constraints.divisible_by) {
            (false, Some(divisor)) => {
                catalog.format(RULE_DIVISIBLE_BY, &[number_token(divisor).as_str()])
            }
            _ => String::new(),
        };
        report.record(RULE_DIVISIBLE_BY, status, message);

        let status = self.constraints.validate_maximum(value);
        let message = match (status, self.constraints.maximum) {
            (false, Some(maximum)) => {
                let key = if self.constraints.exclusive_maximum {
                    MSG_VALUE_TOO_LARGE_EXCLUSIVE
                } else {
                    RULE_VALUE_TOO_LARGE
                };
                catalog.format(key, &[number_token(maximum).as_str()])
            }
            _ => String::new(),
        };
        report.record(RULE_VALUE_TOO_LARGE, status, message);

        let status = self.constraints.validate_minimum(value);
        let message = match (status, self.constraints.minimum) {
            (false, Some(minimum)) => {
                let key = if self.constraints.exclusive_minimum {
                    MSG_VALUE_TOO_SMALL_EXCLUSIVE
                } else {
                    RULE_VALUE_TOO_SMALL
                };
                catalog.format(key, &[number_token(minimum).as_str()])
            }
            _ => String::new(),
        };
        report.record(RULE_VALUE_TOO_SMALL, status, message);

        report
    }
}

/// Message templates contributed by the number field
pub(crate) fn register_messages(catalog: &mut MessageCatalog) {
    catalog.register_all(&[
        (RULE_VALUE_TOO_SMALL, "The minimum value for this field is {0}"),
        (RULE_VALUE_TOO_LARGE, "The maximum value for this field is {0}"),
        (
            MSG_VALUE_TOO_SMALL_EXCLUSIVE,
            "Value of this field must be greater than {0}",
        ),
        (
            MSG_VALUE_TOO_LARGE_EXCLUSIVE,
            "Value of this field must be less than {0}",
        ),
        (RULE_DIVISIBLE_BY, "The value must be divisible by {0}"),
        (RULE_NOT_A_NUMBER, "This value is not a number."),
    ]);
}

/// Register the number field type and its default schema-type mapping
pub(crate) fn register(registry: &mut FieldRegistry) -> Result<(), FieldError> {
    let template = NumberField::new(FieldMetadata::new("template"));
    let descriptor = FieldDescriptor::describe(&template)?;
    let key = descriptor.key.clone();
    registry.register_field(descriptor)?;
    registry.map_schema_type(FieldKey::new("number")?, key)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
