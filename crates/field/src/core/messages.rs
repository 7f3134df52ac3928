//! Message catalog and token substitution
//!
//! Failure messages are templates with positional `{0}`-style markers.
//! Each field plugin registers its templates into the catalog during
//! startup; the catalog is read-only afterwards.

use std::collections::HashMap;

use tracing::debug;

/// Substitute positional `{0}`-style tokens in a message template
///
/// Markers that reference a missing token (or are not positional at all)
/// are kept verbatim, so a template/argument mismatch degrades to a
/// readable message instead of panicking.
///
/// # Examples
///
/// ```
/// use anketa_field::substitute_tokens;
///
/// let message = substitute_tokens("The maximum value for this field is {0}", &["100"]);
/// assert_eq!(message, "The maximum value for this field is 100");
/// ```
#[must_use]
pub fn substitute_tokens(template: &str, tokens: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let marker = &rest[start..];
        if let Some(close) = marker.find('}') {
            if let Ok(index) = marker[1..close].parse::<usize>() {
                match tokens.get(index) {
                    Some(token) => out.push_str(token),
                    None => out.push_str(&marker[..=close]),
                }
                rest = &marker[close + 1..];
                continue;
            }
        }
        out.push('{');
        rest = &marker[1..];
    }
    out.push_str(rest);
    out
}

/// Render a numeric constraint value for message substitution
///
/// Integral floats render without a fractional part (`100`, not `100.0`),
/// matching how the constraint reads in the schema.
#[must_use]
pub fn number_token(value: f64) -> String {
    format!("{value}")
}

/// Registry of message templates keyed by message name
///
/// Lifecycle: populated once during startup (each field plugin contributes
/// its own templates, later registrations override earlier ones), then
/// shared read-only with every validation pass. Lookup of an unregistered
/// key falls back to the key itself so a missing registration never breaks
/// validation mid-pass.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create an empty catalog
    ///
    /// Use [`crate::fields::default_catalog`] for a catalog pre-populated
    /// with the built-in field templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one template, overriding any previous registration
    pub fn register(&mut self, key: impl Into<String>, template: impl Into<String>) {
        let key = key.into();
        debug!(key = %key, "registering message template");
        self.templates.insert(key, template.into());
    }

    /// Register a batch of templates
    pub fn register_all(&mut self, entries: &[(&str, &str)]) {
        for (key, template) in entries {
            self.register(*key, *template);
        }
    }

    /// Check whether a template is registered for the key
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Look up a template, falling back to the key itself when missing
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.templates.get(key).map_or(key, String::as_str)
    }

    /// Look up a template and substitute positional tokens
    #[must_use]
    pub fn format(&self, key: &str, tokens: &[&str]) -> String {
        substitute_tokens(self.get(key), tokens)
    }

    /// Number of registered templates
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog has no templates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_substitute_single_token() {
        assert_eq!(
            substitute_tokens("The value must be divisible by {0}", &["5"]),
            "The value must be divisible by 5"
        );
    }

    #[test]
    fn test_substitute_multiple_tokens() {
        assert_eq!(
            substitute_tokens("between {0} and {1}", &["3", "7"]),
            "between 3 and 7"
        );
    }

    #[test]
    fn test_substitute_repeated_token() {
        assert_eq!(substitute_tokens("{0} and {0}", &["x"]), "x and x");
    }

    #[test]
    fn test_substitute_out_of_range_kept_verbatim() {
        assert_eq!(substitute_tokens("value {1}", &["x"]), "value {1}");
    }

    #[test]
    fn test_substitute_non_positional_braces_kept() {
        assert_eq!(substitute_tokens("a {b} c", &["x"]), "a {b} c");
        assert_eq!(substitute_tokens("open { only", &[]), "open { only");
    }

    #[test]
    fn test_substitute_no_tokens_needed() {
        assert_eq!(
            substitute_tokens("This value is not a number.", &[]),
            "This value is not a number."
        );
    }

    #[test]
    fn test_number_token_rendering() {
        assert_eq!(number_token(100.0), "100");
        assert_eq!(number_token(0.1), "0.1");
        assert_eq!(number_token(-2.5), "-2.5");
    }

    #[test]
    fn test_catalog_register_and_format() {
        let mut catalog = MessageCatalog::new();
        catalog.register("stringDivisibleBy", "The value must be divisible by {0}");

        assert!(catalog.contains("stringDivisibleBy"));
        assert_eq!(
            catalog.format("stringDivisibleBy", &["3"]),
            "The value must be divisible by 3"
        );
    }

    #[test]
    fn test_catalog_override() {
        let mut catalog = MessageCatalog::new();
        catalog.register("stringNotANumber", "This value is not a number.");
        catalog.register("stringNotANumber", "Numbers only, please");

        assert_eq!(catalog.get("stringNotANumber"), "Numbers only, please");
    }

    #[test]
    fn test_catalog_missing_key_falls_back_to_key() {
        let catalog = MessageCatalog::new();
        assert_eq!(catalog.get("neverRegistered"), "neverRegistered");
        assert_eq!(catalog.format("neverRegistered", &["1"]), "neverRegistered");
    }
}
