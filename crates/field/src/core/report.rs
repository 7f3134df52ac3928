//! Validation report - per-rule outcomes of a single validation pass
//!
//! Every rule is recorded, pass or fail, so a host can render all failure
//! messages at once instead of stopping at the first broken rule. Overall
//! validity is the conjunction of every recorded status.

use indexmap::IndexMap;
use serde::Serialize;

/// Outcome of one named validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// Whether the rule passed
    pub status: bool,
    /// Failure message; empty when the rule passed
    pub message: String,
}

/// Ordered per-rule results of one validation pass
///
/// Created fresh for every pass and never mutated after being handed to the
/// host. Rules appear in the order they were evaluated.
///
/// # Examples
///
/// ```
/// use anketa_field::ValidationReport;
///
/// let mut report = ValidationReport::new();
/// report.record("required", true, "");
/// report.record("stringNotANumber", false, "This value is not a number.");
///
/// assert!(!report.is_valid());
/// assert_eq!(report.status("required"), Some(true));
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    #[serde(flatten)]
    outcomes: IndexMap<String, RuleOutcome>,
}

impl ValidationReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one rule
    pub fn record(&mut self, rule: impl Into<String>, status: bool, message: impl Into<String>) {
        self.outcomes.insert(
            rule.into(),
            RuleOutcome {
                status,
                message: message.into(),
            },
        );
    }

    /// Overall validity: logical AND of every recorded rule status
    ///
    /// An empty report is valid (no rule objected).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcomes.values().all(|outcome| outcome.status)
    }

    /// Get the outcome recorded for a rule
    #[must_use]
    pub fn get(&self, rule: &str) -> Option<&RuleOutcome> {
        self.outcomes.get(rule)
    }

    /// Get the status recorded for a rule
    #[must_use]
    pub fn status(&self, rule: &str) -> Option<bool> {
        self.outcomes.get(rule).map(|outcome| outcome.status)
    }

    /// Get the message recorded for a rule
    #[must_use]
    pub fn message(&self, rule: &str) -> Option<&str> {
        self.outcomes.get(rule).map(|outcome| outcome.message.as_str())
    }

    /// Iterate over all recorded outcomes in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleOutcome)> {
        self.outcomes
            .iter()
            .map(|(rule, outcome)| (rule.as_str(), outcome))
    }

    /// Iterate over the failed rules only
    pub fn failures(&self) -> impl Iterator<Item = (&str, &RuleOutcome)> {
        self.iter().filter(|(_, outcome)| !outcome.status)
    }

    /// Number of recorded rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if no rules were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_report_is_valid() {
        assert!(ValidationReport::new().is_valid());
    }

    #[test]
    fn test_single_failure_invalidates() {
        let mut report = ValidationReport::new();
        report.record("required", true, "");
        report.record("stringValueTooLarge", false, "The maximum value for this field is 10");
        report.record("stringValueTooSmall", true, "");

        assert!(!report.is_valid());
        assert_eq!(report.status("stringValueTooLarge"), Some(false));
        assert_eq!(
            report.message("stringValueTooLarge"),
            Some("The maximum value for this field is 10")
        );
    }

    #[test]
    fn test_all_passing_is_valid() {
        let mut report = ValidationReport::new();
        report.record("required", true, "");
        report.record("stringNotANumber", true, "");

        assert!(report.is_valid());
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let mut report = ValidationReport::new();
        report.record("required", true, "");
        report.record("stringNotANumber", true, "");
        report.record("stringDivisibleBy", false, "The value must be divisible by 3");

        let rules: Vec<&str> = report.iter().map(|(rule, _)| rule).collect();
        assert_eq!(rules, vec!["required", "stringNotANumber", "stringDivisibleBy"]);
    }

    #[test]
    fn test_failures_iterator() {
        let mut report = ValidationReport::new();
        report.record("required", false, "This field is required");
        report.record("stringNotANumber", true, "");

        let failed: Vec<&str> = report.failures().map(|(rule, _)| rule).collect();
        assert_eq!(failed, vec!["required"]);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut report = ValidationReport::new();
        report.record("required", false, "This field is required");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["required"]["status"], false);
        assert_eq!(json["required"]["message"], "This field is required");
    }
}
