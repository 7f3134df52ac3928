use std::fmt;

use serde::{Deserialize, Serialize};

/// UI widget type for field rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Numeric text input validated against schema constraints
    Number,
}

impl FieldKind {
    /// Get string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str() {
        assert_eq!(FieldKind::Text.as_str(), "text");
        assert_eq!(FieldKind::Number.as_str(), "number");
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(
            serde_json::to_string(&FieldKind::Number).unwrap(),
            "\"number\""
        );
        let kind: FieldKind = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(kind, FieldKind::Text);
    }
}
