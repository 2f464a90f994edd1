//! Option records offered by a dropdown.

use serde::{Deserialize, Serialize};

/// A single candidate in the option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique value/identifier
    pub value: String,
    /// Display label
    pub label: String,
    /// Whether the option can be committed
    #[serde(default)]
    pub disabled: bool,
    /// Optional secondary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SelectOption {
    /// Create a new enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            description: None,
        }
    }

    /// Add a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_option_builder() {
        let option = SelectOption::new("b", "Option 2")
            .with_description("second")
            .disabled();
        assert_eq!(option.value, "b");
        assert_eq!(option.label, "Option 2");
        assert_eq!(option.description.as_deref(), Some("second"));
        assert!(option.disabled);
    }

    #[test]
    fn test_select_option_deserialize_defaults() {
        let option: SelectOption =
            serde_json::from_str(r#"{"value": "a", "label": "A"}"#).expect("should parse");
        assert!(!option.disabled);
        assert!(option.description.is_none());
    }
}
