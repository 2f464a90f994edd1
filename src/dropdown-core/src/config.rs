//! Configuration flags for a dropdown instance.

use serde::{Deserialize, Serialize};

use crate::selection::SelectionMode;

/// Default text shown when nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

/// Default number of options shown before the overlay scrolls.
pub const DEFAULT_MAX_VISIBLE: usize = 8;

/// Flags fixed or toggled by the embedding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Allow selecting more than one value
    pub multiple: bool,
    /// Narrow the visible options with a typed query
    pub searchable: bool,
    /// Suppress all activating transitions
    pub disabled: bool,
    /// Suppress all activating transitions while options are loading
    pub loading: bool,
    /// Text shown when nothing is selected
    pub placeholder: String,
    /// Options shown before the overlay scrolls
    pub max_visible: usize,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            searchable: false,
            disabled: false,
            loading: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl DropdownConfig {
    /// Enable multi-select.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Enable search filtering.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the maximum number of visible options.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self
    }

    /// Selection mode implied by the `multiple` flag.
    pub fn mode(&self) -> SelectionMode {
        if self.multiple {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DropdownConfig::default();
        assert_eq!(config.placeholder, "Select...");
        assert_eq!(config.mode(), SelectionMode::Single);
        assert!(!config.searchable);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: DropdownConfig = toml::from_str("multiple = true").expect("should parse");
        assert_eq!(config.mode(), SelectionMode::Multiple);
        assert_eq!(config.max_visible, DEFAULT_MAX_VISIBLE);
    }

    #[test]
    fn test_max_visible_floor() {
        assert_eq!(DropdownConfig::default().with_max_visible(0).max_visible, 1);
    }
}
