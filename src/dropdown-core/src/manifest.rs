//! Dropdown manifests: options, flags and initial value in one file.
//!
//! ```toml
//! multiple = true
//! searchable = true
//! placeholder = "Pick fruit"
//! default_value = ["b"]
//!
//! [[options]]
//! value = "a"
//! label = "Apple"
//!
//! [[options]]
//! value = "b"
//! label = "Banana"
//! description = "Yellow"
//! ```
//!
//! `value` makes the instance controlled; `default_value` seeds an
//! uncontrolled one. JSON manifests use the same field names.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::OptionCatalog;
use crate::config::DropdownConfig;
use crate::dropdown::Dropdown;
use crate::error::{DropdownError, DropdownResult};
use crate::option::SelectOption;
use crate::selection::SelectionValue;

/// Everything needed to build a [`Dropdown`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownManifest {
    #[serde(flatten)]
    pub config: DropdownConfig,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<SelectionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<SelectionValue>,
}

impl DropdownManifest {
    /// Load a manifest, picking the parser from the file extension.
    pub fn load(path: impl AsRef<Path>) -> DropdownResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| DropdownError::ManifestRead {
                path: path.to_path_buf(),
                source,
            })?;

        let manifest = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => return Err(DropdownError::UnsupportedFormat(path.to_path_buf())),
        };
        debug!(path = %path.display(), options = manifest.options.len(), "manifest loaded");
        Ok(manifest)
    }

    pub fn from_toml_str(content: &str) -> DropdownResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> DropdownResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Whether the manifest pins a controlled value.
    pub fn is_controlled(&self) -> bool {
        self.value.is_some()
    }

    /// Validate the options and build the control.
    pub fn into_dropdown(self) -> DropdownResult<Dropdown> {
        let catalog = OptionCatalog::new(self.options)?;
        match self.value {
            Some(value) => Dropdown::controlled(self.config, catalog, Some(value)),
            None => Dropdown::uncontrolled(self.config, catalog, self.default_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const FRUIT_TOML: &str = r#"
multiple = true
searchable = true
placeholder = "Pick fruit"
default_value = ["b"]

[[options]]
value = "a"
label = "Apple"

[[options]]
value = "b"
label = "Banana"
description = "Yellow"

[[options]]
value = "c"
label = "Cherry"
disabled = true
"#;

    #[test]
    fn test_parse_toml_manifest() {
        let manifest = DropdownManifest::from_toml_str(FRUIT_TOML).expect("should parse");
        assert!(manifest.config.multiple);
        assert!(manifest.config.searchable);
        assert_eq!(manifest.config.placeholder, "Pick fruit");
        assert_eq!(manifest.options.len(), 3);
        assert!(manifest.options[2].disabled);
        assert_eq!(
            manifest.default_value,
            Some(SelectionValue::Many(vec!["b".to_string()]))
        );
        assert!(!manifest.is_controlled());
    }

    #[test]
    fn test_parse_json_manifest_with_single_value() {
        let manifest = DropdownManifest::from_json_str(
            r#"{"value": "a", "options": [{"value": "a", "label": "A"}]}"#,
        )
        .expect("should parse");
        assert!(manifest.is_controlled());
        assert_eq!(manifest.value, Some(SelectionValue::One("a".to_string())));

        let dropdown = manifest.into_dropdown().expect("valid manifest");
        assert!(dropdown.selection().is_controlled());
        assert_eq!(dropdown.display_text(), "A");
    }

    #[test]
    fn test_into_dropdown_rejects_duplicates() {
        let manifest = DropdownManifest {
            options: vec![SelectOption::new("a", "A"), SelectOption::new("a", "B")],
            ..Default::default()
        };
        assert!(matches!(
            manifest.into_dropdown(),
            Err(DropdownError::DuplicateValue(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        file.write_all(FRUIT_TOML.as_bytes()).expect("write");

        let dropdown = DropdownManifest::load(file.path())
            .and_then(DropdownManifest::into_dropdown)
            .expect("should load");
        assert_eq!(dropdown.selected_values(), vec!["b"]);
        assert_eq!(dropdown.display_text(), "Banana");
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        assert!(matches!(
            DropdownManifest::load(file.path()),
            Err(DropdownError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DropdownManifest::load("/nonexistent/menu.toml").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
