//! Ordered, immutable option catalog.
//!
//! The catalog is never patched in place; callers build a new one and hand
//! it to [`Dropdown::set_options`](crate::Dropdown::set_options).

use std::collections::HashSet;

use crate::error::{DropdownError, DropdownResult};
use crate::option::SelectOption;

/// The full ordered set of candidate options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCatalog {
    options: Vec<SelectOption>,
}

impl OptionCatalog {
    /// Build a catalog, rejecting duplicate values.
    pub fn new(options: Vec<SelectOption>) -> DropdownResult<Self> {
        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.value.as_str()) {
                return Err(DropdownError::DuplicateValue(option.value.clone()));
            }
        }
        Ok(Self { options })
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up an option by its value.
    pub fn find_by_value(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// Catalog index of the option with the given value.
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }

    /// All options in catalog order.
    pub fn all(&self) -> &[SelectOption] {
        &self.options
    }

    /// Option at a catalog index.
    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptionCatalog {
        OptionCatalog::new(vec![
            SelectOption::new("a", "Option 1"),
            SelectOption::new("b", "Option 2"),
            SelectOption::new("c", "Option 3"),
        ])
        .expect("unique values")
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.find_by_value("b").map(|o| o.label.as_str()),
            Some("Option 2")
        );
        assert_eq!(catalog.position_of("c"), Some(2));
        assert!(catalog.find_by_value("z").is_none());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = sample();
        let values: Vec<&str> = catalog.all().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let result = OptionCatalog::new(vec![
            SelectOption::new("a", "First"),
            SelectOption::new("a", "Second"),
        ]);
        assert!(matches!(result, Err(DropdownError::DuplicateValue(v)) if v == "a"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = OptionCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
    }
}
