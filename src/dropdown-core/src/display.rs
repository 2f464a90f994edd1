//! Trigger text derived from the selection.

use crate::catalog::OptionCatalog;
use crate::selection::SelectionState;

/// Text shown on the closed control.
///
/// | selected | result                      |
/// |----------|-----------------------------|
/// | 0        | placeholder                 |
/// | 1        | that option's label         |
/// | 2        | both labels joined by ", "  |
/// | 3+       | "{count} selected"          |
///
/// A value with no catalog record is shown raw.
pub fn display_text(selection: &SelectionState, catalog: &OptionCatalog, placeholder: &str) -> String {
    let values = selection.values();
    let label = |value: &str| {
        catalog
            .find_by_value(value)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| value.to_string())
    };

    match values.as_slice() {
        [] => placeholder.to_string(),
        [only] => label(only),
        [first, second] => format!("{}, {}", label(first), label(second)),
        _ => format!("{} selected", values.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::SelectOption;
    use crate::selection::{SelectionMode, SelectionValue, ValueSource};

    fn catalog() -> OptionCatalog {
        OptionCatalog::new(vec![
            SelectOption::new("a", "Option 1"),
            SelectOption::new("b", "Option 2"),
            SelectOption::new("c", "Option 3"),
            SelectOption::new("d", "Option 4"),
        ])
        .expect("unique values")
    }

    fn multiple(values: Vec<&str>) -> SelectionState {
        SelectionState::new(
            SelectionMode::Multiple,
            ValueSource::Uncontrolled,
            Some(SelectionValue::from(values)),
        )
        .expect("valid selection")
    }

    #[test]
    fn test_placeholder_when_empty() {
        assert_eq!(display_text(&multiple(vec![]), &catalog(), "Pick"), "Pick");
    }

    #[test]
    fn test_single_label() {
        let state = SelectionState::new(
            SelectionMode::Single,
            ValueSource::Uncontrolled,
            Some("b".into()),
        )
        .unwrap();
        assert_eq!(display_text(&state, &catalog(), "Pick"), "Option 2");
    }

    #[test]
    fn test_two_labels_in_insertion_order() {
        assert_eq!(
            display_text(&multiple(vec!["c", "a"]), &catalog(), "Pick"),
            "Option 3, Option 1"
        );
    }

    #[test]
    fn test_three_or_more_counts() {
        let catalog = catalog();
        for values in [vec!["a", "b", "c"], vec!["d", "a", "c"], vec!["b", "c", "d"]] {
            assert_eq!(display_text(&multiple(values), &catalog, "Pick"), "3 selected");
        }
        assert_eq!(
            display_text(&multiple(vec!["a", "b", "c", "d"]), &catalog, "Pick"),
            "4 selected"
        );
    }

    #[test]
    fn test_missing_value_shows_raw() {
        assert_eq!(
            display_text(&multiple(vec!["zz"]), &catalog(), "Pick"),
            "zz"
        );
    }
}
