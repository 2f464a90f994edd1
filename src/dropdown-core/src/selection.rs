//! Selected value(s) and the controlled/uncontrolled value channel.
//!
//! The value source is fixed when the state is built. An uncontrolled state
//! applies its own toggles; a controlled state only proposes them and waits
//! for the caller to feed the new value back through [`SelectionState::apply_external`].

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::catalog::OptionCatalog;
use crate::error::{DropdownError, DropdownResult};
use crate::event::ChangePayload;
use crate::option::SelectOption;

/// Whether one or many values can be selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

/// Who owns the selected value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueSource {
    /// The caller feeds every value change back in
    Controlled,
    /// The dropdown is the sole source of truth
    #[default]
    Uncontrolled,
}

/// An externally supplied value: one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    One(String),
    Many(Vec<String>),
}

impl SelectionValue {
    fn into_values(self) -> Vec<String> {
        match self {
            SelectionValue::One(value) => vec![value],
            SelectionValue::Many(values) => values,
        }
    }
}

impl From<&str> for SelectionValue {
    fn from(value: &str) -> Self {
        SelectionValue::One(value.to_string())
    }
}

impl From<Vec<&str>> for SelectionValue {
    fn from(values: Vec<&str>) -> Self {
        SelectionValue::Many(values.into_iter().map(String::from).collect())
    }
}

/// Result of toggling an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Option was disabled; nothing happened
    Rejected,
    /// A change was produced (applied if uncontrolled, proposed if controlled)
    Changed {
        payload: ChangePayload,
        /// Single mode closes the overlay after a commit
        close: bool,
    },
}

/// The chosen value(s) in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    mode: SelectionMode,
    source: ValueSource,
    selected: IndexSet<String>,
}

impl SelectionState {
    /// Build a selection seeded from an external or default value.
    pub fn new(
        mode: SelectionMode,
        source: ValueSource,
        initial: Option<SelectionValue>,
    ) -> DropdownResult<Self> {
        let selected = Self::checked_values(mode, initial)?;
        Ok(Self {
            mode,
            source,
            selected,
        })
    }

    fn checked_values(
        mode: SelectionMode,
        value: Option<SelectionValue>,
    ) -> DropdownResult<IndexSet<String>> {
        let values: IndexSet<String> = value
            .map(SelectionValue::into_values)
            .unwrap_or_default()
            .into_iter()
            .collect();
        if mode == SelectionMode::Single && values.len() > 1 {
            return Err(DropdownError::TooManyValues {
                count: values.len(),
            });
        }
        Ok(values)
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn source(&self) -> ValueSource {
        self.source
    }

    pub fn is_controlled(&self) -> bool {
        self.source == ValueSource::Controlled
    }

    /// Selected values in insertion order.
    pub fn values(&self) -> Vec<&str> {
        self.selected.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.selected.contains(value)
    }

    /// Catalog records for the selected values; stale values are skipped.
    pub fn selected_options<'a>(&self, catalog: &'a OptionCatalog) -> Vec<&'a SelectOption> {
        self.selected
            .iter()
            .filter_map(|value| catalog.find_by_value(value))
            .collect()
    }

    /// The value set a toggle of `option` would produce.
    pub fn proposed(&self, option: &SelectOption) -> IndexSet<String> {
        match self.mode {
            SelectionMode::Single => IndexSet::from([option.value.clone()]),
            SelectionMode::Multiple => {
                let mut next = self.selected.clone();
                if !next.shift_remove(&option.value) {
                    next.insert(option.value.clone());
                }
                next
            }
        }
    }

    /// Toggle an option.
    ///
    /// Single mode replaces the selection; multiple mode removes the value if
    /// present and appends it otherwise. Controlled states leave `selected`
    /// untouched and only report the proposed value.
    pub fn toggle(&mut self, option: &SelectOption, catalog: &OptionCatalog) -> ToggleOutcome {
        if option.disabled {
            return ToggleOutcome::Rejected;
        }

        let next = self.proposed(option);
        let payload = self.payload_for(&next, option, catalog);

        if self.source == ValueSource::Uncontrolled {
            self.selected = next;
        }

        ToggleOutcome::Changed {
            payload,
            close: self.mode == SelectionMode::Single,
        }
    }

    fn payload_for(
        &self,
        next: &IndexSet<String>,
        toggled: &SelectOption,
        catalog: &OptionCatalog,
    ) -> ChangePayload {
        match self.mode {
            SelectionMode::Single => ChangePayload::Single {
                value: toggled.value.clone(),
                option: toggled.clone(),
            },
            SelectionMode::Multiple => ChangePayload::Multiple {
                values: next.iter().cloned().collect(),
                options: next
                    .iter()
                    .filter_map(|value| catalog.find_by_value(value))
                    .cloned()
                    .collect(),
            },
        }
    }

    /// Accept a value pushed in by the caller of a controlled instance.
    ///
    /// Returns whether the stored value changed; re-applying the same value
    /// is a no-op.
    pub fn apply_external(&mut self, value: Option<SelectionValue>) -> DropdownResult<bool> {
        if self.source != ValueSource::Controlled {
            return Err(DropdownError::NotControlled);
        }
        let next = Self::checked_values(self.mode, value)?;
        // IndexSet equality ignores order; insertion order is part of the value here
        if next.iter().eq(self.selected.iter()) {
            return Ok(false);
        }
        self.selected = next;
        Ok(true)
    }
}
