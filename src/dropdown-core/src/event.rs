//! Inbound input events and outbound notifications.

use crate::option::SelectOption;
use crate::selection::SelectionValue;

/// Keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Home,
    End,
    Enter,
    Space,
    Escape,
    /// Any other key; always a no-op
    Other,
}

/// A discrete input delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer activation of the trigger
    Activate,
    /// Keystroke while the control has focus
    Key(Key),
    /// Pointer click on the visible option at this position
    ClickOption(usize),
    /// Pointer interaction outside the overlay
    OutsideInteraction,
    /// Character typed into the search field
    QueryInput(char),
    /// Backspace in the search field
    QueryBackspace,
    /// Search field cleared
    QueryClear,
    /// Search field replaced wholesale
    SetQuery(String),
}

impl From<Key> for InputEvent {
    fn from(key: Key) -> Self {
        InputEvent::Key(key)
    }
}

/// Value reported by a change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangePayload {
    /// Single mode: the committed value and its record
    Single { value: String, option: SelectOption },
    /// Multiple mode: the full ordered value list and the matching records
    Multiple {
        values: Vec<String>,
        options: Vec<SelectOption>,
    },
}

impl ChangePayload {
    /// Values carried by the payload, in order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            ChangePayload::Single { value, .. } => vec![value.as_str()],
            ChangePayload::Multiple { values, .. } => values.iter().map(String::as_str).collect(),
        }
    }

    /// The payload as a value a controlled host can feed back.
    pub fn to_value(&self) -> SelectionValue {
        match self {
            ChangePayload::Single { value, .. } => SelectionValue::One(value.clone()),
            ChangePayload::Multiple { values, .. } => SelectionValue::Many(values.clone()),
        }
    }
}

/// Notification emitted to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The selection changed (or, when controlled, a change was proposed)
    Change(ChangePayload),
    /// The overlay opened
    Open,
    /// The overlay closed
    Close,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_values() {
        let single = ChangePayload::Single {
            value: "b".to_string(),
            option: SelectOption::new("b", "Option 2"),
        };
        assert_eq!(single.values(), vec!["b"]);

        let multiple = ChangePayload::Multiple {
            values: vec!["c".to_string(), "a".to_string()],
            options: vec![],
        };
        assert_eq!(multiple.values(), vec!["c", "a"]);
        assert_eq!(multiple.to_value(), SelectionValue::from(vec!["c", "a"]));
    }

    #[test]
    fn test_key_into_event() {
        assert_eq!(InputEvent::from(Key::Enter), InputEvent::Key(Key::Enter));
    }
}
