//! Terminal key events to dropdown input events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dropdown_core::{Dropdown, InputEvent, Key};

/// The parts of the dropdown's state that decide how a key is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub searchable: bool,
    pub open: bool,
    /// Whether the search query is empty
    pub query_empty: bool,
}

impl KeyContext {
    pub fn of(dropdown: &Dropdown) -> Self {
        Self {
            searchable: dropdown.config().searchable,
            open: dropdown.is_open(),
            query_empty: dropdown.query().is_empty(),
        }
    }

    fn typing(&self) -> bool {
        self.open && self.searchable
    }
}

/// Translate a crossterm key press.
///
/// While a searchable overlay is open, printable characters feed the query.
/// Space commits the focused option until the query has text, then it is
/// typed like any other character. Returns `None` for keys the dropdown does
/// not consume, so the host can handle them itself.
pub fn translate(key: KeyEvent, ctx: KeyContext) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let typing = ctx.typing();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let event = match key.code {
        KeyCode::Down => Key::ArrowDown.into(),
        KeyCode::Up => Key::ArrowUp.into(),
        KeyCode::Home => Key::Home.into(),
        KeyCode::End => Key::End.into(),
        KeyCode::Enter => Key::Enter.into(),
        KeyCode::Esc => Key::Escape.into(),
        KeyCode::Char('n') if ctrl => Key::ArrowDown.into(),
        KeyCode::Char('p') if ctrl => Key::ArrowUp.into(),
        KeyCode::Char('u') if ctrl && typing => InputEvent::QueryClear,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Backspace if typing => InputEvent::QueryBackspace,
        KeyCode::Char(' ') if typing && !ctx.query_empty => InputEvent::QueryInput(' '),
        KeyCode::Char(' ') => Key::Space.into(),
        KeyCode::Char(c) if typing => InputEvent::QueryInput(c),
        KeyCode::Char('j') if ctx.open => Key::ArrowDown.into(),
        KeyCode::Char('k') if ctx.open => Key::ArrowUp.into(),
        _ => return None,
    };
    Some(event)
}
