//! Key hints line shown under the dropdown.
//!
//! `dropdown_hints` picks the hints that apply to the control's current
//! state; `KeyHintsBar` lays them out and drops whatever does not fit.

use dropdown_core::Dropdown;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::theme::ColorScheme;

/// A single key hint (key + description).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub description: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }

    fn width(&self) -> usize {
        self.key.width() + 1 + self.description.width()
    }
}

impl<'a, 'b> From<(&'a str, &'b str)> for KeyHint {
    fn from((key, desc): (&'a str, &'b str)) -> Self {
        Self::new(key, desc)
    }
}

/// Hints for the control's current state.
///
/// Only Escape still works while disabled or loading, so an open overlay
/// keeps its close hint and nothing else.
pub fn dropdown_hints(dropdown: &Dropdown) -> Vec<KeyHint> {
    let config = dropdown.config();
    if config.disabled || config.loading {
        return if dropdown.is_open() {
            vec![KeyHint::new("Esc", "Close")]
        } else {
            Vec::new()
        };
    }
    if !dropdown.is_open() {
        return vec![KeyHint::new("Enter", "Open")];
    }

    let mut hints = vec![KeyHint::new("↑↓", "Navigate"), KeyHint::new("Home/End", "Jump")];
    if config.multiple {
        hints.push(KeyHint::new("Space", "Toggle"));
    } else {
        hints.push(KeyHint::new("Enter", "Select"));
    }
    if config.searchable {
        hints.push(KeyHint::new("^U", "Clear"));
    }
    hints.push(KeyHint::new("Esc", "Close"));
    hints
}

/// A horizontal bar of key hints: `↑↓ Navigate · Enter Select · Esc Close`.
pub struct KeyHintsBar {
    hints: Vec<KeyHint>,
    separator: String,
    colors: ColorScheme,
}

impl KeyHintsBar {
    pub fn new(hints: Vec<KeyHint>) -> Self {
        Self {
            hints,
            separator: " · ".to_string(),
            colors: ColorScheme::default(),
        }
    }

    pub fn colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    /// Total width needed for all hints.
    pub fn total_width(&self) -> usize {
        let sep = self.separator.width();
        self.hints
            .iter()
            .enumerate()
            .map(|(i, hint)| if i > 0 { sep + hint.width() } else { hint.width() })
            .sum()
    }

    fn hints_that_fit(&self, max_width: usize) -> Vec<&KeyHint> {
        let sep = self.separator.width();
        let mut result = Vec::new();
        let mut current_width = 0;

        for hint in &self.hints {
            let needed = if result.is_empty() {
                hint.width()
            } else {
                sep + hint.width()
            };
            if current_width + needed > max_width {
                break;
            }
            result.push(hint);
            current_width += needed;
        }
        result
    }
}

impl Widget for KeyHintsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 2 {
            return;
        }

        let key_style = Style::default().fg(self.colors.accent);
        let desc_style = Style::default().fg(self.colors.text_dim);
        let sep_style = Style::default().fg(self.colors.text_muted);

        let hints = self.hints_that_fit(area.width.saturating_sub(1) as usize);
        let mut x = area.x + 1;
        let right = area.right();

        for (i, hint) in hints.iter().enumerate() {
            if i > 0 {
                x = buf.set_stringn(x, area.y, &self.separator, (right - x) as usize, sep_style).0;
            }
            x = buf.set_stringn(x, area.y, &hint.key, (right - x) as usize, key_style).0;
            x = buf.set_stringn(x, area.y, " ", (right - x) as usize, desc_style).0;
            x = buf.set_stringn(x, area.y, &hint.description, (right - x) as usize, desc_style).0;
        }
    }
}
