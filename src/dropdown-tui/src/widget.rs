//! Trigger and overlay rendering.
//!
//! The widget draws the trigger row in the given area and, while the overlay
//! is open, the option list directly beneath it. The same geometry helpers
//! drive hit-testing so clicks land on what was drawn.

use dropdown_core::{Dropdown, SelectOption, SelectionMode};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, StatefulWidget, Widget};
use unicode_width::UnicodeWidthStr;

use crate::scroll::{ScrollState, render_scrollbar};
use crate::theme::{
    BorderKind, ColorScheme, DropdownSize, DropdownVariant, ROUNDED_BORDER, SINGLE_BORDER,
    VariantStyle,
};

const LOADING_TEXT: &str = "Loading...";
const EMPTY_TEXT: &str = "No options";
const SEARCH_PLACEHOLDER: &str = "Type to search";

/// Renders a [`Dropdown`] into a ratatui buffer.
///
/// The scroll state is kept by the caller between frames and follows the
/// keyboard cursor on every render.
pub struct DropdownWidget<'a> {
    dropdown: &'a Dropdown,
    variant: DropdownVariant,
    size: DropdownSize,
    colors: ColorScheme,
    focused: bool,
}

impl<'a> DropdownWidget<'a> {
    pub fn new(dropdown: &'a Dropdown) -> Self {
        Self {
            dropdown,
            variant: DropdownVariant::default(),
            size: DropdownSize::default(),
            colors: ColorScheme::default(),
            focused: false,
        }
    }

    pub fn variant(mut self, variant: DropdownVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: DropdownSize) -> Self {
        self.size = size;
        self
    }

    pub fn colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    /// Draw the trigger with focus styling.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn style(&self) -> VariantStyle {
        VariantStyle::resolve(self.variant, self.size, &self.colors)
    }

    fn search_rows(&self) -> u16 {
        u16::from(self.dropdown.config().searchable)
    }

    /// Area occupied by the trigger.
    pub fn trigger_area(&self, area: Rect) -> Rect {
        Rect {
            height: self.style().trigger_height.min(area.height),
            ..area
        }
    }

    /// Area occupied by the overlay, or `None` while closed.
    pub fn overlay_area(&self, area: Rect) -> Option<Rect> {
        if !self.dropdown.is_open() {
            return None;
        }
        let trigger = self.trigger_area(area);
        let y = trigger.bottom();
        let available = area.bottom().saturating_sub(y);

        let max_visible = self.dropdown.config().max_visible.max(1);
        let rows = self.dropdown.visible_options().len().clamp(1, max_visible);
        let height = u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_add(self.search_rows() + 2)
            .min(available);
        if height < 3 {
            return None;
        }
        Some(Rect::new(area.x, y, area.width, height))
    }

    /// Area holding the option rows, inside the overlay border.
    pub fn list_area(&self, area: Rect) -> Option<Rect> {
        let overlay = self.overlay_area(area)?;
        let inner = Block::default().borders(Borders::ALL).inner(overlay);
        let search = self.search_rows().min(inner.height);
        Some(Rect {
            y: inner.y + search,
            height: inner.height - search,
            ..inner
        })
    }

    /// Visible-option position under a terminal cell, if any.
    pub fn option_at(&self, area: Rect, scroll: &ScrollState, column: u16, row: u16) -> Option<usize> {
        let list = self.list_area(area)?;
        if column < list.x || column >= list.right() || row < list.y || row >= list.bottom() {
            return None;
        }
        let position = scroll.offset() + usize::from(row - list.y);
        (position < self.dropdown.visible_options().len()).then_some(position)
    }

    /// Whether a terminal cell is on the trigger or the open overlay.
    pub fn contains(&self, area: Rect, column: u16, row: u16) -> bool {
        let hit = |rect: Rect| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        };
        hit(self.trigger_area(area)) || self.overlay_area(area).is_some_and(hit)
    }

    fn render_trigger(&self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        let config = self.dropdown.config();
        let inactive = config.disabled || config.loading;

        let mut base = Style::default();
        if let Some(bg) = style.background {
            base = base.bg(bg);
        }
        buf.set_style(area, base);

        let inner = match style.border {
            Some(kind) => {
                let border_color = if inactive {
                    self.colors.text_muted
                } else if self.focused || self.dropdown.is_open() {
                    self.colors.accent
                } else {
                    self.colors.border
                };
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_set(match kind {
                        BorderKind::Rounded => ROUNDED_BORDER,
                        BorderKind::Single => SINGLE_BORDER,
                    })
                    .border_style(Style::default().fg(border_color));
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (text, text_style) = if config.loading {
            (LOADING_TEXT.to_string(), base.fg(self.colors.warning))
        } else if self.dropdown.selection().is_empty() || config.disabled {
            (self.dropdown.display_text(), base.fg(self.colors.text_muted))
        } else {
            (self.dropdown.display_text(), base.fg(self.colors.text))
        };

        let caret = if self.dropdown.is_open() { "▴" } else { "▾" };
        let left = inner.x + style.padding_x;
        let right = inner.right().saturating_sub(style.padding_x);
        if right <= left {
            return;
        }
        let caret_x = right - 1;
        let text_width = caret_x.saturating_sub(left).saturating_sub(1);
        buf.set_stringn(left, inner.y, &text, text_width as usize, text_style);
        buf.set_string(caret_x, inner.y, caret, base.fg(self.colors.text_dim));
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let bg = Style::default().bg(self.colors.surface);
        buf.set_string(area.x, area.y, "/ ", bg.fg(self.colors.accent));

        let x = area.x + 2;
        let width = area.right().saturating_sub(x) as usize;
        let query = self.dropdown.query();
        if query.is_empty() {
            buf.set_stringn(x, area.y, SEARCH_PLACEHOLDER, width, bg.fg(self.colors.text_muted));
        } else {
            let (end, _) = buf.set_stringn(x, area.y, query, width, bg.fg(self.colors.text));
            if end < area.right() {
                buf.set_string(end, area.y, "▏", bg.fg(self.colors.accent));
            }
        }
    }

    fn render_option(&self, option: &SelectOption, is_cursor: bool, area: Rect, buf: &mut Buffer) {
        let bg = if is_cursor {
            self.colors.surface_alt
        } else {
            self.colors.surface
        };
        let base = Style::default().bg(bg);
        buf.set_style(area, base);

        let selected = self.dropdown.selection().contains(&option.value);
        let right = area.right();
        let mut x = area.x;

        let marker = if is_cursor { "> " } else { "  " };
        x = buf.set_stringn(x, area.y, marker, (right - x) as usize, base.fg(self.colors.accent)).0;

        if self.dropdown.selection().mode() == SelectionMode::Multiple {
            let check = if selected { "[x] " } else { "[ ] " };
            let check_fg = if selected {
                self.colors.accent
            } else {
                self.colors.text_dim
            };
            x = buf.set_stringn(x, area.y, check, (right - x) as usize, base.fg(check_fg)).0;
        }

        let mut label_style = if option.disabled {
            base.fg(self.colors.text_muted)
        } else {
            base.fg(self.colors.text)
        };
        if selected {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        // Single mode keeps the last column for the check mark
        let reserve = u16::from(self.dropdown.selection().mode() == SelectionMode::Single);
        let label_room = right.saturating_sub(reserve).saturating_sub(x) as usize;
        x = buf.set_stringn(x, area.y, &option.label, label_room, label_style).0;

        if let Some(description) = &option.description {
            let room = right.saturating_sub(reserve).saturating_sub(x) as usize;
            if room > 2 + description.width().min(4) {
                buf.set_stringn(
                    x + 2,
                    area.y,
                    description,
                    room - 2,
                    base.fg(self.colors.text_dim),
                );
            }
        }

        if selected && reserve == 1 && area.width > 0 {
            buf.set_string(right - 1, area.y, "✓", base.fg(self.colors.accent));
        }
    }

    fn render_overlay(&self, area: Rect, buf: &mut Buffer, scroll: &mut ScrollState) {
        let (Some(overlay), Some(list)) = (self.overlay_area(area), self.list_area(area)) else {
            scroll.reset();
            return;
        };

        Clear.render(overlay, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDER)
            .border_style(Style::default().fg(self.colors.accent))
            .style(Style::default().bg(self.colors.surface));
        let inner = block.inner(overlay);
        block.render(overlay, buf);

        if self.search_rows() > 0 && inner.height > 0 {
            self.render_search(Rect { height: 1, ..inner }, buf);
        }

        let options = self.dropdown.visible_options();
        scroll.resize(options.len(), usize::from(list.height));
        scroll.follow(self.dropdown.cursor());

        if options.is_empty() {
            if list.height > 0 {
                let style = Style::default()
                    .fg(self.colors.text_muted)
                    .bg(self.colors.surface)
                    .add_modifier(Modifier::ITALIC);
                buf.set_stringn(list.x + 2, list.y, EMPTY_TEXT, list.width.saturating_sub(2) as usize, style);
            }
            return;
        }

        let row_width = if scroll.needs_scrollbar() {
            list.width.saturating_sub(1)
        } else {
            list.width
        };
        for (row, position) in scroll.visible_range().enumerate() {
            let y = list.y + row as u16;
            if y >= list.bottom() {
                break;
            }
            if let Some(option) = options.get(position) {
                let is_cursor = self.dropdown.cursor() == Some(position);
                self.render_option(option, is_cursor, Rect::new(list.x, y, row_width, 1), buf);
            }
        }

        if scroll.needs_scrollbar() {
            let bar = Rect::new(list.right().saturating_sub(1), list.y, 1, list.height);
            render_scrollbar(bar, buf, scroll, &self.colors);
        }
    }
}

impl StatefulWidget for DropdownWidget<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width < 4 || area.height == 0 {
            return;
        }
        self.render_trigger(self.trigger_area(area), buf);
        self.render_overlay(area, buf, state);
    }
}
