//! Scroll window over the visible options.
//!
//! The overlay shows at most `max_visible` rows; the window follows the
//! keyboard cursor so the focused option is always on screen.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget};

use crate::theme::ColorScheme;

/// State for the overlay's scroll window.
///
/// # Example
///
/// ```rust
/// use dropdown_tui::scroll::ScrollState;
///
/// let mut scroll = ScrollState::new(100, 20); // 100 options, 20 rows
///
/// scroll.ensure_visible(90);
/// assert!(scroll.offset() >= 71); // Option 90 should be visible
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Total number of options
    total: usize,
    /// Number of rows shown
    visible: usize,
    /// Current scroll offset
    offset: usize,
}

impl ScrollState {
    /// Create a new scroll state.
    pub fn new(total: usize, visible: usize) -> Self {
        Self {
            total,
            visible,
            offset: 0,
        }
    }

    /// Get the current scroll offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the total number of options.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get the number of rows shown.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Resize the window after the option list or the area changed.
    pub fn resize(&mut self, total: usize, visible: usize) {
        self.total = total;
        self.visible = visible;
        self.clamp_offset();
    }

    /// Jump back to the top.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Ensure a specific option index is visible.
    pub fn ensure_visible(&mut self, index: usize) {
        if self.visible == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.visible {
            self.offset = index.saturating_sub(self.visible.saturating_sub(1));
        }
        self.clamp_offset();
    }

    /// Follow the cursor, or reset to the top when there is none.
    pub fn follow(&mut self, cursor: Option<usize>) {
        match cursor {
            Some(index) => self.ensure_visible(index),
            None => self.reset(),
        }
    }

    /// Check if an option at the given index is currently shown.
    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.offset && index < self.offset + self.visible
    }

    /// Check if a scrollbar is needed (total > visible).
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.visible
    }

    /// Get the range of currently shown options.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.offset;
        let end = (self.offset + self.visible).min(self.total);
        start..end
    }

    fn clamp_offset(&mut self) {
        if self.total <= self.visible {
            self.offset = 0;
        } else {
            self.offset = self.offset.min(self.total - self.visible);
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0, 8)
    }
}

/// Render a vertical scrollbar for the given scroll state.
pub fn render_scrollbar(area: Rect, buf: &mut Buffer, scroll: &ScrollState, colors: &ColorScheme) {
    if !scroll.needs_scrollbar() || area.width == 0 || area.height == 0 {
        return;
    }

    let scrollable_range = scroll.total.saturating_sub(scroll.visible);
    let mut scrollbar_state = ScrollbarState::new(scrollable_range).position(scroll.offset);

    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .track_symbol(Some("│"))
        .track_style(Style::default().fg(colors.surface))
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(colors.text_muted))
        .render(area, buf, &mut scrollbar_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_state_basic() {
        let scroll = ScrollState::new(100, 20);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.total(), 100);
        assert_eq!(scroll.visible(), 20);
        assert!(scroll.needs_scrollbar());
    }

    #[test]
    fn test_scroll_state_no_scrollbar_needed() {
        let scroll = ScrollState::new(3, 8);
        assert!(!scroll.needs_scrollbar());
    }

    #[test]
    fn test_ensure_visible() {
        let mut scroll = ScrollState::new(100, 20);

        // Option below viewport
        scroll.ensure_visible(50);
        assert!(scroll.is_visible(50));
        assert_eq!(scroll.offset(), 31);

        // Option above viewport
        scroll.ensure_visible(10);
        assert!(scroll.is_visible(10));
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_follow_wrap_to_top() {
        let mut scroll = ScrollState::new(30, 5);
        scroll.follow(Some(29));
        assert_eq!(scroll.visible_range(), 25..30);

        scroll.follow(Some(0));
        assert_eq!(scroll.visible_range(), 0..5);
    }

    #[test]
    fn test_follow_none_resets() {
        let mut scroll = ScrollState::new(30, 5);
        scroll.follow(Some(20));
        scroll.follow(None);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_resize_clamps_offset() {
        let mut scroll = ScrollState::new(30, 5);
        scroll.follow(Some(29));

        // Query narrowed the list to two options
        scroll.resize(2, 5);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.visible_range(), 0..2);
    }
}
