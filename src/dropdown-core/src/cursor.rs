//! Keyboard focus cursor over the visible options.
//!
//! The cursor is distinct from real input focus and from pointer hover. It is
//! `None` whenever the overlay is closed or nothing is visible; otherwise it
//! always indexes into the visible list. Movement wraps and lands on disabled
//! options too; committing one is rejected elsewhere.

/// Position of the keyboard cursor in the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusCursor {
    index: Option<usize>,
}

impl FocusCursor {
    /// A cursor pointing nowhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current index, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Point at the first option, or nowhere if the list is empty.
    pub fn reset(&mut self, len: usize) {
        self.index = if len > 0 { Some(0) } else { None };
    }

    /// Point nowhere.
    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Move to the next option, wrapping past the end.
    pub fn move_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            Some(idx) => (idx + 1) % len,
            None => 0,
        });
    }

    /// Move to the previous option, wrapping before the start.
    pub fn move_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            Some(idx) => (idx % len + len - 1) % len,
            None => len - 1,
        });
    }

    /// Move to the first option.
    pub fn move_first(&mut self, len: usize) {
        if len > 0 {
            self.index = Some(0);
        }
    }

    /// Move to the last option.
    pub fn move_last(&mut self, len: usize) {
        if len > 0 {
            self.index = Some(len - 1);
        }
    }

    /// Point at a specific visible position, ignored when out of range.
    pub fn set(&mut self, position: usize, len: usize) {
        if position < len {
            self.index = Some(position);
        }
    }

    /// Re-anchor after the visible list changed.
    ///
    /// `previous` is the catalog index the cursor pointed at before the change.
    /// The cursor follows that option if it is still visible, otherwise it
    /// falls back to the first visible option.
    pub fn reindex(&mut self, previous: Option<usize>, visible: &[usize]) {
        if visible.is_empty() {
            self.index = None;
            return;
        }
        self.index = previous
            .and_then(|prev| visible.iter().position(|&idx| idx == prev))
            .or(Some(0));
    }
}
