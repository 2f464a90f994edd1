//! Open/closed overlay lifecycle and the pure transition function.
//!
//! [`DropdownState::transition`] takes the current state and one input event
//! and returns the next state plus the notifications to emit. It never
//! touches the outside world; attaching and detaching the outside-interaction
//! listener is left to [`Dropdown`](crate::Dropdown), which syncs it with the
//! overlay state after each transition.

use tracing::{debug, trace, warn};

use crate::catalog::OptionCatalog;
use crate::cursor::FocusCursor;
use crate::event::{InputEvent, Key, Notification};
use crate::filter::SearchFilter;
use crate::option::SelectOption;
use crate::selection::{SelectionState, ToggleOutcome};

/// Whether the overlay is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Read-only inputs a transition depends on.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    pub catalog: &'a OptionCatalog,
    pub disabled: bool,
    pub loading: bool,
}

impl TransitionContext<'_> {
    fn suppressed(&self) -> bool {
        self.disabled || self.loading
    }
}

/// Result of applying one event.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: DropdownState,
    pub notifications: Vec<Notification>,
}

/// Complete state of one dropdown instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    overlay: OverlayState,
    filter: SearchFilter,
    cursor: FocusCursor,
    selection: SelectionState,
}

impl DropdownState {
    /// A closed dropdown with an empty query.
    pub fn new(catalog: &OptionCatalog, searchable: bool, selection: SelectionState) -> Self {
        Self {
            overlay: OverlayState::Closed,
            filter: SearchFilter::new(catalog, searchable),
            cursor: FocusCursor::new(),
            selection,
        }
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    pub fn is_open(&self) -> bool {
        self.overlay == OverlayState::Open
    }

    pub fn query(&self) -> &str {
        self.filter.query()
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    /// Cursor position in the visible list.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub(crate) fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    /// The option under the cursor.
    pub fn focused_option<'a>(&self, catalog: &'a OptionCatalog) -> Option<&'a SelectOption> {
        self.cursor
            .index()
            .and_then(|pos| self.filter.catalog_index(pos))
            .and_then(|idx| catalog.get(idx))
    }

    /// Apply one event.
    pub fn transition(mut self, ctx: TransitionContext<'_>, event: &InputEvent) -> Transition {
        let mut notifications = Vec::new();
        self.apply(ctx, event, &mut notifications);
        Transition {
            state: self,
            notifications,
        }
    }

    fn apply(&mut self, ctx: TransitionContext<'_>, event: &InputEvent, out: &mut Vec<Notification>) {
        // Closing is always allowed so an open overlay never outlives its flags
        if matches!(
            event,
            InputEvent::OutsideInteraction | InputEvent::Key(Key::Escape)
        ) {
            if self.is_open() {
                self.close(ctx, out);
            }
            return;
        }

        if ctx.suppressed() {
            trace!(?event, "dropdown disabled or loading, ignoring input");
            return;
        }

        match (self.overlay, event) {
            (
                OverlayState::Closed,
                InputEvent::Activate
                | InputEvent::Key(Key::ArrowDown | Key::Enter | Key::Space),
            ) => self.open(ctx, out),
            (OverlayState::Closed, _) => {}
            (OverlayState::Open, InputEvent::Activate) => self.close(ctx, out),
            (OverlayState::Open, InputEvent::Key(key)) => self.handle_open_key(ctx, *key, out),
            (OverlayState::Open, InputEvent::ClickOption(position)) => {
                self.cursor.set(*position, self.filter.visible_len());
                self.commit_at(ctx, *position, out);
            }
            (OverlayState::Open, InputEvent::QueryInput(c)) => {
                self.edit_query(ctx, |filter, catalog| filter.push_char(catalog, *c));
            }
            (OverlayState::Open, InputEvent::QueryBackspace) => {
                self.edit_query(ctx, SearchFilter::pop_grapheme);
            }
            (OverlayState::Open, InputEvent::QueryClear) => {
                self.edit_query(ctx, SearchFilter::clear);
            }
            (OverlayState::Open, InputEvent::SetQuery(query)) => {
                self.edit_query(ctx, |filter, catalog| filter.set_query(catalog, query.clone()));
            }
            (OverlayState::Open, InputEvent::OutsideInteraction) => {}
        }
    }

    fn handle_open_key(&mut self, ctx: TransitionContext<'_>, key: Key, out: &mut Vec<Notification>) {
        let len = self.filter.visible_len();
        match key {
            Key::ArrowDown => self.cursor.move_next(len),
            Key::ArrowUp => self.cursor.move_previous(len),
            Key::Home => self.cursor.move_first(len),
            Key::End => self.cursor.move_last(len),
            Key::Enter | Key::Space => {
                if let Some(position) = self.cursor.index() {
                    self.commit_at(ctx, position, out);
                }
            }
            Key::Escape | Key::Other => {}
        }
        trace!(cursor = ?self.cursor.index(), ?key, "cursor moved");
    }

    fn open(&mut self, ctx: TransitionContext<'_>, out: &mut Vec<Notification>) {
        self.filter.clear(ctx.catalog);
        self.cursor.reset(self.filter.visible_len());
        self.overlay = OverlayState::Open;
        debug!(visible = self.filter.visible_len(), "dropdown opened");
        out.push(Notification::Open);
    }

    pub(crate) fn close(&mut self, ctx: TransitionContext<'_>, out: &mut Vec<Notification>) {
        self.filter.clear(ctx.catalog);
        self.cursor.clear();
        self.overlay = OverlayState::Closed;
        debug!("dropdown closed");
        out.push(Notification::Close);
    }

    fn commit_at(&mut self, ctx: TransitionContext<'_>, position: usize, out: &mut Vec<Notification>) {
        let Some(option) = self
            .filter
            .catalog_index(position)
            .and_then(|idx| ctx.catalog.get(idx))
        else {
            return;
        };

        match self.selection.toggle(option, ctx.catalog) {
            ToggleOutcome::Rejected => {
                warn!(value = %option.value, "commit rejected for disabled option");
            }
            ToggleOutcome::Changed { payload, close } => {
                debug!(value = %option.value, controlled = self.selection.is_controlled(), "option committed");
                out.push(Notification::Change(payload));
                if close {
                    self.close(ctx, out);
                }
            }
        }
    }

    fn edit_query<F>(&mut self, ctx: TransitionContext<'_>, edit: F)
    where
        F: FnOnce(&mut SearchFilter, &OptionCatalog),
    {
        if !self.filter.is_searchable() {
            return;
        }
        let previous = self
            .cursor
            .index()
            .and_then(|pos| self.filter.catalog_index(pos));
        edit(&mut self.filter, ctx.catalog);
        self.cursor.reindex(previous, self.filter.visible_indices());
        trace!(query = self.filter.query(), visible = self.filter.visible_len(), "query changed");
    }

    /// Swap in a replacement catalog, keeping the cursor on the same value.
    pub(crate) fn replace_catalog(&mut self, old: &OptionCatalog, new: &OptionCatalog) {
        let focused_value = self.focused_option(old).map(|option| option.value.clone());
        self.filter.refresh(new);
        if self.is_open() {
            let previous = focused_value.and_then(|value| new.position_of(&value));
            self.cursor.reindex(previous, self.filter.visible_indices());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{SelectionMode, ValueSource};

    fn catalog() -> OptionCatalog {
        OptionCatalog::new(vec![
            SelectOption::new("a", "Option 1"),
            SelectOption::new("b", "Option 2"),
            SelectOption::new("c", "Option 3"),
        ])
        .expect("unique values")
    }

    fn state(catalog: &OptionCatalog, mode: SelectionMode, searchable: bool) -> DropdownState {
        let selection = SelectionState::new(mode, ValueSource::Uncontrolled, None).unwrap();
        DropdownState::new(catalog, searchable, selection)
    }

    fn ctx(catalog: &OptionCatalog) -> TransitionContext<'_> {
        TransitionContext {
            catalog,
            disabled: false,
            loading: false,
        }
    }

    fn step(state: DropdownState, ctx: TransitionContext<'_>, event: InputEvent) -> (DropdownState, Vec<Notification>) {
        let Transition { state, notifications } = state.transition(ctx, &event);
        (state, notifications)
    }

    #[test]
    fn test_activation_opens_with_cursor_at_zero() {
        let catalog = catalog();
        for event in [
            InputEvent::Activate,
            Key::Enter.into(),
            Key::Space.into(),
            Key::ArrowDown.into(),
        ] {
            let (next, notes) = step(state(&catalog, SelectionMode::Single, false), ctx(&catalog), event);
            assert!(next.is_open());
            assert_eq!(next.cursor(), Some(0));
            assert_eq!(notes, vec![Notification::Open]);
        }
    }

    #[test]
    fn test_other_keys_while_closed_are_noops() {
        let catalog = catalog();
        let initial = state(&catalog, SelectionMode::Single, true);
        for event in [
            Key::ArrowUp.into(),
            Key::Home.into(),
            Key::Escape.into(),
            Key::Other.into(),
            InputEvent::QueryInput('x'),
            InputEvent::ClickOption(0),
        ] {
            let (next, notes) = step(initial.clone(), ctx(&catalog), event);
            assert_eq!(next, initial);
            assert!(notes.is_empty());
        }
    }

    #[test]
    fn test_open_on_empty_catalog_has_no_cursor() {
        let catalog = OptionCatalog::empty();
        let (next, _) = step(state(&catalog, SelectionMode::Single, false), ctx(&catalog), InputEvent::Activate);
        assert!(next.is_open());
        assert_eq!(next.cursor(), None);

        let (next, notes) = step(next, ctx(&catalog), Key::Enter.into());
        assert!(next.is_open());
        assert!(notes.is_empty());
    }

    #[test]
    fn test_escape_and_outside_close() {
        let catalog = catalog();
        for event in [Key::Escape.into(), InputEvent::OutsideInteraction] {
            let (open, _) = step(state(&catalog, SelectionMode::Single, true), ctx(&catalog), InputEvent::Activate);
            let (open, _) = step(open, ctx(&catalog), InputEvent::QueryInput('1'));
            let (closed, notes) = step(open, ctx(&catalog), event);
            assert!(!closed.is_open());
            assert_eq!(closed.query(), "");
            assert_eq!(closed.cursor(), None);
            assert_eq!(notes, vec![Notification::Close]);
        }
    }

    #[test]
    fn test_trigger_click_while_open_closes() {
        let catalog = catalog();
        let (open, _) = step(state(&catalog, SelectionMode::Single, false), ctx(&catalog), InputEvent::Activate);
        let (closed, notes) = step(open, ctx(&catalog), InputEvent::Activate);
        assert!(!closed.is_open());
        assert_eq!(notes, vec![Notification::Close]);
    }

    #[test]
    fn test_suppressed_flags_block_activation() {
        let catalog = catalog();
        let blocked = [
            TransitionContext { catalog: &catalog, disabled: true, loading: false },
            TransitionContext { catalog: &catalog, disabled: false, loading: true },
        ];
        for ctx in blocked {
            let (next, notes) = step(state(&catalog, SelectionMode::Single, false), ctx, InputEvent::Activate);
            assert!(!next.is_open());
            assert!(notes.is_empty());
        }
    }

    #[test]
    fn test_escape_still_closes_when_disabled() {
        let catalog = catalog();
        let (open, _) = step(state(&catalog, SelectionMode::Single, false), ctx(&catalog), InputEvent::Activate);
        let disabled = TransitionContext { catalog: &catalog, disabled: true, loading: false };

        let (still_open, notes) = step(open, disabled, Key::ArrowDown.into());
        assert_eq!(still_open.cursor(), Some(0));
        assert!(notes.is_empty());

        let (closed, notes) = step(still_open, disabled, Key::Escape.into());
        assert!(!closed.is_open());
        assert_eq!(notes, vec![Notification::Close]);
    }

    #[test]
    fn test_query_change_reindexes_cursor() {
        let catalog = catalog();
        let (open, _) = step(state(&catalog, SelectionMode::Single, true), ctx(&catalog), InputEvent::Activate);
        let (open, _) = step(open, ctx(&catalog), Key::End.into());
        assert_eq!(open.cursor(), Some(2));

        // "Option 3" still visible, cursor follows it
        let (open, _) = step(open, ctx(&catalog), InputEvent::SetQuery("3".into()));
        assert_eq!(open.cursor(), Some(0));
        assert_eq!(open.focused_option(&catalog).map(|o| o.value.as_str()), Some("c"));

        let (open, _) = step(open, ctx(&catalog), InputEvent::SetQuery("zzz".into()));
        assert_eq!(open.cursor(), None);

        let (open, _) = step(open, ctx(&catalog), InputEvent::QueryClear);
        assert_eq!(open.cursor(), Some(0));
    }

    #[test]
    fn test_query_ignored_when_not_searchable() {
        let catalog = catalog();
        let (open, _) = step(state(&catalog, SelectionMode::Single, false), ctx(&catalog), InputEvent::Activate);
        let (open, _) = step(open, ctx(&catalog), InputEvent::QueryInput('2'));
        assert_eq!(open.query(), "");
        assert_eq!(open.filter().visible_len(), 3);
    }

    #[test]
    fn test_click_commits_in_multiple_mode_and_stays_open() {
        let catalog = catalog();
        let (open, _) = step(state(&catalog, SelectionMode::Multiple, false), ctx(&catalog), InputEvent::Activate);
        let (open, notes) = step(open, ctx(&catalog), InputEvent::ClickOption(2));
        assert!(open.is_open());
        assert_eq!(open.cursor(), Some(2));
        assert_eq!(open.selection().values(), vec!["c"]);
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_click_out_of_range_is_noop() {
        let catalog = catalog();
        let (open, _) = step(state(&catalog, SelectionMode::Single, false), ctx(&catalog), InputEvent::Activate);
        let (open, notes) = step(open, ctx(&catalog), InputEvent::ClickOption(7));
        assert!(open.is_open());
        assert!(notes.is_empty());
    }
}
