//! The dropdown controller.
//!
//! Owns the catalog, the configuration and the [`DropdownState`], feeds input
//! events through the pure transition function, and keeps the
//! outside-interaction listener attached exactly while the overlay is open.

use tracing::debug;

use crate::catalog::OptionCatalog;
use crate::config::DropdownConfig;
use crate::display::display_text;
use crate::error::DropdownResult;
use crate::event::{InputEvent, Notification};
use crate::lifecycle::{DropdownState, Transition, TransitionContext};
use crate::listener::{ListenerScope, OutsideInteractionListener};
use crate::option::SelectOption;
use crate::selection::{SelectionState, SelectionValue, ValueSource};

/// An interactive single- or multi-select control.
///
/// # Example
///
/// ```rust
/// use dropdown_core::{Dropdown, DropdownConfig, InputEvent, Key, OptionCatalog, SelectOption};
///
/// let catalog = OptionCatalog::new(vec![
///     SelectOption::new("a", "Option 1"),
///     SelectOption::new("b", "Option 2"),
/// ])
/// .unwrap();
/// let mut dropdown = Dropdown::uncontrolled(DropdownConfig::default(), catalog, None).unwrap();
///
/// dropdown.handle(InputEvent::Activate);
/// dropdown.handle(Key::ArrowDown.into());
/// dropdown.handle(Key::Enter.into());
///
/// assert_eq!(dropdown.selected_values(), vec!["b"]);
/// assert!(!dropdown.is_open());
/// ```
#[derive(Debug)]
pub struct Dropdown {
    config: DropdownConfig,
    catalog: OptionCatalog,
    state: DropdownState,
    listener: ListenerScope,
}

impl Dropdown {
    /// Build an instance that owns its value, seeded from `default_value`.
    pub fn uncontrolled(
        config: DropdownConfig,
        catalog: OptionCatalog,
        default_value: Option<SelectionValue>,
    ) -> DropdownResult<Self> {
        Self::build(config, catalog, ValueSource::Uncontrolled, default_value)
    }

    /// Build an instance whose value is fed by the caller.
    pub fn controlled(
        config: DropdownConfig,
        catalog: OptionCatalog,
        value: Option<SelectionValue>,
    ) -> DropdownResult<Self> {
        Self::build(config, catalog, ValueSource::Controlled, value)
    }

    fn build(
        config: DropdownConfig,
        catalog: OptionCatalog,
        source: ValueSource,
        value: Option<SelectionValue>,
    ) -> DropdownResult<Self> {
        let selection = SelectionState::new(config.mode(), source, value)?;
        let state = DropdownState::new(&catalog, config.searchable, selection);
        Ok(Self {
            config,
            catalog,
            state,
            listener: ListenerScope::default(),
        })
    }

    /// Install the host's outside-interaction hook.
    pub fn with_listener(mut self, listener: Box<dyn OutsideInteractionListener>) -> Self {
        self.listener.exit();
        self.listener = ListenerScope::new(listener);
        self.listener.sync(self.state.is_open());
        self
    }

    /// Apply one input event and return the notifications it produced.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Notification> {
        let ctx = TransitionContext {
            catalog: &self.catalog,
            disabled: self.config.disabled,
            loading: self.config.loading,
        };
        let Transition {
            state,
            notifications,
        } = std::mem::take(&mut self.state).transition(ctx, &event);
        self.state = state;
        self.listener.sync(self.state.is_open());
        notifications
    }

    /// Feed a new value into a controlled instance.
    ///
    /// Safe to call from inside a notification handler; applying the value
    /// already held changes nothing.
    pub fn set_value(&mut self, value: Option<SelectionValue>) -> DropdownResult<bool> {
        let changed = self.state.selection_mut().apply_external(value)?;
        if changed {
            debug!(values = ?self.state.selection().values(), "controlled value applied");
        }
        Ok(changed)
    }

    /// Replace the catalog wholesale.
    ///
    /// Selected values that no longer exist are kept until toggled away.
    pub fn set_options(&mut self, catalog: OptionCatalog) {
        self.state.replace_catalog(&self.catalog, &catalog);
        self.catalog = catalog;
        debug!(options = self.catalog.len(), "catalog replaced");
    }

    /// Update the disabled/loading flags.
    pub fn set_flags(&mut self, disabled: bool, loading: bool) {
        self.config.disabled = disabled;
        self.config.loading = loading;
    }

    /// Force the overlay closed and release the listener.
    ///
    /// Returns the close notification if the overlay was open.
    pub fn teardown(&mut self) -> Vec<Notification> {
        let mut notifications = Vec::new();
        if self.state.is_open() {
            let ctx = TransitionContext {
                catalog: &self.catalog,
                disabled: self.config.disabled,
                loading: self.config.loading,
            };
            self.state.close(ctx, &mut notifications);
        }
        self.listener.exit();
        notifications
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &DropdownState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Whether the outside-interaction listener is currently attached.
    pub fn is_listening(&self) -> bool {
        self.listener.is_attached()
    }

    pub fn query(&self) -> &str {
        self.state.query()
    }

    /// Cursor position in the visible list.
    pub fn cursor(&self) -> Option<usize> {
        self.state.cursor()
    }

    /// Options currently visible in the overlay.
    pub fn visible_options(&self) -> Vec<&SelectOption> {
        self.state.filter().visible_options(&self.catalog)
    }

    /// The option under the keyboard cursor.
    pub fn focused_option(&self) -> Option<&SelectOption> {
        self.state.focused_option(&self.catalog)
    }

    pub fn selection(&self) -> &SelectionState {
        self.state.selection()
    }

    /// Selected values in insertion order.
    pub fn selected_values(&self) -> Vec<&str> {
        self.state.selection().values()
    }

    /// Catalog records of the selected values.
    pub fn selected_options(&self) -> Vec<&SelectOption> {
        self.state.selection().selected_options(&self.catalog)
    }

    /// Text for the closed trigger.
    pub fn display_text(&self) -> String {
        display_text(self.state.selection(), &self.catalog, &self.config.placeholder)
    }
}
