//! Interactive session: routes terminal events into the dropdown and
//! forwards its notifications.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use dropdown_core::{Dropdown, InputEvent, Notification, OutsideInteractionListener};
use dropdown_tui::prelude::*;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use tracing::{debug, info, warn};

use crate::appearance::Appearance;

/// Rows needed to show the trigger, a full overlay and the hints line.
pub fn viewport_height(max_visible: usize, searchable: bool, trigger_height: u16) -> u16 {
    let rows = u16::try_from(max_visible.max(1)).unwrap_or(u16::MAX);
    // Overlay border, search line, hints line
    let chrome = 2 + u16::from(searchable) + 1;
    trigger_height.saturating_add(rows).saturating_add(chrome)
}

/// Arms outside-click routing while the overlay is open.
///
/// Mouse capture stays on for the whole session so the trigger can be
/// clicked; clicks elsewhere only close the overlay while this is attached.
struct OutsideClickListener {
    armed: Rc<Cell<bool>>,
}

impl OutsideInteractionListener for OutsideClickListener {
    fn attach(&mut self) {
        self.armed.set(true);
        debug!("outside-click routing armed");
    }

    fn detach(&mut self) {
        self.armed.set(false);
        debug!("outside-click routing disarmed");
    }
}

pub struct App {
    dropdown: Dropdown,
    scroll: ScrollState,
    armed: Rc<Cell<bool>>,
    appearance: Appearance,
    /// Area the dropdown was last drawn in, for hit-testing
    area: Rect,
    exit: bool,
}

impl App {
    pub fn new(dropdown: Dropdown) -> Self {
        let armed = Rc::new(Cell::new(false));
        let listener = OutsideClickListener {
            armed: Rc::clone(&armed),
        };
        Self {
            dropdown: dropdown.with_listener(Box::new(listener)),
            scroll: ScrollState::default(),
            armed,
            appearance: Appearance::default(),
            area: Rect::default(),
            exit: false,
        }
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    fn widget(&self) -> DropdownWidget<'_> {
        DropdownWidget::new(&self.dropdown)
            .variant(self.appearance.variant)
            .size(self.appearance.size)
            .colors(self.appearance.colors)
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.exit = true;
            return;
        }
        if !self.dropdown.is_open() && key.code == KeyCode::Char('q') && !ctrl {
            self.exit = true;
            return;
        }

        if let Some(event) = translate(key, KeyContext::of(&self.dropdown)) {
            self.dispatch(event);
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);

        let event = {
            let widget = self.widget();
            if let Some(position) = widget.option_at(self.area, &self.scroll, column, row) {
                Some(InputEvent::ClickOption(position))
            } else if widget.trigger_area(self.area).contains(Position::new(column, row)) {
                Some(InputEvent::Activate)
            } else if widget.contains(self.area, column, row) {
                // Overlay chrome: border, search line, empty state
                None
            } else if self.armed.get() {
                Some(InputEvent::OutsideInteraction)
            } else {
                None
            }
        };
        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: InputEvent) {
        for notification in self.dropdown.handle(event) {
            match notification {
                Notification::Open => debug!("overlay opened"),
                Notification::Close => debug!("overlay closed"),
                Notification::Change(payload) => {
                    info!(values = ?payload.values(), "selection changed");
                    // This session hosts the controlled value, so accept every proposal
                    if self.dropdown.selection().is_controlled()
                        && let Err(err) = self.dropdown.set_value(Some(payload.to_value()))
                    {
                        warn!(error = %err, "failed to apply controlled value");
                    }
                }
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let [dropdown_area, hints_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        self.area = dropdown_area;

        let widget = DropdownWidget::new(&self.dropdown)
            .variant(self.appearance.variant)
            .size(self.appearance.size)
            .colors(self.appearance.colors)
            .focused(true);
        frame.render_stateful_widget(widget, dropdown_area, &mut self.scroll);

        let mut hints = dropdown_hints(&self.dropdown);
        if !self.dropdown.is_open() {
            hints.push(KeyHint::new("q", "Quit"));
        }
        frame.render_widget(
            KeyHintsBar::new(hints).colors(self.appearance.colors),
            hints_area,
        );
    }

    /// Close the overlay and hand back the selected values.
    pub fn finish(mut self) -> Vec<String> {
        for notification in self.dropdown.teardown() {
            debug!(?notification, "teardown");
        }
        self.dropdown
            .selected_values()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
