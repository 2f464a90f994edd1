//! # Dropdown TUI
//!
//! Terminal presentation for [`dropdown_core`]: crossterm key translation,
//! a ratatui widget for the trigger and overlay, and the variant/size theme
//! table.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dropdown_tui::prelude::*;
//!
//! let mut scroll = ScrollState::default();
//!
//! // Input
//! if let Some(event) = translate(key, KeyContext::of(&dropdown)) {
//!     for notification in dropdown.handle(event) {
//!         /* forward to the host */
//!     }
//! }
//!
//! // Render
//! frame.render_stateful_widget(DropdownWidget::new(&dropdown).focused(true), area, &mut scroll);
//! ```

pub mod key_hints;
pub mod keymap;
pub mod scroll;
pub mod theme;
pub mod widget;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::key_hints::{KeyHint, KeyHintsBar, dropdown_hints};
    pub use crate::keymap::{KeyContext, translate};
    pub use crate::scroll::ScrollState;
    pub use crate::theme::{ColorScheme, DropdownSize, DropdownVariant, VariantStyle};
    pub use crate::widget::DropdownWidget;
}
