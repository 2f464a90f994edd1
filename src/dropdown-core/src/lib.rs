//! # Dropdown Core
//!
//! A headless selection-overlay control: pick one or more values from a
//! list, optionally narrowed by a live text query, with pointer or keyboard.
//!
//! The crate knows nothing about rendering. A presentation layer translates
//! raw input into [`InputEvent`]s, calls [`Dropdown::handle`], renders the
//! resulting state, and forwards the returned [`Notification`]s.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  Dropdown (controller)                       │
//! │   handle(event) ─▶ DropdownState::transition ─▶ notifications│
//! │   ListenerScope: attached exactly while Open                 │
//! └───────────────────────────┬──────────────────────────────────┘
//!                             │
//! ┌───────────────────────────▼──────────────────────────────────┐
//! │                 OverlayLifecycle (lifecycle)                 │
//! │  ┌───────────────┐  ┌──────────────┐  ┌───────────────────┐  │
//! │  │ SearchFilter  │─▶│ FocusCursor  │─▶│  SelectionState   │  │
//! │  │ (query,       │  │ (wrap, home, │  │  (single/multiple,│  │
//! │  │  visible)     │  │  end)        │  │   controlled)     │  │
//! │  └───────┬───────┘  └──────────────┘  └───────────────────┘  │
//! └──────────┼───────────────────────────────────────────────────┘
//!            │
//! ┌──────────▼───────────────────────────────────────────────────┐
//! │                 OptionCatalog (lookup only)                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Navigation lands on disabled options; committing one is silently
//! rejected.

pub mod catalog;
pub mod config;
pub mod cursor;
pub mod display;
pub mod dropdown;
pub mod error;
pub mod event;
pub mod filter;
pub mod lifecycle;
pub mod listener;
pub mod manifest;
pub mod option;
pub mod selection;

pub use catalog::OptionCatalog;
pub use config::DropdownConfig;
pub use cursor::FocusCursor;
pub use display::display_text;
pub use dropdown::Dropdown;
pub use error::{DropdownError, DropdownResult};
pub use event::{ChangePayload, InputEvent, Key, Notification};
pub use filter::{SearchFilter, filter_indices};
pub use lifecycle::{DropdownState, OverlayState, Transition, TransitionContext};
pub use listener::{ListenerScope, NoopListener, OutsideInteractionListener};
pub use manifest::DropdownManifest;
pub use option::SelectOption;
pub use selection::{SelectionMode, SelectionState, SelectionValue, ToggleOutcome, ValueSource};
