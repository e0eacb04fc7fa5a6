//! Multicombo - a multi-select dropdown control.
//!
//! The control shows a list of checkable items in a popup. Clicking a row (or
//! pressing space on the highlighted row) toggles its checked flag, and the
//! popup stays open so several items can be checked in one visit. While
//! closed, the control shows a caption summarizing the checked items.
//!
//! An optional soft limit caps the number of checked items: attempts to
//! check more are ignored, un-checking always works.
//!
//! # Example
//!
//! ```
//! use multicombo::prelude::*;
//!
//! let model = MultiSelectModel::from(["Red", "Green", "Blue"]).with_limit(2);
//! let mut combo = DropdownController::new(model);
//!
//! combo.show_popup();
//! combo.commit(2, CommitSource::Mouse);
//! combo.commit(0, CommitSource::Mouse);
//! assert_eq!(combo.commit(1, CommitSource::Mouse), ToggleOutcome::LimitReached);
//!
//! assert_eq!(combo.summary_text(), "Blue, Red");
//! assert!(combo.is_popup_visible());
//! ```
//!
//! The crate draws nothing itself. A host toolkit forwards input as
//! [`ComboEvent`]s and paints the visuals an [`ItemRenderer`] produces.

pub mod config;
mod error;
pub mod model;
pub mod prelude;
pub mod render;
pub mod widget;

pub use multicombo_core::{ConnectionId, Signal, SignalError, logging};

pub use config::ComboConfig;
pub use error::{Error, Result};
pub use model::{CheckableItem, MultiSelectModel, SelectionLedger, ToggleOutcome};
pub use render::{CellVisual, CheckBoxRenderer, Color, ItemRenderer, ListPalette};
pub use widget::{
    ComboEvent, CommitSource, DropdownController, Key, PaintPass, PopupState,
    SummaryLabelFormatter,
};
