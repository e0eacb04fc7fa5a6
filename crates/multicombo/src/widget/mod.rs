//! The dropdown control: popup state machine, summary caption and input events.

mod controller;
mod events;
mod summary;

pub use controller::{DEFAULT_MAX_VISIBLE_ITEMS, DropdownController, PaintPass, PopupState};
pub use events::{ComboEvent, CommitSource, Key};
pub use summary::{EMPTY_PLACEHOLDER, SummaryLabelFormatter};
