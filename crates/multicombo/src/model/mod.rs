//! Selection state for checkable items.
//!
//! - [`CheckableItem`]: a shared handle with text, an optional payload and a
//!   checked flag
//! - [`SelectionLedger`]: limit, cached selected count and separator for one
//!   control
//! - [`MultiSelectModel`]: the ordered item list and its soft-limit toggle

mod item;
mod ledger;
mod selection;

pub use item::CheckableItem;
pub use ledger::{DEFAULT_SEPARATOR, SelectionLedger};
pub use selection::{MultiSelectModel, ToggleOutcome};
