//! Prelude module for multicombo.
//!
//! ```ignore
//! use multicombo::prelude::*;
//! ```

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{CheckableItem, MultiSelectModel, ToggleOutcome};

// ============================================================================
// Control
// ============================================================================

pub use crate::widget::{ComboEvent, CommitSource, DropdownController, Key, PopupState};

// ============================================================================
// Rendering and configuration
// ============================================================================

pub use crate::config::ComboConfig;
pub use crate::render::{CellVisual, CheckBoxRenderer, Color, ItemRenderer, ListPalette};

pub use multicombo_core::Signal;
