//! Render boundary of the control.
//!
//! Colors, the row palette and the [`ItemRenderer`] contract. Pixel drawing
//! belongs to the host toolkit; [`CheckBoxRenderer`] only describes what a
//! row should look like.

mod cell;
mod color;
mod palette;

pub use cell::{CellVisual, CheckBoxRenderer, CheckBoxVisual, ItemRenderer, LabelVisual};
pub use color::Color;
pub use palette::ListPalette;
