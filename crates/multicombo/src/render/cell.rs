//! The item renderer contract and the default checkbox renderer.
//!
//! The control never draws pixels itself. On every paint pass it asks an
//! [`ItemRenderer`] for one visual per visible popup row plus one for the
//! summary shown in the closed control, and hands those visuals to whatever
//! toolkit hosts it.

use crate::model::CheckableItem;

use super::color::Color;
use super::palette::ListPalette;

/// Produces visuals for popup rows and the closed-state summary.
///
/// Implement this to plug the control into a drawing toolkit. The visual
/// returned for a row must show the item's checked state.
pub trait ItemRenderer {
    /// Whatever the host toolkit draws.
    type Visual;

    /// Render one popup row.
    ///
    /// # Arguments
    /// * `item` - The item in this row
    /// * `row` - The row index in the model
    /// * `highlighted` - Whether this row is under the mouse or keyboard cursor
    /// * `palette` - Colors of the surrounding list
    fn render_item(
        &mut self,
        item: &CheckableItem,
        row: usize,
        highlighted: bool,
        palette: &ListPalette,
    ) -> Self::Visual;

    /// Render the summary shown while the popup is closed.
    fn render_summary(&mut self, caption: &str, palette: &ListPalette) -> Self::Visual;
}

/// A checkbox row as the default renderer describes it.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckBoxVisual {
    /// Row text.
    pub text: String,
    /// Checked state shown by the box.
    pub checked: bool,
    /// Row background.
    pub background: Color,
    /// Row text color.
    pub foreground: Color,
    /// Fill of the small rounded box drawn before the text.
    pub box_fill: Color,
}

/// The summary label as the default renderer describes it.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelVisual {
    /// Caption text.
    pub text: String,
    /// Caption color.
    pub foreground: Color,
}

/// Output of [`CheckBoxRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellVisual {
    /// A popup row.
    CheckBox(CheckBoxVisual),
    /// The closed-state summary.
    Label(LabelVisual),
}

impl CellVisual {
    /// The text shown by this visual.
    pub fn text(&self) -> &str {
        match self {
            Self::CheckBox(v) => &v.text,
            Self::Label(v) => &v.text,
        }
    }
}

/// Default renderer producing [`CellVisual`]s.
///
/// Highlighted rows use the palette's selection colors. Other rows use the
/// list colors, except that checked rows get a neutral background picked by
/// [`ListPalette::checked_background`]. The box is filled with the
/// selection background when checked or highlighted.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckBoxRenderer;

impl CheckBoxRenderer {
    /// Create the default renderer.
    pub fn new() -> Self {
        Self
    }
}

impl ItemRenderer for CheckBoxRenderer {
    type Visual = CellVisual;

    fn render_item(
        &mut self,
        item: &CheckableItem,
        _row: usize,
        highlighted: bool,
        palette: &ListPalette,
    ) -> CellVisual {
        let checked = item.is_selected();

        let (background, foreground) = if highlighted {
            (palette.selection_background, palette.selection_foreground)
        } else if checked {
            (palette.checked_background(), palette.foreground)
        } else {
            (palette.background, palette.foreground)
        };

        let box_fill = if checked || highlighted {
            palette.selection_background
        } else {
            palette.background
        };

        CellVisual::CheckBox(CheckBoxVisual {
            text: item.to_string(),
            checked,
            background,
            foreground,
            box_fill,
        })
    }

    fn render_summary(&mut self, caption: &str, palette: &ListPalette) -> CellVisual {
        CellVisual::Label(LabelVisual {
            text: caption.to_string(),
            foreground: palette.foreground,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkbox(visual: CellVisual) -> CheckBoxVisual {
        match visual {
            CellVisual::CheckBox(v) => v,
            CellVisual::Label(_) => panic!("expected a checkbox visual"),
        }
    }

    #[test]
    fn test_highlighted_row_uses_selection_colors() {
        let palette = ListPalette::light();
        let item = CheckableItem::new("A");
        let v = checkbox(CheckBoxRenderer.render_item(&item, 0, true, &palette));

        assert!(!v.checked);
        assert_eq!(v.background, palette.selection_background);
        assert_eq!(v.foreground, palette.selection_foreground);
        assert_eq!(v.box_fill, palette.selection_background);
    }

    #[test]
    fn test_checked_row_uses_neutral_shade() {
        let item = CheckableItem::with_checked("A", true);

        let light = ListPalette::light();
        let v = checkbox(CheckBoxRenderer.render_item(&item, 0, false, &light));
        assert!(v.checked);
        assert_eq!(v.background, Color::LIGHT_GRAY);
        assert_eq!(v.foreground, light.foreground);

        let dark = ListPalette::dark();
        let v = checkbox(CheckBoxRenderer.render_item(&item, 0, false, &dark));
        assert_eq!(v.background, Color::DARK_GRAY);
    }

    #[test]
    fn test_unchecked_row_uses_list_background() {
        let palette = ListPalette::dark();
        let item = CheckableItem::new("A");
        let v = checkbox(CheckBoxRenderer.render_item(&item, 3, false, &palette));

        assert_eq!(v.background, palette.background);
        assert_eq!(v.box_fill, palette.background);
    }

    #[test]
    fn test_payload_does_not_affect_rendering() {
        let palette = ListPalette::light();
        let with = CheckableItem::with_payload("A", vec![1u8, 2, 3]);
        let without = CheckableItem::new("A");
        assert_eq!(
            CheckBoxRenderer.render_item(&with, 0, false, &palette),
            CheckBoxRenderer.render_item(&without, 0, false, &palette)
        );
    }

    #[test]
    fn test_summary_label() {
        let v = CheckBoxRenderer.render_summary("A, B", &ListPalette::light());
        assert_eq!(v.text(), "A, B");
        assert!(matches!(v, CellVisual::Label(_)));
    }
}
