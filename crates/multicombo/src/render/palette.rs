//! Color palette for popup rows.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Colors the item renderer draws popup rows with.
///
/// Deserializes from hex strings; missing fields fall back to the light
/// palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPalette {
    /// List background.
    pub background: Color,
    /// List text color.
    pub foreground: Color,
    /// Background of the highlighted row.
    pub selection_background: Color,
    /// Text color of the highlighted row.
    pub selection_foreground: Color,
    /// Background of checked rows on a light list background.
    pub light_neutral: Color,
    /// Background of checked rows on a dark list background.
    pub dark_neutral: Color,
}

impl ListPalette {
    /// A palette for light backgrounds.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::BLACK,
            selection_background: Color::from_rgb8(51, 153, 255),
            selection_foreground: Color::WHITE,
            light_neutral: Color::LIGHT_GRAY,
            dark_neutral: Color::DARK_GRAY,
        }
    }

    /// A palette for dark backgrounds.
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(28, 28, 30),
            foreground: Color::WHITE,
            selection_background: Color::from_rgb8(10, 132, 255),
            selection_foreground: Color::WHITE,
            ..Self::light()
        }
    }

    /// Set the list background using builder pattern.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// The background a checked, non-highlighted row uses.
    ///
    /// Dark list backgrounds get the dark neutral, light ones the light neutral.
    pub fn checked_background(&self) -> Color {
        if self.background.is_dark() {
            self.dark_neutral
        } else {
            self.light_neutral
        }
    }
}

impl Default for ListPalette {
    fn default() -> Self {
        Self::light()
    }
}
