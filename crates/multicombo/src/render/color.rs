//! RGBA colors and the dark-background rule.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An RGBA color with straight (non-premultiplied) alpha, channels in `0.0..=1.0`.
///
/// Serializes as a hex string (`"#RRGGBB"` or `"#RRGGBBAA"`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from a hex string (`"#F00"`, `"#FF0000"` or `"#FF0000FF"`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

        match digits.len() {
            3 => {
                let short = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some(Self::from_rgb8(short(0)?, short(1)?, short(2)?))
            }
            6 => Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::from_rgba8(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }

    /// Like [`from_hex`](Self::from_hex), reporting failure as an error.
    pub fn parse_hex(hex: &str) -> Result<Self> {
        Self::from_hex(hex).ok_or_else(|| Error::invalid_color(hex))
    }

    /// Convert to 8-bit RGBA components.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// Euclidean distance between two colors in RGB space, ignoring alpha.
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(other.r) - f64::from(self.r);
        let dg = f64::from(other.g) - f64::from(self.g);
        let db = f64::from(other.b) - f64::from(self.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Whether the color is closer to black than to white.
    ///
    /// Uses the plain Euclidean RGB distance, not a luminance weighting, so
    /// mid-gray `(128, 128, 128)` counts as light and `(127, 127, 127)` as dark.
    pub fn is_dark(self) -> bool {
        self.distance(Self::BLACK) < self.distance(Self::WHITE)
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const LIGHT_GRAY: Self = Self::from_rgb(192.0 / 255.0, 192.0 / 255.0, 192.0 / 255.0);
    pub const DARK_GRAY: Self = Self::from_rgb(64.0 / 255.0, 64.0 / 255.0, 64.0 / 255.0);
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
