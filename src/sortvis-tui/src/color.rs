//! 24-bit terminal colors.

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color as CrosstermColor;
use thiserror::Error;

/// Error returned when parsing a hex color fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    EmptyInput,
    #[error("expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex character")]
    InvalidHexChar,
}

/// An RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 139);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB`, `#RRGGBB` or the same without the leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHexChar);
        }

        // #RGB -> #RRGGBB
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        let component = |s: &str| -> Result<u8, ColorParseError> {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHexChar)
        };

        Ok(Self::rgb(
            component(&expanded[0..2])?,
            component(&expanded[2..4])?,
            component(&expanded[4..6])?,
        ))
    }

    /// Formats as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for CrosstermColor {
    #[inline]
    fn from(color: Color) -> Self {
        CrosstermColor::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}
