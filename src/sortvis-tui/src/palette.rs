//! Role-to-color mapping.

use sortvis_core::ColorTag;
use tracing::debug;

use crate::color::Color;
use crate::error::{Result, TuiError};

/// Config key for the color of freshly generated, not yet sorted data.
pub const FRESH_KEY: &str = "fresh";

/// Colors for every [`ColorTag`] plus the "fresh data" color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    tags: [Color; ColorTag::ALL.len()],
    fresh: Color,
    /// Status line text.
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tags: [
                Color::rgb(0x1E, 0x90, 0xFF), // normal
                Color::rgb(0xFF, 0x40, 0x40), // swapped
                Color::rgb(0xFF, 0xD7, 0x00), // compared
                Color::rgb(0x32, 0xCD, 0x32), // pivot
                Color::rgb(0xFF, 0x8C, 0x00), // selected
                Color::rgb(0xDA, 0x70, 0xD6), // written back
                Color::rgb(0x00, 0xCE, 0xD1), // partition left
                Color::rgb(0x93, 0x70, 0xDB), // partition right
            ],
            fresh: Color::DARK_BLUE,
            text: Color::WHITE,
        }
    }
}

impl Palette {
    /// Color for a role.
    #[inline]
    pub fn color(&self, tag: ColorTag) -> Color {
        self.tags[tag as usize]
    }

    /// Color for data that has not been touched by a sort yet.
    #[inline]
    pub fn fresh(&self) -> Color {
        self.fresh
    }

    /// Sets one entry by config key (`normal`, `pivot`, ..., or `fresh`).
    pub fn set(&mut self, key: &str, color: Color) -> Result<()> {
        if key == FRESH_KEY {
            self.fresh = color;
            return Ok(());
        }
        let tag = ColorTag::ALL
            .into_iter()
            .find(|tag| tag.key() == key)
            .ok_or_else(|| TuiError::UnknownPaletteKey(key.to_string()))?;
        self.tags[tag as usize] = color;
        Ok(())
    }

    /// Applies `(key, "#RRGGBB")` overrides on top of this palette.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, hex) in overrides {
            let color = Color::from_hex(hex).map_err(|source| TuiError::ColorParse {
                key: key.to_string(),
                source,
            })?;
            debug!(key, color = %color, "palette override");
            self.set(key, color)?;
        }
        Ok(self)
    }
}
