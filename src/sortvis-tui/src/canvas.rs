//! Bar geometry and screen composition.
//!
//! The screen is a status area on top and the bar area below it. Every value
//! gets a slot `width / (n + 1)` columns wide; the bar fills the slot minus a
//! one-column gap once the slot is at least three columns wide. Bar height is
//! scaled to the largest value, filling at most 98% of the bar area.

use crate::buffer::{Buffer, Cell};
use crate::color::Color;

/// Rows reserved above the bars.
pub const STATUS_ROWS: u16 = 2;

/// Fraction of the bar area the tallest bar fills.
const FILL_RATIO: f64 = 0.98;

/// Placement of one bar inside the bar area, bottom aligned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bar {
    pub x: u16,
    pub width: u16,
    pub height: u16,
}

/// Lays out one bar per value in a `width` x `height` area.
///
/// Bars that would start past the right edge are dropped. All-zero input
/// gives zero-height bars.
pub fn bar_layout(values: &[u32], width: u16, height: u16) -> Vec<Bar> {
    if values.is_empty() || width == 0 {
        return Vec::new();
    }

    let slot = (width as usize / (values.len() + 1)).max(1);
    let bar_width = if slot >= 3 { slot - 1 } else { slot };
    let offset = slot / 2;
    let max = values.iter().copied().max().unwrap_or(0);

    values
        .iter()
        .enumerate()
        .map_while(|(i, &value)| {
            let x = offset + i * slot;
            if x >= width as usize {
                return None;
            }
            let bar_height = if max == 0 {
                0
            } else {
                (f64::from(height) * FILL_RATIO * f64::from(value) / f64::from(max)).round() as u16
            };
            Some(Bar {
                x: x as u16,
                width: bar_width.min(width as usize - x) as u16,
                height: bar_height.min(height),
            })
        })
        .collect()
}

/// Clears `buf` and draws the status lines and one bar per value, colored by
/// `color_of(index)`.
pub fn compose<F>(buf: &mut Buffer, status: [&str; 2], text: Color, values: &[u32], color_of: F)
where
    F: Fn(usize) -> Color,
{
    buf.clear();
    for (row, line) in (0..STATUS_ROWS).zip(status) {
        buf.draw_str(0, row, line, Some(text));
    }

    let area_height = buf.height().saturating_sub(STATUS_ROWS);
    let bottom = buf.height();
    for (i, bar) in bar_layout(values, buf.width(), area_height).into_iter().enumerate() {
        buf.fill(
            bar.x,
            bottom - bar.height,
            bar.width,
            bar.height,
            Cell::filled(color_of(i)),
        );
    }
}
