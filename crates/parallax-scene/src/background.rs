//! Scrolling parallax bars.
//!
//! The window between y=180 and y=400 (x between 100 and 540) holds two
//! banks of vertical bars: one hanging from the top edge, one standing on
//! the bottom edge. Bars repeat every 40 pixels and are 25 pixels wide.
//! Each bar's height follows the waveform sample picked by its bar address,
//! so the banks breathe as the pattern scrolls by the animation offset.

use raster_core::PixelCoordinate;

use crate::{sine, wrap10};

/// Left edge of the bar window (exclusive).
const LEFT_X: u16 = 100;
/// Right edge of the bar window (exclusive).
const RIGHT_X: u16 = 540;
/// Top edge of the bar window (exclusive).
const TOP_Y: u16 = 180;
/// Bottom edge of the bar window (exclusive).
const BOTTOM_Y: u16 = 400;
/// Bar pitch in pixels.
pub const BAR_WIDTH: u16 = 40;
/// Lit part of each bar; the remaining 15 pixels are the gap.
const VISIBLE_WIDTH: u16 = 25;
/// Minimum bar height.
const BAND_HEIGHT: u16 = 60;
/// Extra height of a top-bank bar at a zero waveform sample.
const TOP_HEADROOM: u16 = 50;

/// Which bar a shifted x coordinate lands in, and where inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarCell {
    /// Waveform address, 0-9.
    pub address: u16,
    /// Pixel position within the 40-pixel bar pitch.
    pub local: u16,
}

impl BarCell {
    /// Locate `x` on a pattern scrolled by `offset`.
    #[must_use]
    pub fn locate(x: u16, offset: u16) -> Self {
        let shifted = wrap10(x.wrapping_add(offset));
        Self {
            address: (shifted / BAR_WIDTH) % sine::SINE_LEN,
            local: shifted % BAR_WIDTH,
        }
    }

    /// Inside the lit part of the bar?
    #[must_use]
    pub fn lit(self) -> bool {
        self.local < VISIBLE_WIDTH
    }
}

/// Does the bar pattern cover `coord` at scroll `offset`?
#[must_use]
pub fn draw(coord: PixelCoordinate, offset: u16) -> bool {
    let PixelCoordinate { x, y } = coord;

    let in_window = x > LEFT_X && x < RIGHT_X && y > TOP_Y && y < BOTTOM_Y;
    if !in_window {
        return false;
    }

    let cell = BarCell::locate(x, offset);
    if !cell.lit() {
        return false;
    }
    let wave = sine::lookup(cell.address);

    let in_top = y < wrap10(TOP_Y + TOP_HEADROOM + BAND_HEIGHT - wave);
    let in_bottom = y > wrap10(BOTTOM_Y - wave - BAND_HEIGHT);
    in_top || in_bottom
}
