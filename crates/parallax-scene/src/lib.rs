//! Per-pixel scene logic for the parallax demo.
//!
//! Nothing here holds pixel state. Each renderer answers "does this layer
//! cover pixel (x, y) right now?" from the coordinate and the current
//! [`AnimationState`]; the [`compositor`] turns the answers into a colour.
//!
//! # Layers
//!
//! - [`background`]: two vertically mirrored banks of bars whose height
//!   follows the [`sine`] table, scrolling with the animation offset.
//! - [`sprite`]: the letters "UW" built from three [`Glyph::U`] instances,
//!   riding the same waveform one bar ahead of a fixed x reference.
//! - [`header`]: a static 14x16 cell glyph stored as a mirrored half.
//!
//! # Arithmetic
//!
//! Coordinates and offsets are 10-bit registers. Sums of a coordinate and
//! the scroll offset wrap at 1024 ([`wrap10`]), which is what the bar
//! pattern expects.

pub mod animation;
pub mod background;
pub mod compositor;
mod glyph;
pub mod header;
pub mod sine;
pub mod sprite;

pub use animation::{AnimationState, Direction};
pub use compositor::DrawFlags;
pub use glyph::Glyph;

use raster_core::{PixelCoordinate, Rgb222};

/// Reduce a value to the 10-bit register domain.
#[must_use]
pub const fn wrap10(value: u16) -> u16 {
    value & 0x3FF
}

/// Query all three layers for one pixel.
#[must_use]
pub fn draw_flags(coord: PixelCoordinate, anim: &AnimationState) -> DrawFlags {
    DrawFlags {
        background: background::draw(coord, anim.offset()),
        sprite: sprite::draw(coord, anim),
        header: header::draw(coord),
    }
}

/// Final colour for one pixel.
#[must_use]
pub fn color(coord: PixelCoordinate, active: bool, anim: &AnimationState) -> Rgb222 {
    compositor::compose(coord, active, draw_flags(coord, anim))
}
