//! The "UW" sprite riding the waveform.
//!
//! Three U glyphs share one vertical anchor: one at x=200 for the "U", and
//! two overlapping ones at x=217 and x=227 that read as a "W". The vertical
//! anchor follows the waveform sample under x=200 on the scrolled pattern,
//! so the sprite bobs in step with the bars beneath it.

use raster_core::PixelCoordinate;

use crate::animation::AnimationState;
use crate::background::BAR_WIDTH;
use crate::{Glyph, sine, wrap10};

/// Horizontal anchor of the first glyph.
pub const SPRITE_X: u16 = 200;
/// Horizontal offsets of the three glyphs from [`SPRITE_X`].
const GLYPH_OFFSETS: [u16; 3] = [0, 17, 27];
/// Base line the waveform sample is subtracted from.
const BASE_Y: u16 = 290;
/// Drop below the base line.
const DROP_Y: u16 = 25;

/// Vertical anchor of the sprite at scroll `offset`.
#[must_use]
pub fn sprite_y(offset: u16) -> u16 {
    let address = (wrap10(SPRITE_X.wrapping_add(offset)) / BAR_WIDTH) % sine::SINE_LEN;
    wrap10(BASE_Y - sine::lookup(address) + DROP_Y)
}

/// Do the three glyphs anchored at (`x_pos`, `y_pos`) cover `coord`?
///
/// No start gating; see [`draw`] for the animated sprite.
#[must_use]
pub fn draw_at(coord: PixelCoordinate, x_pos: u16, y_pos: u16) -> bool {
    GLYPH_OFFSETS.iter().any(|&dx| {
        let anchor = PixelCoordinate::new(x_pos.wrapping_add(dx), y_pos);
        Glyph::U.contains(anchor, coord)
    })
}

/// Does the sprite cover `coord`? Hidden until the animation has started.
#[must_use]
pub fn draw(coord: PixelCoordinate, anim: &AnimationState) -> bool {
    anim.started() && draw_at(coord, SPRITE_X, sprite_y(anim.offset()))
}
