//! Layer compositing.
//!
//! Background and header light all three channels; the sprite lights red
//! only, so it shows as a red glyph over black and is lost against the
//! white bars and header. Outside the active area the output is black.

use raster_core::{PixelCoordinate, Rgb222};

/// Final display window for the header layer: y 10-169, x 250-389.
const HEADER_CLIP_Y: core::ops::Range<u16> = 10..170;
const HEADER_CLIP_X: core::ops::Range<u16> = 250..390;

/// Per-layer coverage for one pixel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawFlags {
    pub background: bool,
    pub sprite: bool,
    pub header: bool,
}

/// Resolve layer coverage into a colour.
#[must_use]
pub fn compose(coord: PixelCoordinate, active: bool, flags: DrawFlags) -> Rgb222 {
    if !active {
        return Rgb222::BLACK;
    }

    let header =
        flags.header && HEADER_CLIP_Y.contains(&coord.y) && HEADER_CLIP_X.contains(&coord.x);

    let white = flags.background || header;
    Rgb222::from_bits(white || flags.sprite, white, white)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb222 = Rgb222 { r: 3, g: 0, b: 0 };

    fn flags(background: bool, sprite: bool, header: bool) -> DrawFlags {
        DrawFlags {
            background,
            sprite,
            header,
        }
    }

    #[test]
    fn inactive_is_black() {
        let coord = PixelCoordinate::new(300, 50);
        assert_eq!(compose(coord, false, flags(true, true, true)), Rgb222::BLACK);
    }

    #[test]
    fn channel_rules() {
        let coord = PixelCoordinate::new(300, 50);
        assert_eq!(compose(coord, true, flags(false, false, false)), Rgb222::BLACK);
        assert_eq!(compose(coord, true, flags(true, false, false)), Rgb222::WHITE);
        assert_eq!(compose(coord, true, flags(false, true, false)), RED);
        assert_eq!(compose(coord, true, flags(false, false, true)), Rgb222::WHITE);
        assert_eq!(compose(coord, true, flags(true, true, false)), Rgb222::WHITE);
    }

    #[test]
    fn header_clipped_to_window() {
        let header_only = flags(false, false, true);
        assert_eq!(compose(PixelCoordinate::new(250, 10), true, header_only), Rgb222::WHITE);
        assert_eq!(compose(PixelCoordinate::new(389, 169), true, header_only), Rgb222::WHITE);
        assert_eq!(compose(PixelCoordinate::new(390, 50), true, header_only), Rgb222::BLACK);
        assert_eq!(compose(PixelCoordinate::new(300, 170), true, header_only), Rgb222::BLACK);
        assert_eq!(compose(PixelCoordinate::new(249, 50), true, header_only), Rgb222::BLACK);
        assert_eq!(compose(PixelCoordinate::new(300, 9), true, header_only), Rgb222::BLACK);
    }

    #[test]
    fn sprite_not_clipped() {
        let sprite_only = flags(false, true, false);
        assert_eq!(compose(PixelCoordinate::new(5, 470), true, sprite_only), RED);
    }
}
