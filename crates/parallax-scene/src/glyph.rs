//! Letter glyphs drawn as pixel predicates around an anchor point.

use raster_core::PixelCoordinate;

/// A named glyph shape.
///
/// Glyphs are 11 pixels wide (anchor ±5) and 16 tall (10 above the anchor,
/// 5 below). They are tested per pixel, never blitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Rounded "U": two 3-pixel legs closing into a 5-pixel base.
    U,
}

impl Glyph {
    /// Does the glyph anchored at `anchor` cover `point`?
    #[must_use]
    pub fn contains(self, anchor: PixelCoordinate, point: PixelCoordinate) -> bool {
        let dx = (i32::from(point.x) - i32::from(anchor.x)).abs();
        let dy = i32::from(point.y) - i32::from(anchor.y);

        match self {
            Self::U => match dy {
                -10..=2 => (3..=5).contains(&dx),
                3 => (3..=4).contains(&dx),
                4 => (2..=3).contains(&dx),
                5 => dx <= 2,
                _ => false,
            },
        }
    }
}

/// Lit pixels of a U, anchor at row 10, column 5.
#[cfg(test)]
pub(crate) const EXPECTED_U: [[u8; 11]; 16] = [
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0],
    [0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u_shape_pixels() {
        let anchor = PixelCoordinate::new(100, 100);
        for (row, bits) in EXPECTED_U.iter().enumerate() {
            for (col, &bit) in bits.iter().enumerate() {
                let point = PixelCoordinate::new(95 + col as u16, 90 + row as u16);
                assert_eq!(
                    Glyph::U.contains(anchor, point),
                    bit == 1,
                    "U at row {row}, col {col}"
                );
            }
        }
    }

    #[test]
    fn nothing_outside_cell() {
        let anchor = PixelCoordinate::new(100, 100);
        for y in 85..110 {
            for x in 90..111 {
                let inside = (95..=105).contains(&x) && (90..=105).contains(&y);
                if !inside {
                    assert!(!Glyph::U.contains(anchor, PixelCoordinate::new(x, y)));
                }
            }
        }
    }

    #[test]
    fn near_origin_anchor() {
        // Anchor close to zero: points left of x=0 simply don't exist
        let anchor = PixelCoordinate::new(3, 10);
        assert!(Glyph::U.contains(anchor, PixelCoordinate::new(0, 0)));
        assert!(!Glyph::U.contains(anchor, PixelCoordinate::new(3, 0)));
    }
}
