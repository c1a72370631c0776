//! Static header glyph at the top of the screen.
//!
//! A 14x16 grid of 8x8-pixel cells anchored at (250, 10). Only the left
//! seven columns are stored; the right seven are their mirror image.

use raster_core::PixelCoordinate;

const ORIGIN_X: u16 = 250;
const ORIGIN_Y: u16 = 10;
/// Cell edge in pixels.
const CELL_SIZE: u16 = 8;
/// Grid height in cells.
pub const ROWS: u16 = 16;
/// Grid width in cells (both halves).
pub const COLS: u16 = 14;
/// Stored half width.
const HALF_COLS: u16 = COLS / 2;

/// Left half of each row. Bit 6 is the leftmost (outer) column, bit 0 the
/// column next to the mirror axis, so the literals read like the picture.
pub const HEADER_BITMAP: [u8; ROWS as usize] = [
    0b000_0011,
    0b000_0100,
    0b000_1000,
    0b000_1010,
    0b000_1001,
    0b000_1111,
    0b001_0011,
    0b010_0000,
    0b100_0000,
    0b100_0000,
    0b100_0000,
    0b010_1000,
    0b001_0000,
    0b000_1000,
    0b001_0001,
    0b000_1110,
];

/// Grid cell under `coord`, as (row, col), if inside the grid.
#[must_use]
pub fn cell(coord: PixelCoordinate) -> Option<(u16, u16)> {
    if coord.x < ORIGIN_X || coord.y < ORIGIN_Y {
        return None;
    }
    let row = (coord.y - ORIGIN_Y) / CELL_SIZE;
    let col = (coord.x - ORIGIN_X) / CELL_SIZE;
    (row < ROWS && col < COLS).then_some((row, col))
}

/// Fold a full-width column onto the stored half.
#[must_use]
pub const fn fold(col: u16) -> u16 {
    if col < HALF_COLS { col } else { COLS - 1 - col }
}

/// Stored bit for a grid cell.
///
/// # Panics
///
/// Panics if the cell is outside the 16x14 grid.
#[must_use]
pub fn bit(row: u16, col: u16) -> bool {
    assert!(
        row < ROWS && col < COLS,
        "header cell ({row},{col}) out of range"
    );
    let half = fold(col);
    (HEADER_BITMAP[row as usize] >> (HALF_COLS - 1 - half)) & 1 != 0
}

/// Does the header glyph cover `coord`?
#[must_use]
pub fn draw(coord: PixelCoordinate) -> bool {
    cell(coord).is_some_and(|(row, col)| bit(row, col))
}
