//! Output surface of a raster generator.
//!
//! The generator produces one [`PixelOutput`] per pixel clock tick. Whatever
//! consumes it (a pin mapper, a capture buffer, a test probe) implements
//! [`VideoSink`]; the generator never knows how the signals are packed.

/// Beam position in the total raster (blanking included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelCoordinate {
    pub x: u16,
    pub y: u16,
}

impl PixelCoordinate {
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Colour with 2 bits per channel (`0b00`..=`0b11`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb222 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb222 {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self { r: 3, g: 3, b: 3 };

    /// Full-intensity channels where the bit is set, off otherwise.
    #[must_use]
    pub const fn from_bits(r: bool, g: bool, b: bool) -> Self {
        const fn level(on: bool) -> u8 {
            if on { 0b11 } else { 0b00 }
        }
        Self {
            r: level(r),
            g: level(g),
            b: level(b),
        }
    }

    /// Expand to 8 bits per channel (`0b11` → `0xFF`).
    #[must_use]
    pub const fn to_rgb888(self) -> [u8; 3] {
        [self.r * 0x55, self.g * 0x55, self.b * 0x55]
    }
}

/// Everything the generator drives on one pixel clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelOutput {
    /// Beam position this output belongs to.
    pub coord: PixelCoordinate,
    pub hsync: bool,
    pub vsync: bool,
    /// True inside the 640x480 visible area.
    pub active: bool,
    /// Black whenever `active` is false.
    pub color: Rgb222,
}

/// Consumer of the per-tick output signals.
pub trait VideoSink {
    /// Receive the output for one pixel clock tick.
    fn pixel(&mut self, out: PixelOutput);
}

/// Discards everything. Useful when only the generator's state matters.
impl VideoSink for () {
    fn pixel(&mut self, _out: PixelOutput) {}
}
