//! 640x480 VGA raster timing generator.
//!
//! Two free-running counters walk the total raster one pixel clock at a
//! time. Everything else (sync pulses, the active-display flag) is decoded
//! combinationally from the counter values.
//!
//! # Timing (640x480 @ 59.94 Hz)
//!
//! Horizontal, in pixel clocks (800 total):
//! - 0-639: active display
//! - 640-655: front porch (16)
//! - 656-751: sync pulse (96)
//! - 752-799: back porch (48)
//!
//! Vertical, in lines (525 total):
//! - 0-479: active display
//! - 480-489: front porch (10)
//! - 490-491: sync pulse (2)
//! - 492-524: back porch (33)
//!
//! Sync outputs here are plain "pulse active" booleans. Electrical polarity
//! belongs to whatever maps the signals onto pins.

use raster_core::{PixelCoordinate, Tickable, Ticks};

/// Visible width in pixels.
pub const H_DISPLAY: u16 = 640;
const H_FRONT_PORCH: u16 = 16;
const H_SYNC: u16 = 96;
const H_BACK_PORCH: u16 = 48;
/// Pixel clocks per line.
pub const H_TOTAL: u16 = H_DISPLAY + H_FRONT_PORCH + H_SYNC + H_BACK_PORCH;

/// Visible height in lines.
pub const V_DISPLAY: u16 = 480;
const V_FRONT_PORCH: u16 = 10;
const V_SYNC: u16 = 2;
const V_BACK_PORCH: u16 = 33;
/// Lines per frame.
pub const V_TOTAL: u16 = V_DISPLAY + V_FRONT_PORCH + V_SYNC + V_BACK_PORCH;

/// First pixel clock of the horizontal sync pulse.
const H_SYNC_START: u16 = H_DISPLAY + H_FRONT_PORCH;
/// First line of the vertical sync pulse.
const V_SYNC_START: u16 = V_DISPLAY + V_FRONT_PORCH;

/// Free-running horizontal/vertical counter pair.
#[derive(Debug, Clone, Default)]
pub struct TimingGenerator {
    /// Pixel clock within the line (0-799).
    h: u16,
    /// Line within the frame (0-524).
    v: u16,
    /// Set when the vertical counter wraps, auto-clears on read.
    frame_complete: bool,
}

impl TimingGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronous reset: both counters back to zero.
    pub fn reset(&mut self) {
        self.h = 0;
        self.v = 0;
        self.frame_complete = false;
    }

    /// Pixel clocks per frame (800 x 525).
    #[must_use]
    pub const fn ticks_per_frame() -> Ticks {
        Ticks::raster(H_TOTAL, V_TOTAL)
    }

    /// Horizontal counter.
    #[must_use]
    pub fn h(&self) -> u16 {
        self.h
    }

    /// Vertical counter.
    #[must_use]
    pub fn v(&self) -> u16 {
        self.v
    }

    /// Current beam position.
    #[must_use]
    pub fn coordinate(&self) -> PixelCoordinate {
        PixelCoordinate::new(self.h, self.v)
    }

    /// Horizontal sync pulse, true for pixel clocks 656-751.
    #[must_use]
    pub fn hsync(&self) -> bool {
        (H_SYNC_START..H_SYNC_START + H_SYNC).contains(&self.h)
    }

    /// Vertical sync pulse, true for lines 490-491.
    #[must_use]
    pub fn vsync(&self) -> bool {
        (V_SYNC_START..V_SYNC_START + V_SYNC).contains(&self.v)
    }

    /// Inside the 640x480 visible area?
    #[must_use]
    pub fn active_display(&self) -> bool {
        self.h < H_DISPLAY && self.v < V_DISPLAY
    }

    /// Has the vertical counter wrapped since the last call? Auto-clears.
    pub fn take_frame_complete(&mut self) -> bool {
        let result = self.frame_complete;
        self.frame_complete = false;
        result
    }

    /// Position the counters directly (for testing).
    ///
    /// Out-of-range values are reduced into the raster.
    #[doc(hidden)]
    pub fn set_position(&mut self, h: u16, v: u16) {
        self.h = h % H_TOTAL;
        self.v = v % V_TOTAL;
    }
}

impl Tickable for TimingGenerator {
    fn tick(&mut self) {
        self.h += 1;
        if self.h >= H_TOTAL {
            self.h = 0;
            self.v += 1;
            if self.v >= V_TOTAL {
                self.v = 0;
                self.frame_complete = true;
            }
        }
    }
}
