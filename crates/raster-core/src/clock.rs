//! Pixel clock configuration.

use crate::Ticks;

/// Pixel clock configuration for a raster generator.
///
/// One tick of this clock produces one pixel (visible or blanked). Frame
/// rate follows from the total raster size, not the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterClock {
    /// Oscillator frequency in Hz (e.g., `25_175_000` for 640x480 VGA).
    pub frequency_hz: u64,
}

impl MasterClock {
    /// Standard 640x480@60 VGA pixel clock.
    pub const VGA_640X480: Self = Self::new(25_175_000);

    #[must_use]
    pub const fn new(frequency_hz: u64) -> Self {
        Self { frequency_hz }
    }

    /// Frames per second for a raster of `ticks_per_frame` pixels, in
    /// millihertz to keep integer precision (59.94 Hz → `59_940`).
    #[must_use]
    pub const fn frame_rate_mhz(&self, ticks_per_frame: Ticks) -> u64 {
        self.frequency_hz * 1000 / ticks_per_frame.get()
    }

    /// Wall-clock duration of `ticks`, in nanoseconds.
    #[must_use]
    pub const fn nanos(&self, ticks: Ticks) -> u64 {
        ticks.get() * 1_000_000_000 / self.frequency_hz
    }
}
