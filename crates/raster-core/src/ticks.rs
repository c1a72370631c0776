//! Pixel clock tick counts.

use std::fmt;

/// A count of pixel clock ticks.
///
/// Raster timing is expressed entirely in these: a line is so many ticks,
/// a frame is lines times that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticks(pub u64);

impl Ticks {
    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    /// Ticks in a raster of `width` x `height` total pixels (blanking
    /// included).
    #[must_use]
    pub const fn raster(width: u16, height: u16) -> Self {
        Self(width as u64 * height as u64)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}

impl core::ops::Mul<u64> for Ticks {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_size() {
        assert_eq!(Ticks::raster(800, 525), Ticks::new(420_000));
    }

    #[test]
    fn frames_scale() {
        assert_eq!(Ticks::raster(800, 525) * 3, Ticks::new(1_260_000));
        assert_eq!(format!("{}", Ticks::new(5)), "5 ticks");
    }
}
