//! Core traits and types for pixel-clock raster signal generation.
//!
//! Everything ticks at the pixel clock. One tick is one output pixel,
//! whether it lands in the visible area or in blanking.

mod clock;
mod observable;
mod sink;
mod tickable;
mod ticks;

pub use clock::MasterClock;
pub use observable::{Observable, Value};
pub use sink::{PixelCoordinate, PixelOutput, Rgb222, VideoSink};
pub use tickable::Tickable;
pub use ticks::Ticks;
