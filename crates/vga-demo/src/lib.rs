//! Parallax scroller on a 640x480 VGA raster.
//!
//! The pixel clock runs at 25.175 MHz. Each tick produces one pixel's sync
//! and colour outputs; once per frame, on the vertical sync edge, the scroll
//! animation advances according to the 8-bit control input.
//!
//! One frame = 800 pixel clocks x 525 lines = 420,000 ticks (59.94 Hz).

#[cfg(feature = "native")]
pub mod capture;
pub mod config;
pub mod control;
mod demo;
pub mod error;

pub use config::DemoConfig;
pub use control::{ControlQueue, ControlWord};
pub use demo::VgaDemo;
pub use error::DemoError;
