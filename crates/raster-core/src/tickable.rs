//! Trait for blocks clocked by the pixel clock.

use crate::Ticks;

/// A register block that advances once per pixel clock edge.
///
/// Only sequential state lives behind this trait. Outputs are read from the
/// block's current state between ticks and never change without a tick.
pub trait Tickable {
    /// Apply one pixel clock edge.
    fn tick(&mut self);

    /// Apply `count` pixel clock edges.
    ///
    /// Default implementation calls `tick()` in a loop. Implementors may
    /// shortcut it, but the resulting state must be identical.
    fn tick_n(&mut self, count: Ticks) {
        for _ in 0..count.get() {
            self.tick();
        }
    }
}
