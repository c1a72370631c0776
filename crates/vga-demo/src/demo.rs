//! Top-level demo machine.
//!
//! Ties the raster timing to the scene. Persistent state is just the two
//! register blocks:
//! - `TimingGenerator`: advances on every pixel clock tick.
//! - `AnimationState`: advances on every vertical sync rising edge.
//!
//! Pixel colour is recomputed from those registers on every tick.
//!
//! One frame = 800 pixel clocks x 525 lines = 420,000 ticks.

use log::{debug, trace};
use parallax_scene::AnimationState;
use raster_core::{Observable, PixelOutput, Tickable, Value, VideoSink};
use vga_timing::TimingGenerator;

use crate::control::{ControlQueue, ControlWord};

/// Raster generator plus animated scene.
#[derive(Debug, Clone)]
pub struct VgaDemo {
    timing: TimingGenerator,
    animation: AnimationState,
    /// Input port, sampled at each frame boundary.
    control: ControlWord,
    /// Scheduled input port changes.
    control_queue: ControlQueue,
    /// Reset line, active low. While low every register holds its reset value.
    reset_n: bool,
    /// Enable input. Carried through to the outputs' consumer; the core
    /// runs regardless.
    enable: bool,
    /// Completed frames since reset.
    frame_count: u64,
}

impl VgaDemo {
    #[must_use]
    pub fn new(control: ControlWord) -> Self {
        Self {
            timing: TimingGenerator::new(),
            animation: AnimationState::new(),
            control,
            control_queue: ControlQueue::new(),
            reset_n: true,
            enable: true,
            frame_count: 0,
        }
    }

    /// Synchronous reset of every register.
    pub fn reset(&mut self) {
        self.timing.reset();
        self.animation.reset();
        self.frame_count = 0;
        debug!("reset: timing (0,0), offset 0, speed 4 forward");
    }

    /// Drive the reset line (active low). Asserting it resets at once.
    pub fn set_reset_n(&mut self, reset_n: bool) {
        if !reset_n {
            self.reset();
        }
        self.reset_n = reset_n;
    }

    pub fn set_enable(&mut self, enable: bool) {
        self.enable = enable;
    }

    /// Drive the input port.
    pub fn set_control(&mut self, control: ControlWord) {
        self.control = control;
    }

    /// Replace the scheduled control changes.
    pub fn set_control_queue(&mut self, queue: ControlQueue) {
        self.control_queue = queue;
    }

    #[must_use]
    pub fn control(&self) -> ControlWord {
        self.control
    }

    #[must_use]
    pub fn timing(&self) -> &TimingGenerator {
        &self.timing
    }

    #[must_use]
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[must_use]
    pub fn enable(&self) -> bool {
        self.enable
    }

    /// Outputs for the current register state.
    #[must_use]
    pub fn output(&self) -> PixelOutput {
        let coord = self.timing.coordinate();
        let active = self.timing.active_display();
        PixelOutput {
            coord,
            hsync: self.timing.hsync(),
            vsync: self.timing.vsync(),
            active,
            color: parallax_scene::color(coord, active, &self.animation),
        }
    }

    /// Hand the current outputs to `sink`, then apply one clock edge.
    pub fn step(&mut self, sink: &mut impl VideoSink) {
        sink.pixel(self.output());
        self.tick();
    }

    /// Run from the current position to the end of the frame.
    ///
    /// While reset is held the clock still runs, so this always returns.
    /// Scheduled control changes due for this frame are applied first.
    /// Returns the number of ticks executed.
    pub fn run_frame(&mut self, sink: &mut impl VideoSink) -> u64 {
        if let Some(word) = self.control_queue.process(self.frame_count) {
            debug!(
                "frame {}: control {:#04X} -> {:#04X}",
                self.frame_count,
                self.control.bits(),
                word.bits()
            );
            self.control = word;
        }

        let position = u64::from(self.timing.v()) * u64::from(vga_timing::H_TOTAL)
            + u64::from(self.timing.h());
        let ticks = TimingGenerator::ticks_per_frame().get() - position;
        for _ in 0..ticks {
            self.step(sink);
        }
        ticks
    }

    /// Vertical sync rising edge: one animation update.
    fn frame_boundary(&mut self) {
        self.animation
            .advance(self.control.speed(), self.control.direction());
        trace!(
            "vsync: offset {} speed {} {}",
            self.animation.offset(),
            self.animation.speed(),
            self.animation.direction().name()
        );
    }
}

impl Default for VgaDemo {
    fn default() -> Self {
        Self::new(ControlWord::default())
    }
}

impl Tickable for VgaDemo {
    fn tick(&mut self) {
        if !self.reset_n {
            return;
        }

        let vsync_before = self.timing.vsync();
        self.timing.tick();
        if !vsync_before && self.timing.vsync() {
            self.frame_boundary();
        }
        if self.timing.take_frame_complete() {
            self.frame_count += 1;
        }
    }
}

impl Observable for VgaDemo {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(rest) = path.strip_prefix("timing.") {
            match rest {
                "h" => Some(self.timing.h().into()),
                "v" => Some(self.timing.v().into()),
                "hsync" => Some(self.timing.hsync().into()),
                "vsync" => Some(self.timing.vsync().into()),
                "active" => Some(self.timing.active_display().into()),
                _ => None,
            }
        } else if let Some(rest) = path.strip_prefix("anim.") {
            match rest {
                "offset" => Some(self.animation.offset().into()),
                "speed" => Some(self.animation.speed().into()),
                "direction" => Some(self.animation.direction().name().into()),
                "started" => Some(self.animation.started().into()),
                _ => None,
            }
        } else {
            match path {
                "control" => Some(self.control.bits().into()),
                "frame_count" => Some(self.frame_count.into()),
                "reset_n" => Some(self.reset_n.into()),
                "enable" => Some(self.enable.into()),
                _ => None,
            }
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "timing.h",
            "timing.v",
            "timing.hsync",
            "timing.vsync",
            "timing.active",
            "anim.offset",
            "anim.speed",
            "anim.direction",
            "anim.started",
            "control",
            "frame_count",
            "reset_n",
            "enable",
        ]
    }
}
