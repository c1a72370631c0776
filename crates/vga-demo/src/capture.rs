//! Headless capture: PNG screenshots of the visible area.
//!
//! `FrameCapture` plays the part of a monitor. It keeps the last colour it
//! saw at each visible position; the generator itself never reads it back.

use std::fs;
use std::io::BufWriter;
use std::path::Path;

use log::info;
use raster_core::{PixelOutput, VideoSink};
use vga_timing::{H_DISPLAY, V_DISPLAY};

use crate::demo::VgaDemo;
use crate::error::{DemoError, Result};

/// Visible-area image built from the output stream, RGBA8.
pub struct FrameCapture {
    rgba: Vec<u8>,
}

impl FrameCapture {
    /// Capture width in pixels.
    pub const WIDTH: u32 = H_DISPLAY as u32;
    /// Capture height in pixels.
    pub const HEIGHT: u32 = V_DISPLAY as u32;

    #[must_use]
    pub fn new() -> Self {
        let mut rgba = vec![0; (Self::WIDTH * Self::HEIGHT * 4) as usize];
        for alpha in rgba.iter_mut().skip(3).step_by(4) {
            *alpha = 0xFF;
        }
        Self { rgba }
    }

    /// RGBA bytes, row-major.
    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// RGB of one visible pixel, `None` outside the visible area.
    #[must_use]
    pub fn rgb_at(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= Self::WIDTH || y >= Self::HEIGHT {
            return None;
        }
        let i = ((y * Self::WIDTH + x) * 4) as usize;
        Some([self.rgba[i], self.rgba[i + 1], self.rgba[i + 2]])
    }
}

impl Default for FrameCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoSink for FrameCapture {
    fn pixel(&mut self, out: PixelOutput) {
        if !out.active {
            return;
        }
        let i = ((u32::from(out.coord.y) * Self::WIDTH + u32::from(out.coord.x)) * 4) as usize;
        self.rgba[i..i + 3].copy_from_slice(&out.color.to_rgb888());
    }
}

/// Save the captured visible area as a PNG file.
pub fn save_screenshot(capture: &FrameCapture, path: &Path) -> Result<()> {
    let file = fs::File::create(path).map_err(|e| DemoError::io(path, e))?;
    let w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, FrameCapture::WIDTH, FrameCapture::HEIGHT);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(capture.rgba())?;
    Ok(())
}

/// Record video: run `num_frames` frames, one PNG each.
pub fn record(demo: &mut VgaDemo, dir: &Path, num_frames: u32) -> Result<()> {
    if num_frames == 0 {
        return Err(DemoError::config("recording needs at least one frame"));
    }
    let frames_dir = dir.join("frames");
    fs::create_dir_all(&frames_dir).map_err(|e| DemoError::io(&frames_dir, e))?;

    let mut capture = FrameCapture::new();
    for i in 1..=num_frames {
        demo.run_frame(&mut capture);
        save_screenshot(&capture, &frames_dir.join(format!("{i:06}.png")))?;
    }

    info!("captured {num_frames} frames to {}", frames_dir.display());
    Ok(())
}
