//! Parallax demo binary.
//!
//! Runs the generator headless for a number of frames, then optionally
//! writes a PNG of the last frame or a PNG per frame, and register values.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;
use raster_core::{MasterClock, Observable};
use vga_demo::capture::{self, FrameCapture};
use vga_demo::config::DirectionSetting;
use vga_demo::{DemoConfig, DemoError, VgaDemo};
use vga_timing::TimingGenerator;

#[derive(Parser)]
#[command(name = "vga-demo")]
#[command(version, about = "Parallax scroller on a 640x480 VGA signal generator", long_about = None)]
struct Cli {
    /// JSON config file (flags below override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scroll speed register, 0-15
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=15))]
    speed: Option<u8>,

    /// Scroll right-to-left
    #[arg(short, long)]
    reverse: bool,

    /// Number of frames to run
    #[arg(short, long)]
    frames: Option<u32>,

    /// Save a PNG of the last frame
    #[arg(long, conflicts_with = "record")]
    screenshot: Option<PathBuf>,

    /// Save one PNG per frame under <DIR>/frames
    #[arg(long, value_name = "DIR")]
    record: Option<PathBuf>,

    /// Print a register after the run (repeatable, e.g. anim.offset)
    #[arg(short, long)]
    query: Vec<String>,

    /// List the queryable register paths and exit
    #[arg(long)]
    list_queries: bool,
}

impl Cli {
    fn captures(&self) -> bool {
        self.screenshot.is_some() || self.record.is_some()
    }
}

fn build_config(cli: &Cli) -> Result<DemoConfig, DemoError> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(speed) = cli.speed {
        config.speed = speed;
    }
    if cli.reverse {
        config.direction = DirectionSetting::Reverse;
    }
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    config.validate()?;
    if cli.captures() {
        config.validate_capture()?;
    }
    Ok(config)
}

/// `path = value` for each requested register.
fn query_lines(demo: &VgaDemo, paths: &[String]) -> Result<Vec<String>, DemoError> {
    paths
        .iter()
        .map(|path| {
            demo.query(path)
                .map(|value| format!("{path} = {value}"))
                .ok_or_else(|| DemoError::Config {
                    message: format!("unknown query path: {path}"),
                })
        })
        .collect()
}

/// Simulated time covered by `frames` frames of the VGA pixel clock.
fn run_summary(frames: u32) -> String {
    let clock = MasterClock::VGA_640X480;
    let per_frame = TimingGenerator::ticks_per_frame();
    let rate = clock.frame_rate_mhz(per_frame);
    let ms = clock.nanos(per_frame * u64::from(frames)) / 1_000_000;
    format!(
        "{frames} frames, {ms} ms simulated at {}.{:03} Hz",
        rate / 1000,
        rate % 1000
    )
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let config = build_config(cli)?;

    let mut demo = VgaDemo::new(config.control_word());
    demo.set_control_queue(config.control_queue());
    // Catch typos before a long run
    query_lines(&demo, &cli.query)?;
    info!(
        "running {} frames, control {:#04X}",
        config.frames,
        demo.control().bits()
    );

    if let Some(dir) = &cli.record {
        capture::record(&mut demo, dir, config.frames)?;
    } else {
        let mut frame = FrameCapture::new();
        for _ in 0..config.frames {
            demo.run_frame(&mut frame);
        }
        if let Some(path) = &cli.screenshot {
            capture::save_screenshot(&frame, path)?;
            info!("screenshot saved to {}", path.display());
        }
    }
    info!("{}", run_summary(config.frames));

    for line in query_lines(&demo, &cli.query)? {
        println!("{line}");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.list_queries {
        for path in VgaDemo::default().query_paths() {
            println!("{path}");
        }
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vga-demo").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn screenshot_and_record_conflict() {
        let result = Cli::try_parse_from([
            "vga-demo",
            "--record",
            "out",
            "--screenshot",
            "shot.png",
        ]);
        let err = result.err().expect("flags conflict");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn zero_frames_rejected_when_capturing() {
        for args in [
            &["--frames", "0", "--screenshot", "zero.png"][..],
            &["--frames", "0", "--record", "out"][..],
        ] {
            let err = build_config(&parse(args)).expect_err("nothing to capture");
            assert!(matches!(err, DemoError::Config { .. }), "{err}");
        }
        let config = build_config(&parse(&["--frames", "0"])).expect("plain run");
        assert_eq!(config.frames, 0);
    }

    #[test]
    fn flags_override_defaults() {
        let config = build_config(&parse(&["--speed", "9", "--reverse", "--frames", "3"]))
            .expect("valid flags");
        assert_eq!(config.control_word().bits(), 0x19);
        assert_eq!(config.frames, 3);
        assert!(Cli::try_parse_from(["vga-demo", "--speed", "16"]).is_err());
    }

    #[test]
    fn unknown_query_is_an_error() {
        let demo = VgaDemo::default();
        let lines = query_lines(&demo, &["anim.offset".to_string()]).expect("known path");
        assert_eq!(lines, ["anim.offset = 0"]);

        let err = query_lines(&demo, &["anim.ofset".to_string()]).expect_err("typo rejected");
        assert!(err.to_string().contains("anim.ofset"), "{err}");
    }

    #[test]
    fn summary_uses_pixel_clock() {
        assert_eq!(run_summary(60), "60 frames, 1000 ms simulated at 59.940 Hz");
    }
}
