//! Demo run configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! The binary layers command-line flags on top.

use std::fs;
use std::path::Path;

use log::debug;
use parallax_scene::Direction;
use serde::{Deserialize, Serialize};

use crate::control::{ControlQueue, ControlWord};
use crate::error::{DemoError, Result};

/// Highest value the 4-bit speed register holds.
pub const MAX_SPEED: u8 = 15;

/// Direction as written in config files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionSetting {
    #[default]
    Forward,
    Reverse,
}

impl From<DirectionSetting> for Direction {
    fn from(setting: DirectionSetting) -> Self {
        match setting {
            DirectionSetting::Forward => Direction::Forward,
            DirectionSetting::Reverse => Direction::Reverse,
        }
    }
}

/// One scheduled control change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Frame at which the change applies.
    pub frame: u64,
    pub speed: u8,
    #[serde(default)]
    pub direction: DirectionSetting,
}

/// Full demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Initial speed register value (0-15).
    pub speed: u8,
    pub direction: DirectionSetting,
    /// Frames to run headless.
    pub frames: u32,
    /// Control changes during the run.
    pub schedule: Vec<ScheduleEntry>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            speed: 4,
            direction: DirectionSetting::Forward,
            frames: 120,
            schedule: Vec::new(),
        }
    }
}

impl DemoConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| DemoError::io(path, e))?;
        let config = Self::from_json(&text)?;
        debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Reject values the 4-bit speed register cannot hold.
    pub fn validate(&self) -> Result<()> {
        if self.speed > MAX_SPEED {
            return Err(DemoError::config(format!(
                "speed {} out of range (0-{MAX_SPEED})",
                self.speed
            )));
        }
        if let Some(entry) = self.schedule.iter().find(|e| e.speed > MAX_SPEED) {
            return Err(DemoError::config(format!(
                "schedule entry at frame {}: speed {} out of range (0-{MAX_SPEED})",
                entry.frame, entry.speed
            )));
        }
        Ok(())
    }

    /// A capture run must produce at least one frame.
    pub fn validate_capture(&self) -> Result<()> {
        if self.frames == 0 {
            return Err(DemoError::config("capturing needs at least one frame"));
        }
        Ok(())
    }

    /// Control word for the start of the run.
    #[must_use]
    pub fn control_word(&self) -> ControlWord {
        ControlWord::new(self.speed, self.direction.into())
    }

    /// The schedule as a control queue.
    #[must_use]
    pub fn control_queue(&self) -> ControlQueue {
        let mut queue = ControlQueue::new();
        for entry in &self.schedule {
            queue.schedule(
                entry.frame,
                ControlWord::new(entry.speed, entry.direction.into()),
            );
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = DemoConfig::from_json("{}").expect("empty config parses");
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.control_word(), ControlWord::new(4, Direction::Forward));
    }

    #[test]
    fn full_config() {
        let config = DemoConfig::from_json(
            r#"{
                "speed": 3,
                "direction": "reverse",
                "frames": 10,
                "schedule": [
                    { "frame": 5, "speed": 9 },
                    { "frame": 2, "speed": 0, "direction": "reverse" }
                ]
            }"#,
        )
        .expect("config parses");

        assert_eq!(config.frames, 10);
        assert_eq!(config.control_word().bits(), 0x13);

        let mut queue = config.control_queue();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.process(2), Some(ControlWord(0x10)));
        assert_eq!(queue.process(5), Some(ControlWord(0x09)));
    }

    #[test]
    fn speed_out_of_range() {
        let err = DemoConfig::from_json(r#"{ "speed": 16 }"#).expect_err("speed 16 rejected");
        assert!(matches!(err, DemoError::Config { .. }), "{err}");

        let err = DemoConfig::from_json(r#"{ "schedule": [{ "frame": 1, "speed": 20 }] }"#)
            .expect_err("schedule speed 20 rejected");
        assert!(err.to_string().contains("frame 1"), "{err}");
    }

    #[test]
    fn zero_frames_only_rejected_for_capture() {
        let config = DemoConfig::from_json(r#"{ "frames": 0 }"#).expect("plain run accepts 0");
        let err = config.validate_capture().expect_err("capture needs a frame");
        assert!(matches!(err, DemoError::Config { .. }), "{err}");
        assert!(DemoConfig::default().validate_capture().is_ok());
    }

    #[test]
    fn unknown_direction_rejected() {
        let err = DemoConfig::from_json(r#"{ "direction": "sideways" }"#)
            .expect_err("bad direction rejected");
        assert!(matches!(err, DemoError::Json(_)), "{err}");
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(DemoConfig::from_json(r#"{ "sped": 3 }"#).is_err());
    }

    #[test]
    fn missing_file() {
        let err = DemoConfig::load(Path::new("/nonexistent/demo.json"))
            .expect_err("missing file is an error");
        assert!(matches!(err, DemoError::Io { .. }));
    }
}
