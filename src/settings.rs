//! Runtime settings
//!
//! Loaded once at startup from `vacuum_settings.json` (if present) and
//! validated before the loop starts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Simulation and pacing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    /// Play-field width in pixels
    pub field_width: f32,
    /// Play-field height in pixels
    pub field_height: f32,

    // === Balls ===
    /// Balls per batch (also the denominator of the fill factor)
    pub balls_count: u32,
    pub ball_radius: f32,
    /// RNG seed for spawn positions and velocities
    pub seed: u64,

    // === Cleaner ===
    pub cleaner_start_x: f32,
    /// Horizontal step per frame
    pub cleaner_speed: f32,
    /// Maximum trunk tip travel per frame
    pub trunk_speed: f32,

    // === Frame pacing ===
    pub initial_fps: u32,
    pub min_fps: u32,
    pub max_fps: u32,
    /// Cap change per up/down key press
    pub fps_step: u32,

    /// Frames to run when there is no window (native binary)
    pub headless_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: 1280.0,
            field_height: 720.0,

            balls_count: 100,
            ball_radius: 10.0,
            seed: 0x5eed_ba11,

            cleaner_start_x: 400.0,
            cleaner_speed: 8.0,
            trunk_speed: 10.0,

            initial_fps: 60,
            min_fps: 10,
            max_fps: 120,
            fps_step: 10,

            headless_frames: 600,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    const FILE_NAME: &'static str = "vacuum_settings.json";

    /// Load settings from the working directory, falling back to defaults
    /// when the file is missing or unreadable. The result is validated.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(Path::new(Self::FILE_NAME))
    }

    /// Like [`Settings::load`], reading from `path`
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let settings = if path.exists() {
            match Self::load_from(path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            log::info!("Using default settings");
            Self::default()
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON file (not validated)
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse settings from a JSON string; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that the settings describe a usable simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("ball_radius", self.ball_radius),
            ("cleaner_speed", self.cleaner_speed),
            ("trunk_speed", self.trunk_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let min = 2.0 * self.ball_radius;
        if !(self.field_width > min && self.field_height > min) {
            return Err(ConfigError::FieldTooSmall {
                width: self.field_width,
                height: self.field_height,
                min,
            });
        }

        if self.balls_count == 0 {
            return Err(ConfigError::InvalidBallCount);
        }

        if self.min_fps == 0
            || self.min_fps > self.max_fps
            || !(self.min_fps..=self.max_fps).contains(&self.initial_fps)
        {
            return Err(ConfigError::InvalidFrameRate {
                min: self.min_fps,
                max: self.max_fps,
                initial: self.initial_fps,
            });
        }

        Ok(())
    }

    /// Raise the frame-rate cap by one step, saturating at `max_fps`
    pub fn faster(&self, fps: u32) -> u32 {
        fps.saturating_add(self.fps_step).min(self.max_fps)
    }

    /// Lower the frame-rate cap by one step, saturating at `min_fps`
    pub fn slower(&self, fps: u32) -> u32 {
        fps.saturating_sub(self.fps_step).max(self.min_fps)
    }
}
