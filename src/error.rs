//! Startup configuration errors
//!
//! The frame loop itself never fails; everything that can go wrong is caught
//! when settings are loaded and validated.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field dimension leaves no room for a ball between the bounds
    #[error("field {width}x{height} is too small, both sides must exceed {min}")]
    FieldTooSmall { width: f32, height: f32, min: f32 },

    #[error("balls_count must be at least 1")]
    InvalidBallCount,

    #[error("invalid frame rate limits: min {min}, max {max}, initial {initial}")]
    InvalidFrameRate { min: u32, max: u32, initial: u32 },

    /// A speed or size that has to be strictly positive
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}
