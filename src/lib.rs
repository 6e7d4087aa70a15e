//! Vacuum Chase - a vacuum cleaner that chases bouncing balls
//!
//! Core modules:
//! - `sim`: Simulation (ball kinematics, bounds, targeting, trunk arm)
//! - `renderer`: Drawing seam plus a headless tessellating renderer
//! - `platform`: Clock and input abstractions
//! - `app`: Frame loop tying the simulation to its collaborators
//! - `settings`: Runtime constants loaded at startup

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use error::ConfigError;
pub use settings::Settings;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Downward acceleration applied to every ball (units/s²)
    pub const GRAVITY: f32 = 9.8 * 8.0;
    /// Velocity kept (with sign flip) on the axis that hit a bound
    pub const RESTITUTION: f32 = 0.75;
    /// Velocity kept on the other axis when a bound is hit
    pub const TANGENT_DAMPING: f32 = 0.9;

    /// Squared tip-to-ball distance below which the ball is captured
    pub const CAPTURE_DISTANCE_SQ: f32 = 10.0;

    /// Largest frame delta fed to the simulation (avoids tunnelling after stalls)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Respawned balls appear this far above the floor
    pub const RESPAWN_HEIGHT: f32 = 200.0;
    /// Respawn velocity range, per axis
    pub const RESPAWN_SPEED: i32 = 50;
    /// Initial batch velocity range, per axis
    pub const INITIAL_SPEED: i32 = 10;
    /// Initial batch keeps this margin from top and bottom
    pub const INITIAL_MARGIN: i32 = 50;

    /// Trunk base, relative to cleaner x and field height
    pub const TRUNK_BASE_OFFSET: (f32, f32) = (0.0, 185.0);
    /// First shape control point
    pub const TRUNK_LEFT_OFFSET: (f32, f32) = (-120.0, 340.0);
    /// Second shape control point
    pub const TRUNK_RIGHT_OFFSET: (f32, f32) = (160.0, 400.0);

    /// Number of samples along the trunk curve
    pub const BEZIER_SAMPLES: usize = 101;
    /// Radius of each dot drawn along the trunk
    pub const TRUNK_DOT_RADIUS: f32 = 15.0;

    /// Control point radius (hit-test and debug drawing)
    pub const CONTROL_POINT_RADIUS: f32 = 10.0;
}

/// Colors used by the scene
pub mod palette {
    /// Build an RGBA color from 8-bit channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: [f32; 4] = rgb(33, 33, 33);
    pub const BALL: [f32; 4] = rgb(255, 23, 68);
    pub const CLEANER: [f32; 4] = rgb(61, 90, 254);
    pub const TARGET_HIGHLIGHT: [f32; 4] = rgb(255, 0, 255);
    pub const HELP_TEXT: [f32; 4] = rgb(66, 66, 66);
    pub const LABEL: [f32; 4] = rgb(255, 255, 255);
    pub const EYE_WHITE: [f32; 4] = rgb(255, 255, 255);
    pub const PUPIL: [f32; 4] = rgb(0, 0, 0);

    /// Debug colors of P0..P3
    pub const CONTROL_POINTS: [[f32; 4]; 4] = [
        rgb(255, 0, 0),
        rgb(0, 255, 0),
        rgb(0, 0, 255),
        rgb(255, 255, 0),
    ];
}

/// Squared Euclidean distance between two points
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    (a - b).length_squared()
}

/// Angle of the vector pointing from `from` to `to`
#[inline]
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
