//! Simulation module
//!
//! All per-frame logic lives here. This module must stay pure:
//! - Frame delta is passed in explicitly
//! - Seeded RNG only
//! - Stable iteration order (spawn order, by ball ID)
//! - No rendering or platform dependencies

pub mod bezier;
pub mod collision;
pub mod state;
pub mod target;
pub mod tick;

pub use bezier::{evaluate_cubic_bezier, layout_control_points, point_at, sample_curve};
pub use collision::{Bounce, Bounds, resolve_ground, resolve_walls};
pub use state::{Ball, BallId, Cleaner, ControlPoint, INITIAL_POINTS, SimState, TIP};
pub use target::nearest_ball;
pub use tick::{TickInput, TickOutcome, tick};
