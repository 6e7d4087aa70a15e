//! Simulation state and core types
//!
//! Balls live in a single vector owned by [`SimState`] and are addressed by a
//! stable [`BallId`]; the current target is stored as an id so capturing a
//! ball can never leave a dangling reference behind.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{Bounce, Bounds, resolve_ground, resolve_walls};
use crate::consts::*;
use crate::settings::Settings;

/// Stable ball identifier (never reused within a run)
pub type BallId = u32;

/// A bouncing ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub id: BallId,
    pub pos: Vec2,
    /// Per-frame displacement on both axes; gravity accrues into `vel.y` per second
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(id: BallId, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
        }
    }

    /// Advance the ball by one frame lasting `dt` seconds, then keep it
    /// inside `bounds`. Returns the bounces that happened (vertical, horizontal).
    pub fn integrate(&mut self, dt: f32, bounds: &Bounds) -> [Option<Bounce>; 2] {
        self.vel.y += GRAVITY * dt;
        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y - 0.5 * GRAVITY * dt * dt;

        let vertical = resolve_ground(&mut self.pos, &mut self.vel, self.radius, bounds);
        let horizontal = resolve_walls(&mut self.pos, &mut self.vel, self.radius, bounds);
        [vertical, horizontal]
    }
}

/// One of the four points defining the trunk curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub pos: Vec2,
    pub radius: f32,
    /// Whether the debug overlay may drag this point
    pub movable: bool,
}

impl ControlPoint {
    pub const fn new(x: f32, y: f32, movable: bool) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius: CONTROL_POINT_RADIUS,
            movable,
        }
    }
}

/// Index of the trunk tip among the control points
pub const TIP: usize = 3;

/// Starting control points: base, two shape points, tip
pub const INITIAL_POINTS: [ControlPoint; 4] = [
    ControlPoint::new(300.0, 500.0, false),
    ControlPoint::new(400.0, 460.0, true),
    ControlPoint::new(400.0, 550.0, true),
    ControlPoint::new(500.0, 560.0, false),
];

/// The vacuum cleaner body
#[derive(Debug, Clone, PartialEq)]
pub struct Cleaner {
    /// Horizontal position of the base
    pub x: f32,
    /// Horizontal step per frame
    pub speed: f32,
    /// Maximum trunk tip travel per frame
    pub trunk_speed: f32,
    /// Balls captured in the current batch
    pub captured: u32,
    /// Balls per batch
    pub total: u32,
}

impl Cleaner {
    /// Fraction of the current batch already collected, in [0, 1]
    pub fn fill_factor(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.captured as f32 / self.total as f32).clamp(0.0, 1.0)
    }

    /// Step toward `target_x` by exactly one `speed` increment
    pub fn step_toward(&mut self, target_x: f32) {
        if target_x < self.x {
            self.x -= self.speed;
        } else if target_x > self.x {
            self.x += self.speed;
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub bounds: Bounds,
    pub ball_radius: f32,
    /// Live balls, in spawn order
    pub balls: Vec<Ball>,
    /// Trunk control points [base, left, right, tip]
    pub points: [ControlPoint; 4],
    pub cleaner: Cleaner,
    /// Ball currently chased by the trunk
    pub target: Option<BallId>,
    /// Completed respawn cycles
    pub cycle: u32,
    /// Balls captured since start, across all cycles
    pub total_captured: u64,
    rng: Pcg32,
    next_id: BallId,
}

impl SimState {
    /// Create a new simulation with a randomly scattered first batch
    pub fn new(settings: &Settings) -> Self {
        let mut state = Self {
            bounds: Bounds::new(settings.field_width, settings.field_height),
            ball_radius: settings.ball_radius,
            balls: Vec::with_capacity(settings.balls_count as usize),
            points: INITIAL_POINTS,
            cleaner: Cleaner {
                x: settings.cleaner_start_x,
                speed: settings.cleaner_speed,
                trunk_speed: settings.trunk_speed,
                captured: 0,
                total: settings.balls_count,
            },
            target: None,
            cycle: 0,
            total_captured: 0,
            rng: Pcg32::seed_from_u64(settings.seed),
            next_id: 1,
        };

        state.spawn_scattered();

        state
    }

    /// Allocate a new ball ID
    pub fn next_ball_id(&mut self) -> BallId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a full batch spread over the field with small velocities
    pub fn spawn_scattered(&mut self) {
        let width = self.bounds.width as i32;
        let height = self.bounds.height as i32;
        for _ in 0..self.cleaner.total {
            let pos = Vec2::new(
                self.rng.random_range(0..=width) as f32,
                self.rng.random_range(INITIAL_MARGIN..=(height - INITIAL_MARGIN).max(INITIAL_MARGIN))
                    as f32,
            );
            let vel = self.random_velocity(INITIAL_SPEED);
            self.push_ball(pos, vel);
        }
    }

    /// Spawn a full batch bursting out of the cleaner and reset the fill level
    pub fn respawn(&mut self) {
        self.cleaner.captured = 0;
        self.cycle += 1;
        let origin = Vec2::new(self.cleaner.x, self.bounds.height - RESPAWN_HEIGHT);
        for _ in 0..self.cleaner.total {
            let vel = self.random_velocity(RESPAWN_SPEED);
            self.push_ball(origin, vel);
        }
        log::info!(
            "Respawned {} balls at x={} (cycle {})",
            self.cleaner.total,
            self.cleaner.x,
            self.cycle
        );
    }

    fn random_velocity(&mut self, range: i32) -> Vec2 {
        Vec2::new(
            self.rng.random_range(-range..=range) as f32,
            self.rng.random_range(-range..=range) as f32,
        )
    }

    fn push_ball(&mut self, pos: Vec2, vel: Vec2) {
        let id = self.next_ball_id();
        self.balls.push(Ball::new(id, pos, vel, self.ball_radius));
    }

    /// Look up a live ball
    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    /// Remove a ball from the live set, clearing the target if it pointed there
    pub fn remove_ball(&mut self, id: BallId) -> Option<Ball> {
        let idx = self.balls.iter().position(|b| b.id == id)?;
        if self.target == Some(id) {
            self.target = None;
        }
        Some(self.balls.remove(idx))
    }

    /// Live target ball, if any
    pub fn target_ball(&self) -> Option<&Ball> {
        self.target.and_then(|id| self.ball(id))
    }

    /// Current trunk tip position
    #[inline]
    pub fn tip(&self) -> Vec2 {
        self.points[TIP].pos
    }
}
