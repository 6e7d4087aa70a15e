//! Per-frame simulation step
//!
//! Order within a frame:
//! 1. Respawn a fresh batch if the live set is empty
//! 2. Acquire the nearest ball if there is no target
//! 3. Lay out the trunk control points around the cleaner (+ debug drag)
//! 4. Integrate every ball and resolve bounds
//! 5. Step the cleaner toward the target
//! 6. Move the trunk tip toward the target
//! 7. Capture the target if the tip reached it

use glam::Vec2;

use super::bezier::layout_control_points;
use super::state::{BallId, SimState, TIP};
use super::target::nearest_ball;
use crate::consts::CAPTURE_DISTANCE_SQ;
use crate::{bearing, distance_squared};

/// Input overlay for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Control point held by the debug drag, and where the cursor is
    pub drag: Option<(usize, Vec2)>,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// A new batch was spawned at the start of the tick
    pub respawned: bool,
    /// Target picked this tick
    pub acquired: Option<BallId>,
    /// Ball captured this tick
    pub captured: Option<BallId>,
    /// Number of ball/bound bounces
    pub bounces: usize,
}

/// Advance the simulation by one frame lasting `dt` seconds
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    if state.balls.is_empty() {
        state.respawn();
        outcome.respawned = true;
    }

    if state.target.is_none() {
        state.target = nearest_ball(state.tip(), &state.balls).map(|b| b.id);
        if let Some(id) = state.target {
            log::debug!("Target acquired: ball {}", id);
        }
        outcome.acquired = state.target;
    }

    layout_control_points(&mut state.points, state.cleaner.x, state.bounds.height);
    if let Some((idx, pos)) = input.drag {
        if let Some(point) = state.points.get_mut(idx).filter(|p| p.movable) {
            point.pos = pos;
        }
    }

    let bounds = state.bounds;
    for ball in &mut state.balls {
        for bounce in ball.integrate(dt, &bounds).into_iter().flatten() {
            log::trace!("Ball {} bounced off {:?}", ball.id, bounce);
            outcome.bounces += 1;
        }
    }

    let Some(target) = state.target_ball().map(|b| b.pos) else {
        return outcome;
    };

    state.cleaner.step_toward(target.x);

    let tip = state.tip();
    let angle = bearing(tip, target);
    let step = tip.distance(target).min(state.cleaner.trunk_speed);
    state.points[TIP].pos = (tip + Vec2::new(angle.cos(), angle.sin()) * step).trunc();

    if distance_squared(state.tip(), target) < CAPTURE_DISTANCE_SQ {
        let target_id = state.target;
        if let Some(ball) = target_id.and_then(|id| state.remove_ball(id)) {
            state.cleaner.captured += 1;
            state.total_captured += 1;
            log::debug!(
                "Captured ball {} ({}/{})",
                ball.id,
                state.cleaner.captured,
                state.cleaner.total
            );
            outcome.captured = Some(ball.id);
        }
    }

    outcome
}
