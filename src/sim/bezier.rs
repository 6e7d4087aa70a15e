//! Trunk geometry: control-point layout and cubic Bezier evaluation
//!
//! The trunk is a cubic curve through four control points. The base and
//! the two shape points are re-derived from the cleaner position every
//! frame; the tip is owned by the arm controller in `tick`.

use glam::Vec2;

use super::state::{ControlPoint, TIP};
use crate::consts::*;

/// Place base, left and right control points relative to the cleaner.
/// The tip is left untouched.
pub fn layout_control_points(points: &mut [ControlPoint; 4], cleaner_x: f32, field_height: f32) {
    let offsets = [TRUNK_BASE_OFFSET, TRUNK_LEFT_OFFSET, TRUNK_RIGHT_OFFSET];
    for (point, (dx, up)) in points[..TIP].iter_mut().zip(offsets) {
        point.pos = Vec2::new(cleaner_x + dx, field_height - up);
    }
}

/// Evaluate the cubic Bernstein blend of `p` at `t` in [0, 1]
///
/// Exact at the endpoints: `t = 0` yields `p[0]`, `t = 1` yields `p[3]`.
#[inline]
pub fn evaluate_cubic_bezier(p: &[Vec2; 4], t: f32) -> Vec2 {
    let u = 1.0 - t;
    p[0] * (u * u * u) + p[1] * (3.0 * u * u * t) + p[2] * (3.0 * u * t * t) + p[3] * (t * t * t)
}

/// Control point positions in curve order
pub fn positions(points: &[ControlPoint; 4]) -> [Vec2; 4] {
    points.map(|p| p.pos)
}

/// Sample the curve at evenly spaced parameters from 0 to 1 inclusive
pub fn sample_curve(p: &[Vec2; 4]) -> Vec<Vec2> {
    let last = (BEZIER_SAMPLES - 1) as f32;
    (0..BEZIER_SAMPLES)
        .map(|i| evaluate_cubic_bezier(p, i as f32 / last))
        .collect()
}

/// Find the topmost control point under `pos` (later points are drawn on top)
pub fn point_at(points: &[ControlPoint], pos: Vec2) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .rev()
        .find(|(_, p)| p.pos.distance(pos) <= p.radius)
        .map(|(i, _)| i)
}
