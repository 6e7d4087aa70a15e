//! Ball response to the play-field bounds
//!
//! Each axis is resolved independently. A crossed edge always clamps the
//! ball back inside, but the velocity only flips when the ball is still
//! heading into the edge, so a ball already moving away is not re-bounced.

use glam::Vec2;

use crate::consts::{RESTITUTION, TANGENT_DAMPING};

/// Play-field rectangle anchored at the origin (screen space, +y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a circle lies fully inside the field
    pub fn contains_circle(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

/// Which edge a ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce {
    Top,
    Bottom,
    Left,
    Right,
}

/// Resolve the ceiling and the floor
pub fn resolve_ground(pos: &mut Vec2, vel: &mut Vec2, radius: f32, bounds: &Bounds) -> Option<Bounce> {
    if pos.y - radius < 0.0 {
        pos.y = radius;
        if vel.y < 0.0 {
            vel.y *= -RESTITUTION;
            vel.x *= TANGENT_DAMPING;
            return Some(Bounce::Top);
        }
    } else if pos.y + radius > bounds.height {
        pos.y = bounds.height - radius;
        if vel.y > 0.0 {
            vel.y *= -RESTITUTION;
            vel.x *= TANGENT_DAMPING;
            return Some(Bounce::Bottom);
        }
    }
    None
}

/// Resolve the left and right walls
pub fn resolve_walls(pos: &mut Vec2, vel: &mut Vec2, radius: f32, bounds: &Bounds) -> Option<Bounce> {
    if pos.x - radius <= 0.0 {
        pos.x = radius;
        if vel.x < 0.0 {
            vel.x *= -RESTITUTION;
            vel.y *= TANGENT_DAMPING;
            return Some(Bounce::Left);
        }
    } else if pos.x + radius > bounds.width {
        pos.x = bounds.width - radius;
        // A ball resting against the right wall still counts as moving into it
        if vel.x >= 0.0 {
            vel.x *= -RESTITUTION;
            vel.y *= TANGENT_DAMPING;
            return Some(Bounce::Right);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: Bounds = Bounds::new(1280.0, 720.0);

    #[test]
    fn test_floor_bounce() {
        let mut pos = Vec2::new(100.0, 715.0);
        let mut vel = Vec2::new(10.0, 20.0);

        let hit = resolve_ground(&mut pos, &mut vel, 10.0, &FIELD);
        assert_eq!(hit, Some(Bounce::Bottom));
        assert_eq!(pos.y, 710.0);
        assert_eq!(vel, Vec2::new(9.0, -15.0));
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut pos = Vec2::new(100.0, 4.0);
        let mut vel = Vec2::new(-10.0, -8.0);

        let hit = resolve_ground(&mut pos, &mut vel, 10.0, &FIELD);
        assert_eq!(hit, Some(Bounce::Top));
        assert_eq!(pos.y, 10.0);
        assert_eq!(vel, Vec2::new(-9.0, 6.0));
    }

    #[test]
    fn test_clamp_without_rebounce() {
        // Already moving up, out of the floor: clamp only
        let mut pos = Vec2::new(100.0, 719.0);
        let mut vel = Vec2::new(10.0, -3.0);

        assert_eq!(resolve_ground(&mut pos, &mut vel, 10.0, &FIELD), None);
        assert_eq!(pos.y, 710.0);
        assert_eq!(vel, Vec2::new(10.0, -3.0));
    }

    #[test]
    fn test_wall_bounces() {
        let mut pos = Vec2::new(5.0, 300.0);
        let mut vel = Vec2::new(-4.0, 10.0);
        assert_eq!(resolve_walls(&mut pos, &mut vel, 10.0, &FIELD), Some(Bounce::Left));
        assert_eq!(pos.x, 10.0);
        assert_eq!(vel, Vec2::new(3.0, 9.0));

        let mut pos = Vec2::new(1275.0, 300.0);
        let mut vel = Vec2::new(4.0, 10.0);
        assert_eq!(resolve_walls(&mut pos, &mut vel, 10.0, &FIELD), Some(Bounce::Right));
        assert_eq!(pos.x, 1270.0);
        assert_eq!(vel, Vec2::new(-3.0, 9.0));
    }

    #[test]
    fn test_left_wall_touching_edge_is_clamped() {
        let mut pos = Vec2::new(10.0, 300.0);
        let mut vel = Vec2::new(2.0, 0.0);
        assert_eq!(resolve_walls(&mut pos, &mut vel, 10.0, &FIELD), None);
        assert_eq!(pos.x, 10.0);
        assert_eq!(vel.x, 2.0);
    }

    #[test]
    fn test_right_wall_stationary_ball_bounces() {
        let mut pos = Vec2::new(1279.0, 300.0);
        let mut vel = Vec2::new(0.0, 5.0);
        assert_eq!(resolve_walls(&mut pos, &mut vel, 10.0, &FIELD), Some(Bounce::Right));
        assert_eq!(vel.y, 4.5);
    }

    #[test]
    fn test_inside_untouched() {
        let mut pos = Vec2::new(640.0, 360.0);
        let mut vel = Vec2::new(3.0, -2.0);
        assert_eq!(resolve_ground(&mut pos, &mut vel, 10.0, &FIELD), None);
        assert_eq!(resolve_walls(&mut pos, &mut vel, 10.0, &FIELD), None);
        assert_eq!(pos, Vec2::new(640.0, 360.0));
        assert!(FIELD.contains_circle(pos, 10.0));
    }
}
