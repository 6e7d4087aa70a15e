//! Target selection

use glam::Vec2;

use super::state::Ball;
use crate::distance_squared;

/// Ball closest to `reference`, or `None` when there are no balls.
/// Ties go to the ball that comes first.
pub fn nearest_ball(reference: Vec2, balls: &[Ball]) -> Option<&Ball> {
    let mut best: Option<(&Ball, f32)> = None;
    for ball in balls {
        let dist = distance_squared(reference, ball.pos);
        match best {
            Some((_, best_dist)) if best_dist <= dist => {}
            _ => best = Some((ball, dist)),
        }
    }
    best.map(|(ball, _)| ball)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(id: u32, x: f32, y: f32) -> Ball {
        Ball::new(id, Vec2::new(x, y), Vec2::ZERO, 10.0)
    }

    #[test]
    fn test_picks_nearest() {
        // Squared distances 4, 1, 9
        let balls = [ball_at(1, 2.0, 0.0), ball_at(2, 0.0, 1.0), ball_at(3, 0.0, -3.0)];
        assert_eq!(nearest_ball(Vec2::ZERO, &balls).map(|b| b.id), Some(2));
    }

    #[test]
    fn test_empty() {
        assert!(nearest_ball(Vec2::ZERO, &[]).is_none());
    }

    #[test]
    fn test_tie_keeps_first() {
        let balls = [ball_at(7, 3.0, 0.0), ball_at(8, -3.0, 0.0)];
        assert_eq!(nearest_ball(Vec2::ZERO, &balls).map(|b| b.id), Some(7));
    }
}
