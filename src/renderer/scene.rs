//! Scene drawing
//!
//! Describes a [`SimState`] through the [`Renderer`] trait. Nothing here
//! mutates the simulation; debug highlights are decided at draw time.

use glam::Vec2;
use std::f32::consts::PI;

use super::{Rect, Renderer};
use crate::consts::TRUNK_DOT_RADIUS;
use crate::palette;
use crate::sim::bezier::{positions, sample_curve};
use crate::sim::{ControlPoint, SimState};

const HELP_LINES: [&str; 5] = [
    "d -- debug",
    "f -- fullscreen",
    "up -- faster",
    "down -- slower",
    "esc -- exit",
];
const HELP_FONT_SIZE: f32 = 20.0;
const LABEL_FONT_SIZE: f32 = 16.0;

/// Key bindings in the top-left corner
pub fn draw_help(r: &mut impl Renderer) {
    let mut dy = 0.0;
    for line in HELP_LINES {
        let height = r.measure_text(line, HELP_FONT_SIZE).y;
        r.draw_text(line, Vec2::new(0.0, dy), HELP_FONT_SIZE, palette::HELP_TEXT);
        dy += height;
    }
}

/// Draw the whole simulation (cleaner, balls, trunk and debug overlay)
pub fn draw_scene(r: &mut impl Renderer, state: &SimState, debug: bool) {
    let target = state.target_ball().map(|b| b.pos);
    draw_cleaner(
        r,
        state.cleaner.x,
        state.bounds.height,
        target,
        state.cleaner.fill_factor(),
    );

    for ball in &state.balls {
        let color = if debug && state.target == Some(ball.id) {
            palette::TARGET_HIGHLIGHT
        } else {
            palette::BALL
        };
        r.draw_circle(ball.pos, ball.radius, color);
    }

    draw_trunk(r, &state.points);

    if debug {
        draw_control_points(r, &state.points);
    }
}

/// Cleaner body: wheels, base, collection bin, dome and eyes
pub fn draw_cleaner(r: &mut impl Renderer, x: f32, h: f32, target: Option<Vec2>, fill_factor: f32) {
    let color = palette::CLEANER;

    r.draw_circle_outline(Vec2::new(x - 50.0, h - 15.0), 15.0, 5.0, color);
    r.draw_circle_outline(Vec2::new(x + 50.0, h - 15.0), 15.0, 5.0, color);
    r.draw_rect(Rect::new(x - 80.0, h - 30.0, 160.0, 15.0), color, 10.0);
    r.draw_rect(Rect::new(x - 75.0, h - 35.0, 150.0, 15.0), color, 10.0);

    // Bin contents rise with the fill factor
    r.draw_rect(
        Rect::new(
            x - 68.0,
            h - 130.0 + 100.0 * (1.0 - fill_factor),
            136.0,
            100.0 * fill_factor,
        ),
        palette::BALL,
        0.0,
    );
    r.draw_rect_outline(Rect::new(x - 70.0, h - 130.0, 140.0, 100.0), 5.0, color);
    r.draw_rect(Rect::new(x - 80.0, h - 140.0, 160.0, 15.0), color, 10.0);
    r.draw_arc(Rect::new(x - 70.0, h - 190.0, 140.0, 100.0), 0.0, PI, 50.0, color);

    draw_eye(r, Vec2::new(x - 30.0, h - 175.0), target);
    draw_eye(r, Vec2::new(x + 5.0, h - 175.0), target);
}

/// Eye with its top-left corner at `corner`; the pupil leans toward `target`
fn draw_eye(r: &mut impl Renderer, corner: Vec2, target: Option<Vec2>) {
    let angle = target.map_or(0.0, |t| crate::bearing(corner, t));
    let pupil = corner + Vec2::new(10.0, 15.0) + Vec2::new(angle.cos(), angle.sin()) * 5.0;
    r.draw_ellipse(Rect::new(corner.x, corner.y, 25.0, 30.0), palette::EYE_WHITE);
    r.draw_circle(pupil, 5.0, palette::PUPIL);
}

/// The trunk: fixed-size dots along the Bezier curve
pub fn draw_trunk(r: &mut impl Renderer, points: &[ControlPoint; 4]) {
    for p in sample_curve(&positions(points)) {
        r.draw_circle(p, TRUNK_DOT_RADIUS, palette::CLEANER);
    }
}

/// Control points with their coordinates underneath
pub fn draw_control_points(r: &mut impl Renderer, points: &[ControlPoint; 4]) {
    for (point, color) in points.iter().zip(palette::CONTROL_POINTS) {
        r.draw_circle(point.pos, point.radius, color);

        let label = format!("({}, {})", point.pos.x as i32, point.pos.y as i32);
        let width = r.measure_text(&label, LABEL_FONT_SIZE).x;
        r.draw_text(
            &label,
            Vec2::new(point.pos.x - width / 2.0, point.pos.y + point.radius + 2.0),
            LABEL_FONT_SIZE,
            palette::LABEL,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MeshRenderer;
    use crate::settings::Settings;

    fn render(state: &SimState, debug: bool) -> MeshRenderer {
        let mut r = MeshRenderer::new();
        r.clear(palette::BACKGROUND);
        draw_help(&mut r);
        draw_scene(&mut r, state, debug);
        r.present();
        r
    }

    #[test]
    fn test_help_lines_stack() {
        let state = SimState::new(&Settings::default());
        let r = render(&state, false);
        let labels = &r.last_frame().labels;
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0].text, "d -- debug");
        assert_eq!(labels[0].pos, Vec2::ZERO);
        assert!(labels.windows(2).all(|w| w[1].pos.y > w[0].pos.y));
    }

    #[test]
    fn test_debug_overlay_labels_points() {
        let state = SimState::new(&Settings::default());
        let r = render(&state, true);
        let labels = &r.last_frame().labels;
        // Help text plus one label per control point
        assert_eq!(labels.len(), 9);
        assert_eq!(labels[8].text, "(500, 560)");
    }

    #[test]
    fn test_target_highlight_only_in_debug() {
        let mut state = SimState::new(&Settings {
            balls_count: 3,
            ..Default::default()
        });
        state.target = Some(state.balls[0].id);

        assert!(!render(&state, false).last_frame().uses_color(palette::TARGET_HIGHLIGHT));
        assert!(render(&state, true).last_frame().uses_color(palette::TARGET_HIGHLIGHT));
    }

    #[test]
    fn test_empty_bin_draws_nothing() {
        let mut r = MeshRenderer::new();
        r.clear(palette::BACKGROUND);
        draw_cleaner(&mut r, 400.0, 720.0, None, 0.0);
        r.present();
        // Only the bin contents use the ball color
        assert!(!r.last_frame().uses_color(palette::BALL));

        r.clear(palette::BACKGROUND);
        draw_cleaner(&mut r, 400.0, 720.0, None, 0.5);
        r.present();
        assert!(r.last_frame().uses_color(palette::BALL));
    }
}
