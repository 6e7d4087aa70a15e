//! Shape generation for 2D primitives
//!
//! Every shape is emitted as a triangle list.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::Rect;
use super::vertex::Vertex;

/// Segment count that keeps edges smooth at a given radius
pub fn segments_for(radius: f32) -> u32 {
    ((radius * 1.5) as u32).clamp(12, 64)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    fan(center, Vec2::splat(radius), 0.0, TAU, color, segments)
}

/// Generate vertices for a filled ellipse with the given half-axes
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    fan(center, radii, 0.0, TAU, color, segments)
}

/// Triangle fan from `center` sweeping `start..end` (screen angles, +y down)
fn fan(center: Vec2, radii: Vec2, start: f32, end: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(1);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let span = end - start;

    for i in 0..segments {
        let theta1 = start + (i as f32 / segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / segments as f32) * span;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    elliptical_band(
        center,
        Vec2::splat(inner_radius.max(0.0)),
        Vec2::splat(outer_radius),
        0.0,
        TAU,
        color,
        segments,
    )
}

/// Generate vertices for an elliptical arc band
///
/// Angles run counter-clockwise as seen on screen (the y axis is flipped),
/// so `0..PI` covers the upper half.
pub fn elliptical_arc(
    center: Vec2,
    outer: Vec2,
    width: f32,
    start_angle: f32,
    end_angle: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let inner = (outer - Vec2::splat(width)).max(Vec2::ZERO);
    // Screen y points down: negate angles to keep them counter-clockwise
    elliptical_band(center, inner, outer, -start_angle, -end_angle, color, segments)
}

fn elliptical_band(
    center: Vec2,
    inner: Vec2,
    outer: Vec2,
    start: f32,
    end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let span = end - start;
    let at = |radii: Vec2, theta: f32| center + radii * Vec2::new(theta.cos(), theta.sin());

    for i in 0..segments {
        let theta1 = start + (i as f32 / segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / segments as f32) * span;

        let inner1 = at(inner, theta1);
        let outer1 = at(outer, theta1);
        let inner2 = at(inner, theta2);
        let outer2 = at(outer, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(rect: Rect, color: [f32; 4]) -> Vec<Vertex> {
    if rect.size.x <= 0.0 || rect.size.y <= 0.0 {
        return Vec::new();
    }
    let (min, max) = (rect.pos, rect.max());
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a rectangle with rounded corners
pub fn rounded_rect(r: Rect, corner_radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let radius = corner_radius.min(r.size.x / 2.0).min(r.size.y / 2.0);
    if radius <= 0.0 {
        return rect(r, color);
    }

    let Rect { pos, size } = r;
    let mut vertices = Vec::new();
    // Cross of three rectangles
    vertices.extend(rect(Rect::new(pos.x + radius, pos.y, size.x - 2.0 * radius, size.y), color));
    vertices.extend(rect(Rect::new(pos.x, pos.y + radius, radius, size.y - 2.0 * radius), color));
    vertices.extend(rect(
        Rect::new(pos.x + size.x - radius, pos.y + radius, radius, size.y - 2.0 * radius),
        color,
    ));

    // Quarter circles in the corners
    let segments = segments_for(radius) / 4 + 2;
    let corners = [
        (Vec2::new(pos.x + radius, pos.y + radius), PI),
        (Vec2::new(pos.x + size.x - radius, pos.y + radius), PI + FRAC_PI_2),
        (Vec2::new(pos.x + size.x - radius, pos.y + size.y - radius), 0.0),
        (Vec2::new(pos.x + radius, pos.y + size.y - radius), FRAC_PI_2),
    ];
    for (center, start) in corners {
        vertices.extend(fan(center, Vec2::splat(radius), start, start + FRAC_PI_2, color, segments));
    }

    vertices
}

/// Generate vertices for a rectangle outline, stroke growing inward
pub fn rect_outline(r: Rect, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let Rect { pos, size } = r;
    let w = width.min(size.x / 2.0).min(size.y / 2.0);
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(Rect::new(pos.x, pos.y, size.x, w), color));
    vertices.extend(rect(Rect::new(pos.x, pos.y + size.y - w, size.x, w), color));
    vertices.extend(rect(Rect::new(pos.x, pos.y + w, w, size.y - 2.0 * w), color));
    vertices.extend(rect(Rect::new(pos.x + size.x - w, pos.y + w, w, size.y - 2.0 * w), color));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::new(10.0, 10.0), 5.0, WHITE, 16);
        assert_eq!(verts.len(), 16 * 3);
        for v in verts.iter().skip(1).step_by(3) {
            let p = Vec2::from(v.position);
            assert!((p.distance(Vec2::new(10.0, 10.0)) - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rect_corners() {
        let verts = rect(Rect::new(1.0, 2.0, 3.0, 4.0), WHITE);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].position, [1.0, 2.0]);
        assert_eq!(verts[5].position, [4.0, 6.0]);
        assert!(rect(Rect::new(0.0, 0.0, 0.0, 4.0), WHITE).is_empty());
    }

    #[test]
    fn test_rounded_rect_stays_inside() {
        let r = Rect::new(0.0, 0.0, 160.0, 15.0);
        let verts = rounded_rect(r, 10.0, WHITE);
        assert!(!verts.is_empty());
        for v in &verts {
            let p = Vec2::from(v.position);
            assert!(p.x >= -1e-3 && p.x <= 160.0 + 1e-3);
            assert!(p.y >= -1e-3 && p.y <= 15.0 + 1e-3);
        }
    }

    #[test]
    fn test_upper_half_arc() {
        // 0..PI on screen is the top half: no vertex below the center line
        let center = Vec2::new(100.0, 100.0);
        let verts = elliptical_arc(center, Vec2::new(70.0, 50.0), 50.0, 0.0, PI, WHITE, 32);
        assert_eq!(verts.len(), 32 * 6);
        for v in &verts {
            assert!(v.position[1] <= center.y + 1e-3);
        }
    }

    #[test]
    fn test_ring_thickness() {
        let verts = ring(Vec2::ZERO, 10.0, 15.0, WHITE, 12);
        for v in &verts {
            let d = Vec2::from(v.position).length();
            assert!((9.999..=15.001).contains(&d));
        }
    }
}
