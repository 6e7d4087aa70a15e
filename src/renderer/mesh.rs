//! Headless renderer that tessellates a frame into a vertex list
//!
//! Text is not rasterized; it is kept as positioned labels next to the
//! triangles so a GPU backend (or a test) can pick it up.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use super::{Rect, Renderer};

/// Advance of one glyph relative to the font size (monospace approximation)
const GLYPH_ADVANCE: f32 = 0.6;
/// Line height relative to the font size
const LINE_HEIGHT: f32 = 1.2;

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// Everything drawn during one frame
#[derive(Debug, Clone, Default)]
pub struct FrameMesh {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl FrameMesh {
    /// Raw vertex data ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Whether any vertex uses `color`
    pub fn uses_color(&self, color: [f32; 4]) -> bool {
        self.vertices.iter().any(|v| v.color == color)
    }
}

#[derive(Debug, Default)]
pub struct MeshRenderer {
    current: FrameMesh,
    /// Last presented frame
    presented: FrameMesh,
    frames_presented: u64,
    caption: String,
    fullscreen: bool,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &FrameMesh {
        &self.presented
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

impl Renderer for MeshRenderer {
    fn clear(&mut self, color: [f32; 4]) {
        self.current.clear_color = color;
        self.current.vertices.clear();
        self.current.labels.clear();
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let segments = shapes::segments_for(radius);
        self.current
            .vertices
            .extend(shapes::circle(center, radius, color, segments));
    }

    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, width: f32, color: [f32; 4]) {
        let segments = shapes::segments_for(radius);
        self.current
            .vertices
            .extend(shapes::ring(center, radius - width, radius, color, segments));
    }

    fn draw_ellipse(&mut self, rect: Rect, color: [f32; 4]) {
        let radii = rect.size * 0.5;
        let segments = shapes::segments_for(radii.max_element());
        self.current
            .vertices
            .extend(shapes::ellipse(rect.center(), radii, color, segments));
    }

    fn draw_rect(&mut self, rect: Rect, color: [f32; 4], corner_radius: f32) {
        self.current
            .vertices
            .extend(shapes::rounded_rect(rect, corner_radius, color));
    }

    fn draw_rect_outline(&mut self, rect: Rect, width: f32, color: [f32; 4]) {
        self.current
            .vertices
            .extend(shapes::rect_outline(rect, width, color));
    }

    fn draw_arc(&mut self, rect: Rect, start_angle: f32, end_angle: f32, width: f32, color: [f32; 4]) {
        let radii = rect.size * 0.5;
        let segments = shapes::segments_for(radii.max_element());
        self.current.vertices.extend(shapes::elliptical_arc(
            rect.center(),
            radii,
            width,
            start_angle,
            end_angle,
            color,
            segments,
        ));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: [f32; 4]) {
        self.current.labels.push(TextLabel {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> Vec2 {
        Vec2::new(
            text.chars().count() as f32 * size * GLYPH_ADVANCE,
            size * LINE_HEIGHT,
        )
    }

    fn set_caption(&mut self, caption: &str) {
        if self.caption != caption {
            self.caption = caption.to_string();
        }
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        log::info!("Fullscreen: {}", self.fullscreen);
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.current);
        self.frames_presented += 1;
    }
}
