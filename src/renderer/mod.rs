//! Rendering module
//!
//! The simulation never draws directly: [`scene`] describes each frame
//! through the [`Renderer`] trait, and a backend turns the calls into pixels.
//! [`MeshRenderer`] is the built-in backend; it tessellates everything into
//! GPU-ready triangles without needing a window.

pub mod mesh;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use mesh::{FrameMesh, MeshRenderer, TextLabel};
pub use vertex::Vertex;

use glam::Vec2;

/// Axis-aligned rectangle (top-left corner + size, screen space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}

/// Drawing and window services used by the scene
pub trait Renderer {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: [f32; 4]);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);

    /// Circle outline of the given stroke width, growing inward
    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, width: f32, color: [f32; 4]);

    /// Filled ellipse inscribed in `rect`
    fn draw_ellipse(&mut self, rect: Rect, color: [f32; 4]);

    /// Filled rectangle; `corner_radius` 0 gives square corners
    fn draw_rect(&mut self, rect: Rect, color: [f32; 4], corner_radius: f32);

    /// Rectangle outline of the given stroke width, growing inward
    fn draw_rect_outline(&mut self, rect: Rect, width: f32, color: [f32; 4]);

    /// Elliptical arc inscribed in `rect`, angles counter-clockwise from +x
    /// as seen on screen, stroke growing inward
    fn draw_arc(&mut self, rect: Rect, start_angle: f32, end_angle: f32, width: f32, color: [f32; 4]);

    /// Text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: [f32; 4]);

    /// Width and height `text` occupies at `size`
    fn measure_text(&self, text: &str, size: f32) -> Vec2;

    fn set_caption(&mut self, _caption: &str) {}

    fn toggle_fullscreen(&mut self) {}

    /// Finish the frame
    fn present(&mut self) {}
}
