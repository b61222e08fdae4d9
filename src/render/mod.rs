//! Render - everything between shape geometry and a 2D drawing context
//!
//! The engine never talks to a canvas directly. It drives a
//! `RenderSurface`, which is a browser canvas on wasm32 (`CanvasSurface`)
//! or a `RecordingSurface` when running headless.

#[cfg(target_arch = "wasm32")]
mod canvas;
mod draw;
mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw::{draw_marker, MARKER_RADIUS};
pub use recording::{DrawCommand, RecordingSurface};

use crate::core::Viewport;

/// The drawing operations the engine needs from a 2D context.
///
/// All coordinates are device pixels, already rounded.
pub trait RenderSurface {
    /// Current canvas size
    fn viewport(&self) -> Viewport;

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: i32, y: i32);
    fn line_to(&mut self, x: i32, y: i32);
    /// Circular arc around (x, y); angles in radians
    fn arc(&mut self, x: i32, y: i32, radius: f64, start: f64, end: f64);

    fn set_fill_style(&mut self, code: &str);
    fn set_stroke_style(&mut self, code: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_global_alpha(&mut self, alpha: f64);

    fn fill(&mut self);
    fn stroke(&mut self);
}
