use web_sys::CanvasRenderingContext2d;

use crate::core::Viewport;

use super::RenderSurface;

/// `RenderSurface` over a browser 2D context.
///
/// The viewport is read from the context's canvas on every frame so a
/// resized canvas is picked up without re-creating the surface.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// Arc failures since creation (the context rejects negative radii)
    pub arc_errors: u32,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, arc_errors: 0 }
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl RenderSurface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        match self.ctx.canvas() {
            Some(canvas) => Viewport::new(canvas.width() as f64, canvas.height() as f64),
            None => Viewport::default(),
        }
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn arc(&mut self, x: i32, y: i32, radius: f64, start: f64, end: f64) {
        if self.ctx.arc(x as f64, y as f64, radius, start, end).is_err() {
            self.arc_errors = self.arc_errors.saturating_add(1);
        }
    }

    fn set_fill_style(&mut self, code: &str) {
        self.ctx.set_fill_style_str(code);
    }

    fn set_stroke_style(&mut self, code: &str) {
        self.ctx.set_stroke_style_str(code);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
