use crate::core::Viewport;

use super::RenderSurface;

/// One call made against a `RenderSurface`
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    ClosePath,
    MoveTo(i32, i32),
    LineTo(i32, i32),
    Arc { x: i32, y: i32, radius: f64, start: f64, end: f64 },
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f64),
    GlobalAlpha(f64),
    Fill,
    Stroke,
}

/// Headless surface that records every call in order
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, commands: Vec::with_capacity(256) }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn count<F: Fn(&DrawCommand) -> bool>(&self, pred: F) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

impl RenderSurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.commands.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.commands.push(DrawCommand::LineTo(x, y));
    }

    fn arc(&mut self, x: i32, y: i32, radius: f64, start: f64, end: f64) {
        self.commands.push(DrawCommand::Arc { x, y, radius, start, end });
    }

    fn set_fill_style(&mut self, code: &str) {
        self.commands.push(DrawCommand::FillStyle(code.to_string()));
    }

    fn set_stroke_style(&mut self, code: &str) {
        self.commands.push(DrawCommand::StrokeStyle(code.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}
