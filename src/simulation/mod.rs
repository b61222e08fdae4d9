//! Scene - the frame driver around the geometry core
//!
//! Owns the registered shapes and runs them once per frame:
//! rotation hook -> gravity -> translation hook, in registration order,
//! then culls whatever left the canvas. Drawing is a separate call so the
//! page decides when to render.
//!
//! Helpers live in `#[path]` submodules; `SceneCore` only delegates.

use crate::core::{Debugger, Viewport};
use crate::domain::PhysicsConstants;
use crate::geometry::Point;
use crate::render::RenderSurface;
use crate::shapes::{OverlapResult, Shape, Speed};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "query/query.rs"]
mod query;
#[path = "render/render.rs"]
mod render;
mod facade;

pub use facade::Sandbox;
pub use frame_stats::FrameStats;

use perf_timer::PerfTimer;

/// A shape plus the id the page knows it by
#[derive(Clone, Debug)]
pub struct SceneEntry {
    pub id: u32,
    pub shape: Shape,
}

/// The scene
pub struct SceneCore {
    entries: Vec<SceneEntry>,
    next_id: u32,
    viewport: Viewport,

    // Settings
    constants: PhysicsConstants,
    gravity_x: f64,
    gravity_y: f64,
    pixels_per_meter: f64,
    highlight_intersections: bool,

    // State
    highlights: Vec<Point>,
    frame: u64,
    debugger: Debugger,

    // Perf
    frame_stats: FrameStats,
}

impl SceneCore {
    /// Scene logging to the console
    pub fn new(width: u32, height: u32) -> Self {
        init::create_scene_core(width, height, Debugger::default())
    }

    pub fn with_debugger(width: u32, height: u32, debugger: Debugger) -> Self {
        init::create_scene_core(width, height, debugger)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn shape_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[SceneEntry] {
        &self.entries
    }

    pub fn shape(&self, id: u32) -> Option<&Shape> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.shape)
    }

    pub fn shape_mut(&mut self, id: u32) -> Option<&mut Shape> {
        self.entries.iter_mut().find(|e| e.id == id).map(|e| &mut e.shape)
    }

    pub fn debugger(&self) -> &Debugger {
        &self.debugger
    }

    pub fn debugger_mut(&mut self) -> &mut Debugger {
        &mut self.debugger
    }

    pub fn frame_stats(&self) -> FrameStats {
        self.frame_stats.clone()
    }

    // === Settings ===

    pub fn resize(&mut self, width: u32, height: u32) {
        settings::resize(self, width, height);
    }

    /// Gravity direction, scaled by g and pixels-per-meter each frame
    pub fn set_gravity(&mut self, x: f64, y: f64) {
        settings::set_gravity(self, x, y);
    }

    pub fn gravity(&self) -> (f64, f64) {
        (self.gravity_x, self.gravity_y)
    }

    pub fn set_pixels_per_meter(&mut self, ppm: f64) {
        settings::set_pixels_per_meter(self, ppm);
    }

    pub fn set_constants(&mut self, constants: PhysicsConstants) {
        settings::set_constants(self, constants);
    }

    pub fn constants(&self) -> PhysicsConstants {
        self.constants
    }

    /// Queue overlap intersection points as markers for the next render
    pub fn set_highlight_intersections(&mut self, enabled: bool) {
        settings::set_highlight_intersections(self, enabled);
    }

    pub fn pending_highlights(&self) -> &[Point] {
        &self.highlights
    }

    // === Commands ===

    /// Registers a shape; returns its id (never 0)
    pub fn add_shape(&mut self, shape: Shape) -> u32 {
        commands::add_shape(self, shape)
    }

    pub fn spawn_triangle(&mut self, points: [Point; 3], centroid: Point) -> u32 {
        commands::add_shape(self, Shape::triangle(points, centroid))
    }

    pub fn spawn_rectangle(&mut self, centroid: Point, horizontal: f64, vertical: f64) -> u32 {
        commands::add_shape(self, Shape::rectangle(centroid, horizontal, vertical))
    }

    pub fn spawn_square(&mut self, centroid: Point, side: f64) -> u32 {
        commands::add_shape(self, Shape::square(centroid, side))
    }

    pub fn spawn_circle(&mut self, centroid: Point, radius: f64) -> u32 {
        commands::add_shape(self, Shape::circle(centroid, radius))
    }

    pub fn remove_shape(&mut self, id: u32) -> bool {
        commands::remove_shape(self, id)
    }

    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn set_movement_speed(&mut self, id: u32, speed: Speed) -> bool {
        commands::set_movement_speed(self, id, speed)
    }

    pub fn add_speed(&mut self, id: u32, delta: Speed) -> bool {
        commands::add_speed(self, id, delta)
    }

    pub fn set_rotation_speed(&mut self, id: u32, radians_per_sec: f64) -> bool {
        commands::set_rotation_speed(self, id, radians_per_sec)
    }

    pub fn set_default_rotation(&mut self, id: u32, degrees: f64) -> bool {
        commands::set_default_rotation(self, id, degrees)
    }

    pub fn apply_draw_settings_json(&mut self, id: u32, json: &str) -> Result<(), String> {
        commands::apply_draw_settings_json(self, id, json)
    }

    // === Frame ===

    /// Advances every shape by `dt` seconds, then culls off-canvas shapes.
    /// Returns the ids that were culled.
    pub fn step(&mut self, dt: f64) -> Vec<u32> {
        step::step(self, dt)
    }

    /// Draws every shape, then any pending intersection markers.
    /// Returns how many shapes were drawn.
    pub fn render<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        render::render(self, surface)
    }

    // === Queries ===

    pub fn includes_point(&self, id: u32, point: Point) -> bool {
        query::includes_point(self, id, point)
    }

    /// Ids of every shape containing `point`, topmost (last drawn) first
    pub fn shapes_at(&self, point: Point) -> Vec<u32> {
        query::shapes_at(self, point)
    }

    pub fn overlap(&mut self, a: u32, b: u32) -> Option<OverlapResult> {
        query::overlap(self, a, b)
    }

    /// `false` for unknown ids and for unsupported kind pairs
    pub fn overlaps(&mut self, a: u32, b: u32) -> bool {
        self.overlap(a, b).map(|r| r.overlaps()).unwrap_or(false)
    }

    /// Every overlapping pair, ids ascending within and across pairs
    pub fn overlapping_pairs(&self) -> Vec<(u32, u32)> {
        query::overlapping_pairs(self)
    }

    /// JSON snapshot of every shape (live points, bounds, metrics)
    pub fn scene_json(&self) -> String {
        query::scene_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
