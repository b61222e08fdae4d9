use wasm_bindgen::prelude::*;

use crate::geometry::Point;
use crate::shapes::Speed;

use super::frame_stats::FrameStats;
use super::SceneCore;

#[wasm_bindgen]
pub struct Sandbox {
    core: SceneCore,
}

#[wasm_bindgen]
impl Sandbox {
    /// Create a scene for a canvas of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SceneCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.viewport().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.viewport().height }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> u32 { self.core.shape_count() as u32 }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        self.core.set_gravity(x, y);
    }

    pub fn set_pixels_per_meter(&mut self, ppm: f64) {
        self.core.set_pixels_per_meter(ppm);
    }

    /// 0 silences the log, 10 prints everything
    pub fn set_debug_level(&mut self, level: u8) {
        self.core.debugger_mut().set_level(level);
    }

    pub fn set_highlight_intersections(&mut self, enabled: bool) {
        self.core.set_highlight_intersections(enabled);
    }

    // === SHAPES ===

    #[allow(clippy::too_many_arguments)]
    pub fn spawn_triangle(
        &mut self,
        x1: f64, y1: f64,
        x2: f64, y2: f64,
        x3: f64, y3: f64,
        cx: f64, cy: f64,
    ) -> u32 {
        let points = [Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3)];
        self.core.spawn_triangle(points, Point::new(cx, cy))
    }

    pub fn spawn_rectangle(&mut self, cx: f64, cy: f64, horizontal: f64, vertical: f64) -> u32 {
        self.core.spawn_rectangle(Point::new(cx, cy), horizontal, vertical)
    }

    pub fn spawn_square(&mut self, cx: f64, cy: f64, side: f64) -> u32 {
        self.core.spawn_square(Point::new(cx, cy), side)
    }

    pub fn spawn_circle(&mut self, cx: f64, cy: f64, radius: f64) -> u32 {
        self.core.spawn_circle(Point::new(cx, cy), radius)
    }

    pub fn remove_shape(&mut self, id: u32) -> bool {
        self.core.remove_shape(id)
    }

    /// Remove every shape
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Pixels per second
    pub fn set_movement_speed(&mut self, id: u32, x: f64, y: f64) -> bool {
        self.core.set_movement_speed(id, Speed::planar(x, y))
    }

    pub fn add_speed(&mut self, id: u32, x: f64, y: f64) -> bool {
        self.core.add_speed(id, Speed::planar(x, y))
    }

    /// Radians per second
    pub fn set_rotation_speed(&mut self, id: u32, radians_per_sec: f64) -> bool {
        self.core.set_rotation_speed(id, radians_per_sec)
    }

    pub fn set_default_rotation(&mut self, id: u32, degrees: f64) -> bool {
        self.core.set_default_rotation(id, degrees)
    }

    /// Patch a shape's draw settings from camelCase JSON
    pub fn apply_draw_settings(&mut self, id: u32, json: String) -> Result<(), JsValue> {
        self.core
            .apply_draw_settings_json(id, &json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    // === FRAME ===

    /// Advance the scene by `dt` seconds; returns the ids culled this frame
    pub fn step(&mut self, dt: f64) -> Vec<u32> {
        self.core.step(dt)
    }

    // === QUERIES ===

    pub fn includes_point(&self, id: u32, x: f64, y: f64) -> bool {
        self.core.includes_point(id, Point::new(x, y))
    }

    pub fn shapes_at(&self, x: f64, y: f64) -> Vec<u32> {
        self.core.shapes_at(Point::new(x, y))
    }

    pub fn overlaps(&mut self, a: u32, b: u32) -> bool {
        self.core.overlaps(a, b)
    }

    /// Overlapping pairs flattened as [a0, b0, a1, b1, ...]
    pub fn overlapping_pairs(&self) -> Vec<u32> {
        self.core
            .overlapping_pairs()
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect()
    }

    pub fn scene_json(&self) -> String {
        self.core.scene_json()
    }

    /// Timing snapshot of the last step and render
    pub fn get_frame_stats(&self) -> FrameStats {
        self.core.frame_stats()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Sandbox {
    /// Draw the scene onto a 2D canvas context; returns shapes drawn
    pub fn render(&mut self, ctx: web_sys::CanvasRenderingContext2d) -> u32 {
        let mut surface = crate::render::CanvasSurface::new(ctx);
        self.core.render(&mut surface) as u32
    }
}

impl Sandbox {
    pub fn core(&self) -> &SceneCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SceneCore {
        &mut self.core
    }
}
