use crate::core::{Debugger, Viewport};
use crate::domain::PhysicsConstants;

use super::frame_stats::FrameStats;
use super::SceneCore;

pub(super) fn create_scene_core(width: u32, height: u32, debugger: Debugger) -> SceneCore {
    SceneCore {
        entries: Vec::with_capacity(64),
        next_id: 1,
        viewport: Viewport::new(width as f64, height as f64),
        constants: PhysicsConstants::default(),
        gravity_x: 0.0,
        gravity_y: -1.0,
        pixels_per_meter: 100.0,
        highlight_intersections: true,
        highlights: Vec::new(),
        frame: 0,
        debugger,
        frame_stats: FrameStats::default(),
    }
}
