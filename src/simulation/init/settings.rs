use crate::core::Viewport;
use crate::domain::PhysicsConstants;

use super::SceneCore;

pub(super) fn resize(scene: &mut SceneCore, width: u32, height: u32) {
    scene.viewport = Viewport::new(width as f64, height as f64);
    scene.debugger.log(8, || format!("viewport resized to {}x{}", width, height));
}

pub(super) fn set_gravity(scene: &mut SceneCore, x: f64, y: f64) {
    scene.gravity_x = x;
    scene.gravity_y = y;
}

pub(super) fn set_pixels_per_meter(scene: &mut SceneCore, ppm: f64) {
    if ppm.is_finite() && ppm > 0.0 {
        scene.pixels_per_meter = ppm;
    } else {
        scene.debugger.error(3, || format!("ignoring pixels-per-meter {}", ppm));
    }
}

pub(super) fn set_constants(scene: &mut SceneCore, constants: PhysicsConstants) {
    scene.constants = constants;
}

pub(super) fn set_highlight_intersections(scene: &mut SceneCore, enabled: bool) {
    scene.highlight_intersections = enabled;
    if !enabled {
        scene.highlights.clear();
    }
}
