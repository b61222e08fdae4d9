use crate::shapes::Speed;

use super::{PerfTimer, SceneCore};

/// One frame: rotate, apply gravity, translate, cull.
pub(super) fn step(scene: &mut SceneCore, dt: f64) -> Vec<u32> {
    let timer = PerfTimer::start();

    if !dt.is_finite() || dt < 0.0 {
        scene.debugger.error(2, || format!("skipping frame with dt={}", dt));
        return Vec::new();
    }

    // Velocity change this frame, in logical units per second
    let accel = scene.constants.g * scene.pixels_per_meter * dt;
    let gravity = Speed::planar(scene.gravity_x * accel, scene.gravity_y * accel);
    let apply_gravity = gravity != Speed::ZERO;

    for entry in scene.entries.iter_mut() {
        let shape = &mut entry.shape;
        shape.rotate_animation_apply(dt);
        if apply_gravity {
            shape.add_speed(gravity);
        }
        shape.translation_animation_apply(dt);
    }

    let culled = cull_off_canvas(scene);

    scene.frame += 1;
    scene.frame_stats.record_step(dt * 1000.0, timer.elapsed_ms(), scene.entries.len(), culled.len());
    culled
}

fn cull_off_canvas(scene: &mut SceneCore) -> Vec<u32> {
    let viewport = scene.viewport;
    let mut culled = Vec::new();
    scene.entries.retain(|e| {
        if e.shape.off_canvas(&viewport) {
            culled.push(e.id);
            false
        } else {
            true
        }
    });

    for id in culled.iter() {
        scene.debugger.log(5, || format!("#{} left the canvas, removed", id));
    }
    culled
}
