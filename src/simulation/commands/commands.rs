use crate::shapes::{Shape, Speed};

use super::{SceneCore, SceneEntry};

pub(super) fn add_shape(scene: &mut SceneCore, shape: Shape) -> u32 {
    let id = scene.next_id;
    scene.next_id = scene.next_id.saturating_add(1);

    let kind = shape.kind();
    scene.entries.push(SceneEntry { id, shape });
    scene.debugger.log(7, || format!("spawned {:?} #{}", kind, id));
    id
}

/// Keeps registration order for the remaining shapes.
pub(super) fn remove_shape(scene: &mut SceneCore, id: u32) -> bool {
    match scene.entries.iter().position(|e| e.id == id) {
        Some(idx) => {
            scene.entries.remove(idx);
            scene.debugger.log(7, || format!("removed #{}", id));
            true
        }
        None => false,
    }
}

pub(super) fn clear(scene: &mut SceneCore) {
    scene.entries.clear();
    scene.highlights.clear();
    scene.next_id = 1;
}

pub(super) fn set_movement_speed(scene: &mut SceneCore, id: u32, speed: Speed) -> bool {
    with_shape(scene, id, |s| s.set_movement_speed(speed))
}

pub(super) fn add_speed(scene: &mut SceneCore, id: u32, delta: Speed) -> bool {
    with_shape(scene, id, |s| s.add_speed(delta))
}

pub(super) fn set_rotation_speed(scene: &mut SceneCore, id: u32, radians_per_sec: f64) -> bool {
    with_shape(scene, id, |s| s.set_rotation_speed(radians_per_sec))
}

pub(super) fn set_default_rotation(scene: &mut SceneCore, id: u32, degrees: f64) -> bool {
    with_shape(scene, id, |s| {
        s.set_default_rotation(degrees);
        s.refresh();
    })
}

pub(super) fn apply_draw_settings_json(scene: &mut SceneCore, id: u32, json: &str) -> Result<(), String> {
    let shape = scene
        .shape_mut(id)
        .ok_or_else(|| format!("no shape with id {}", id))?;
    shape.settings.merge_json(json)
}

fn with_shape<F: FnOnce(&mut Shape)>(scene: &mut SceneCore, id: u32, f: F) -> bool {
    match scene.shape_mut(id) {
        Some(shape) => {
            f(shape);
            true
        }
        None => {
            scene.debugger.log(9, || format!("no shape with id {}", id));
            false
        }
    }
}
