use planar_engine::render::RecordingSurface;
use planar_engine::{Debugger, Point, SceneCore, Speed, Viewport};

#[test]
fn scene_smoke_frames() {
    let mut scene = SceneCore::with_debugger(640, 480, Debugger::silent());
    scene.set_gravity(0.0, 0.0);

    for i in 0..20 {
        let x = -300.0 + 30.0 * i as f64;
        let id = match i % 3 {
            0 => scene.spawn_circle(Point::new(x, 0.0), 10.0),
            1 => scene.spawn_square(Point::new(x, 40.0), 16.0),
            _ => scene.spawn_triangle(
                [Point::new(x, 20.0), Point::new(x + 10.0, 0.0), Point::new(x - 10.0, 0.0)],
                Point::new(x, 5.0),
            ),
        };
        scene.set_rotation_speed(id, 1.5);
        scene.set_movement_speed(id, Speed::planar(0.0, 10.0));
    }

    let mut surface = RecordingSurface::new(Viewport::new(640.0, 480.0));
    for _ in 0..60 {
        scene.step(1.0 / 60.0);
        surface.clear();
        scene.render(&mut surface);
    }

    assert_eq!(scene.frame(), 60);
    assert_eq!(scene.shape_count(), 20);
    let stats = scene.frame_stats();
    assert_eq!(stats.total_frames(), 60);
    assert_eq!(stats.shapes_drawn(), 20);
    assert!(stats.step_ms() >= 0.0);
    assert!(scene.overlapping_pairs().is_empty());
}

#[test]
fn falling_shapes_eventually_leave() {
    let mut scene = SceneCore::with_debugger(200, 200, Debugger::silent());
    let id = scene.spawn_square(Point::origin(), 10.0);

    let mut culled = Vec::new();
    for _ in 0..120 {
        culled.extend(scene.step(1.0 / 60.0));
    }

    assert_eq!(culled, vec![id]);
    assert_eq!(scene.shape_count(), 0);
}
