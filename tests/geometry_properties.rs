use std::f64::consts::PI;

use planar_engine::{
    Circle, Geometry, Geometry2D, Point, Rectangle, Shape, Triangle, Vector, Viewport,
};
use planar_engine::render::RecordingSurface;
use planar_engine::shapes::resolve_overlap;

const EPS: f64 = 1e-9;

fn close(a: &Point, b: &Point) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
}

#[test]
fn translate_round_trips() {
    let samples = [(0.0, 0.0), (12.5, -3.0), (-1e4, 7.25), (0.1, 0.2)];
    for &(dx, dy) in samples.iter() {
        let original = Point::new(3.0, -4.0);
        let mut p = original;
        p.translate(dx, dy, None);
        assert_eq!(p.original_coordinates(), (3.0 + dx, -4.0 + dy));
        p.translate(-dx, -dy, None);
        assert!(close(&p, &original));
    }
}

#[test]
fn rotation_identity_and_inverse() {
    let pivot = Point::new(2.0, 1.0);
    let vertex = Point::new(7.0, -3.0);
    let v = Vector::new(pivot, vertex);
    assert!(close(&v.rotate_vector(0.0, false), &vertex));

    for &theta in [0.3, PI / 2.0, 2.5, -1.1].iter() {
        let turned = Vector::new(pivot, v.rotate_vector(theta, false));
        assert!(close(&turned.rotate_vector(-theta, false), &vertex));
    }
}

#[test]
fn triangle_contains_its_pivot_only() {
    let t = Triangle::new(
        [Point::new(0.0, 100.0), Point::new(87.0, -50.0), Point::new(-87.0, -50.0)],
        Point::origin(),
    );
    assert!(t.includes_point(&Point::origin()));
    assert!(!t.includes_point(&Point::new(1000.0, 1000.0)));
}

#[test]
fn rectangle_containment() {
    let r = Rectangle::new(Point::origin(), 100.0, 50.0);
    assert!(r.includes_point(&Point::origin()));
    assert!(r.includes_point(&Point::new(49.0, 24.0)));
    assert!(!r.includes_point(&Point::new(51.0, 0.0)));
    assert!(!r.includes_point(&Point::new(0.0, 26.0)));
}

#[test]
fn circle_overlap_uses_distance_within_radii() {
    let a: Geometry = Circle::new(Point::origin(), 10.0).into();
    let far: Geometry = Circle::new(Point::new(25.0, 0.0), 10.0).into();
    let near: Geometry = Circle::new(Point::new(15.0, 0.0), 10.0).into();
    assert!(!resolve_overlap(&a, &far).overlaps());
    assert!(resolve_overlap(&a, &near).overlaps());
}

#[test]
fn areas_and_circumferences() {
    let r = Rectangle::new(Point::origin(), 10.0, 4.0);
    assert!((r.area() - 40.0).abs() < EPS);
    assert!((r.circumference() - 28.0).abs() < EPS);

    let h = 3f64.sqrt();
    let t = Triangle::new(
        [Point::new(-1.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, h)],
        Point::new(0.0, h / 3.0),
    );
    assert!((t.area() - 3f64.sqrt()).abs() < 1e-9);
    assert!((t.circumference() - 6.0).abs() < 1e-9);
}

#[test]
fn off_canvas_against_the_viewport() {
    let vp = Viewport::new(800.0, 600.0);
    let beyond = Shape::square(Point::new(500.0, 0.0), 20.0);
    let centered = Shape::rectangle(Point::origin(), 2000.0, 10.0);
    assert!(beyond.off_canvas(&vp));
    assert!(!centered.off_canvas(&vp));
}

#[test]
fn draw_is_idempotent() {
    let mut surface = RecordingSurface::new(Viewport::new(400.0, 400.0));
    let mut shape = Shape::triangle(
        [Point::new(0.0, 30.0), Point::new(25.0, -15.0), Point::new(-25.0, -15.0)],
        Point::origin(),
    )
    .with_default_rotation(15.0);
    shape.rotate(1.2);

    shape.draw(&mut surface);
    let first = shape.rotated_points().to_vec();
    let first_commands = surface.commands().to_vec();

    surface.clear();
    shape.draw(&mut surface);
    assert_eq!(shape.rotated_points(), &first[..]);
    assert_eq!(surface.commands(), &first_commands[..]);
}
