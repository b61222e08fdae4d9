use serde::Serialize;

use crate::core::Viewport;
use crate::domain::DrawSettings;
use crate::geometry::{BoundingBox, Point, Vector};

use super::motion::{MovementSpeed, Rotation, Speed};
use super::overlap::{resolve_overlap, OverlapResult};
use super::{Circle, Geometry, Geometry2D, Rectangle, ShapeKind, Triangle};

/// A placed shape: geometry plus rotation, velocity and draw state.
///
/// `rotated_points` and `bounds` are a cache of the live geometry. They are
/// refreshed by `refresh` (called from `draw` and `move_by`), not by
/// `rotate`.
#[derive(Clone, Debug)]
pub struct Shape {
    geometry: Geometry,
    pub settings: DrawSettings,
    rotation: Rotation,
    /// radians / second
    rotation_speed: f64,
    movement: MovementSpeed,

    // === Live geometry cache ===
    rotated_points: Vec<Point>,
    bounds: BoundingBox,
    square_edges: [Point; 4],
}

impl Shape {
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        let geometry = geometry.into();
        let bounds = geometry.bounding_box();
        let mut shape = Self {
            geometry,
            settings: DrawSettings::default(),
            rotation: Rotation::default(),
            rotation_speed: 0.0,
            movement: MovementSpeed::default(),
            rotated_points: Vec::new(),
            bounds,
            square_edges: bounds.corners(),
        };
        shape.refresh();
        shape
    }

    pub fn triangle(points: [Point; 3], centroid: Point) -> Self {
        Self::new(Triangle::new(points, centroid))
    }

    pub fn rectangle(centroid: Point, horizontal: f64, vertical: f64) -> Self {
        Self::new(Rectangle::new(centroid, horizontal, vertical))
    }

    pub fn square(centroid: Point, side: f64) -> Self {
        Self::new(Rectangle::square(centroid, side))
    }

    pub fn circle(centroid: Point, radius: f64) -> Self {
        Self::new(Circle::new(centroid, radius))
    }

    pub fn with_settings(mut self, settings: DrawSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_rotation_speed(mut self, radians_per_sec: f64) -> Self {
        self.rotation_speed = radians_per_sec;
        self
    }

    pub fn with_default_rotation(mut self, degrees: f64) -> Self {
        self.set_default_rotation(degrees);
        self
    }

    pub fn with_movement_speed(mut self, speed: Speed) -> Self {
        self.movement = MovementSpeed::new(speed);
        self
    }

    // === Accessors ===

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn centroid(&self) -> Point {
        self.geometry.centroid()
    }

    pub fn area(&self) -> f64 {
        self.geometry.area()
    }

    pub fn circumference(&self) -> f64 {
        self.geometry.circumference()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    pub fn movement(&self) -> MovementSpeed {
        self.movement
    }

    pub fn movement_speed(&self) -> Speed {
        self.movement.current()
    }

    // === Rotation ===

    /// Circles ignore rotation entirely.
    pub fn rotate(&mut self, delta: f64) {
        if self.kind() == ShapeKind::Circle {
            return;
        }
        self.rotation.add(delta);
    }

    pub fn set_default_rotation(&mut self, degrees: f64) {
        if self.kind() == ShapeKind::Circle {
            return;
        }
        self.rotation.set_default_degrees(degrees);
    }

    pub fn set_rotation_speed(&mut self, radians_per_sec: f64) {
        self.rotation_speed = radians_per_sec;
    }

    /// Per-frame rotation hook
    pub fn rotate_animation_apply(&mut self, dt: f64) {
        self.rotate(dt * self.rotation_speed);
    }

    // === Movement ===

    pub fn set_movement_speed(&mut self, speed: Speed) {
        self.movement.default = speed;
    }

    pub fn add_speed(&mut self, delta: Speed) {
        self.movement.add_speed(delta);
    }

    /// Per-frame translation hook: one Euler step with the current velocity.
    ///
    /// Gravity is not applied here; the driver adds it via `add_speed`
    /// first.
    pub fn translation_animation_apply(&mut self, dt: f64) {
        let v = self.movement.current() * dt;
        self.move_by(v.x, v.y, Some(v.z));
    }

    /// Translates pivot and vertices, then refreshes the live cache.
    pub fn move_by(&mut self, dx: f64, dy: f64, dz: Option<f64>) {
        self.geometry.translate(dx, dy, dz);
        self.refresh();
    }

    // === Live geometry ===

    /// Rebuilds rotated points, bounding box and square edges from the
    /// current rotation.
    pub fn refresh(&mut self) {
        self.rotated_points = self.geometry.rotation_points(self.rotation.total());
        self.bounds = match &self.geometry {
            Geometry::Circle(c) => c.bounding_box(),
            _ => BoundingBox::from_points(&self.rotated_points)
                .unwrap_or_else(|| self.geometry.bounding_box()),
        };
        self.square_edges = self.bounds.corners();
    }

    /// Cached rotated vertices (as of the last refresh)
    pub fn rotated_points(&self) -> &[Point] {
        &self.rotated_points
    }

    /// Edges of the cached rotated vertices in cyclic order
    pub fn live_edges(&self) -> Vec<Vector> {
        let n = self.rotated_points.len();
        (0..n)
            .map(|i| Vector::new(self.rotated_points[i], self.rotated_points[(i + 1) % n]))
            .collect()
    }

    /// Cached bounding box (as of the last refresh)
    pub fn bounding_edges(&self) -> BoundingBox {
        self.bounds
    }

    pub fn square_edges(&self) -> &[Point; 4] {
        &self.square_edges
    }

    pub fn off_canvas(&self, viewport: &Viewport) -> bool {
        self.bounds.off_canvas(viewport)
    }

    /// Geometry with the current rotation applied, computed fresh
    pub fn live_geometry(&self) -> Geometry {
        self.geometry.rotated(self.rotation.total())
    }

    pub fn includes_point(&self, p: &Point) -> bool {
        self.live_geometry().includes_point(p)
    }

    pub fn overlap(&self, other: &Shape) -> OverlapResult {
        resolve_overlap(&self.live_geometry(), &other.live_geometry())
    }

    /// Unsupported pairs report `false`.
    pub fn overlaps(&self, other: &Shape) -> bool {
        self.overlap(other).overlaps()
    }

    pub fn snapshot(&self, id: u32) -> ShapeSnapshot {
        ShapeSnapshot {
            id,
            kind: self.kind(),
            centroid: self.centroid(),
            rotation: self.rotation.total(),
            points: self.rotated_points.clone(),
            bounds: self.bounds,
            area: self.area(),
            circumference: self.circumference(),
        }
    }
}

/// Serializable view of a shape for the page
#[derive(Clone, Debug, Serialize)]
pub struct ShapeSnapshot {
    pub id: u32,
    pub kind: ShapeKind,
    pub centroid: Point,
    pub rotation: f64,
    pub points: Vec<Point>,
    pub bounds: BoundingBox,
    pub area: f64,
    pub circumference: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn rotate_does_not_touch_cache_until_refresh() {
        let mut s = Shape::rectangle(Point::origin(), 100.0, 50.0);
        let before = s.rotated_points().to_vec();
        s.rotate(FRAC_PI_2);
        assert_eq!(s.rotated_points(), &before[..]);
        s.refresh();
        assert!((s.bounding_edges().width() - 50.0).abs() < EPS);
    }

    #[test]
    fn rotation_animation_scales_by_dt() {
        let mut s = Shape::square(Point::origin(), 10.0).with_rotation_speed(2.0);
        s.rotate_animation_apply(0.25);
        assert!((s.rotation().added - 0.5).abs() < EPS);
    }

    #[test]
    fn circle_ignores_rotation() {
        let mut c = Shape::circle(Point::origin(), 5.0).with_rotation_speed(3.0);
        c.rotate_animation_apply(1.0);
        c.set_default_rotation(90.0);
        assert_eq!(c.rotation(), Rotation::default());
        assert!(c.rotated_points().is_empty());
        assert_eq!(c.bounding_edges(), BoundingBox::around(&Point::origin(), 5.0, 5.0));
    }

    #[test]
    fn translation_uses_combined_speed() {
        let mut s = Shape::circle(Point::origin(), 1.0).with_movement_speed(Speed::planar(10.0, 0.0));
        s.add_speed(Speed::planar(0.0, -4.0));
        s.translation_animation_apply(0.5);
        assert_eq!(s.centroid().x, 5.0);
        assert_eq!(s.centroid().y, -2.0);
    }

    #[test]
    fn move_refreshes_bounds() {
        let mut s = Shape::rectangle(Point::origin(), 10.0, 10.0);
        s.move_by(100.0, 0.0, None);
        assert_eq!(s.bounding_edges().left, 95.0);
        assert_eq!(s.square_edges()[2], Point::new(105.0, 5.0));
    }

    #[test]
    fn default_rotation_applies_to_live_geometry() {
        let s = Shape::rectangle(Point::origin(), 100.0, 20.0).with_default_rotation(90.0);
        assert!(s.includes_point(&Point::new(0.0, 45.0)));
        assert!(!s.includes_point(&Point::new(45.0, 0.0)));
    }

    #[test]
    fn off_canvas_follows_bounds() {
        let vp = Viewport::new(200.0, 200.0);
        let mut s = Shape::square(Point::origin(), 20.0);
        assert!(!s.off_canvas(&vp));
        s.move_by(150.0, 0.0, None);
        assert!(s.off_canvas(&vp));
    }

    #[test]
    fn live_edges_close_the_loop() {
        let s = Shape::triangle(
            [Point::new(0.0, 1.0), Point::new(1.0, 0.0), Point::new(-1.0, 0.0)],
            Point::origin(),
        );
        let edges = s.live_edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].pt2, s.rotated_points()[0]);
    }
}
