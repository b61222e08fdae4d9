use crate::geometry::{BoundingBox, Point, Vector};

use super::triangle::Triangle;
use super::Geometry2D;

/// Four corners around a pivot, plus the two triangles that split it along
/// the 0-2 diagonal.
///
/// The halves are copies of the corners, not views into them: every
/// operation that moves a corner rebuilds them.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    centroid: Point,
    horizontal: f64,
    vertical: f64,
    points: [Point; 4],
    halves: [Triangle; 2],
}

impl Rectangle {
    /// Axis-aligned rectangle centered on `centroid`.
    ///
    /// Corner order: bottom-left, bottom-right, top-right, top-left.
    pub fn new(centroid: Point, horizontal: f64, vertical: f64) -> Self {
        let corners = BoundingBox::around(&centroid, horizontal / 2.0, vertical / 2.0).corners();
        Self::from_corners(centroid, corners, horizontal, vertical)
    }

    /// Rectangle with equal sides
    pub fn square(centroid: Point, side: f64) -> Self {
        Self::new(centroid, side, side)
    }

    fn from_corners(centroid: Point, points: [Point; 4], horizontal: f64, vertical: f64) -> Self {
        let halves = Self::split(&points, centroid);
        Self { centroid, horizontal, vertical, points, halves }
    }

    fn split(points: &[Point; 4], centroid: Point) -> [Triangle; 2] {
        let [p0, p1, p2, p3] = *points;
        [
            Triangle::new([p0, p1, p2], centroid),
            Triangle::new([p0, p2, p3], centroid),
        ]
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    pub fn halves(&self) -> &[Triangle; 2] {
        &self.halves
    }

    pub fn horizontal(&self) -> f64 {
        self.horizontal
    }

    pub fn vertical(&self) -> f64 {
        self.vertical
    }

    pub fn is_square(&self) -> bool {
        self.horizontal == self.vertical
    }

    /// Edges in cyclic order: 0->1, 1->2, 2->3, 3->0
    pub fn edges(&self) -> [Vector; 4] {
        let [p0, p1, p2, p3] = self.points;
        [
            Vector::new(p0, p1),
            Vector::new(p1, p2),
            Vector::new(p2, p3),
            Vector::new(p3, p0),
        ]
    }
}

impl Geometry2D for Rectangle {
    fn centroid(&self) -> Point {
        self.centroid
    }

    fn area(&self) -> f64 {
        self.horizontal * self.vertical
    }

    fn circumference(&self) -> f64 {
        2.0 * (self.horizontal + self.vertical)
    }

    fn includes_point(&self, p: &Point) -> bool {
        self.halves.iter().any(|t| t.includes_point(p))
    }

    fn reference_points(&self) -> Vec<Point> {
        self.points.to_vec()
    }

    fn translate(&mut self, dx: f64, dy: f64, dz: Option<f64>) {
        self.centroid.translate(dx, dy, dz);
        for p in self.points.iter_mut() {
            p.translate(dx, dy, dz);
        }
        self.halves = Self::split(&self.points, self.centroid);
    }

    fn rotated(&self, angle: f64) -> Self {
        let spin = |p: Point| Vector::new(self.centroid, p).rotate_vector(angle, false);
        let corners = self.points.map(spin);
        Self::from_corners(self.centroid, corners, self.horizontal, self.vertical)
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
            .unwrap_or_else(|| BoundingBox::around(&self.centroid, 0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn containment_against_half_extents() {
        let r = Rectangle::new(Point::origin(), 100.0, 50.0);
        assert!(r.includes_point(&Point::new(0.0, 0.0)));
        assert!(r.includes_point(&Point::new(49.0, 24.0)));
        assert!(r.includes_point(&Point::new(-49.0, 24.0)));
        assert!(!r.includes_point(&Point::new(51.0, 0.0)));
        assert!(!r.includes_point(&Point::new(0.0, 26.0)));
    }

    #[test]
    fn area_and_circumference() {
        let r = Rectangle::new(Point::new(7.0, 7.0), 10.0, 4.0);
        assert_eq!(r.area(), 40.0);
        assert_eq!(r.circumference(), 28.0);
    }

    #[test]
    fn corners_wind_counter_clockwise_from_bottom_left() {
        let r = Rectangle::new(Point::origin(), 4.0, 2.0);
        assert_eq!(
            r.points(),
            &[
                Point::new(-2.0, -1.0),
                Point::new(2.0, -1.0),
                Point::new(2.0, 1.0),
                Point::new(-2.0, 1.0),
            ]
        );
    }

    #[test]
    fn square_is_a_rectangle_with_equal_sides() {
        let s = Rectangle::square(Point::origin(), 8.0);
        assert!(s.is_square());
        assert_eq!(s, Rectangle::new(Point::origin(), 8.0, 8.0));
        assert_eq!(s.area(), 64.0);
    }

    #[test]
    fn translate_rebuilds_halves() {
        let mut r = Rectangle::new(Point::origin(), 10.0, 10.0);
        r.translate(100.0, 0.0, None);
        assert_eq!(r.halves()[0].points()[0], r.points()[0]);
        assert_eq!(r.halves()[1].points()[2], r.points()[3]);
        assert!(r.includes_point(&Point::new(100.0, 0.0)));
        assert!(!r.includes_point(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let r = Rectangle::new(Point::origin(), 100.0, 50.0).rotated(std::f64::consts::FRAC_PI_2);
        let bb = r.bounding_box();
        assert!((bb.width() - 50.0).abs() < EPS);
        assert!((bb.height() - 100.0).abs() < EPS);
        assert!(r.includes_point(&Point::new(0.0, 45.0)));
        assert!(!r.includes_point(&Point::new(45.0, 0.0)));
        assert_eq!(r.area(), 5000.0);
    }
}
