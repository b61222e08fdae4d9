use crate::geometry::{BoundingBox, Point, Vector};

use super::Geometry2D;

/// Slack for the angle comparison in `includes_point`; points on an edge
/// count as inside.
const ANGLE_EPSILON: f64 = 1e-9;

/// Three ordered vertices rotating about a stored pivot.
///
/// The pivot is not the center of gravity; see `center_of_gravity`.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    centroid: Point,
    points: [Point; 3],
}

impl Triangle {
    pub fn new(points: [Point; 3], centroid: Point) -> Self {
        Self { centroid, points }
    }

    pub fn points(&self) -> &[Point; 3] {
        &self.points
    }

    /// Edges in cyclic order: 0->1, 1->2, 2->0
    pub fn edges(&self) -> [Vector; 3] {
        let [p0, p1, p2] = self.points;
        [Vector::new(p0, p1), Vector::new(p1, p2), Vector::new(p2, p0)]
    }

    /// Interior angle at each vertex, in vertex order
    pub fn interior_angles(&self) -> [f64; 3] {
        let mut angles = [0.0; 3];
        for (i, angle) in angles.iter_mut().enumerate() {
            let (a, b, c) = self.cyclic(i);
            *angle = Vector::angle_between(&Vector::new(a, b), &Vector::new(a, c));
        }
        angles
    }

    /// Intersection of the medians from vertex 0 and vertex 1.
    ///
    /// `None` when the triangle is degenerate (medians parallel or a
    /// median has zero length).
    pub fn center_of_gravity(&self) -> Option<Point> {
        let [p0, p1, p2] = self.points;
        let m0 = Vector::new(p0, p1.midpoint(&p2)).equation_description()?;
        let m1 = Vector::new(p1, p2.midpoint(&p0)).equation_description()?;
        Vector::cross_section_point(&m0, &m1)
    }

    /// Vertex `i` followed by the next two in cyclic order
    #[inline]
    fn cyclic(&self, i: usize) -> (Point, Point, Point) {
        (self.points[i], self.points[(i + 1) % 3], self.points[(i + 2) % 3])
    }
}

impl Geometry2D for Triangle {
    fn centroid(&self) -> Point {
        self.centroid
    }

    /// Heron's formula over the edge lengths
    fn area(&self) -> f64 {
        let [a, b, c] = self.edges().map(|e| e.magnitude());
        let s = (a + b + c) / 2.0;
        (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
    }

    fn circumference(&self) -> f64 {
        self.edges().iter().map(Vector::magnitude).sum()
    }

    /// Angle test: for each vertex A with successors B, C, the angle
    /// between AP and AC must not exceed the interior angle BAC.
    fn includes_point(&self, p: &Point) -> bool {
        let originals = self.interior_angles();
        for (i, original) in originals.iter().enumerate() {
            let (a, _, c) = self.cyclic(i);
            let substituted = Vector::angle_between(&Vector::new(a, *p), &Vector::new(a, c));
            if substituted > original + ANGLE_EPSILON {
                return false;
            }
        }
        true
    }

    fn reference_points(&self) -> Vec<Point> {
        self.points.to_vec()
    }

    fn translate(&mut self, dx: f64, dy: f64, dz: Option<f64>) {
        self.centroid.translate(dx, dy, dz);
        for p in self.points.iter_mut() {
            p.translate(dx, dy, dz);
        }
    }

    fn rotated(&self, angle: f64) -> Self {
        let [p0, p1, p2] = self.points;
        let spin = |p: Point| Vector::new(self.centroid, p).rotate_vector(angle, false);
        Triangle::new([spin(p0), spin(p1), spin(p2)], self.centroid)
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

    fn sample() -> Triangle {
        Triangle::new(
            [Point::new(0.0, 100.0), Point::new(87.0, -50.0), Point::new(-87.0, -50.0)],
            Point::origin(),
        )
    }

    fn equilateral(side: f64) -> Triangle {
        let h = side * 3f64.sqrt() / 2.0;
        Triangle::new(
            [Point::new(0.0, 0.0), Point::new(side, 0.0), Point::new(side / 2.0, h)],
            Point::new(side / 2.0, h / 3.0),
        )
    }

    #[test]
    fn includes_center_excludes_far_point() {
        let t = sample();
        assert!(t.includes_point(&Point::origin()));
        assert!(!t.includes_point(&Point::new(1000.0, 1000.0)));
    }

    #[test]
    fn excludes_points_just_past_each_edge() {
        let t = sample();
        assert!(!t.includes_point(&Point::new(0.0, -51.0)));
        assert!(!t.includes_point(&Point::new(60.0, 40.0)));
        assert!(!t.includes_point(&Point::new(-60.0, 40.0)));
        assert!(t.includes_point(&Point::new(0.0, -49.0)));
    }

    #[test]
    fn equilateral_area_and_circumference() {
        let t = equilateral(2.0);
        assert!((t.area() - 3f64.sqrt()).abs() < EPS);
        assert!((t.circumference() - 6.0).abs() < EPS);
    }

    #[test]
    fn interior_angles_sum_to_pi() {
        let sum: f64 = sample().interior_angles().iter().sum();
        assert!((sum - std::f64::consts::PI).abs() < EPS);
    }

    #[test]
    fn center_of_gravity_is_vertex_mean() {
        let t = sample();
        let g = t.center_of_gravity().unwrap();
        assert!((g.x - 0.0).abs() < EPS);
        assert!((g.y - 0.0).abs() < EPS);

        let t = Triangle::new(
            [Point::new(0.0, 0.0), Point::new(6.0, 0.0), Point::new(0.0, 3.0)],
            Point::origin(),
        );
        let g = t.center_of_gravity().unwrap();
        assert!((g.x - 2.0).abs() < EPS);
        assert!((g.y - 1.0).abs() < EPS);
    }

    #[test]
    fn collinear_triangle_has_no_center_of_gravity() {
        let t = Triangle::new(
            [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
            Point::origin(),
        );
        assert_eq!(t.center_of_gravity(), None);
        assert!(t.area() < EPS);
    }

    #[test]
    fn translate_moves_pivot_and_vertices() {
        let mut t = sample();
        t.translate(10.0, -5.0, None);
        assert_eq!(t.centroid(), Point::new(10.0, -5.0));
        assert_eq!(t.points()[0], Point::new(10.0, 95.0));
    }

    #[test]
    fn half_turn_about_pivot_mirrors_vertices() {
        let r = sample().rotated(std::f64::consts::PI);
        assert!((r.points()[0].x - 0.0).abs() < EPS);
        assert!((r.points()[0].y + 100.0).abs() < EPS);
        assert!(r.includes_point(&Point::new(0.0, -60.0)));
    }
}
