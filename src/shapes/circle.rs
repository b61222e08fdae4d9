use std::f64::consts::PI;

use crate::geometry::{BoundingBox, Point, Vector};

use super::Geometry2D;

/// Rotation-invariant: no vertices, rotation is a no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    centroid: Point,
    radius: f64,
}

impl Circle {
    pub fn new(centroid: Point, radius: f64) -> Self {
        Self { centroid, radius: radius.abs() }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Geometry2D for Circle {
    fn centroid(&self) -> Point {
        self.centroid
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn includes_point(&self, p: &Point) -> bool {
        Vector::new(self.centroid, *p).magnitude() <= self.radius
    }

    fn reference_points(&self) -> Vec<Point> {
        Vec::new()
    }

    fn translate(&mut self, dx: f64, dy: f64, dz: Option<f64>) {
        self.centroid.translate(dx, dy, dz);
    }

    fn rotated(&self, _angle: f64) -> Self {
        self.clone()
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::around(&self.centroid, self.radius, self.radius)
    }
}
