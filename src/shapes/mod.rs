//! Shapes - the closed set of planar shapes and their shared behavior
//!
//! Concrete geometries (`Triangle`, `Rectangle`, `Circle`) implement
//! `Geometry2D`. `Geometry` is the tagged union over them, and `Shape`
//! adds the animation and draw state every shape carries.
//!
//! A square is `Rectangle::square`; there is no separate square type.

mod circle;
mod motion;
mod overlap;
mod rectangle;
mod shape;
mod triangle;

pub use circle::Circle;
pub use motion::{MovementSpeed, Rotation, Speed};
pub use overlap::{resolve_overlap, OverlapPair, OverlapResult};
pub use rectangle::Rectangle;
pub use shape::{Shape, ShapeSnapshot};
pub use triangle::Triangle;

use serde::Serialize;

use crate::geometry::{BoundingBox, Point, Vector};

/// Capability every concrete shape provides.
pub trait Geometry2D {
    /// Pivot the shape rotates about
    fn centroid(&self) -> Point;

    fn area(&self) -> f64;

    fn circumference(&self) -> f64;

    fn includes_point(&self, p: &Point) -> bool;

    /// Unrotated vertices in winding order (empty for circles)
    fn reference_points(&self) -> Vec<Point>;

    /// Moves pivot and vertices together
    fn translate(&mut self, dx: f64, dy: f64, dz: Option<f64>);

    /// Copy of the shape spun by `angle` radians about its pivot
    fn rotated(&self, angle: f64) -> Self
    where
        Self: Sized;

    fn bounding_box(&self) -> BoundingBox;

    /// Reference vertices spun by `angle` radians about the pivot
    fn rotation_points(&self, angle: f64) -> Vec<Point> {
        let pivot = self.centroid();
        self.reference_points()
            .into_iter()
            .map(|p| Vector::new(pivot, p).rotate_vector(angle, false))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Circle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Triangle(Triangle),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Triangle(_) => ShapeKind::Triangle,
            Geometry::Rectangle(_) => ShapeKind::Rectangle,
            Geometry::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Boundary edges in cyclic order (empty for circles)
    pub fn edges(&self) -> Vec<Vector> {
        match self {
            Geometry::Triangle(t) => t.edges().to_vec(),
            Geometry::Rectangle(r) => r.edges().to_vec(),
            Geometry::Circle(_) => Vec::new(),
        }
    }
}

impl Geometry2D for Geometry {
    fn centroid(&self) -> Point {
        match self {
            Geometry::Triangle(t) => t.centroid(),
            Geometry::Rectangle(r) => r.centroid(),
            Geometry::Circle(c) => c.centroid(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Geometry::Triangle(t) => t.area(),
            Geometry::Rectangle(r) => r.area(),
            Geometry::Circle(c) => c.area(),
        }
    }

    fn circumference(&self) -> f64 {
        match self {
            Geometry::Triangle(t) => t.circumference(),
            Geometry::Rectangle(r) => r.circumference(),
            Geometry::Circle(c) => c.circumference(),
        }
    }

    fn includes_point(&self, p: &Point) -> bool {
        match self {
            Geometry::Triangle(t) => t.includes_point(p),
            Geometry::Rectangle(r) => r.includes_point(p),
            Geometry::Circle(c) => c.includes_point(p),
        }
    }

    fn reference_points(&self) -> Vec<Point> {
        match self {
            Geometry::Triangle(t) => t.reference_points(),
            Geometry::Rectangle(r) => r.reference_points(),
            Geometry::Circle(c) => c.reference_points(),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64, dz: Option<f64>) {
        match self {
            Geometry::Triangle(t) => t.translate(dx, dy, dz),
            Geometry::Rectangle(r) => r.translate(dx, dy, dz),
            Geometry::Circle(c) => c.translate(dx, dy, dz),
        }
    }

    fn rotated(&self, angle: f64) -> Self {
        match self {
            Geometry::Triangle(t) => Geometry::Triangle(t.rotated(angle)),
            Geometry::Rectangle(r) => Geometry::Rectangle(r.rotated(angle)),
            Geometry::Circle(c) => Geometry::Circle(c.rotated(angle)),
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        match self {
            Geometry::Triangle(t) => t.bounding_box(),
            Geometry::Rectangle(r) => r.bounding_box(),
            Geometry::Circle(c) => c.bounding_box(),
        }
    }
}

impl From<Triangle> for Geometry {
    fn from(t: Triangle) -> Self {
        Geometry::Triangle(t)
    }
}

impl From<Rectangle> for Geometry {
    fn from(r: Rectangle) -> Self {
        Geometry::Rectangle(r)
    }
}

impl From<Circle> for Geometry {
    fn from(c: Circle) -> Self {
        Geometry::Circle(c)
    }
}
