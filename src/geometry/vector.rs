use std::f64::consts::PI;

use serde::Serialize;

use super::point::Point;

/// Line through two points in logical space.
///
/// Vertical lines have no slope and get their own variant instead of an
/// infinite `a`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum LineEquation {
    /// y = a * x + b
    Sloped { a: f64, b: f64 },
    /// x = const
    Vertical { x: f64 },
}

impl LineEquation {
    /// y at `x`, `None` for vertical lines
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            LineEquation::Sloped { a, b } => Some(a * x + b),
            LineEquation::Vertical { .. } => None,
        }
    }
}

/// Directed segment pt1 -> pt2. Always built on demand, never stored on
/// its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub pt1: Point,
    pub pt2: Point,
}

impl Vector {
    pub fn new(pt1: Point, pt2: Point) -> Self {
        Self { pt1, pt2 }
    }

    #[inline]
    pub fn delta_x(&self) -> f64 {
        self.pt2.x - self.pt1.x
    }

    #[inline]
    pub fn delta_y(&self) -> f64 {
        self.pt2.y - self.pt1.y
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.delta_x().hypot(self.delta_y())
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.pt1.midpoint(&self.pt2)
    }

    /// Line through both endpoints. `None` when they coincide.
    pub fn equation_description(&self) -> Option<LineEquation> {
        let (x1, y1) = self.pt1.original_coordinates();
        let (x2, y2) = self.pt2.original_coordinates();
        if x1 == x2 {
            if y1 == y2 {
                return None;
            }
            return Some(LineEquation::Vertical { x: x1 });
        }
        let a = (y1 - y2) / (x1 - x2);
        Some(LineEquation::Sloped { a, b: y1 - a * x1 })
    }

    /// Rotates one endpoint about the other by `angle` radians
    /// (counter-clockwise in logical space) and returns the new position.
    ///
    /// Default: pt2 moves around pt1, so `Vector::new(pivot, vertex)` spins
    /// the vertex about the pivot. `reverse` swaps the roles.
    pub fn rotate_vector(&self, angle: f64, reverse: bool) -> Point {
        let (fixed, dx, dy) = if reverse {
            (self.pt2, -self.delta_x(), -self.delta_y())
        } else {
            (self.pt1, self.delta_x(), self.delta_y())
        };
        let (sin, cos) = angle.sin_cos();
        let moving = if reverse { self.pt1 } else { self.pt2 };
        Point::with_z(
            fixed.x + cos * dx - sin * dy,
            fixed.y + sin * dx + cos * dy,
            moving.z,
        )
    }

    pub fn dot_product(v1: &Vector, v2: &Vector) -> f64 {
        v1.delta_x() * v2.delta_x() + v1.delta_y() * v2.delta_y()
    }

    /// Angle between two vectors in [0, PI].
    ///
    /// A zero-length arm has no direction; the angle is reported as PI.
    pub fn angle_between(v1: &Vector, v2: &Vector) -> f64 {
        let denom = v1.magnitude() * v2.magnitude();
        if denom == 0.0 {
            return PI;
        }
        let cos = (Vector::dot_product(v1, v2) / denom).clamp(-1.0, 1.0);
        cos.acos()
    }

    /// Intersection of two lines. `None` for parallel (or identical) lines.
    pub fn cross_section_point(desc1: &LineEquation, desc2: &LineEquation) -> Option<Point> {
        let pt = match (*desc1, *desc2) {
            (LineEquation::Sloped { a: a1, b: b1 }, LineEquation::Sloped { a: a2, b: b2 }) => {
                if a1 == a2 {
                    return None;
                }
                let x = (b2 - b1) / (a1 - a2);
                Point::new(x, a1 * x + b1)
            }
            (LineEquation::Vertical { x }, LineEquation::Sloped { a, b })
            | (LineEquation::Sloped { a, b }, LineEquation::Vertical { x }) => {
                Point::new(x, a * x + b)
            }
            (LineEquation::Vertical { .. }, LineEquation::Vertical { .. }) => return None,
        };

        if pt.is_finite() {
            Some(pt)
        } else {
            None
        }
    }
}
