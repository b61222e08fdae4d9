//! Overlap resolver
//!
//! Pairs are classified by shape kind (order-insensitive) and dispatched to
//! a same-kind or mixed-kind test. Mixed pairs have no algorithm yet and
//! report `Unsupported`; `overlaps()` on that is `false`, never a panic.

use serde::Serialize;

use crate::geometry::{Point, Vector};

use super::{Geometry, Geometry2D, ShapeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum OverlapPair {
    SameRectangle,
    SameCircle,
    SameTriangle,
    RectangleCircle,
    RectangleTriangle,
    CircleTriangle,
}

impl OverlapPair {
    pub fn classify(a: ShapeKind, b: ShapeKind) -> Self {
        use ShapeKind::*;
        match (a, b) {
            (Rectangle, Rectangle) => OverlapPair::SameRectangle,
            (Circle, Circle) => OverlapPair::SameCircle,
            (Triangle, Triangle) => OverlapPair::SameTriangle,
            (Rectangle, Circle) | (Circle, Rectangle) => OverlapPair::RectangleCircle,
            (Rectangle, Triangle) | (Triangle, Rectangle) => OverlapPair::RectangleTriangle,
            (Circle, Triangle) | (Triangle, Circle) => OverlapPair::CircleTriangle,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(
            self,
            OverlapPair::SameRectangle | OverlapPair::SameCircle | OverlapPair::SameTriangle
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlapResult {
    /// Shapes overlap; carries the edge intersections that proved it
    /// (empty for circle pairs)
    Overlapping(Vec<Point>),
    Separate,
    /// No algorithm for this pair of kinds
    Unsupported(OverlapPair),
}

impl OverlapResult {
    pub fn overlaps(&self) -> bool {
        matches!(self, OverlapResult::Overlapping(_))
    }

    pub fn intersection_points(&self) -> &[Point] {
        match self {
            OverlapResult::Overlapping(points) => points,
            _ => &[],
        }
    }
}

pub fn resolve_overlap(a: &Geometry, b: &Geometry) -> OverlapResult {
    let pair = OverlapPair::classify(a.kind(), b.kind());
    match (pair, a, b) {
        (OverlapPair::SameCircle, Geometry::Circle(c1), Geometry::Circle(c2)) => {
            let distance = Vector::new(c1.centroid(), c2.centroid()).magnitude();
            if distance <= c1.radius() + c2.radius() {
                OverlapResult::Overlapping(Vec::new())
            } else {
                OverlapResult::Separate
            }
        }
        (OverlapPair::SameRectangle, _, _) | (OverlapPair::SameTriangle, _, _) => {
            edge_intersections(a, b)
        }
        _ => OverlapResult::Unsupported(pair),
    }
}

/// Every edge of `a` against every edge of `b` as infinite lines; a
/// crossing counts when it lies inside both bounding boxes.
fn edge_intersections(a: &Geometry, b: &Geometry) -> OverlapResult {
    let bounds_a = a.bounding_box();
    let bounds_b = b.bounding_box();
    let edges_b = b.edges();

    let mut hits = Vec::new();
    for ea in a.edges() {
        let Some(la) = ea.equation_description() else {
            continue;
        };
        for eb in edges_b.iter() {
            let Some(lb) = eb.equation_description() else {
                continue;
            };
            if let Some(p) = Vector::cross_section_point(&la, &lb) {
                if bounds_a.contains(&p) && bounds_b.contains(&p) {
                    hits.push(p);
                }
            }
        }
    }

    if hits.is_empty() {
        OverlapResult::Separate
    } else {
        OverlapResult::Overlapping(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle, Triangle};

    fn circle(x: f64, y: f64, r: f64) -> Geometry {
        Circle::new(Point::new(x, y), r).into()
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Geometry {
        Rectangle::new(Point::new(x, y), w, h).into()
    }

    fn tri(offset_x: f64) -> Geometry {
        Triangle::new(
            [
                Point::new(offset_x, 10.0),
                Point::new(offset_x + 10.0, -10.0),
                Point::new(offset_x - 10.0, -10.0),
            ],
            Point::new(offset_x, 0.0),
        )
        .into()
    }

    #[test]
    fn classification_is_order_insensitive() {
        assert_eq!(
            OverlapPair::classify(ShapeKind::Circle, ShapeKind::Rectangle),
            OverlapPair::classify(ShapeKind::Rectangle, ShapeKind::Circle)
        );
        assert_eq!(
            OverlapPair::classify(ShapeKind::Triangle, ShapeKind::Triangle),
            OverlapPair::SameTriangle
        );
    }

    #[test]
    fn circles_overlap_when_centers_are_close_enough() {
        assert!(!resolve_overlap(&circle(0.0, 0.0, 10.0), &circle(25.0, 0.0, 10.0)).overlaps());
        assert!(resolve_overlap(&circle(0.0, 0.0, 10.0), &circle(15.0, 0.0, 10.0)).overlaps());
        assert!(resolve_overlap(&circle(0.0, 0.0, 10.0), &circle(20.0, 0.0, 10.0)).overlaps());
    }

    #[test]
    fn crossing_rectangles_overlap() {
        let r = resolve_overlap(&rect(0.0, 0.0, 20.0, 20.0), &rect(15.0, 5.0, 20.0, 20.0));
        assert!(r.overlaps());
        assert!(r.intersection_points().contains(&Point::new(10.0, -5.0)));
    }

    #[test]
    fn distant_rectangles_are_separate() {
        let r = resolve_overlap(&rect(0.0, 0.0, 20.0, 20.0), &rect(100.0, 0.0, 20.0, 20.0));
        assert_eq!(r, OverlapResult::Separate);
    }

    #[test]
    fn triangles_overlap_by_edge_crossings() {
        assert!(resolve_overlap(&tri(0.0), &tri(5.0)).overlaps());
        assert!(!resolve_overlap(&tri(0.0), &tri(50.0)).overlaps());
    }

    #[test]
    fn mixed_pairs_are_unsupported_and_false() {
        let r = resolve_overlap(&rect(0.0, 0.0, 20.0, 20.0), &circle(0.0, 0.0, 5.0));
        assert_eq!(r, OverlapResult::Unsupported(OverlapPair::RectangleCircle));
        assert!(!r.overlaps());
        assert!(!resolve_overlap(&tri(0.0), &circle(0.0, 0.0, 5.0)).overlaps());
        assert!(!resolve_overlap(&rect(0.0, 0.0, 20.0, 20.0), &tri(0.0)).overlaps());
    }
}
