use serde::Serialize;

use crate::core::Viewport;

use super::point::Point;

/// Slack for "point lies on the box edge" checks after float math
pub const BOUNDS_EPSILON: f64 = 1e-9;

/// Axis-aligned box in logical space (top > bottom, Y-up)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Min/max over a point set. `None` for an empty set.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bb = BoundingBox {
            left: first.x,
            right: first.x,
            top: first.y,
            bottom: first.y,
        };
        for p in &points[1..] {
            bb.left = bb.left.min(p.x);
            bb.right = bb.right.max(p.x);
            bb.bottom = bb.bottom.min(p.y);
            bb.top = bb.top.max(p.y);
        }
        Some(bb)
    }

    pub fn around(center: &Point, half_width: f64, half_height: f64) -> Self {
        BoundingBox {
            left: center.x - half_width,
            right: center.x + half_width,
            top: center.y + half_height,
            bottom: center.y - half_height,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Corner points in winding order: bottom-left, bottom-right,
    /// top-right, top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.bottom),
            Point::new(self.right, self.bottom),
            Point::new(self.right, self.top),
            Point::new(self.left, self.top),
        ]
    }

    /// Inclusive, with `BOUNDS_EPSILON` of slack on every side
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.left - BOUNDS_EPSILON
            && p.x <= self.right + BOUNDS_EPSILON
            && p.y >= self.bottom - BOUNDS_EPSILON
            && p.y <= self.top + BOUNDS_EPSILON
    }

    /// True when the box is entirely past one viewport edge.
    pub fn off_canvas(&self, viewport: &Viewport) -> bool {
        let hw = viewport.half_width();
        let hh = viewport.half_height();
        self.right <= -hw || self.left >= hw || self.top <= -hh || self.bottom >= hh
    }
}
