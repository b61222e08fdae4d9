use serde::Serialize;

use crate::core::Viewport;

/// Position in logical space (centered, Y-up)
///
/// `z` only flags whether depth translation applies; planar points carry
/// `Some(1.0)` by default and `None` opts out entirely.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: Some(1.0) }
    }

    pub fn with_z(x: f64, y: f64, z: Option<f64>) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Moves the point in place and hands it back for chaining.
    ///
    /// `z` changes only when both the stored z and `dz` are present and
    /// non-zero.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: Option<f64>) -> &mut Self {
        self.x += dx;
        self.y += dy;
        if let (Some(z), Some(dz)) = (self.z, dz) {
            if z != 0.0 && dz != 0.0 {
                self.z = Some(z + dz);
            }
        }
        self
    }

    /// Copy of this point moved by (dx, dy); z untouched.
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, z: self.z }
    }

    #[inline]
    pub fn midpoint(&self, other: &Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Logical coordinates, the only ones geometry math may use
    #[inline]
    pub fn original_coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[inline]
    pub fn display_x(&self, viewport: &Viewport) -> f64 {
        viewport.to_display_x(self.x)
    }

    #[inline]
    pub fn display_y(&self, viewport: &Viewport) -> f64 {
        viewport.to_display_y(self.y)
    }

    /// Device pixel the point lands on. Rounding happens here, at render
    /// time, never on the stored value.
    #[inline]
    pub fn display_pixel(&self, viewport: &Viewport) -> (i32, i32) {
        (
            self.display_x(viewport).round() as i32,
            self.display_y(viewport).round() as i32,
        )
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
