//! Viewport - logical <-> display coordinate mapping
//!
//! Logical space is centered on the canvas and Y-up.
//! Display space is the canvas device space: origin top-left, Y-down.

use serde::Serialize;

/// Canvas size in device pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// display_x = width/2 + logical_x
    #[inline]
    pub fn to_display_x(&self, logical_x: f64) -> f64 {
        self.half_width() + logical_x
    }

    /// display_y = height/2 - logical_y
    #[inline]
    pub fn to_display_y(&self, logical_y: f64) -> f64 {
        self.half_height() - logical_y
    }

    /// Inverse of the display mapping (pointer input -> logical space)
    #[inline]
    pub fn to_logical(&self, display_x: f64, display_y: f64) -> (f64, f64) {
        (display_x - self.half_width(), self.half_height() - display_y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_canvas_center() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_display_x(0.0), 400.0);
        assert_eq!(vp.to_display_y(0.0), 300.0);
    }

    #[test]
    fn y_axis_is_flipped() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_display_y(100.0), 200.0);
        assert_eq!(vp.to_display_y(-100.0), 400.0);
    }

    #[test]
    fn to_logical_inverts_display_mapping() {
        let vp = Viewport::new(640.0, 480.0);
        let (x, y) = vp.to_logical(vp.to_display_x(12.5), vp.to_display_y(-40.0));
        assert_eq!((x, y), (12.5, -40.0));
    }
}
