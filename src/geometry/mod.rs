//! Geometry - coordinate carriers and the primitives every shape builds on
//!
//! All math runs in logical coordinates. Display coordinates are derived
//! from a `Viewport` only when something is drawn.

mod bounds;
mod point;
mod vector;

pub use bounds::{BoundingBox, BOUNDS_EPSILON};
pub use point::Point;
pub use vector::{LineEquation, Vector};
