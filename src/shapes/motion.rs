//! Animation state shared by every shape: rotation accumulator and
//! velocity.

use std::f64::consts::TAU;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// Rotation accumulator (radians).
///
/// `default` is set once at setup; `added` grows with every `rotate` call
/// and is kept in [0, TAU) so long sessions do not drift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Rotation {
    pub default: f64,
    pub added: f64,
}

impl Rotation {
    #[inline]
    pub fn total(&self) -> f64 {
        self.default + self.added
    }

    pub fn set_default_degrees(&mut self, degrees: f64) {
        self.default = degrees.to_radians();
    }

    pub fn add(&mut self, delta: f64) {
        self.added = (self.added + delta).rem_euclid(TAU);
    }
}

/// Velocity triple in logical units per second
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Speed {
    pub const ZERO: Speed = Speed { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

impl Add for Speed {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl AddAssign for Speed {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Speed {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

/// Velocity = initial (`default`) + everything applied since (`changed`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MovementSpeed {
    pub default: Speed,
    pub changed: Speed,
}

impl MovementSpeed {
    pub fn new(default: Speed) -> Self {
        Self { default, changed: Speed::ZERO }
    }

    #[inline]
    pub fn current(&self) -> Speed {
        self.default + self.changed
    }

    /// Impulses, gravity, anything accumulated by the caller
    pub fn add_speed(&mut self, delta: Speed) {
        self.changed += delta;
    }

    pub fn reset_changed(&mut self) {
        self.changed = Speed::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rotation_is_stored_in_radians() {
        let mut r = Rotation::default();
        r.set_default_degrees(180.0);
        assert!((r.default - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(r.added, 0.0);
    }

    #[test]
    fn added_rotation_accumulates_and_wraps() {
        let mut r = Rotation::default();
        r.add(1.0);
        r.add(0.5);
        assert!((r.added - 1.5).abs() < 1e-12);
        r.add(TAU);
        assert!((r.added - 1.5).abs() < 1e-9);
        r.add(-2.0);
        assert!((r.added - (TAU - 0.5)).abs() < 1e-9);
    }

    #[test]
    fn current_speed_sums_default_and_changed() {
        let mut m = MovementSpeed::new(Speed::planar(10.0, 0.0));
        m.add_speed(Speed::planar(0.0, -9.81));
        m.add_speed(Speed::planar(1.0, 0.0));
        assert_eq!(m.current(), Speed::new(11.0, -9.81, 0.0));
        m.reset_changed();
        assert_eq!(m.current(), Speed::planar(10.0, 0.0));
    }
}
