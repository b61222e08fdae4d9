//! Physical constants used by the scene's gravity

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConstants {
    /// Speed of light [m / s]
    pub c: f64,
    /// Mean gravitational acceleration at Earth's surface [m / s^2]
    pub g: f64,
    /// Newtonian gravitational constant [m^3 / (kg * s^2)]
    #[serde(rename = "G")]
    pub big_g: f64,
}

impl PhysicsConstants {
    pub const EARTH: PhysicsConstants = PhysicsConstants {
        c: 299_792_458.0,
        g: 9.81,
        big_g: 6.674_301_5e-11,
    };
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self::EARTH
    }
}
