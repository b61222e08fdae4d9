//! Domain - colors, render configuration and physical constants

pub mod color;
pub mod constants;
pub mod draw_settings;

pub use color::Color;
pub use constants::PhysicsConstants;
pub use draw_settings::{DrawSettings, DrawSettingsPatch, StrokeSettings};
