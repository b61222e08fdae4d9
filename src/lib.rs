//! Planar Engine - 2D shape geometry and transforms in WASM
//!
//! Architecture:
//! - core/        - Viewport mapping, leveled logging
//! - geometry/    - Points, vectors, lines, bounding boxes
//! - domain/      - Colors, draw settings, physical constants
//! - shapes/      - Triangle, rectangle, circle and their overlap rules
//! - render/      - Drawing onto a 2D surface
//! - simulation/  - Scene driver and the JS facade

pub mod core;
pub mod geometry;
pub mod domain;
pub mod shapes;
pub mod render;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Thread pool for the parallel pair sweep
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Planar WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Debugger, Viewport};
pub use domain::{Color, DrawSettings, PhysicsConstants};
pub use geometry::{BoundingBox, LineEquation, Point, Vector};
pub use shapes::{Circle, Geometry, Geometry2D, OverlapResult, Rectangle, Shape, ShapeKind, Speed, Triangle};
pub use simulation::{FrameStats, Sandbox, SceneCore};
