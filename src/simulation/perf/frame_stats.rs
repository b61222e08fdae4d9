use std::collections::VecDeque;

use wasm_bindgen::prelude::*;

/// Frames kept for the rolling frame-time average
pub const FRAME_WINDOW: usize = 60;

/// Per-frame timing snapshot handed to the page
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    pub(super) last_frame_ms: f64,
    pub(super) frame_time_average_ms: f64,
    pub(super) total_frames: u32,
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) shape_count: u32,
    pub(super) shapes_drawn: u32,
    pub(super) shapes_culled: u32,
    window: VecDeque<f64>,
}

impl FrameStats {
    pub(super) fn record_step(&mut self, frame_ms: f64, step_ms: f64, shape_count: usize, culled: usize) {
        self.last_frame_ms = frame_ms;
        if self.window.len() >= FRAME_WINDOW {
            self.window.pop_front();
        }
        self.window.push_back(frame_ms);
        self.frame_time_average_ms = self.window.iter().sum::<f64>() / self.window.len() as f64;
        self.total_frames = self.total_frames.saturating_add(1);

        self.step_ms = step_ms;
        self.shape_count = shape_count as u32;
        self.shapes_culled = culled as u32;
    }

    pub(super) fn record_render(&mut self, render_ms: f64, drawn: usize) {
        self.render_ms = render_ms;
        self.shapes_drawn = drawn as u32;
    }

    pub fn window_len(&self) -> usize {
        self.window.len()
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn last_frame_ms(&self) -> f64 { self.last_frame_ms }
    #[wasm_bindgen(getter)]
    pub fn frame_time_average_ms(&self) -> f64 { self.frame_time_average_ms }
    #[wasm_bindgen(getter)]
    pub fn total_frames(&self) -> u32 { self.total_frames }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> u32 { self.shape_count }
    #[wasm_bindgen(getter)]
    pub fn shapes_drawn(&self) -> u32 { self.shapes_drawn }
    #[wasm_bindgen(getter)]
    pub fn shapes_culled(&self) -> u32 { self.shapes_culled }

    /// Frames per second implied by the rolling average
    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f64 {
        if self.frame_time_average_ms > 0.0 {
            1000.0 / self.frame_time_average_ms
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_covers_only_the_last_window() {
        let mut stats = FrameStats::default();
        for _ in 0..FRAME_WINDOW {
            stats.record_step(100.0, 0.0, 0, 0);
        }
        for _ in 0..FRAME_WINDOW {
            stats.record_step(10.0, 0.0, 0, 0);
        }
        assert_eq!(stats.window_len(), FRAME_WINDOW);
        assert!((stats.frame_time_average_ms() - 10.0).abs() < 1e-9);
        assert_eq!(stats.total_frames(), 2 * FRAME_WINDOW as u32);
        assert!((stats.fps() - 100.0).abs() < 1e-6);
    }
}
