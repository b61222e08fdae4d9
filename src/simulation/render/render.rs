use crate::domain::Color;
use crate::render::{draw_marker, RenderSurface};

use super::{PerfTimer, SceneCore};

pub(super) fn render<S: RenderSurface + ?Sized>(scene: &mut SceneCore, surface: &mut S) -> usize {
    let timer = PerfTimer::start();

    // The page owns the canvas size; follow it.
    let viewport = surface.viewport();
    scene.viewport = viewport;

    let mut drawn = 0;
    for entry in scene.entries.iter_mut() {
        if entry.shape.draw(surface) {
            drawn += 1;
        }
    }

    for p in scene.highlights.drain(..) {
        draw_marker(surface, &viewport, &p, Color::HIGHLIGHT);
    }

    scene.frame_stats.record_render(timer.elapsed_ms(), drawn);
    drawn
}
