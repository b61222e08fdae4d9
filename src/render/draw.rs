use std::f64::consts::TAU;

use crate::core::Viewport;
use crate::domain::Color;
use crate::geometry::Point;
use crate::shapes::{Geometry, Geometry2D, Shape};

use super::RenderSurface;

/// Radius (px) of edge-point, centroid and intersection markers
pub const MARKER_RADIUS: f64 = 3.0;

impl Shape {
    /// Draws the shape; returns `false` when it was skipped as off-canvas.
    ///
    /// Order matters: cull, refresh the live cache, outline, fill, stroke,
    /// then the debug overlays (bounding box, edge points, centroid).
    pub fn draw<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let viewport = surface.viewport();
        if self.off_canvas(&viewport) {
            return false;
        }

        self.refresh();
        self.outline(surface, &viewport);

        let settings = self.settings;
        if !settings.invisible && !settings.fill_color.is_null() {
            surface.set_global_alpha(settings.fill_opacity);
            surface.set_fill_style(&settings.fill_color.hex_code());
            surface.fill();
        }

        if !settings.stroke.color.is_null() {
            surface.set_global_alpha(settings.stroke.opacity);
            surface.set_line_width(settings.stroke.strength);
            surface.set_stroke_style(&settings.stroke.color.hex_code());
            surface.stroke();
        }
        surface.set_global_alpha(1.0);

        if settings.draw_hitbox {
            trace_polygon(surface, &viewport, self.square_edges());
            surface.set_line_width(1.0);
            surface.set_stroke_style(&Color::GRAY.hex_code());
            surface.stroke();
        }
        if settings.draw_edge_points {
            for p in self.rotated_points() {
                draw_marker(surface, &viewport, p, Color::BLUE);
            }
        }
        if settings.draw_centroid {
            draw_marker(surface, &viewport, &self.centroid(), Color::GREEN);
        }
        true
    }

    fn outline<S: RenderSurface + ?Sized>(&self, surface: &mut S, viewport: &Viewport) {
        match self.geometry() {
            Geometry::Circle(c) => {
                let (x, y) = c.centroid().display_pixel(viewport);
                surface.begin_path();
                surface.arc(x, y, c.radius(), 0.0, TAU);
                surface.close_path();
            }
            _ => trace_polygon(surface, viewport, self.rotated_points()),
        }
    }
}

fn trace_polygon<S: RenderSurface + ?Sized>(surface: &mut S, viewport: &Viewport, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    surface.begin_path();
    let (x, y) = first.display_pixel(viewport);
    surface.move_to(x, y);
    for p in rest {
        let (x, y) = p.display_pixel(viewport);
        surface.line_to(x, y);
    }
    surface.close_path();
}

/// Small filled dot at a logical point
pub fn draw_marker<S: RenderSurface + ?Sized>(
    surface: &mut S,
    viewport: &Viewport,
    point: &Point,
    color: Color,
) {
    let (x, y) = point.display_pixel(viewport);
    surface.begin_path();
    surface.arc(x, y, MARKER_RADIUS, 0.0, TAU);
    surface.close_path();
    surface.set_fill_style(&color.hex_code());
    surface.fill();
}
