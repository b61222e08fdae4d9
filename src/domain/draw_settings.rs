//! DrawSettings - per-shape render configuration
//!
//! Settings arrive from the page as JSON patches. Only keys listed on
//! `DrawSettingsPatch` are merged; anything else is ignored so newer pages
//! keep working against older engines.

use serde::{Deserialize, Serialize};

use super::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeSettings {
    pub color: Color,
    /// Line width in device pixels
    pub strength: f64,
    pub opacity: f64,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            color: Color::NULL,
            strength: 1.0,
            opacity: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawSettings {
    pub fill_color: Color,
    pub fill_opacity: f64,
    pub stroke: StrokeSettings,
    /// Skip the fill pass
    pub invisible: bool,
    /// Outline the bounding box
    pub draw_hitbox: bool,
    pub draw_edge_points: bool,
    pub draw_centroid: bool,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            fill_color: Color::BLACK,
            fill_opacity: 1.0,
            stroke: StrokeSettings::default(),
            invisible: false,
            draw_hitbox: false,
            draw_edge_points: false,
            draw_centroid: false,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StrokePatch {
    color: Option<Color>,
    strength: Option<f64>,
    opacity: Option<f64>,
}

/// Partial settings; absent keys leave the current value alone.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawSettingsPatch {
    fill_color: Option<Color>,
    fill_opacity: Option<f64>,
    stroke: Option<StrokePatch>,
    invisible: Option<bool>,
    draw_hitbox: Option<bool>,
    draw_edge_points: Option<bool>,
    draw_centroid: Option<bool>,
}

impl DrawSettingsPatch {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

impl DrawSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut settings = DrawSettings::default();
        settings.merge_json(json)?;
        Ok(settings)
    }

    pub fn merge_json(&mut self, json: &str) -> Result<(), String> {
        let patch = DrawSettingsPatch::from_json(json)?;
        self.merge(patch);
        Ok(())
    }

    pub fn merge(&mut self, patch: DrawSettingsPatch) {
        if let Some(c) = patch.fill_color {
            self.fill_color = c;
        }
        if let Some(o) = patch.fill_opacity {
            self.fill_opacity = o.clamp(0.0, 1.0);
        }
        if let Some(stroke) = patch.stroke {
            if let Some(c) = stroke.color {
                self.stroke.color = c;
            }
            if let Some(w) = stroke.strength {
                self.stroke.strength = w.max(0.0);
            }
            if let Some(o) = stroke.opacity {
                self.stroke.opacity = o.clamp(0.0, 1.0);
            }
        }
        if let Some(v) = patch.invisible {
            self.invisible = v;
        }
        if let Some(v) = patch.draw_hitbox {
            self.draw_hitbox = v;
        }
        if let Some(v) = patch.draw_edge_points {
            self.draw_edge_points = v;
        }
        if let Some(v) = patch.draw_centroid {
            self.draw_centroid = v;
        }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke.color = color;
        self
    }
}
