//! Color - the opaque value the renderer reads
//!
//! The draw pipeline only ever asks two things: the display code
//! (`hex_code`) and whether the color is the null sentinel ("draw nothing").

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    rgba: [u8; 4],
    null: bool,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    pub const GREEN: Color = Color::rgba(0, 200, 0, 255);
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    pub const PINK: Color = Color::rgba(255, 105, 180, 255);
    pub const GRAY: Color = Color::rgba(128, 128, 128, 255);
    /// Marker color for debug overlays (intersection points)
    pub const HIGHLIGHT: Color = Color::rgba(255, 0, 0, 255);
    /// "No color": strokes/fills with it are skipped
    pub const NULL: Color = Color { rgba: [0, 0, 0, 0], null: true };

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { rgba: [r, g, b, a], null: false }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// `#RRGGBBAA`, always 9 characters
    pub fn hex_code(&self) -> String {
        let [r, g, b, a] = self.rgba;
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.null
    }

    pub fn components(&self) -> [u8; 4] {
        self.rgba
    }

    /// Alpha channel in [0, 1]
    pub fn opacity(&self) -> f64 {
        self.rgba[3] as f64 / 255.0
    }

    /// (hue degrees, saturation, value), saturation and value in [0, 1]
    pub fn hsv(&self) -> (f64, f64, f64) {
        let r = self.rgba[0] as f64 / 255.0;
        let g = self.rgba[1] as f64 / 255.0;
        let b = self.rgba[2] as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let saturation = if max == 0.0 { 0.0 } else { delta / max };
        (hue, saturation, max)
    }

    pub fn preset(name: &str) -> Option<Color> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "red" => Color::RED,
            "green" => Color::GREEN,
            "blue" => Color::BLUE,
            "pink" => Color::PINK,
            "gray" | "grey" => Color::GRAY,
            "highlight" => Color::HIGHLIGHT,
            "null" | "none" => Color::NULL,
            _ => return None,
        };
        Some(color)
    }

    /// Accepts preset names, `#rgb`, `#rrggbb` and `#rrggbbaa`.
    pub fn parse(input: &str) -> Result<Color, String> {
        let s = input.trim();
        if let Some(c) = Color::preset(s) {
            return Ok(c);
        }
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("unknown color: {}", input))?;

        let nibble = |i: usize| -> Result<u8, String> {
            u8::from_str_radix(&hex[i..i + 1], 16).map_err(|e| format!("bad color {}: {}", input, e))
        };
        let byte = |i: usize| -> Result<u8, String> {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("bad color {}: {}", input, e))
        };

        if !hex.is_ascii() {
            return Err(format!("bad color {}: non-ascii", input));
        }
        match hex.len() {
            3 => Ok(Color::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            n => Err(format!("bad color {}: expected 3, 6 or 8 hex digits, got {}", input, n)),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        if color.is_null() {
            "null".to_string()
        } else {
            color.hex_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_code_is_fixed_length() {
        assert_eq!(Color::BLACK.hex_code(), "#000000FF");
        assert_eq!(Color::rgba(1, 2, 3, 4).hex_code().len(), 9);
    }

    #[test]
    fn null_is_the_only_sentinel() {
        assert!(Color::NULL.is_null());
        assert!(!Color::BLACK.is_null());
        assert!(!Color::rgba(0, 0, 0, 0).is_null());
    }

    #[test]
    fn parses_all_hex_forms() {
        assert_eq!(Color::parse("#f0a").unwrap(), Color::rgb(255, 0, 170));
        assert_eq!(Color::parse("#FF69B4").unwrap(), Color::PINK);
        assert_eq!(Color::parse("#00000080").unwrap(), Color::rgba(0, 0, 0, 128));
        assert_eq!(Color::parse("Pink").unwrap(), Color::PINK);
        assert!(Color::parse("null").unwrap().is_null());
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::parse("#12").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("chartreuse-ish").is_err());
    }

    #[test]
    fn hsv_of_primaries() {
        assert_eq!(Color::RED.hsv(), (0.0, 1.0, 1.0));
        assert_eq!(Color::BLUE.hsv(), (240.0, 1.0, 1.0));
        assert_eq!(Color::BLACK.hsv(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn serde_uses_display_code() {
        let json = serde_json::to_string(&Color::PINK).unwrap();
        assert_eq!(json, "\"#FF69B4FF\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::PINK);
    }
}
