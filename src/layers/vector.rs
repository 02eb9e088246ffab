use crate::core::{
    config::CircleDefaults,
    constants::{DEFAULT_FILL_COLOR, DEFAULT_STROKE_COLOR},
    geo::LatLng,
};
use serde::{Deserialize, Serialize};

/// Packed ARGB color, the format map surfaces take for overlay styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(DEFAULT_STROKE_COLOR);
    pub const WHITE: Color = Color(0xffff_ffff);
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const TRANSLUCENT_RED: Color = Color(DEFAULT_FILL_COLOR);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xff, r, g, b)
    }

    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(&self) -> u8 {
        self.0 as u8
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

/// Circle overlay description
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleOptions {
    pub center: LatLng,
    /// Radius in meters
    pub radius: f64,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub stroke_width: f32,
}

impl CircleOptions {
    pub fn new(center: LatLng, radius: f64) -> Self {
        Self::with_defaults(center, radius, &CircleDefaults::default())
    }

    pub fn with_defaults(center: LatLng, radius: f64, defaults: &CircleDefaults) -> Self {
        Self {
            center,
            radius,
            stroke_color: defaults.stroke_color,
            fill_color: defaults.fill_color,
            stroke_width: defaults.stroke_width,
        }
    }

    pub fn stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_channels() {
        let color = Color::TRANSLUCENT_RED;
        assert_eq!(color.alpha(), 0x30);
        assert_eq!(color.red(), 0xff);
        assert_eq!(color.green(), 0);
        assert_eq!(color.blue(), 0);
        assert_eq!(Color::from_argb(0x30, 0xff, 0, 0), color);
        assert_eq!(Color::rgb(0, 0, 0), Color::BLACK);
        assert_eq!(color.to_string(), "#30ff0000");
        assert_eq!(Color::TRANSPARENT.alpha(), 0);
        assert_eq!(Color::from_argb(0, 0, 0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn test_circle_defaults() {
        let circle = CircleOptions::new(LatLng::new(1.0, 1.0), 100.0);
        assert_eq!(circle.stroke_color, Color::BLACK);
        assert_eq!(circle.fill_color, Color(0x30ff0000));
        assert_eq!(circle.stroke_width, 2.0);
    }

    #[test]
    fn test_circle_overrides_are_independent() {
        let circle = CircleOptions::new(LatLng::new(1.0, 1.0), 100.0).fill_color(Color::WHITE);
        assert_eq!(circle.fill_color, Color::WHITE);
        assert_eq!(circle.stroke_color, Color::BLACK);
        assert_eq!(circle.stroke_width, 2.0);
    }

    #[test]
    fn test_color_serializes_as_integer() {
        let json = serde_json::to_string(&Color::TRANSLUCENT_RED).unwrap();
        assert_eq!(json, "822018048");
    }
}
