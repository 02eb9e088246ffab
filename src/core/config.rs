//! Configuration for the map session manager
//!
//! Presets cover the common cases; a full [`ManagerConfig`] can also be loaded
//! from JSON so hosts can ship it alongside their other settings.

use crate::{
    core::constants::{
        DEFAULT_FILL_COLOR, DEFAULT_PADDING_RATIO, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH,
    },
    layers::vector::Color,
    style::daylight::DaylightSchedule,
    MapError, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum ManagerProfile {
    Standard,
    /// Tighter padding and thinner strokes for small displays
    Compact,
    Custom(ManagerConfig),
}

impl ManagerProfile {
    pub fn resolve(&self) -> ManagerConfig {
        match self {
            Self::Standard => ManagerConfig {
                padding_ratio: DEFAULT_PADDING_RATIO,
                circle: CircleDefaults::default(),
                daylight: DaylightSchedule::default(),
            },
            Self::Compact => ManagerConfig {
                padding_ratio: 0.05,
                circle: CircleDefaults {
                    stroke_width: 1.0,
                    ..CircleDefaults::default()
                },
                daylight: DaylightSchedule::default(),
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

impl Default for ManagerProfile {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Padding applied on every side by `fit_markers`, as a fraction of the
    /// display width
    pub padding_ratio: f64,
    pub circle: CircleDefaults,
    pub daylight: DaylightSchedule,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        ManagerProfile::default().resolve()
    }
}

impl ManagerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ManagerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..0.5).contains(&self.padding_ratio) {
            return Err(MapError::Config(format!(
                "padding_ratio must be in [0, 0.5), got {}",
                self.padding_ratio
            )));
        }
        if self.circle.stroke_width <= 0.0 {
            return Err(MapError::Config(format!(
                "circle.stroke_width must be positive, got {}",
                self.circle.stroke_width
            )));
        }
        self.daylight.validate()
    }

    /// Padding in whole pixels for a display of the given width
    pub fn padding_for_width(&self, width: f64) -> u32 {
        (width * self.padding_ratio).max(0.0) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleDefaults {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub stroke_width: f32,
}

impl Default for CircleDefaults {
    fn default() -> Self {
        Self {
            stroke_color: Color(DEFAULT_STROKE_COLOR),
            fill_color: Color(DEFAULT_FILL_COLOR),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::MapStyle;

    #[test]
    fn test_standard_profile() {
        let config = ManagerConfig::default();
        assert_eq!(config.padding_ratio, 0.10);
        assert_eq!(config.circle.stroke_color, Color::BLACK);
        assert_eq!(config.circle.fill_color, Color::TRANSLUCENT_RED);
        assert_eq!(config.circle.stroke_width, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_compact_profile() {
        let config = ManagerProfile::Compact.resolve();
        assert_eq!(config.padding_ratio, 0.05);
        assert_eq!(config.circle.stroke_width, 1.0);
    }

    #[test]
    fn test_padding_truncates() {
        let config = ManagerConfig::default();
        assert_eq!(config.padding_for_width(1080.0), 108);
        assert_eq!(config.padding_for_width(1085.0), 108);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ManagerConfig::from_json_str(r#"{ "padding_ratio": 0.2 }"#).unwrap();
        assert_eq!(config.padding_ratio, 0.2);
        assert_eq!(config.circle, CircleDefaults::default());
        assert_eq!(config.daylight.style_for_hour(9), MapStyle::Default);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ManagerProfile::Compact.resolve();
        let json = config.to_json_string().unwrap();
        assert_eq!(ManagerConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_padding_rejected() {
        let err = ManagerConfig::from_json_str(r#"{ "padding_ratio": 0.7 }"#).unwrap_err();
        assert!(matches!(err, MapError::Config(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ManagerConfig::from_json_str("{ padding_ratio").unwrap_err();
        assert!(matches!(err, MapError::Serialization(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ManagerConfig::from_json_file("/nonexistent/mapmanager.json").unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }
}
