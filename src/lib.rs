//! # mapmanager
//!
//! A small session manager that sits on top of a map rendering surface.
//!
//! The surface itself (markers, camera, styles, overlays) is provided by the
//! host through the [`MapSurface`] trait. This crate keeps track of the markers
//! it placed, picks and applies map styles, computes camera targets for marker
//! sets and draws circle overlays.

pub mod core;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod style;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{CircleDefaults, ManagerConfig, ManagerProfile},
    geo::{LatLng, LatLngBounds, Point},
    manager::MapsManager,
    viewport::{CameraPosition, CameraUpdate},
};

pub use crate::layers::{
    manager::MarkerRegistry,
    marker::{MarkerItem, MarkerOptions},
    vector::{CircleOptions, Color},
};

pub use crate::rendering::headless::HeadlessSurface;

pub use crate::style::{
    daylight::{DaylightSchedule, DaylightSlot},
    MapStyle, ResourceId, StyleError, StyleOptions,
};

pub use crate::traits::{MapSurface, MarkerHandle};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No coordinates given to {0}")]
    EmptyCoordinates(&'static str),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Installs `env_logger` as the global logger. Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(false).try_init();
}
