//! Prelude module for common mapmanager types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapmanager::prelude::*;`

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

pub use crate::rendering::headless::{HeadlessCircle, HeadlessMarker, HeadlessSurface, SurfaceCall};

pub use crate::style::{
    daylight::{DaylightSchedule, DaylightSlot},
    MapStyle, ResourceId, StyleError, StyleOptions,
};

pub use crate::traits::{MapSurface, MarkerHandle};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
