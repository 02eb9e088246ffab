//! Map style selection
//!
//! A [`MapStyle`] names one of the bundled looks or a caller-provided style
//! resource. The manager resolves it to a [`ResourceId`], asks the surface to
//! load the resource and then to apply the loaded [`StyleOptions`].

pub mod daylight;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a host resource (style file, marker icon, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl ResourceId {
    pub const AUBERGINE: ResourceId = ResourceId(0x7f0f_0001);
    pub const DARK: ResourceId = ResourceId(0x7f0f_0002);
    pub const NIGHT: ResourceId = ResourceId(0x7f0f_0003);
    pub const RETRO: ResourceId = ResourceId(0x7f0f_0004);
    pub const SILVER: ResourceId = ResourceId(0x7f0f_0005);
    pub const DEFAULT: ResourceId = ResourceId(0x7f0f_0006);
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// The bundled map looks plus an escape hatch for custom style resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapStyle {
    Aubergine,
    Dark,
    Night,
    Retro,
    Silver,
    Default,
    Custom(ResourceId),
}

impl MapStyle {
    pub const BUILT_IN: [MapStyle; 6] = [
        MapStyle::Aubergine,
        MapStyle::Dark,
        MapStyle::Night,
        MapStyle::Retro,
        MapStyle::Silver,
        MapStyle::Default,
    ];

    /// Resource holding this style's definition
    pub fn resource(&self) -> ResourceId {
        match self {
            MapStyle::Aubergine => ResourceId::AUBERGINE,
            MapStyle::Dark => ResourceId::DARK,
            MapStyle::Night => ResourceId::NIGHT,
            MapStyle::Retro => ResourceId::RETRO,
            MapStyle::Silver => ResourceId::SILVER,
            MapStyle::Default => ResourceId::DEFAULT,
            MapStyle::Custom(resource) => *resource,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, MapStyle::Custom(_))
    }
}

impl std::fmt::Display for MapStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapStyle::Aubergine => write!(f, "aubergine"),
            MapStyle::Dark => write!(f, "dark"),
            MapStyle::Night => write!(f, "night"),
            MapStyle::Retro => write!(f, "retro"),
            MapStyle::Silver => write!(f, "silver"),
            MapStyle::Default => write!(f, "default"),
            MapStyle::Custom(resource) => write!(f, "custom({})", resource),
        }
    }
}

/// Raw style definition as loaded from a resource, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOptions {
    json: String,
}

impl StyleOptions {
    pub fn from_json(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    pub fn json(&self) -> &str {
        &self.json
    }
}

/// Why a style could not be applied. The previously applied style stays.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("can't find style resource {0}")]
    ResourceNotFound(ResourceId),

    #[error("style parsing failed for resource {0}")]
    ApplyRejected(ResourceId),
}

impl StyleError {
    pub fn resource(&self) -> ResourceId {
        match self {
            StyleError::ResourceNotFound(resource) | StyleError::ApplyRejected(resource) => {
                *resource
            }
        }
    }
}
