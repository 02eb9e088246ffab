use crate::{core::geo::LatLng, style::ResourceId};
use serde::{Deserialize, Serialize};

/// Placement options handed to the surface when a marker is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerOptions {
    pub position: LatLng,
    pub title: Option<String>,
    pub snippet: Option<String>,
    /// Icon resource; `None` lets the surface draw its default pin
    pub icon: Option<ResourceId>,
    /// Anchor inside the icon as (u, v) fractions of its size
    pub anchor: (f32, f32),
    pub draggable: bool,
    pub visible: bool,
    pub z_index: f32,
    pub alpha: f32,
}

impl MarkerOptions {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            title: None,
            snippet: None,
            icon: None,
            anchor: (0.5, 1.0),
            draggable: false,
            visible: true,
            z_index: 0.0,
            alpha: 1.0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn icon(mut self, icon: ResourceId) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn anchor(mut self, u: f32, v: f32) -> Self {
        self.anchor = (u, v);
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn z_index(mut self, z_index: f32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self::new(LatLng::default())
    }
}

/// A registry entry: the caller's identifier and the surface's marker handle
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerItem<M> {
    pub id: String,
    pub marker: M,
}

impl<M> MarkerItem<M> {
    pub fn new(id: impl Into<String>, marker: M) -> Self {
        Self {
            id: id.into(),
            marker,
        }
    }
}
