//! In-memory map surface
//!
//! Keeps the map state a real SDK would hold (markers, circles, camera,
//! applied style) and records every call it receives. Used by the demo
//! binary and the tests, and handy for hosts that want to dry-run a session.

use crate::{
    core::{
        geo::{LatLng, Point},
        viewport::{CameraPosition, CameraUpdate},
    },
    layers::{marker::MarkerOptions, vector::CircleOptions},
    prelude::HashMap,
    style::{MapStyle, ResourceId, StyleError, StyleOptions},
    traits::{MapSurface, MarkerHandle},
};
use log::{debug, warn};
use serde::Deserialize;

/// Marker placed on a [`HeadlessSurface`]
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessMarker {
    pub id: u64,
    pub options: MarkerOptions,
}

impl MarkerHandle for HeadlessMarker {
    fn position(&self) -> LatLng {
        self.options.position
    }
}

/// Circle drawn on a [`HeadlessSurface`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessCircle {
    pub id: u64,
    pub options: CircleOptions,
}

/// A call received by the surface, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    AddMarker(u64),
    RemoveMarker(u64),
    Clear,
    AnimateCamera(CameraUpdate),
    LoadStyle(ResourceId),
    SetMapStyle { accepted: bool },
    AddCircle(u64),
    SetMyLocationButtonEnabled(bool),
}

/// One entry of a map style definition. Selector keys such as `featureType`
/// are ignored; a missing `stylers` list makes the style invalid.
#[derive(Debug, Deserialize)]
struct StyleRule {
    stylers: Vec<serde_json::Map<String, serde_json::Value>>,
}

pub struct HeadlessSurface {
    display_size: Point,
    camera: CameraPosition,
    markers: Vec<HeadlessMarker>,
    circles: Vec<HeadlessCircle>,
    style_resources: HashMap<ResourceId, String>,
    applied_style: Option<StyleOptions>,
    location_button_enabled: bool,
    next_id: u64,
    calls: Vec<SurfaceCall>,
}

impl HeadlessSurface {
    /// A surface with no style resources registered
    pub fn new(display_size: Point) -> Self {
        Self {
            display_size,
            camera: CameraPosition::default(),
            markers: Vec::new(),
            circles: Vec::new(),
            style_resources: HashMap::default(),
            applied_style: None,
            location_button_enabled: true,
            next_id: 1,
            calls: Vec::new(),
        }
    }

    /// A surface with the bundled styles registered under their resource ids
    pub fn with_builtin_styles(display_size: Point) -> Self {
        let mut surface = Self::new(display_size);
        for style in MapStyle::BUILT_IN {
            if let Some(json) = builtin_style_json(style) {
                surface.register_style(style.resource(), json);
            }
        }
        surface
    }

    /// Makes a style definition loadable under `resource`
    pub fn register_style(&mut self, resource: ResourceId, json: impl Into<String>) {
        self.style_resources.insert(resource, json.into());
    }

    pub fn camera(&self) -> CameraPosition {
        self.camera
    }

    pub fn markers(&self) -> &[HeadlessMarker] {
        &self.markers
    }

    pub fn circles(&self) -> &[HeadlessCircle] {
        &self.circles
    }

    pub fn applied_style(&self) -> Option<&StyleOptions> {
        self.applied_style.as_ref()
    }

    pub fn is_location_button_enabled(&self) -> bool {
        self.location_button_enabled
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Camera updates received so far
    pub fn camera_updates(&self) -> Vec<&CameraUpdate> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::AnimateCamera(update) => Some(update),
                _ => None,
            })
            .collect()
    }

    pub fn set_display_size(&mut self, display_size: Point) {
        self.display_size = display_size;
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::with_builtin_styles(Point::new(1080.0, 1920.0))
    }
}

impl MapSurface for HeadlessSurface {
    type Marker = HeadlessMarker;
    type Circle = HeadlessCircle;

    fn add_marker(&mut self, options: &MarkerOptions) -> HeadlessMarker {
        let marker = HeadlessMarker {
            id: self.next_id(),
            options: options.clone(),
        };
        self.calls.push(SurfaceCall::AddMarker(marker.id));
        self.markers.push(marker.clone());
        marker
    }

    fn remove_marker(&mut self, marker: &HeadlessMarker) {
        self.calls.push(SurfaceCall::RemoveMarker(marker.id));
        self.markers.retain(|m| m.id != marker.id);
    }

    fn clear(&mut self) {
        self.calls.push(SurfaceCall::Clear);
        self.markers.clear();
        self.circles.clear();
    }

    fn animate_camera(&mut self, update: CameraUpdate) {
        self.camera = update.resolve();
        debug!(
            "camera at ({:.6}, {:.6}) zoom {}",
            self.camera.target.lat, self.camera.target.lng, self.camera.zoom
        );
        self.calls.push(SurfaceCall::AnimateCamera(update));
    }

    fn load_style(&mut self, resource: ResourceId) -> Result<StyleOptions, StyleError> {
        self.calls.push(SurfaceCall::LoadStyle(resource));
        self.style_resources
            .get(&resource)
            .map(|json| StyleOptions::from_json(json.as_str()))
            .ok_or(StyleError::ResourceNotFound(resource))
    }

    fn set_map_style(&mut self, style: &StyleOptions) -> bool {
        let accepted = match serde_json::from_str::<Vec<StyleRule>>(style.json()) {
            Ok(rules) => {
                let stylers: usize = rules.iter().map(|rule| rule.stylers.len()).sum();
                debug!("applying style with {} rules, {} stylers", rules.len(), stylers);
                true
            }
            Err(e) => {
                warn!("rejecting style definition: {}", e);
                false
            }
        };
        if accepted {
            self.applied_style = Some(style.clone());
        }
        self.calls.push(SurfaceCall::SetMapStyle { accepted });
        accepted
    }

    fn add_circle(&mut self, options: CircleOptions) -> HeadlessCircle {
        let circle = HeadlessCircle {
            id: self.next_id(),
            options,
        };
        self.calls.push(SurfaceCall::AddCircle(circle.id));
        self.circles.push(circle);
        circle
    }

    fn display_size(&self) -> Point {
        self.display_size
    }

    fn set_my_location_button_enabled(&mut self, enabled: bool) {
        self.calls.push(SurfaceCall::SetMyLocationButtonEnabled(enabled));
        self.location_button_enabled = enabled;
    }
}

/// Definition of a bundled style; custom styles have none
fn builtin_style_json(style: MapStyle) -> Option<&'static str> {
    match style {
        MapStyle::Aubergine => Some(include_str!("../../assets/styles/aubergine.json")),
        MapStyle::Dark => Some(include_str!("../../assets/styles/dark.json")),
        MapStyle::Night => Some(include_str!("../../assets/styles/night.json")),
        MapStyle::Retro => Some(include_str!("../../assets/styles/retro.json")),
        MapStyle::Silver => Some(include_str!("../../assets/styles/silver.json")),
        MapStyle::Default => Some(include_str!("../../assets/styles/default.json")),
        MapStyle::Custom(_) => None,
    }
}
