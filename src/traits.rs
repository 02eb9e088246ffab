//! Seams between the manager and the host's map rendering surface
//!
//! The manager never draws anything itself. Every visible effect goes through
//! a [`MapSurface`], which a host implements over its map SDK.

use crate::{
    core::{
        geo::{LatLng, Point},
        viewport::CameraUpdate,
    },
    layers::{marker::MarkerOptions, vector::CircleOptions},
    style::{ResourceId, StyleError, StyleOptions},
};

/// A marker placed on a surface
pub trait MarkerHandle {
    fn position(&self) -> LatLng;
}

/// The live map object the manager commands.
///
/// Implementations are expected to be driven from the thread that owns the
/// map; the manager adds no synchronisation of its own.
pub trait MapSurface {
    type Marker: MarkerHandle;
    type Circle;

    /// Places a marker and returns its handle
    fn add_marker(&mut self, options: &MarkerOptions) -> Self::Marker;

    /// Removes a single marker from the map
    fn remove_marker(&mut self, marker: &Self::Marker);

    /// Removes every marker and overlay from the map
    fn clear(&mut self);

    /// Moves the camera, animated where the surface supports it
    fn animate_camera(&mut self, update: CameraUpdate);

    /// Looks up a style resource
    fn load_style(&mut self, resource: ResourceId) -> Result<StyleOptions, StyleError>;

    /// Applies a loaded style; `false` if the surface rejected its content
    fn set_map_style(&mut self, style: &StyleOptions) -> bool;

    /// Draws a circle overlay and returns its handle
    fn add_circle(&mut self, options: CircleOptions) -> Self::Circle;

    /// Pixel size of the display the map is shown on
    fn display_size(&self) -> Point;

    /// Shows or hides the built-in "my location" button
    fn set_my_location_button_enabled(&mut self, enabled: bool);
}

impl<T: MarkerHandle + ?Sized> MarkerHandle for &T {
    fn position(&self) -> LatLng {
        (**self).position()
    }
}

impl MarkerHandle for LatLng {
    fn position(&self) -> LatLng {
        *self
    }
}
