use crate::{
    core::{
        config::ManagerConfig,
        geo::{LatLng, LatLngBounds},
        viewport::CameraUpdate,
    },
    layers::{
        manager::MarkerRegistry,
        marker::{MarkerItem, MarkerOptions},
        vector::CircleOptions,
    },
    style::{MapStyle, StyleError},
    traits::{MapSurface, MarkerHandle},
    MapError, Result,
};
use log::{debug, error, info, warn};

/// Convenience layer over a [`MapSurface`]: tracks the markers it placed,
/// applies styles, moves the camera over marker sets and draws circles.
///
/// All calls run synchronously on the caller's thread.
pub struct MapsManager<S: MapSurface> {
    surface: S,
    markers: MarkerRegistry<S::Marker>,
    config: ManagerConfig,
    current_style: Option<MapStyle>,
}

impl<S: MapSurface> MapsManager<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, ManagerConfig::default())
    }

    pub fn with_config(surface: S, config: ManagerConfig) -> Self {
        Self {
            surface,
            markers: MarkerRegistry::new(),
            config,
            current_style: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn registry(&self) -> &MarkerRegistry<S::Marker> {
        &self.markers
    }

    // Markers

    /// Places a marker and remembers it under `id`. Ids may repeat.
    pub fn add_marker(&mut self, id: impl Into<String>, options: &MarkerOptions) {
        let id = id.into();
        let marker = self.surface.add_marker(options);
        debug!(
            "added marker '{}' at ({:.6}, {:.6})",
            id, options.position.lat, options.position.lng
        );
        self.markers.push(MarkerItem::new(id, marker));
    }

    /// Marker handles in the order they were added
    pub fn all_markers(&self) -> Vec<&S::Marker> {
        self.markers.markers()
    }

    /// First marker whose registry entry satisfies `condition`
    pub fn marker_by<F>(&self, condition: F) -> Option<&S::Marker>
    where
        F: FnMut(&MarkerItem<S::Marker>) -> bool,
    {
        self.markers.find(condition).map(|item| &item.marker)
    }

    pub fn marker(&self, id: &str) -> Option<&S::Marker> {
        self.markers.get(id).map(|item| &item.marker)
    }

    /// Removes every marker registered under `id` from the registry and the
    /// map. Returns how many were removed.
    pub fn remove_marker(&mut self, id: &str) -> usize {
        let removed = self.markers.remove(id);
        for item in &removed {
            self.surface.remove_marker(&item.marker);
        }
        debug!("removed {} marker(s) with id '{}'", removed.len(), id);
        removed.len()
    }

    /// Forgets every marker and clears the map, overlays included
    pub fn clear_markers(&mut self) {
        debug!("clearing {} marker(s)", self.markers.len());
        self.markers.clear();
        self.surface.clear();
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn marker_ids(&self) -> Vec<&str> {
        self.markers.ids().collect()
    }

    // Styles

    /// Loads and applies `style`.
    ///
    /// On failure the error is logged and returned; the map keeps whatever
    /// style it had before.
    pub fn set_style(&mut self, style: MapStyle) -> std::result::Result<(), StyleError> {
        let resource = style.resource();

        let options = match self.surface.load_style(resource) {
            Ok(options) => options,
            Err(e) => {
                error!("Can't find style {}: {}", style, e);
                return Err(e);
            }
        };

        if !self.surface.set_map_style(&options) {
            let e = StyleError::ApplyRejected(resource);
            error!("Style parsing failed for {}: {}", style, e);
            return Err(e);
        }

        info!("applied map style {}", style);
        self.current_style = Some(style);
        Ok(())
    }

    /// Applies the style the daylight schedule picks for the current local hour
    pub fn set_daylight_style(&mut self) -> std::result::Result<MapStyle, StyleError> {
        let style = self.config.daylight.current_style();
        self.set_style(style).map(|_| style)
    }

    /// Applies the style the daylight schedule picks for `hour`
    pub fn set_daylight_style_at(&mut self, hour: u32) -> std::result::Result<MapStyle, StyleError> {
        let style = self.config.daylight.style_for_hour(hour);
        self.set_style(style).map(|_| style)
    }

    /// Last style applied successfully through this manager
    pub fn current_style(&self) -> Option<MapStyle> {
        self.current_style
    }

    // Camera

    /// Moves the camera to `position` at `zoom`
    pub fn set_position(&mut self, position: LatLng, zoom: f32) {
        debug!(
            "camera to ({:.6}, {:.6}) zoom {}",
            position.lat, position.lng, zoom
        );
        self.surface
            .animate_camera(CameraUpdate::new_position(position, zoom));
    }

    /// Centers the camera on the average position of `markers` at `zoom`.
    ///
    /// An empty slice returns [`MapError::EmptyCoordinates`] and the camera
    /// does not move.
    pub fn center_on_markers<M: MarkerHandle>(&mut self, markers: &[M], zoom: f32) -> Result<LatLng> {
        let positions: Vec<LatLng> = markers.iter().map(|m| m.position()).collect();
        self.center_on(&positions, zoom, "center_on_markers")
    }

    /// Centers the camera on every registered marker. Errors like
    /// [`Self::center_on_markers`] when none are registered.
    pub fn center_on_all_markers(&mut self, zoom: f32) -> Result<LatLng> {
        let positions = self.marker_positions();
        self.center_on(&positions, zoom, "center_on_all_markers")
    }

    /// Centers the camera on the average of `coords` at `zoom`. Errors like
    /// [`Self::center_on_markers`] when `coords` is empty.
    pub fn center_on_coordinates(&mut self, coords: &[LatLng], zoom: f32) -> Result<LatLng> {
        self.center_on(coords, zoom, "center_on_coordinates")
    }

    fn center_on(&mut self, coords: &[LatLng], zoom: f32, op: &'static str) -> Result<LatLng> {
        let center = LatLng::centroid(coords).ok_or_else(|| {
            warn!("{} called without coordinates, camera left in place", op);
            MapError::EmptyCoordinates(op)
        })?;
        self.set_position(center, zoom);
        Ok(center)
    }

    /// Fits the camera to the bounding box of `coords`, padded by a share of
    /// the display width on every side.
    ///
    /// An empty slice returns [`MapError::EmptyCoordinates`] and the camera
    /// does not move.
    pub fn fit_markers(&mut self, coords: &[LatLng]) -> Result<LatLngBounds> {
        let bounds = LatLngBounds::from_points(coords).ok_or_else(|| {
            warn!("fit_markers called without coordinates, camera left in place");
            MapError::EmptyCoordinates("fit_markers")
        })?;

        let size = self.surface.display_size();
        let padding = self.config.padding_for_width(size.x);
        debug!(
            "fitting {} coordinate(s) into {}x{} px with {} px padding",
            coords.len(),
            size.x,
            size.y,
            padding
        );

        self.surface
            .animate_camera(CameraUpdate::new_bounds(bounds, size, padding));
        Ok(bounds)
    }

    /// Fits the camera to every registered marker
    pub fn fit_all_markers(&mut self) -> Result<LatLngBounds> {
        let positions = self.marker_positions();
        self.fit_markers(&positions)
    }

    fn marker_positions(&self) -> Vec<LatLng> {
        self.markers.iter().map(|item| item.marker.position()).collect()
    }

    // Overlays

    /// Draws a circle with the configured stroke and fill defaults
    pub fn draw_circle(&mut self, center: LatLng, radius: f64) -> S::Circle {
        let options = CircleOptions::with_defaults(center, radius, &self.config.circle);
        self.draw_circle_with(options)
    }

    pub fn draw_circle_with(&mut self, options: CircleOptions) -> S::Circle {
        debug!(
            "circle at ({:.6}, {:.6}) radius {} m",
            options.center.lat, options.center.lng, options.radius
        );
        self.surface.add_circle(options)
    }

    // Surface controls

    pub fn hide_location_button(&mut self) {
        self.surface.set_my_location_button_enabled(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::geo::Point,
        layers::vector::Color,
        rendering::headless::{HeadlessSurface, SurfaceCall},
        style::ResourceId,
    };

    fn manager() -> MapsManager<HeadlessSurface> {
        MapsManager::new(HeadlessSurface::with_builtin_styles(Point::new(1000.0, 2000.0)))
    }

    #[test]
    fn test_add_and_lookup() {
        let mut manager = manager();
        manager.add_marker("a", &MarkerOptions::new(LatLng::new(1.0, 1.0)));
        manager.add_marker("b", &MarkerOptions::new(LatLng::new(2.0, 2.0)));
        manager.add_marker("a", &MarkerOptions::new(LatLng::new(3.0, 3.0)));

        assert_eq!(manager.marker_count(), 3);
        assert_eq!(manager.marker_ids(), vec!["a", "b", "a"]);
        assert_eq!(manager.marker("a").map(|m| m.position()), Some(LatLng::new(1.0, 1.0)));
        assert_eq!(
            manager
                .marker_by(|item| item.marker.position().lat > 1.5)
                .map(|m| m.position()),
            Some(LatLng::new(2.0, 2.0))
        );
    }

    #[test]
    fn test_remove_marker_reaches_surface() {
        let mut manager = manager();
        manager.add_marker("a", &MarkerOptions::new(LatLng::new(1.0, 1.0)));
        manager.add_marker("b", &MarkerOptions::new(LatLng::new(2.0, 2.0)));
        manager.add_marker("a", &MarkerOptions::new(LatLng::new(3.0, 3.0)));

        assert_eq!(manager.remove_marker("a"), 2);
        assert_eq!(manager.marker_ids(), vec!["b"]);
        assert_eq!(manager.surface().markers().len(), 1);
        assert_eq!(manager.remove_marker("a"), 0);
    }

    #[test]
    fn test_set_style_records_current() {
        let mut manager = manager();
        assert!(manager.set_style(MapStyle::Silver).is_ok());
        assert_eq!(manager.current_style(), Some(MapStyle::Silver));
    }

    #[test]
    fn test_rejected_style_keeps_previous() {
        let mut manager = manager();
        manager
            .surface_mut()
            .register_style(ResourceId(500), "this is not a style");
        manager.set_style(MapStyle::Night).unwrap();
        let applied = manager.surface().applied_style().cloned();

        let err = manager.set_style(MapStyle::Custom(ResourceId(500))).unwrap_err();
        assert_eq!(err, StyleError::ApplyRejected(ResourceId(500)));
        assert_eq!(manager.current_style(), Some(MapStyle::Night));
        assert_eq!(manager.surface().applied_style().cloned(), applied);
    }

    #[test]
    fn test_daylight_at_hour() {
        let mut manager = manager();
        assert_eq!(manager.set_daylight_style_at(13), Ok(MapStyle::Retro));
        assert_eq!(manager.current_style(), Some(MapStyle::Retro));
    }

    #[test]
    fn test_empty_center_does_not_move_camera() {
        let mut manager = manager();
        let markers: Vec<LatLng> = Vec::new();
        let err = manager.center_on_markers(&markers, 10.0).unwrap_err();
        assert!(matches!(err, MapError::EmptyCoordinates("center_on_markers")));
        assert!(manager.surface().camera_updates().is_empty());
    }

    #[test]
    fn test_fit_padding_from_display_width() {
        let mut manager = manager();
        manager
            .fit_markers(&[LatLng::new(0.0, 0.0), LatLng::new(1.0, 2.0)])
            .unwrap();

        match manager.surface().camera_updates().as_slice() {
            [CameraUpdate::NewBounds {
                bounds,
                width,
                height,
                padding,
            }] => {
                assert_eq!(*bounds, LatLngBounds::from_coords(0.0, 0.0, 1.0, 2.0));
                assert_eq!((*width, *height, *padding), (1000, 2000, 100));
            }
            other => panic!("unexpected camera updates: {:?}", other),
        }
    }

    #[test]
    fn test_circle_uses_configured_defaults() {
        let mut config = ManagerConfig::default();
        config.circle.stroke_color = Color::WHITE;
        let mut manager = MapsManager::with_config(HeadlessSurface::default(), config);

        let circle = manager.draw_circle(LatLng::new(1.0, 1.0), 50.0);
        assert_eq!(circle.options.stroke_color, Color::WHITE);
        assert_eq!(circle.options.fill_color, Color::TRANSLUCENT_RED);
    }

    #[test]
    fn test_hide_location_button() {
        let mut manager = manager();
        manager.hide_location_button();
        assert!(!manager.surface().is_location_button_enabled());
        assert_eq!(
            manager.surface().calls().last(),
            Some(&SurfaceCall::SetMyLocationButtonEnabled(false))
        );
    }
}
