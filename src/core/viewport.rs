use crate::core::{
    constants::{MAX_ZOOM, MIN_ZOOM, TILE_SIZE},
    geo::{LatLng, LatLngBounds, Point},
};
use serde::{Deserialize, Serialize};

/// Where the camera looks: a target coordinate and a zoom level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPosition {
    pub target: LatLng,
    pub zoom: f32,
}

impl CameraPosition {
    pub fn new(target: LatLng, zoom: f32) -> Self {
        Self { target, zoom }
    }
}

impl Default for CameraPosition {
    fn default() -> Self {
        Self::new(LatLng::default(), 0.0)
    }
}

/// A camera move requested from the rendering surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CameraUpdate {
    /// Center on a coordinate at a fixed zoom
    NewPosition(CameraPosition),
    /// Fit a bounding box inside a `width` x `height` pixel area, keeping
    /// `padding` pixels free on every side
    NewBounds {
        bounds: LatLngBounds,
        width: u32,
        height: u32,
        padding: u32,
    },
}

impl CameraUpdate {
    pub fn new_position(target: LatLng, zoom: f32) -> Self {
        Self::NewPosition(CameraPosition::new(target, zoom))
    }

    pub fn new_bounds(bounds: LatLngBounds, size: Point, padding: u32) -> Self {
        Self::NewBounds {
            bounds,
            width: size.x.max(0.0) as u32,
            height: size.y.max(0.0) as u32,
            padding,
        }
    }

    /// Resolves the update to a concrete camera position.
    ///
    /// Bounds are fitted with the largest integer zoom at which the projected
    /// box still fits inside the padded area.
    pub fn resolve(&self) -> CameraPosition {
        match self {
            Self::NewPosition(position) => *position,
            Self::NewBounds {
                bounds,
                width,
                height,
                padding,
            } => {
                let available = Point::new(
                    *width as f64 - 2.0 * *padding as f64,
                    *height as f64 - 2.0 * *padding as f64,
                );
                CameraPosition::new(bounds.center(), fit_zoom(bounds, available))
            }
        }
    }
}

/// Projects a LatLng to world pixel coordinates (Web Mercator, EPSG:3857)
pub fn project(lat_lng: &LatLng, zoom: f64) -> Point {
    let scale = TILE_SIZE as f64 * 2_f64.powf(zoom);
    let sin_lat = lat_lng.lat.to_radians().sin().clamp(-0.9999, 0.9999);

    let x = (lat_lng.lng + 180.0) / 360.0 * scale;
    let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * std::f64::consts::PI)) * scale;

    Point::new(x, y)
}

fn fit_zoom(bounds: &LatLngBounds, available: Point) -> f32 {
    if bounds.is_degenerate() {
        return MAX_ZOOM as f32;
    }

    let mut best_zoom = MIN_ZOOM;

    for zoom in MIN_ZOOM..=MAX_ZOOM {
        let nw = project(
            &LatLng::new(bounds.north_east.lat, bounds.south_west.lng),
            zoom as f64,
        );
        let se = project(
            &LatLng::new(bounds.south_west.lat, bounds.north_east.lng),
            zoom as f64,
        );

        if (se.x - nw.x).abs() <= available.x && (se.y - nw.y).abs() <= available.y {
            best_zoom = zoom;
        } else {
            break;
        }
    }

    best_zoom as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_origin() {
        let p = project(&LatLng::new(0.0, 0.0), 0.0);
        assert!((p.x - 128.0).abs() < 1e-9);
        assert!((p.y - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_position_resolves_to_itself() {
        let update = CameraUpdate::new_position(LatLng::new(1.0, 2.0), 7.5);
        assert_eq!(update.resolve(), CameraPosition::new(LatLng::new(1.0, 2.0), 7.5));
    }

    #[test]
    fn test_new_bounds_centers_on_box() {
        let bounds = LatLngBounds::from_coords(-10.0, -10.0, 10.0, 10.0);
        let update = CameraUpdate::new_bounds(bounds, Point::new(1080.0, 1920.0), 108);
        let position = update.resolve();

        assert!((position.target.lat).abs() < 1e-9);
        assert!((position.target.lng).abs() < 1e-9);
        // 20 degrees of longitude is ~14 px at zoom 0, so it fits well past zoom 4
        assert!(position.zoom >= 4.0);
    }

    #[test]
    fn test_larger_box_gets_smaller_zoom() {
        let size = Point::new(1000.0, 1000.0);
        let small = CameraUpdate::new_bounds(LatLngBounds::from_coords(0.0, 0.0, 1.0, 1.0), size, 100);
        let large = CameraUpdate::new_bounds(LatLngBounds::from_coords(-40.0, -40.0, 40.0, 40.0), size, 100);

        assert!(small.resolve().zoom > large.resolve().zoom);
    }

    #[test]
    fn test_degenerate_bounds_use_max_zoom() {
        let bounds = LatLngBounds::from_coords(3.0, 4.0, 3.0, 4.0);
        let update = CameraUpdate::new_bounds(bounds, Point::new(800.0, 600.0), 80);
        assert_eq!(update.resolve().zoom, MAX_ZOOM as f32);
    }
}
