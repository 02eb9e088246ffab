use geo::{BoundingRect, Centroid, MultiPoint};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Arithmetic mean of the given coordinates, `None` when there are none
    pub fn centroid(coords: &[LatLng]) -> Option<LatLng> {
        let points: MultiPoint<f64> = coords.iter().map(|c| geo_types::Point::from(*c)).collect();
        points.centroid().map(LatLng::from)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// geo uses x = longitude, y = latitude
impl From<LatLng> for geo_types::Point<f64> {
    fn from(lat_lng: LatLng) -> Self {
        geo_types::Point::new(lat_lng.lng, lat_lng.lat)
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(point: geo_types::Point<f64>) -> Self {
        LatLng::new(point.y(), point.x())
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        LatLng::new(lat, lng)
    }
}

/// A point in screen (pixel) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Smallest bounds containing every coordinate, `None` for an empty slice
    pub fn from_points(coords: &[LatLng]) -> Option<Self> {
        let points: MultiPoint<f64> = coords.iter().map(|c| geo_types::Point::from(*c)).collect();
        points.bounding_rect().map(|rect| {
            Self::from_coords(rect.min().y, rect.min().x, rect.max().y, rect.max().x)
        })
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// True when the bounds collapse to a single point
    pub fn is_degenerate(&self) -> bool {
        self.south_west == self.north_east
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_axes() {
        let point: geo_types::Point<f64> = LatLng::new(10.0, 20.0).into();
        assert_eq!(point.x(), 20.0);
        assert_eq!(point.y(), 10.0);
        assert_eq!(LatLng::from(point), LatLng::new(10.0, 20.0));
    }

    #[test]
    fn test_centroid() {
        let center = LatLng::centroid(&[LatLng::new(0.0, 0.0), LatLng::new(10.0, 10.0)]).unwrap();
        assert!((center.lat - 5.0).abs() < 1e-9);
        assert!((center.lng - 5.0).abs() < 1e-9);

        let center = LatLng::centroid(&[
            LatLng::new(1.0, 2.0),
            LatLng::new(3.0, 4.0),
            LatLng::new(5.0, -6.0),
        ])
        .unwrap();
        assert!((center.lat - 3.0).abs() < 1e-9);
        assert!((center.lng - 0.0).abs() < 1e-9);

        assert!(LatLng::centroid(&[]).is_none());
    }

    #[test]
    fn test_centroid_counts_repeated_points() {
        let coords: Vec<LatLng> = [(2.0, 0.0), (2.0, 0.0), (5.0, 3.0)]
            .into_iter()
            .map(LatLng::from)
            .collect();
        let center = LatLng::centroid(&coords).unwrap();
        assert!((center.lat - 3.0).abs() < 1e-9);
        assert!((center.lng - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = LatLngBounds::from_points(&[
            LatLng::new(40.5, -74.0),
            LatLng::new(41.0, -75.0),
            LatLng::new(40.0, -73.0),
        ])
        .unwrap();

        assert_eq!(bounds, LatLngBounds::from_coords(40.0, -75.0, 41.0, -73.0));
        assert!(LatLngBounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_single_point_bounds_are_degenerate() {
        let bounds = LatLngBounds::from_points(&[LatLng::new(1.0, 2.0)]).unwrap();
        assert!(bounds.is_degenerate());
        assert_eq!(bounds.center(), LatLng::new(1.0, 2.0));
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::from_coords(40.0, -75.0, 41.0, -73.0);
        let point_inside = LatLng::new(40.5, -74.0);
        let point_outside = LatLng::new(42.0, -74.0);

        assert!(bounds.contains(&point_inside));
        assert!(!bounds.contains(&point_outside));
    }
}
