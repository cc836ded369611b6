use geo::{Distance, Haversine};
use serde::{Deserialize, Serialize};

/// A route coordinate in (lat, lng) order.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Transposes a provider coordinate, where x is the longitude.
    pub fn from_lng_lat(coord: geo_types::Coord) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        Haversine.distance(geo_types::Point::from(*self), geo_types::Point::from(*other))
    }
}

impl From<GeoPoint> for geo_types::Point {
    fn from(point: GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}

impl From<GeoPoint> for [f64; 2] {
    /// GeoJSON position, longitude first.
    fn from(point: GeoPoint) -> Self {
        [point.lng, point.lat]
    }
}

/// Length in meters of the polyline through `points`.
pub fn path_length(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].haversine_distance(&pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lng_lat_transposes() {
        let point = GeoPoint::from_lng_lat(geo_types::coord! { x: 78.348365, y: 17.443299 });

        assert_eq!(point.lat, 17.443299);
        assert_eq!(point.lng, 78.348365);
    }

    #[test]
    fn test_haversine_distance() {
        // One degree of latitude is roughly 111 km
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);

        let distance = a.haversine_distance(&b);
        assert!((distance - 111_195.0).abs() < 100.0, "got {distance}");
    }

    #[test]
    fn test_path_length() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let c = GeoPoint::new(2.0, 0.0);

        let length = path_length(&[a, b, c]);
        assert!((length - 2.0 * a.haversine_distance(&b)).abs() < 1e-6);
        assert_eq!(path_length(&[a]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }
}
