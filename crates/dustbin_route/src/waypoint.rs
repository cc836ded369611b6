use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use geo::BoundingRect;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fixed dustbin location. Waypoints are read once and never mutated.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Waypoint {
    pub id: u64,
    pub lat: f64,
    pub lng: f64,

    #[serde(rename = "isFull", alias = "is_full")]
    pub is_full: bool,
}

impl Waypoint {
    pub fn new(id: u64, lat: f64, lng: f64, is_full: bool) -> Self {
        Self {
            id,
            lat,
            lng,
            is_full,
        }
    }

    /// Provider convention: x is the longitude, y the latitude.
    pub fn point(&self) -> geo_types::Point {
        geo_types::Point::new(self.lng, self.lat)
    }

    fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= 90.0
            && self.lng.abs() <= 180.0
    }
}

impl From<&Waypoint> for geo_types::Point {
    fn from(waypoint: &Waypoint) -> Self {
        waypoint.point()
    }
}

/// Waypoints flagged as full, in their declared order.
pub fn full_waypoints(waypoints: &[Waypoint]) -> Vec<Waypoint> {
    waypoints
        .iter()
        .filter(|waypoint| waypoint.is_full)
        .copied()
        .collect()
}

/// Bounding rectangle of every waypoint, full or not.
pub fn waypoint_bounds(waypoints: &[Waypoint]) -> Option<geo_types::Rect> {
    let points: geo_types::MultiPoint = waypoints.iter().map(Waypoint::point).collect();
    points.bounding_rect()
}

/// Dustbins around the IIIT Hyderabad campus.
pub fn default_waypoints() -> Vec<Waypoint> {
    vec![
        Waypoint::new(1, 17.443299, 78.348365, true),
        Waypoint::new(2, 17.44509, 78.34605, true),
        Waypoint::new(3, 17.4442, 78.3478, true),
        Waypoint::new(4, 17.445892, 78.351283, false),
        Waypoint::new(5, 17.445016, 78.349753, true),
        Waypoint::new(6, 17.4465, 78.3505, true),
    ]
}

#[derive(Debug, Error)]
pub enum WaypointSourceError {
    #[error("Failed to read waypoints file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Duplicate waypoint id {0}")]
    DuplicateId(u64),

    #[error("Waypoint {id} has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates { id: u64, lat: f64, lng: f64 },
}

pub fn parse_waypoints(content: &str) -> Result<Vec<Waypoint>, WaypointSourceError> {
    let waypoints: Vec<Waypoint> = serde_json::from_str(content)?;
    validate_waypoints(&waypoints)?;
    Ok(waypoints)
}

pub fn read_waypoints(path: &Path) -> Result<Vec<Waypoint>, WaypointSourceError> {
    let file = File::open(path)?;
    let waypoints: Vec<Waypoint> = serde_json::from_reader(BufReader::new(file))?;
    validate_waypoints(&waypoints)?;
    Ok(waypoints)
}

fn validate_waypoints(waypoints: &[Waypoint]) -> Result<(), WaypointSourceError> {
    let mut ids = HashSet::with_capacity(waypoints.len());

    for waypoint in waypoints {
        if !ids.insert(waypoint.id) {
            return Err(WaypointSourceError::DuplicateId(waypoint.id));
        }

        if !waypoint.has_valid_coordinates() {
            return Err(WaypointSourceError::InvalidCoordinates {
                id: waypoint.id,
                lat: waypoint.lat,
                lng: waypoint.lng,
            });
        }
    }

    Ok(())
}
