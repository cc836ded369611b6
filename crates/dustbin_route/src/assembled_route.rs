use serde::Serialize;

use crate::{
    geo_point::{GeoPoint, path_length},
    waypoint::Waypoint,
};

/// The full visiting path, as handed to a rendering consumer.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct AssembledRoute {
    /// Segment coordinates concatenated in pair order.
    pub coordinates: Vec<GeoPoint>,

    /// Full waypoints anchoring the route, whether or not their segments were routed.
    pub anchors: Vec<Waypoint>,

    /// Pair indices whose segment contributed nothing.
    pub unavailable_segments: Vec<usize>,
}

impl AssembledRoute {
    /// No route and no anchors, returned when fewer than two waypoints are full.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.anchors.len().saturating_sub(1)
    }

    pub fn length_meters(&self) -> f64 {
        path_length(&self.coordinates)
    }
}
