use crate::{geo_point::GeoPoint, route_provider::RouteProviderError, waypoint::Waypoint};

/// Road route request between two consecutive full waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRequest {
    pub index: usize,
    pub from: Waypoint,
    pub to: Waypoint,
}

impl SegmentRequest {
    /// One request per consecutive pair, in pair order.
    pub fn from_anchors(anchors: &[Waypoint]) -> Vec<SegmentRequest> {
        anchors
            .windows(2)
            .enumerate()
            .map(|(index, pair)| SegmentRequest {
                index,
                from: pair[0],
                to: pair[1],
            })
            .collect()
    }
}

#[derive(Debug)]
pub enum SegmentOutcome {
    Routed(Vec<GeoPoint>),
    Unavailable(RouteProviderError),
}

impl SegmentOutcome {
    pub fn from_provider_result(result: Result<Vec<geo_types::Coord>, RouteProviderError>) -> Self {
        match result {
            Ok(coordinates) => SegmentOutcome::Routed(
                coordinates
                    .into_iter()
                    .map(GeoPoint::from_lng_lat)
                    .collect(),
            ),
            Err(error) => SegmentOutcome::Unavailable(error),
        }
    }

    /// An unavailable segment contributes nothing.
    pub fn coordinates(&self) -> &[GeoPoint] {
        match self {
            SegmentOutcome::Routed(coordinates) => coordinates,
            SegmentOutcome::Unavailable(_) => &[],
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, SegmentOutcome::Unavailable(_))
    }
}
