use std::{collections::HashMap, time::Duration};

use parking_lot::Mutex;

use crate::{
    route_provider::{RouteProvider, RouteProviderError},
    waypoint::Waypoint,
};

#[derive(Clone, Copy)]
pub enum MockSegment {
    Delayed(Duration),
    Fail,
    Hang,
}

/// Start, midpoint and end of the segment, in (lng, lat).
pub fn mock_route(from: geo_types::Point, to: geo_types::Point) -> Vec<geo_types::Coord> {
    vec![
        from.0,
        geo_types::coord! {
            x: (from.x() + to.x()) / 2.0,
            y: (from.y() + to.y()) / 2.0,
        },
        to.0,
    ]
}

fn point_key(point: geo_types::Point) -> (u64, u64) {
    (point.x().to_bits(), point.y().to_bits())
}

/// Routes every segment with `mock_route`, unless a behaviour was registered for the
/// segment's start point.
#[derive(Default)]
pub struct MockRouteProvider {
    segments: HashMap<(u64, u64), MockSegment>,
    requests: Mutex<Vec<(geo_types::Point, geo_types::Point)>>,
    completions: Mutex<Vec<geo_types::Point>>,
}

impl MockRouteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segment(mut self, from: &Waypoint, segment: MockSegment) -> Self {
        self.segments.insert(point_key(from.point()), segment);
        self
    }

    pub fn requests(&self) -> Vec<(geo_types::Point, geo_types::Point)> {
        self.requests.lock().clone()
    }

    /// Start points of the segments that resolved successfully, in completion order.
    pub fn completions(&self) -> Vec<geo_types::Point> {
        self.completions.lock().clone()
    }
}

impl RouteProvider for MockRouteProvider {
    async fn fetch_route(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
    ) -> Result<Vec<geo_types::Coord>, RouteProviderError> {
        self.requests.lock().push((from, to));

        match self.segments.get(&point_key(from)).copied() {
            Some(MockSegment::Fail) => Err(RouteProviderError::NoRoute(String::from("NoRoute"))),
            Some(MockSegment::Hang) => std::future::pending().await,
            Some(MockSegment::Delayed(delay)) => {
                tokio::time::sleep(delay).await;
                self.completions.lock().push(from);
                Ok(mock_route(from, to))
            }
            None => {
                self.completions.lock().push(from);
                Ok(mock_route(from, to))
            }
        }
    }
}
