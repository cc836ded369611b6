use std::{future::Future, time::Duration};

use thiserror::Error;

/// Any reason a segment could not be routed. The assembler treats every variant the
/// same way: the segment contributes no coordinates.
#[derive(Debug, Error)]
pub enum RouteProviderError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("No route found: {0}")]
    NoRoute(String),

    #[error("Segment request timed out after {0:?}")]
    Timeout(Duration),
}

/// A service computing a road-following path between two points.
///
/// Points and returned coordinates are in (lng, lat) order: x is the longitude.
pub trait RouteProvider: Send + Sync {
    fn fetch_route(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
    ) -> impl Future<Output = Result<Vec<geo_types::Coord>, RouteProviderError>> + Send;
}
