use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

use crate::{
    assembled_route::AssembledRoute,
    route_provider::{RouteProvider, RouteProviderError},
    segment::{SegmentOutcome, SegmentRequest},
    waypoint::{Waypoint, full_waypoints},
};

pub const DEFAULT_SEGMENT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy)]
pub struct AssemblerParams {
    /// Expiry is handled like any other provider failure. `None` waits forever.
    pub segment_timeout: Option<Duration>,
}

impl Default for AssemblerParams {
    fn default() -> Self {
        Self {
            segment_timeout: Some(DEFAULT_SEGMENT_TIMEOUT),
        }
    }
}

/// Stitches pairwise provider routes between full waypoints into a single path.
pub struct RouteAssembler<P> {
    provider: P,
    params: AssemblerParams,
}

impl<P> RouteAssembler<P>
where
    P: RouteProvider,
{
    pub fn new(provider: P, params: AssemblerParams) -> Self {
        Self { provider, params }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Routes every consecutive pair of full waypoints concurrently and concatenates
    /// the results in pair order. A failing segment leaves a gap; it never fails the
    /// whole assembly.
    #[instrument(skip_all, fields(waypoints = waypoints.len()))]
    pub async fn assemble(&self, waypoints: &[Waypoint]) -> AssembledRoute {
        let anchors = full_waypoints(waypoints);

        if anchors.len() < 2 {
            debug!("{} full waypoint(s), nothing to route", anchors.len());
            return AssembledRoute::empty();
        }

        let requests = SegmentRequest::from_anchors(&anchors);

        // join_all keeps one slot per request and yields them in request order
        let outcomes = join_all(
            requests
                .iter()
                .map(|request| self.fetch_segment(request)),
        )
        .await;

        let mut coordinates = Vec::with_capacity(
            outcomes
                .iter()
                .map(|outcome| outcome.coordinates().len())
                .sum(),
        );
        let mut unavailable_segments = Vec::new();

        for (request, outcome) in requests.iter().zip(&outcomes) {
            if outcome.is_unavailable() {
                unavailable_segments.push(request.index);
            }
            coordinates.extend_from_slice(outcome.coordinates());
        }

        info!(
            "Assembled route: {} anchors, {} points, {}/{} segments unavailable",
            anchors.len(),
            coordinates.len(),
            unavailable_segments.len(),
            requests.len()
        );

        AssembledRoute {
            coordinates,
            anchors,
            unavailable_segments,
        }
    }

    async fn fetch_segment(&self, request: &SegmentRequest) -> SegmentOutcome {
        debug!(
            segment = request.index,
            "Requesting route {} -> {}", request.from.id, request.to.id
        );

        let route = self
            .provider
            .fetch_route(request.from.point(), request.to.point());

        let result = match self.params.segment_timeout {
            Some(timeout) => tokio::time::timeout(timeout, route)
                .await
                .unwrap_or_else(|_| Err(RouteProviderError::Timeout(timeout))),
            None => route.await,
        };

        let outcome = SegmentOutcome::from_provider_result(result);

        if let SegmentOutcome::Unavailable(error) = &outcome {
            warn!(
                segment = request.index,
                "Route {} -> {} unavailable: {}", request.from.id, request.to.id, error
            );
        }

        outcome
    }
}
