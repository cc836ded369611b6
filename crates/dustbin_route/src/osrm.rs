use serde::Deserialize;
use tracing::debug;

use crate::route_provider::{RouteProvider, RouteProviderError};

pub const OSRM_DEFAULT_URL: &str = "https://router.project-osrm.org";
pub const OSRM_DEFAULT_PROFILE: &str = "driving";
pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/";

#[derive(Deserialize)]
struct OsrmGeometry {
    /// (lng, lat) pairs
    coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,

    /// Meters
    #[serde(default)]
    distance: f64,

    /// Seconds
    #[serde(default)]
    duration: f64,
}

#[derive(Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,

    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Clone)]
pub struct OsrmRouteClientParams {
    pub osrm_url: String,
    pub profile: String,
}

impl Default for OsrmRouteClientParams {
    fn default() -> Self {
        Self {
            osrm_url: String::from(OSRM_DEFAULT_URL),
            profile: String::from(OSRM_DEFAULT_PROFILE),
        }
    }
}

pub struct OsrmRouteClient {
    params: OsrmRouteClientParams,
    client: reqwest::Client,
}

impl OsrmRouteClient {
    pub fn new(params: OsrmRouteClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn route_url(&self, from: geo_types::Point, to: geo_types::Point) -> String {
        let mut url = self.params.osrm_url.trim_end_matches('/').to_string();
        url.push_str(OSRM_ROUTE_API_PATH);
        url.push_str(&self.params.profile);
        url.push('/');
        url.push_str(&format!("{},{};{},{}", from.x(), from.y(), to.x(), to.y()));
        url
    }
}

impl RouteProvider for OsrmRouteClient {
    async fn fetch_route(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
    ) -> Result<Vec<geo_types::Coord>, RouteProviderError> {
        let response = self
            .client
            .get(self.route_url(from, to))
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        parse_route_response(status.as_u16(), &body)
    }
}

/// Decodes an OSRM route service answer into the first route's geometry.
fn parse_route_response(
    status: u16,
    body: &str,
) -> Result<Vec<geo_types::Coord>, RouteProviderError> {
    if !(200..300).contains(&status) {
        // OSRM error bodies still carry a code and message
        let message = serde_json::from_str::<OsrmRouteResponse>(body)
            .map(|response| {
                format!(
                    "{}: {}",
                    response.code,
                    response.message.unwrap_or_default()
                )
            })
            .unwrap_or_else(|_| body.to_string());
        return Err(RouteProviderError::Api { status, message });
    }

    let response: OsrmRouteResponse = serde_json::from_str(body)?;

    if response.code != "Ok" {
        return Err(RouteProviderError::NoRoute(response.code));
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| RouteProviderError::NoRoute(String::from("NoRoute")))?;

    debug!(
        "OSRM route: {} points, {:.0} m, {:.0} s",
        route.geometry.coordinates.len(),
        route.distance,
        route.duration
    );

    Ok(route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lng, lat]| geo_types::coord! { x: lng, y: lat })
        .collect())
}
