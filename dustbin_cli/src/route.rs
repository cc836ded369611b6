use std::path::PathBuf;

use clap::Args;
use dustbin_route::{
    config::{RouteConfig, parse_timeout, require_non_empty},
    geojson_export::route_feature_collection,
    osrm::OsrmRouteClient,
    route_assembler::RouteAssembler,
    waypoint::full_waypoints,
};
use tracing::{info, warn};

use crate::input::WaypointsInput;

#[derive(Args)]
pub struct RouteArgs {
    #[command(flatten)]
    input: WaypointsInput,

    /// GeoJSON output file, stdout when omitted
    #[arg(short = 'o', long)]
    out: Option<PathBuf>,

    /// OSRM base url, overrides DUSTBIN_OSRM_URL
    #[arg(long)]
    osrm_url: Option<String>,

    /// OSRM profile, overrides DUSTBIN_OSRM_PROFILE
    #[arg(long)]
    profile: Option<String>,

    /// Per segment timeout (e.g., "10s", "PT1M", "none"), overrides DUSTBIN_SEGMENT_TIMEOUT
    #[arg(short, long)]
    timeout: Option<String>,

    /// Write the assembled route itself instead of a GeoJSON feature collection
    #[arg(long)]
    raw: bool,
}

/// Command line flags take precedence over the environment.
fn apply_overrides(config: &mut RouteConfig, args: &RouteArgs) -> anyhow::Result<()> {
    if let Some(osrm_url) = &args.osrm_url {
        config.osrm.osrm_url = require_non_empty("--osrm-url", osrm_url.clone())?;
    }
    if let Some(profile) = &args.profile {
        config.osrm.profile = require_non_empty("--profile", profile.clone())?;
    }
    if let Some(timeout) = &args.timeout {
        config.assembler.segment_timeout = parse_timeout(timeout).map_err(anyhow::Error::msg)?;
    }

    Ok(())
}

pub async fn run(args: RouteArgs) -> anyhow::Result<()> {
    let waypoints = args.input.load()?;

    let mut config = RouteConfig::from_env()?;
    apply_overrides(&mut config, &args)?;

    info!(
        "Routing through {} ({}), segment timeout {:?}",
        config.osrm.osrm_url, config.osrm.profile, config.assembler.segment_timeout
    );

    let assembler = RouteAssembler::new(OsrmRouteClient::new(config.osrm), config.assembler);
    let route = assembler.assemble(&waypoints).await;

    let full_count = full_waypoints(&waypoints).len();
    if full_count < 2 {
        warn!("Only {} full dustbin(s), no route to assemble", full_count);
    } else if !route.unavailable_segments.is_empty() {
        warn!(
            "Route has gaps, unavailable segments: {:?}",
            route.unavailable_segments
        );
    }

    info!(
        "Route: {} points over {} segments, {:.0} m",
        route.coordinates.len(),
        route.segment_count(),
        route.length_meters()
    );

    let output = if args.raw {
        serde_json::to_string_pretty(&route)?
    } else {
        serde_json::to_string_pretty(&route_feature_collection(&route, &waypoints))?
    };

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out, output)?;
            info!("Wrote {}", out.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}
