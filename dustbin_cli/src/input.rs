use std::path::PathBuf;

use clap::Args;
use dustbin_route::waypoint::{Waypoint, default_waypoints, read_waypoints};
use tracing::info;

#[derive(Args)]
pub struct WaypointsInput {
    /// JSON file with the dustbins, the built-in campus dustbins when omitted
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,
}

impl WaypointsInput {
    pub fn load(&self) -> anyhow::Result<Vec<Waypoint>> {
        match &self.input {
            Some(path) => {
                let waypoints = read_waypoints(path)?;
                info!("Loaded {} dustbins from {}", waypoints.len(), path.display());
                Ok(waypoints)
            }
            None => Ok(default_waypoints()),
        }
    }
}
