use clap::Args;
use comfy_table::Table;
use dustbin_route::waypoint::{Waypoint, full_waypoints, waypoint_bounds};

use crate::input::WaypointsInput;

#[derive(Args)]
pub struct WaypointsArgs {
    #[command(flatten)]
    input: WaypointsInput,
}

fn waypoints_table(waypoints: &[Waypoint]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Latitude", "Longitude", "Full"]);

    for waypoint in waypoints {
        table.add_row(vec![
            waypoint.id.to_string(),
            format!("{:.6}", waypoint.lat),
            format!("{:.6}", waypoint.lng),
            String::from(if waypoint.is_full { "yes" } else { "no" }),
        ]);
    }

    table
}

pub fn run(args: WaypointsArgs) -> anyhow::Result<()> {
    let waypoints = args.input.load()?;

    println!("{}", waypoints_table(&waypoints));
    println!(
        "{} dustbins, {} full",
        waypoints.len(),
        full_waypoints(&waypoints).len()
    );

    if let Some(bounds) = waypoint_bounds(&waypoints) {
        println!(
            "Bounds: ({:.6}, {:.6}) - ({:.6}, {:.6})",
            bounds.min().y,
            bounds.min().x,
            bounds.max().y,
            bounds.max().x
        );
    }

    Ok(())
}
