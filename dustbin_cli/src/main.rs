use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{generate::GenerateSubcommands, route::RouteArgs, waypoints::WaypointsArgs};

mod generate;
mod input;
mod route;
mod waypoints;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the collection route through the full dustbins
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// List the dustbins and their bounds
    Waypoints {
        #[command(flatten)]
        args: WaypointsArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    // stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Route { args } => route::run(args).await?,
        Commands::Waypoints { args } => waypoints::run(args)?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
