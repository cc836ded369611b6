use std::path::PathBuf;

use clap::Subcommand;
use dustbin_route::waypoint::Waypoint;
use schemars::schema_for;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// JSON schema of the dustbins file
    JsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(Vec<Waypoint>))
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = generate_json_schema()?;

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
    }

    Ok(())
}
