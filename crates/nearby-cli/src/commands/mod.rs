//! Command implementations

mod config;
mod cuisines;
mod landmarks;
mod nearby;
mod route;

use crate::cli::{Cli, Commands, PositionArgs};
use crate::config_loader::{load_config, load_landmarks};
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use nearby_core::config::{CliConfigOverrides, LayeredConfig};
use nearby_core::models::Coordinate;
use nearby_discovery::{Explorer, ManualLocationService};

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let overrides = CliConfigOverrides {
        endpoint: cli.endpoint.clone(),
        radius_meters: cli.radius,
        entertainment_amenity: match &cli.command {
            Commands::Entertainment(args) => args.amenity.clone(),
            _ => None,
        },
        sort_by_distance: match &cli.command {
            Commands::Restaurants(args) if args.sort => Some(true),
            Commands::Entertainment(args) if args.sort => Some(true),
            _ => None,
        },
        landmarks_file: cli.landmarks_file.clone(),
    };
    let config = load_config(cli.config.as_deref(), overrides)?;

    match cli.command {
        Commands::Restaurants(args) => nearby::restaurants(args, cli.fixture, &config, &output).await,
        Commands::Entertainment(args) => {
            nearby::entertainment(args, cli.fixture, &config, &output).await
        }
        Commands::Landmarks(args) => landmarks::execute(args, &config, &output),
        Commands::Route(args) => route::execute(args, &config, &output),
        Commands::Cuisines => cuisines::execute(&output),
        Commands::Config => config::execute(&config, &output),
    }
}

/// Explorer with the configured landmarks and no active session
fn explorer(config: &LayeredConfig) -> Result<Explorer<ManualLocationService>> {
    Ok(Explorer::new(ManualLocationService::new(), load_landmarks(config)?)
        .with_watch_options(config.watch_options()))
}

/// Start tracking and feed the position given on the command line as the
/// first fix
fn track_at(explorer: &mut Explorer<ManualLocationService>, position: Coordinate) -> Result<()> {
    explorer.toggle_tracking().context("Failed to start location tracking")?;
    if let Some(handle) = explorer.session().handle() {
        explorer.on_position(handle, position);
    }
    Ok(())
}

fn coordinate(lat: f64, lng: f64) -> Result<Coordinate> {
    Coordinate::new(lat, lng).context("Invalid position")
}

impl PositionArgs {
    fn coordinate(&self) -> Result<Coordinate> {
        coordinate(self.lat, self.lng)
    }
}
