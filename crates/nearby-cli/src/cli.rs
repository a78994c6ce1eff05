use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Nearby - find places around you
#[derive(Parser, Debug)]
#[command(name = "nearby")]
#[command(about = "Find restaurants, venues and landmarks near a position", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./nearby.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// POI service endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Search radius in meters
    #[arg(long, global = true, value_parser = parse_radius_arg)]
    pub radius: Option<f64>,

    /// Read places from a saved response instead of the network
    #[arg(long, global = true, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    /// Landmark catalog (JSON) replacing the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    pub landmarks_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_radius_arg(s: &str) -> Result<f64, String> {
    nearby_core::config::parse_radius(s).map_err(|e| e.to_string())
}

fn parse_amenity_arg(s: &str) -> Result<String, String> {
    nearby_core::config::parse_amenity(s).map_err(|e| e.to_string())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find restaurants near a position
    Restaurants(RestaurantArgs),

    /// Find entertainment venues near a position
    Entertainment(EntertainmentArgs),

    /// List landmarks, with distances when a position is given
    Landmarks(LandmarksArgs),

    /// Sketch a straight route from a position to a destination
    Route(RouteArgs),

    /// List known cuisines
    Cuisines,

    /// Show the effective configuration and where each value comes from
    Config,
}

/// Current position
#[derive(Args, Debug, Clone, Copy)]
pub struct PositionArgs {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,
}

#[derive(Args, Debug)]
pub struct RestaurantArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// Cuisine key (e.g., plov, lagman) or "all"
    #[arg(long, default_value = "all")]
    pub cuisine: String,

    /// Only halal places
    #[arg(long)]
    pub halal: bool,

    /// Order results by distance instead of source order
    #[arg(long)]
    pub sort: bool,

    /// Print the map overlay as GeoJSON instead of the results list
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Args, Debug)]
pub struct EntertainmentArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// Amenity to search for (default from configuration, e.g. cinema)
    #[arg(long, value_parser = parse_amenity_arg)]
    pub amenity: Option<String>,

    /// Order results by distance instead of source order
    #[arg(long)]
    pub sort: bool,

    /// Print the map overlay as GeoJSON instead of the results list
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Args, Debug)]
pub struct LandmarksArgs {
    /// Latitude of the current position
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the current position
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// Landmark ID to route to
    #[arg(long, conflicts_with_all = ["to_lat", "to_lng"], required_unless_present = "to_lat")]
    pub landmark: Option<u32>,

    /// Destination latitude
    #[arg(long, requires = "to_lng", allow_negative_numbers = true)]
    pub to_lat: Option<f64>,

    /// Destination longitude
    #[arg(long, requires = "to_lat", allow_negative_numbers = true)]
    pub to_lng: Option<f64>,

    /// Print the map overlay as GeoJSON instead of the route summary
    #[arg(long)]
    pub geojson: bool,
}
