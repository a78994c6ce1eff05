use nearby_core::config::ConfigSource;
use nearby_core::models::{Category, Coordinate};
use nearby_geo::Bounds;
use nearby_overlay::{PanelStatus, ResultEntry};
use serde::Serialize;

/// Output for restaurants / entertainment commands
#[derive(Debug, Serialize)]
pub struct NearbyOutput {
    pub category: Category,
    pub origin: Coordinate,
    pub radius_meters: f64,
    pub status: PanelStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub results: Vec<ResultEntry>,
}

/// Output for landmarks command
#[derive(Debug, Serialize)]
pub struct LandmarksOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Coordinate>,
    pub landmarks: Vec<LandmarkItem>,
}

#[derive(Debug, Serialize)]
pub struct LandmarkItem {
    pub id: u32,
    #[serde(flatten)]
    pub entry: ResultEntry,
    pub description: String,
}

/// Output for route command
#[derive(Debug, Serialize)]
pub struct RouteOutput {
    pub origin: Coordinate,
    pub destination: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_name: Option<String>,
    pub distance_meters: f64,
    pub bounds: Bounds,
    /// `[[south, west], [north, east]]` for the map view
    pub fit_bounds: [[f64; 2]; 2],
}

/// Output for cuisines command
#[derive(Debug, Serialize)]
pub struct CuisineItem {
    pub key: String,
    pub name: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct InspectConfigOutput {
    pub entries: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub source: ConfigSource,
}
