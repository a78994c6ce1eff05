use nearby_core::models::{Coordinate, TASHKENT_CENTER};
use nearby_geo::Bounds;
use serde::{Deserialize, Serialize};

/// Zoom of the initial city overview
pub const DEFAULT_ZOOM: u8 = 13;
/// Zoom used when following the user's position
pub const TRACKING_ZOOM: u8 = 15;
/// Zoom used by "show on map"
pub const FOCUS_ZOOM: u8 = 16;

/// What the map should currently show
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Viewport {
    Center { center: Coordinate, zoom: u8 },
    Fit { bounds: Bounds },
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::Center { center: TASHKENT_CENTER, zoom: DEFAULT_ZOOM }
    }
}
