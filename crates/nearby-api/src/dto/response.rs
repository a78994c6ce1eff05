use chrono::{DateTime, Utc};
use nearby_core::models::{Category, Coordinate};
use nearby_core::ports::WatchHandle;
use nearby_discovery::{LocationSession, Presentation, TrackingState};
use nearby_geo::Bounds;
use nearby_overlay::{OverlayRegistry, PanelStatus, ResultEntry, Viewport};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "nearby-api" }
    }
}

/// Session state and tracking toggle caption
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub state: TrackingState,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<WatchHandle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_position: Option<Coordinate>,
}

impl From<&LocationSession> for SessionResponse {
    fn from(session: &LocationSession) -> Self {
        match session {
            LocationSession::Idle => Self {
                state: TrackingState::Idle,
                label: TrackingState::Idle.label(),
                handle: None,
                since: None,
                last_position: None,
            },
            LocationSession::Tracking { handle, since, last_position } => Self {
                state: TrackingState::Tracking,
                label: TrackingState::Tracking.label(),
                handle: Some(*handle),
                since: Some(*since),
                last_position: *last_position,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PositionResponse {
    /// `false` when the fix came from a watch that is no longer active
    pub applied: bool,
    pub viewport: Viewport,
}

/// Results panel plus the view the map should show
#[derive(Debug, Serialize)]
pub struct PanelResponse {
    pub status: PanelStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub entries: Vec<ResultEntry>,
    pub viewport: Viewport,
}

impl From<&OverlayRegistry> for PanelResponse {
    fn from(registry: &OverlayRegistry) -> Self {
        let panel = registry.panel();
        Self {
            status: panel.status.clone(),
            message: panel.message(),
            entries: panel.entries.clone(),
            viewport: registry.viewport(),
        }
    }
}

/// Outcome of a nearby search
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub category: Category,
    pub origin: Coordinate,
    pub presentation: Presentation,
    pub count: usize,
    pub panel: PanelResponse,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub distance_meters: f64,
    pub bounds: Bounds,
}

#[derive(Debug, Serialize)]
pub struct CuisineResponse {
    pub key: &'static str,
    pub name: &'static str,
}
