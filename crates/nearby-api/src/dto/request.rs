use nearby_core::error::LocationError;
use nearby_core::ports::WatchHandle;
use serde::Deserialize;

/// Position fix pushed by the client
#[derive(Debug, Deserialize)]
pub struct PositionRequest {
    pub lat: f64,
    pub lng: f64,
    /// Watch the fix belongs to; defaults to the active one
    #[serde(default)]
    pub handle: Option<WatchHandle>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationErrorKind {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unsupported,
}

/// Geolocation failure reported by the client
#[derive(Debug, Deserialize)]
pub struct LocationErrorRequest {
    pub kind: LocationErrorKind,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub handle: Option<WatchHandle>,
}

impl LocationErrorRequest {
    pub fn to_error(&self) -> LocationError {
        let message = self.message.clone();
        match self.kind {
            LocationErrorKind::PermissionDenied => LocationError::PermissionDenied(message),
            LocationErrorKind::PositionUnavailable => LocationError::PositionUnavailable(message),
            LocationErrorKind::Timeout => LocationError::Timeout(message),
            LocationErrorKind::Unsupported => LocationError::Unsupported,
        }
    }
}

/// Route destination: a landmark, or a coordinate
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub landmark_id: Option<u32>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct FocusRequest {
    pub lat: f64,
    pub lng: f64,
}
