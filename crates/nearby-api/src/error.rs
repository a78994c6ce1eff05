use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nearby_core::error::NearbyError;
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), details: None }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.message, details: self.details };
        (self.status, Json(body)).into_response()
    }
}

impl From<NearbyError> for ApiError {
    fn from(err: NearbyError) -> Self {
        match &err {
            NearbyError::NoActiveLocation => {
                Self::conflict("No active location").with_details("Start tracking and send a position first")
            }
            NearbyError::QueryFailed { category, reason } => Self::new(
                StatusCode::BAD_GATEWAY,
                format!("Failed to load {} places. Please try again later.", category),
            )
            .with_details(reason.clone()),
            NearbyError::Location(e) => {
                Self::new(StatusCode::SERVICE_UNAVAILABLE, "Location unavailable").with_details(e.to_string())
            }
            NearbyError::LandmarkNotFound { .. } => Self::not_found(err.to_string()),
            NearbyError::InvalidCoordinate { .. } | NearbyError::ConfigInvalid { .. } => {
                Self::bad_request(err.to_string())
            }
            _ => Self::internal("Internal error").with_details(err.to_string()),
        }
    }
}
