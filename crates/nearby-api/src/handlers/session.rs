use std::sync::Arc;

use axum::{extract::State, Json};
use nearby_core::error::NearbyError;
use nearby_core::models::Coordinate;

use crate::dto::{LocationErrorRequest, PositionRequest, PositionResponse, SessionResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    let explorer = state.explorer.lock().await;
    Json(SessionResponse::from(explorer.session()))
}

pub async fn toggle_tracking(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut explorer = state.explorer.lock().await;
    let tracking = explorer.toggle_tracking()?;
    tracing::info!(state = ?tracking, "Tracking toggled");
    Ok(Json(SessionResponse::from(explorer.session())))
}

pub async fn update_position(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PositionRequest>,
) -> Result<Json<PositionResponse>, ApiError> {
    let position = Coordinate::new(request.lat, request.lng)?;

    let mut explorer = state.explorer.lock().await;
    let handle = match request.handle {
        Some(handle) => handle,
        None => explorer.session().handle().ok_or(NearbyError::NoActiveLocation)?,
    };

    let applied = explorer.on_position(handle, position);
    Ok(Json(PositionResponse { applied, viewport: explorer.registry().viewport() }))
}

pub async fn report_location_error(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LocationErrorRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut explorer = state.explorer.lock().await;
    let handle = match request.handle.or_else(|| explorer.session().handle()) {
        Some(handle) => handle,
        None => return Ok(Json(SessionResponse::from(explorer.session()))),
    };

    explorer.on_location_error(handle, request.to_error())?;
    Ok(Json(SessionResponse::from(explorer.session())))
}
