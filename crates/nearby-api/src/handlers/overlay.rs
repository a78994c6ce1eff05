use std::sync::Arc;

use axum::{extract::State, Json};
use geojson::FeatureCollection;
use nearby_core::models::Coordinate;

use crate::dto::{FocusRequest, PanelResponse, RouteRequest, RouteResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Everything currently drawn, as GeoJSON
pub async fn get_overlay(State(state): State<Arc<AppState>>) -> Json<FeatureCollection> {
    let explorer = state.explorer.lock().await;
    Json(explorer.registry().to_feature_collection())
}

pub async fn get_panel(State(state): State<Arc<AppState>>) -> Json<PanelResponse> {
    let explorer = state.explorer.lock().await;
    Json(PanelResponse::from(explorer.registry()))
}

/// Clear all results; the user layer stays
pub async fn clear_overlay(State(state): State<Arc<AppState>>) -> Json<PanelResponse> {
    let mut explorer = state.explorer.lock().await;
    explorer.clear_results();
    Json(PanelResponse::from(explorer.registry()))
}

pub async fn show_landmarks(State(state): State<Arc<AppState>>) -> Json<PanelResponse> {
    let mut explorer = state.explorer.lock().await;
    explorer.show_landmarks();
    Json(PanelResponse::from(explorer.registry()))
}

pub async fn show_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let mut explorer = state.explorer.lock().await;

    let route = match (request.landmark_id, request.lat, request.lng) {
        (Some(id), None, None) => explorer.show_route_to_landmark(id)?,
        (None, Some(lat), Some(lng)) => explorer.show_route(Coordinate::new(lat, lng)?)?,
        _ => {
            return Err(ApiError::bad_request(
                "Give either landmark_id or both lat and lng",
            ))
        }
    };

    Ok(Json(RouteResponse {
        origin: route.origin,
        destination: route.destination,
        distance_meters: route.distance_meters,
        bounds: route.bounds,
    }))
}

/// "Show on map"
pub async fn focus(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FocusRequest>,
) -> Result<Json<PanelResponse>, ApiError> {
    let coordinate = Coordinate::new(request.lat, request.lng)?;
    let mut explorer = state.explorer.lock().await;
    explorer.focus(coordinate);
    Ok(Json(PanelResponse::from(explorer.registry())))
}
