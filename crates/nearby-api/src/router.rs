use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Location session
        .route("/api/v1/session", get(handlers::get_session))
        .route("/api/v1/session/toggle", post(handlers::toggle_tracking))
        .route("/api/v1/session/position", post(handlers::update_position))
        .route("/api/v1/session/error", post(handlers::report_location_error))

        // Searches and catalogs
        .route("/api/v1/nearby/{category}", get(handlers::find_nearby))
        .route("/api/v1/landmarks", post(handlers::show_landmarks))
        .route("/api/v1/cuisines", get(handlers::list_cuisines))

        // Overlay
        .route("/api/v1/route", post(handlers::show_route))
        .route("/api/v1/focus", post(handlers::focus))
        .route("/api/v1/panel", get(handlers::get_panel))
        .route("/api/v1/overlay", get(handlers::get_overlay).delete(handlers::clear_overlay))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
