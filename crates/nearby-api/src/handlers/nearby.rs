use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use nearby_core::models::{Category, FilterCriteria};

use crate::dto::{NearbyResponse, PanelResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/v1/nearby/{category}?cuisine=plov&halal_only=true`
pub async fn find_nearby(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Json<NearbyResponse>, ApiError> {
    let category: Category = category.parse()?;

    let pending = {
        let mut explorer = state.explorer.lock().await;
        explorer.prepare_query(category, criteria)?
    };

    tracing::info!(
        %category,
        cuisine = %pending.criteria.cuisine,
        halal_only = pending.criteria.halal_only,
        generation = pending.generation,
        "Processing nearby request"
    );

    let outcome = state.pipeline.run(&pending).await;

    let mut explorer = state.explorer.lock().await;
    let presentation = explorer.present(&pending, &outcome);
    let pois = outcome?;

    Ok(Json(NearbyResponse {
        category,
        origin: pending.origin,
        presentation,
        count: pois.len(),
        panel: PanelResponse::from(explorer.registry()),
    }))
}
