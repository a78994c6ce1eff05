use axum::Json;
use nearby_core::models::CUISINES;

use crate::dto::CuisineResponse;

pub async fn list_cuisines() -> Json<Vec<CuisineResponse>> {
    Json(CUISINES.iter().map(|&(key, name)| CuisineResponse { key, name }).collect())
}
