//! Axum route handlers for listings and recommendations.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::catalog::ProfileOptions;
use crate::matching::scorer::{recommend, Recommendation};
use crate::models::listing::Listing;
use crate::routes::language::DisplayLanguage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    pub language: DisplayLanguage,
}

/// GET /api/v1/listings
pub async fn handle_list_listings(State(state): State<AppState>) -> Json<Vec<Listing>> {
    Json(state.catalog.listings().to_vec())
}

/// GET /api/v1/listings/options
pub async fn handle_listing_options(State(state): State<AppState>) -> Json<ProfileOptions> {
    Json(state.catalog.options().clone())
}

/// GET /api/v1/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    language: DisplayLanguage,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let profile = state.store.get_profile(params.user_id).await?;
    let recommendations = recommend(profile.as_ref(), state.catalog.listings());

    info!(
        user_id = %params.user_id,
        has_profile = profile.is_some(),
        returned = recommendations.len(),
        "Computed recommendations"
    );

    Ok(Json(RecommendationsResponse {
        recommendations,
        language,
    }))
}
