//! Axum route handlers for the Profile API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::catalog::ProfileOptions;
use crate::matching::handlers::UserIdQuery;
use crate::models::profile::Profile;
use crate::profile::form::ProfileForm;
use crate::routes::language::DisplayLanguage;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfilePageResponse {
    /// `None` until the user saves for the first time.
    pub profile: Option<Profile>,
    pub options: ProfileOptions,
    pub language: DisplayLanguage,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    language: DisplayLanguage,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfilePageResponse>, AppError> {
    let profile = state.store.get_profile(params.user_id).await?;
    Ok(Json(ProfilePageResponse {
        profile,
        options: state.catalog.options().clone(),
        language,
    }))
}

/// PUT /api/v1/profile
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Json(form): Json<ProfileForm>,
) -> Result<Json<Profile>, AppError> {
    let profile = form.into_profile()?;
    let saved = state.store.upsert_profile(&profile).await?;

    info!(
        user_id = %saved.user_id,
        skills = saved.skills.len(),
        roles = saved.preferred_roles.len(),
        locations = saved.preferred_locations.len(),
        "Saved profile"
    );
    Ok(Json(saved))
}
