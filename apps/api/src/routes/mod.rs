pub mod health;
pub mod language;

use axum::{
    routing::{get, put},
    Router,
};

use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Listing catalog
        .route("/api/v1/listings", get(matching::handle_list_listings))
        .route(
            "/api/v1/listings/options",
            get(matching::handle_listing_options),
        )
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).put(profile::handle_save_profile),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            get(matching::handle_recommendations),
        )
        .with_state(state)
}
