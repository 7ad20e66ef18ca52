use std::sync::Arc;

use crate::matching::catalog::ListingCatalog;
use crate::store::InternshipStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable persistence. PostgreSQL in production, in-memory in tests.
    pub store: Arc<dyn InternshipStore>,
    /// Listing catalog loaded once at startup; never mutated afterwards.
    pub catalog: Arc<ListingCatalog>,
}
