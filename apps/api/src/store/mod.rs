//! Persistence collaborator. Handlers reach profiles and listings only
//! through [`InternshipStore`], carried in `AppState` as `Arc<dyn InternshipStore>`.

pub mod postgres;
pub mod seed;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::listing::Listing;
use crate::models::profile::Profile;
use crate::store::seed::SeedListing;

#[async_trait]
pub trait InternshipStore: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError>;

    /// Creates the profile or replaces every field of the existing one.
    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, AppError>;

    /// All listings in id order.
    async fn all_listings(&self) -> Result<Vec<Listing>, AppError>;

    /// Inserts `seeds` only when no listings exist yet. Returns rows inserted.
    async fn seed_listings(&self, seeds: &[SeedListing]) -> Result<usize, AppError>;
}
