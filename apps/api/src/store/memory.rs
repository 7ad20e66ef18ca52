use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::listing::Listing;
use crate::models::profile::Profile;
use crate::store::seed::SeedListing;
use crate::store::InternshipStore;

/// In-process store for handler tests.
#[derive(Default)]
pub struct MemoryStore {
    profiles: Mutex<HashMap<Uuid, Profile>>,
    listings: Mutex<Vec<Listing>>,
}

#[async_trait]
impl InternshipStore for MemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, AppError> {
        let saved = Profile {
            updated_at: Some(Utc::now()),
            ..profile.clone()
        };
        self.profiles
            .lock()
            .unwrap()
            .insert(saved.user_id, saved.clone());
        Ok(saved)
    }

    async fn all_listings(&self) -> Result<Vec<Listing>, AppError> {
        Ok(self.listings.lock().unwrap().clone())
    }

    async fn seed_listings(&self, seeds: &[SeedListing]) -> Result<usize, AppError> {
        let mut listings = self.listings.lock().unwrap();
        if !listings.is_empty() {
            return Ok(0);
        }
        listings.extend(seeds.iter().zip(1..).map(|(seed, id)| Listing {
            id,
            title: Some(seed.title.to_string()),
            company: Some(seed.company.to_string()),
            location: Some(seed.location.to_string()),
            description: Some(seed.description.to_string()),
            tags: Some(seed.tags.to_string()),
            stipend: Some(seed.stipend.to_string()),
            url: Some(seed.url.to_string()),
        }));
        Ok(seeds.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::SEED_LISTINGS;

    #[tokio::test]
    async fn test_seed_only_fills_empty_store() {
        let store = MemoryStore::default();
        assert_eq!(store.seed_listings(SEED_LISTINGS).await.unwrap(), 29);
        assert_eq!(store.seed_listings(SEED_LISTINGS).await.unwrap(), 0);

        let listings = store.all_listings().await.unwrap();
        assert_eq!(listings.len(), 29);
        assert_eq!(listings[0].id, 1);
        assert_eq!(listings[0].title.as_deref(), Some("Backend Developer Intern"));
    }

    #[tokio::test]
    async fn test_upsert_replaces_whole_profile() {
        let store = MemoryStore::default();
        let user_id = Uuid::new_v4();
        let first = Profile {
            user_id,
            name: Some("Asha".to_string()),
            course: Some("B.Tech".to_string()),
            ..Profile::default()
        };
        store.upsert_profile(&first).await.unwrap();

        let second = Profile {
            user_id,
            name: Some("Asha K".to_string()),
            ..Profile::default()
        };
        store.upsert_profile(&second).await.unwrap();

        let saved = store.get_profile(user_id).await.unwrap().unwrap();
        assert_eq!(saved.name.as_deref(), Some("Asha K"));
        assert_eq!(saved.course, None);
        assert!(saved.updated_at.is_some());
    }
}
