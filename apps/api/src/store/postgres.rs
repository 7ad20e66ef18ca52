use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::listing::Listing;
use crate::models::profile::{Profile, ProfileRow};
use crate::store::seed::SeedListing;
use crate::store::InternshipStore;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InternshipStore for PgStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        let row: Option<ProfileRow> =
            sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Profile::from))
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, AppError> {
        // Full replace: every column is overwritten, there is no partial update.
        let row: ProfileRow = sqlx::query_as(
            r#"
            INSERT INTO profiles
                (user_id, name, age, gender, course, gpa,
                 skills, preferred_roles, preferred_locations, home_location, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                name = EXCLUDED.name,
                age = EXCLUDED.age,
                gender = EXCLUDED.gender,
                course = EXCLUDED.course,
                gpa = EXCLUDED.gpa,
                skills = EXCLUDED.skills,
                preferred_roles = EXCLUDED.preferred_roles,
                preferred_locations = EXCLUDED.preferred_locations,
                home_location = EXCLUDED.home_location,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.name)
        .bind(&profile.age)
        .bind(&profile.gender)
        .bind(&profile.course)
        .bind(&profile.gpa)
        .bind(profile.skills.as_slice())
        .bind(profile.preferred_roles.as_slice())
        .bind(profile.preferred_locations.as_slice())
        .bind(&profile.home_location)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn all_listings(&self) -> Result<Vec<Listing>, AppError> {
        Ok(
            sqlx::query_as::<_, Listing>("SELECT * FROM listings ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn seed_listings(&self, seeds: &[SeedListing]) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM listings")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            info!("Listings table already holds {existing} rows, skipping seed");
            return Ok(0);
        }

        for seed in seeds {
            sqlx::query(
                r#"
                INSERT INTO listings (title, company, location, description, tags, stipend, url)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(seed.title)
            .bind(seed.company)
            .bind(seed.location)
            .bind(seed.description)
            .bind(seed.tags)
            .bind(seed.stipend)
            .bind(seed.url)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!("Seeded {} listings", seeds.len());
        Ok(seeds.len())
    }
}
