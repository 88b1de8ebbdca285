//! Donor badge repository.

use sqlx::PgPool;
use uuid::Uuid;

use lifelink_core::error::{AppError, ErrorKind};
use lifelink_core::result::AppResult;
use lifelink_entity::badge::DonorBadge;

/// Repository for persisted badge awards.
#[derive(Debug, Clone)]
pub struct BadgeRepository {
    pool: PgPool,
}

impl BadgeRepository {
    /// Create a new badge repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the badge keys already persisted for a donor.
    pub async fn existing_keys(&self, donor_id: Uuid) -> AppResult<Vec<String>> {
        sqlx::query_scalar("SELECT badge_key FROM donor_badges WHERE donor_id = $1")
            .bind(donor_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list badge keys", e)
            })
    }

    /// Insert a badge award, ignoring the insert if the (donor, key)
    /// pair already exists. Returns the newly created row, or `None`
    /// when a concurrent caller won the race.
    pub async fn insert_ignore(
        &self,
        donor_id: Uuid,
        badge_key: &str,
        meta: &serde_json::Value,
    ) -> AppResult<Option<DonorBadge>> {
        sqlx::query_as::<_, DonorBadge>(
            "INSERT INTO donor_badges (donor_id, badge_key, meta) VALUES ($1, $2, $3) \
             ON CONFLICT (donor_id, badge_key) DO NOTHING \
             RETURNING *",
        )
        .bind(donor_id)
        .bind(badge_key)
        .bind(meta)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to award badge", e))
    }

    /// List a donor's badges, most recently earned first.
    pub async fn find_by_donor(&self, donor_id: Uuid) -> AppResult<Vec<DonorBadge>> {
        sqlx::query_as::<_, DonorBadge>(
            "SELECT * FROM donor_badges WHERE donor_id = $1 ORDER BY earned_at DESC",
        )
        .bind(donor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list badges", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn seed_donor(pool: &PgPool) -> Uuid {
        sqlx::query_scalar(
            "INSERT INTO users (email, role) VALUES ($1, 'donor'::user_role) RETURNING id",
        )
        .bind(format!("{}@example.com", Uuid::new_v4()))
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_duplicate_award_returns_none(pool: PgPool) {
        let repo = BadgeRepository::new(pool.clone());
        let donor = seed_donor(&pool).await;
        let meta = json!({ "tier": 1 });

        let first = repo.insert_ignore(donor, "donation_1", &meta).await.unwrap();
        let again = repo.insert_ignore(donor, "donation_1", &meta).await.unwrap();

        let awarded = first.unwrap();
        assert_eq!(awarded.badge_key, "donation_1");
        assert!(again.is_none());
        assert_eq!(repo.find_by_donor(donor).await.unwrap().len(), 1);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_distinct_keys_both_persist(pool: PgPool) {
        let repo = BadgeRepository::new(pool.clone());
        let donor = seed_donor(&pool).await;
        let meta = json!({});

        assert!(repo.insert_ignore(donor, "donation_1", &meta).await.unwrap().is_some());
        assert!(repo.insert_ignore(donor, "impact_5", &meta).await.unwrap().is_some());

        let mut keys = repo.existing_keys(donor).await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["donation_1", "impact_5"]);
    }
}
