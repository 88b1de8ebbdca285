//! Hospital recognition read-side queries.
//!
//! Pure reads combining several aggregates over donations, memberships,
//! and badges. An empty hospital yields zero counts and empty lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use lifelink_core::error::{AppError, ErrorKind};
use lifelink_core::result::AppResult;
use lifelink_entity::donation::IMPACT_PER_UNIT;

/// Hospital-wide summary counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct RecognitionCounters {
    /// Donors with a consented membership at this hospital.
    pub total_donors: i64,
    /// Donors with at least one completed donation here in the trailing
    /// 12 months.
    pub active_donors: i64,
    /// Badges earned across every donor who has donated here.
    pub badges_earned: i64,
    /// Sum of units donated here times the lives-per-unit heuristic.
    pub lives_impacted: i64,
}

/// One leaderboard row before badge enrichment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TopDonorRow {
    /// The donor's user id.
    pub donor_id: Uuid,
    /// First name from the donor profile.
    pub first_name: String,
    /// Last name from the donor profile.
    pub last_name: String,
    /// Completed donations at this hospital.
    pub donation_count: i64,
    /// Total units across those donations.
    pub total_units: i64,
    /// Most recent donation date here.
    pub last_donation: NaiveDate,
}

/// Count of one badge key across a hospital's donors.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BadgeKeyCount {
    /// Stable tier key.
    pub badge_key: String,
    /// How many of this hospital's donors hold it.
    pub count: i64,
}

/// A (donor, badge key) pair, used to attach badge lists to
/// leaderboard rows in one query.
#[derive(Debug, Clone, FromRow)]
pub struct DonorBadgeKey {
    /// The badge holder.
    pub donor_id: Uuid,
    /// Stable tier key.
    pub badge_key: String,
}

/// Repository for the recognition aggregator's queries.
#[derive(Debug, Clone)]
pub struct RecognitionRepository {
    pool: PgPool,
}

impl RecognitionRepository {
    /// Create a new recognition repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Summary counters for one hospital.
    pub async fn counters(&self, hospital_id: Uuid) -> AppResult<RecognitionCounters> {
        sqlx::query_as::<_, RecognitionCounters>(
            "SELECT \
               (SELECT COUNT(*) FROM hospital_donor_memberships \
                 WHERE hospital_id = $1 AND consented = TRUE) AS total_donors, \
               (SELECT COUNT(DISTINCT donor_id) FROM donations \
                 WHERE hospital_id = $1 AND status = 'completed' \
                   AND donation_date >= CURRENT_DATE - INTERVAL '12 months') AS active_donors, \
               (SELECT COUNT(*) FROM donor_badges b \
                 WHERE b.donor_id IN (SELECT DISTINCT donor_id FROM donations \
                   WHERE hospital_id = $1 AND status = 'completed')) AS badges_earned, \
               (SELECT COALESCE(SUM(units), 0) * $2 FROM donations \
                 WHERE hospital_id = $1 AND status = 'completed') AS lives_impacted",
        )
        .bind(hospital_id)
        .bind(IMPACT_PER_UNIT)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load recognition counters", e)
        })
    }

    /// Top donors by completed donations at this hospital. Ties broken
    /// by total units, then most recent donation date, both descending.
    pub async fn top_donors(&self, hospital_id: Uuid, limit: i64) -> AppResult<Vec<TopDonorRow>> {
        sqlx::query_as::<_, TopDonorRow>(
            "SELECT d.donor_id, p.first_name, p.last_name, \
                    COUNT(*) AS donation_count, \
                    COALESCE(SUM(d.units), 0) AS total_units, \
                    MAX(d.donation_date) AS last_donation \
             FROM donations d \
             JOIN donor_profiles p ON p.user_id = d.donor_id \
             WHERE d.hospital_id = $1 AND d.status = 'completed' \
             GROUP BY d.donor_id, p.first_name, p.last_name \
             ORDER BY donation_count DESC, total_units DESC, last_donation DESC \
             LIMIT $2",
        )
        .bind(hospital_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load top donors", e))
    }

    /// Badge keys held by each of the given donors.
    pub async fn badge_keys_for(&self, donor_ids: &[Uuid]) -> AppResult<Vec<DonorBadgeKey>> {
        sqlx::query_as::<_, DonorBadgeKey>(
            "SELECT donor_id, badge_key FROM donor_badges WHERE donor_id = ANY($1)",
        )
        .bind(donor_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load badge keys", e))
    }

    /// Per-badge-key counts over every donor who has donated at this
    /// hospital.
    pub async fn badge_counts(&self, hospital_id: Uuid) -> AppResult<Vec<BadgeKeyCount>> {
        sqlx::query_as::<_, BadgeKeyCount>(
            "SELECT badge_key, COUNT(*) AS count FROM donor_badges \
             WHERE donor_id IN (SELECT DISTINCT donor_id FROM donations \
               WHERE hospital_id = $1 AND status = 'completed') \
             GROUP BY badge_key \
             ORDER BY count DESC, badge_key",
        )
        .bind(hospital_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load badge counts", e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed_user(pool: &PgPool, role: &str) -> Uuid {
        sqlx::query_scalar(
            "INSERT INTO users (email, role) VALUES ($1, $2::user_role) RETURNING id",
        )
        .bind(format!("{}@example.com", Uuid::new_v4()))
        .bind(role)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_empty_hospital_yields_zero_counters(pool: PgPool) {
        let repo = RecognitionRepository::new(pool.clone());
        let hospital = seed_user(&pool, "hospital").await;

        let counters = repo.counters(hospital).await.unwrap();
        assert_eq!(counters.total_donors, 0);
        assert_eq!(counters.active_donors, 0);
        assert_eq!(counters.badges_earned, 0);
        assert_eq!(counters.lives_impacted, 0);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_lives_impacted_scales_with_units(pool: PgPool) {
        let repo = RecognitionRepository::new(pool.clone());
        let hospital = seed_user(&pool, "hospital").await;
        let donor = seed_user(&pool, "donor").await;

        sqlx::query(
            "INSERT INTO donations (donor_id, hospital_id, donation_date, units, status) \
             VALUES ($1, $2, CURRENT_DATE, 2, 'completed'::donation_status)",
        )
        .bind(donor)
        .bind(hospital)
        .execute(&pool)
        .await
        .unwrap();

        let counters = repo.counters(hospital).await.unwrap();
        assert_eq!(counters.lives_impacted, 2 * IMPACT_PER_UNIT);
        assert_eq!(counters.active_donors, 1);
    }
}
