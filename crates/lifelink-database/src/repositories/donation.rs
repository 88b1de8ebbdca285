//! Donation record repository.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use lifelink_core::error::{AppError, ErrorKind};
use lifelink_core::result::AppResult;
use lifelink_entity::donation::{Donation, DonationAggregates, DonationStatus};

/// Repository for donation records and the live aggregates the badge
/// engine re-reads on every computation.
#[derive(Debug, Clone)]
pub struct DonationRepository {
    pool: PgPool,
}

impl DonationRepository {
    /// Create a new donation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a donation by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Donation>> {
        sqlx::query_as::<_, Donation>("SELECT * FROM donations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find donation", e))
    }

    /// Update a donation's lifecycle status.
    pub async fn update_status(&self, id: Uuid, status: DonationStatus) -> AppResult<Donation> {
        sqlx::query_as::<_, Donation>(
            "UPDATE donations SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update donation status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Donation {id} not found")))
    }

    /// Completed-donation count and unit sum for one donor.
    pub async fn aggregates(&self, donor_id: Uuid) -> AppResult<DonationAggregates> {
        sqlx::query_as::<_, DonationAggregates>(
            "SELECT COUNT(*) AS completed_count, COALESCE(SUM(units), 0) AS total_units \
             FROM donations WHERE donor_id = $1 AND status = 'completed'",
        )
        .bind(donor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load donation aggregates", e)
        })
    }

    /// Distinct months (as first-of-month dates) in which the donor
    /// completed at least one donation, most recent first. Feeds the
    /// streak computation.
    pub async fn completed_donation_months(&self, donor_id: Uuid) -> AppResult<Vec<NaiveDate>> {
        sqlx::query_scalar::<_, NaiveDate>(
            "SELECT DISTINCT date_trunc('month', donation_date::timestamp)::date AS month \
             FROM donations WHERE donor_id = $1 AND status = 'completed' \
             ORDER BY month DESC",
        )
        .bind(donor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load donation months", e)
        })
    }

    /// Number of completed donations this donor has made at one hospital.
    pub async fn completed_count_at_hospital(
        &self,
        donor_id: Uuid,
        hospital_id: Uuid,
    ) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM donations \
             WHERE donor_id = $1 AND hospital_id = $2 AND status = 'completed'",
        )
        .bind(donor_id)
        .bind(hospital_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count hospital donations", e)
        })
    }
}
