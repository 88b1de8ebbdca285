//! Donor profile repository.

use sqlx::PgPool;
use uuid::Uuid;

use lifelink_core::error::{AppError, ErrorKind};
use lifelink_core::result::AppResult;
use lifelink_entity::donor::{DonorCandidate, DonorProfile};

/// Repository for donor profile reads.
#[derive(Debug, Clone)]
pub struct DonorRepository {
    pool: PgPool,
}

impl DonorRepository {
    /// Create a new donor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a donor profile by the owning user's id.
    pub async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<DonorProfile>> {
        sqlx::query_as::<_, DonorProfile>("SELECT * FROM donor_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find donor profile", e)
            })
    }

    /// Find a donor profile, failing with `NotFound` when absent.
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<DonorProfile> {
        self.find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Donor profile {user_id} not found")))
    }

    /// Load the full donor targeting pool: every donor profile joined with
    /// its account's active flag. The eligibility filter owns all
    /// exclusion rules, including the inactive-donor one.
    pub async fn candidate_pool(&self) -> AppResult<Vec<DonorCandidate>> {
        sqlx::query_as::<_, DonorCandidate>(
            "SELECT p.user_id, p.blood_group, p.phone_number, u.is_active \
             FROM donor_profiles p \
             JOIN users u ON u.id = p.user_id \
             WHERE u.role = 'donor'",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load donor pool", e)
        })
    }
}
