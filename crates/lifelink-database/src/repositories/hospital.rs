//! Hospital profile and donor membership repository.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use lifelink_core::error::{AppError, ErrorKind};
use lifelink_core::result::AppResult;
use lifelink_entity::donor::DonorProfile;
use lifelink_entity::hospital::{HospitalDonorMembership, HospitalProfile};

/// Repository for hospital profiles and donor opt-in memberships.
#[derive(Debug, Clone)]
pub struct HospitalRepository {
    pool: PgPool,
}

impl HospitalRepository {
    /// Create a new hospital repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a hospital profile by the owning user's id.
    pub async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<HospitalProfile>> {
        sqlx::query_as::<_, HospitalProfile>("SELECT * FROM hospital_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find hospital profile", e)
            })
    }

    /// Find a hospital profile, failing with `NotFound` when absent.
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<HospitalProfile> {
        self.find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hospital profile {user_id} not found")))
    }

    /// Whether the donor has a consented membership with this hospital.
    pub async fn has_consented_membership(
        &self,
        donor_id: Uuid,
        hospital_id: Uuid,
    ) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM hospital_donor_memberships \
             WHERE donor_id = $1 AND hospital_id = $2 AND consented = TRUE",
        )
        .bind(donor_id)
        .bind(hospital_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check membership", e)
        })?;
        Ok(count > 0)
    }

    /// Record a donor's opt-in consent for a hospital. Re-consenting an
    /// existing membership just refreshes the consent timestamp.
    pub async fn record_consent(
        &self,
        donor_id: Uuid,
        hospital_id: Uuid,
    ) -> AppResult<HospitalDonorMembership> {
        sqlx::query_as::<_, HospitalDonorMembership>(
            "INSERT INTO hospital_donor_memberships (donor_id, hospital_id, consented, consented_at) \
             VALUES ($1, $2, TRUE, $3) \
             ON CONFLICT (donor_id, hospital_id) \
             DO UPDATE SET consented = TRUE, consented_at = $3 \
             RETURNING *",
        )
        .bind(donor_id)
        .bind(hospital_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record consent", e))
    }

    /// List the donor profiles that have opted in to this hospital.
    pub async fn list_recognized_donors(&self, hospital_id: Uuid) -> AppResult<Vec<DonorProfile>> {
        sqlx::query_as::<_, DonorProfile>(
            "SELECT p.* FROM donor_profiles p \
             JOIN hospital_donor_memberships m ON m.donor_id = p.user_id \
             WHERE m.hospital_id = $1 AND m.consented = TRUE \
             ORDER BY m.consented_at DESC",
        )
        .bind(hospital_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recognized donors", e)
        })
    }
}
