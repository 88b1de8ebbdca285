//! SMS delivery log repository.

use sqlx::PgPool;

use lifelink_core::error::{AppError, ErrorKind};
use lifelink_core::result::AppResult;
use lifelink_entity::sms_log::NewSmsLog;

/// Repository for SMS attempt logging. These writes never share a
/// transaction with anything else.
#[derive(Debug, Clone)]
pub struct SmsLogRepository {
    pool: PgPool,
}

impl SmsLogRepository {
    /// Create a new SMS log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record one SMS attempt.
    pub async fn insert(&self, log: &NewSmsLog) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO sms_logs \
             (user_id, phone_number, message, blood_request_id, status, \
              provider, provider_message_id, error_message) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(log.user_id)
        .bind(&log.phone_number)
        .bind(&log.message)
        .bind(log.blood_request_id)
        .bind(log.status)
        .bind(&log.provider)
        .bind(&log.provider_message_id)
        .bind(&log.error_message)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to log SMS attempt", e))?;
        Ok(())
    }
}
