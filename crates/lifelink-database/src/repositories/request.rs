//! Blood request repository.

use sqlx::PgPool;
use uuid::Uuid;

use lifelink_core::error::{AppError, ErrorKind};
use lifelink_core::result::AppResult;
use lifelink_entity::notification::NewNotification;
use lifelink_entity::request::{BloodRequest, CreateBloodRequest, RequestStatus};

/// Repository for blood request persistence.
#[derive(Debug, Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    /// Create a new request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a blood request and its in-app notification batch in one
    /// transaction. Either the request row and every notification row
    /// commit together, or none of them exist.
    ///
    /// Each notification is inserted with its `blood_request_id` set to
    /// the new request's id, overriding whatever the draft carried.
    pub async fn create_with_notifications(
        &self,
        create: &CreateBloodRequest,
        notifications: &[NewNotification],
    ) -> AppResult<BloodRequest> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let request = sqlx::query_as::<_, BloodRequest>(
            "INSERT INTO blood_requests \
             (hospital_id, hospital_name, blood_type, units_needed, urgency, \
              patient_condition, contact_person, contact_phone, location, \
              additional_notes, expiry_date, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 'active') \
             RETURNING *",
        )
        .bind(create.hospital_id)
        .bind(&create.hospital_name)
        .bind(create.blood_type)
        .bind(create.units_needed)
        .bind(create.urgency)
        .bind(&create.patient_condition)
        .bind(&create.contact_person)
        .bind(&create.contact_phone)
        .bind(&create.location)
        .bind(&create.additional_notes)
        .bind(create.expiry_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create blood request", e)
        })?;

        for notification in notifications {
            sqlx::query(
                "INSERT INTO notifications (user_id, kind, title, message, blood_request_id) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(notification.user_id)
            .bind(notification.kind)
            .bind(&notification.title)
            .bind(&notification.message)
            .bind(request.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert notification", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit blood request", e)
        })?;

        Ok(request)
    }

    /// Find a blood request by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<BloodRequest>> {
        sqlx::query_as::<_, BloodRequest>("SELECT * FROM blood_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find blood request", e)
            })
    }

    /// Fetch the requests with the given ids, in no particular order.
    /// Used to hydrate notification feeds with their originating
    /// requests.
    pub async fn find_many(&self, ids: &[Uuid]) -> AppResult<Vec<BloodRequest>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, BloodRequest>("SELECT * FROM blood_requests WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to fetch blood requests", e)
            })
    }

    /// List active, unexpired requests, most urgent first and newest
    /// within each tier. Ordering relies on the `urgency` enum being
    /// declared critical-first.
    pub async fn list_active(&self) -> AppResult<Vec<BloodRequest>> {
        sqlx::query_as::<_, BloodRequest>(
            "SELECT * FROM blood_requests \
             WHERE status = 'active' AND expiry_date > NOW() \
             ORDER BY urgency, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list active requests", e)
        })
    }

    /// Apply a lifecycle status transition.
    pub async fn update_status(&self, id: Uuid, status: RequestStatus) -> AppResult<BloodRequest> {
        sqlx::query_as::<_, BloodRequest>(
            "UPDATE blood_requests SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update request status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Blood request {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use lifelink_entity::blood::BloodType;
    use lifelink_entity::notification::NotificationKind;
    use lifelink_entity::request::Urgency;

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

    fn sample_create(hospital_id: Uuid) -> CreateBloodRequest {
        CreateBloodRequest {
            hospital_id,
            hospital_name: "Kigali Central".into(),
            blood_type: BloodType::ONeg,
            units_needed: 3,
            urgency: Urgency::Critical,
            patient_condition: None,
            contact_person: "Dr. Uwase".into(),
            contact_phone: "+250788123456".into(),
            location: None,
            additional_notes: None,
            expiry_date: Utc::now() + Duration::days(1),
        }
    }

    fn draft_notification(user_id: Uuid) -> NewNotification {
        NewNotification {
            user_id,
            kind: NotificationKind::BloodRequest,
            title: "CRITICAL: O- Blood Needed Urgently".into(),
            message: "Kigali Central needs 3 units of O- blood".into(),
            blood_request_id: None,
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_request_and_notifications_commit_together(pool: PgPool) {
        let repo = RequestRepository::new(pool.clone());
        let hospital = seed_user(&pool, "hospital").await;
        let donor_a = seed_user(&pool, "donor").await;
        let donor_b = seed_user(&pool, "donor").await;

        let request = repo
            .create_with_notifications(
                &sample_create(hospital),
                &[draft_notification(donor_a), draft_notification(donor_b)],
            )
            .await
            .unwrap();

        assert!(repo.find_by_id(request.id).await.unwrap().is_some());
        let notified: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE blood_request_id = $1")
                .bind(request.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(notified, 2);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_failed_notification_rolls_back_request(pool: PgPool) {
        let repo = RequestRepository::new(pool.clone());
        let hospital = seed_user(&pool, "hospital").await;
        let donor = seed_user(&pool, "donor").await;

        // Second target violates the notifications.user_id foreign key,
        // which must take the request row down with it.
        let result = repo
            .create_with_notifications(
                &sample_create(hospital),
                &[draft_notification(donor), draft_notification(Uuid::new_v4())],
            )
            .await;
        assert!(result.is_err());

        let requests: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM blood_requests WHERE hospital_id = $1")
                .bind(hospital)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(requests, 0);
        let notifications: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
                .bind(donor)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(notifications, 0);
    }
}
