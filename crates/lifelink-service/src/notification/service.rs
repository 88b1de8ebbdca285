//! Listing, counting, and mutating a user's notifications.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lifelink_core::result::AppResult;
use lifelink_database::repositories::{NotificationRepository, RequestRepository};
use lifelink_entity::notification::Notification;
use lifelink_entity::request::BloodRequest;

/// One notification hydrated with its originating blood request, when
/// the request still exists. Badge notifications and notifications
/// whose request was deleted carry no request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationFeedItem {
    /// The notification row.
    #[serde(flatten)]
    pub notification: Notification,
    /// The originating blood request, if any.
    pub blood_request: Option<BloodRequest>,
}

/// User-owned notification reads and mutations.
#[derive(Clone)]
pub struct NotificationService {
    notifications: Arc<NotificationRepository>,
    requests: Arc<RequestRepository>,
}

impl NotificationService {
    /// Create a new notification service.
    pub fn new(
        notifications: Arc<NotificationRepository>,
        requests: Arc<RequestRepository>,
    ) -> Self {
        Self {
            notifications,
            requests,
        }
    }

    /// List a user's notifications, newest first, each joined to its
    /// originating blood request where one is referenced.
    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<NotificationFeedItem>> {
        let notifications = self.notifications.find_by_user(user_id).await?;

        let mut ids: Vec<Uuid> = notifications
            .iter()
            .filter_map(|n| n.blood_request_id)
            .collect();
        ids.sort();
        ids.dedup();

        let requests = self.requests.find_many(&ids).await?;
        Ok(attach_requests(notifications, requests))
    }

    /// Count a user's unread notifications.
    pub async fn unread_count(&self, user_id: Uuid) -> AppResult<i64> {
        self.notifications.count_unread(user_id).await
    }

    /// Mark one of the user's notifications as read.
    pub async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<()> {
        self.notifications.mark_read(notification_id, user_id).await
    }

    /// Delete one of the user's notifications.
    pub async fn delete(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<()> {
        self.notifications.delete(notification_id, user_id).await
    }
}

/// Pair each notification with its referenced request. Preserves the
/// notification order; a dangling or absent reference yields `None`.
fn attach_requests(
    notifications: Vec<Notification>,
    requests: Vec<BloodRequest>,
) -> Vec<NotificationFeedItem> {
    let by_id: HashMap<Uuid, BloodRequest> =
        requests.into_iter().map(|r| (r.id, r)).collect();
    notifications
        .into_iter()
        .map(|notification| {
            let blood_request = notification
                .blood_request_id
                .and_then(|id| by_id.get(&id).cloned());
            NotificationFeedItem {
                notification,
                blood_request,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lifelink_entity::blood::BloodType;
    use lifelink_entity::notification::NotificationKind;
    use lifelink_entity::request::{RequestStatus, Urgency};

    fn sample_notification(blood_request_id: Option<Uuid>) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind: NotificationKind::BloodRequest,
            title: "Urgent: A+ Blood Needed".into(),
            message: "Kigali Central needs 2 units of A+ blood".into(),
            blood_request_id,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    fn sample_request(id: Uuid) -> BloodRequest {
        BloodRequest {
            id,
            hospital_id: Uuid::new_v4(),
            hospital_name: "Kigali Central".into(),
            blood_type: BloodType::APos,
            units_needed: 2,
            urgency: Urgency::Urgent,
            patient_condition: None,
            contact_person: "Dr. Uwase".into(),
            contact_phone: "+250788123456".into(),
            location: None,
            additional_notes: None,
            expiry_date: Utc::now(),
            status: RequestStatus::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_attach_requests_joins_by_id() {
        let request_id = Uuid::new_v4();
        let items = attach_requests(
            vec![
                sample_notification(Some(request_id)),
                sample_notification(None),
            ],
            vec![sample_request(request_id)],
        );

        assert_eq!(items.len(), 2);
        let joined = items[0].blood_request.as_ref().unwrap();
        assert_eq!(joined.id, request_id);
        assert!(items[1].blood_request.is_none());
    }

    #[test]
    fn test_attach_requests_tolerates_dangling_reference() {
        let items = attach_requests(vec![sample_notification(Some(Uuid::new_v4()))], vec![]);
        assert_eq!(items.len(), 1);
        assert!(items[0].blood_request.is_none());
    }
}
