//! The notification fan-out engine.
//!
//! Two distinct phases: `commit_request_and_notifications` runs in one
//! database transaction and is fatal on failure;
//! `dispatch_sms_best_effort` runs after commit, only for critical
//! requests, and its outcome is logged and counted but never surfaced.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use lifelink_core::error::AppError;
use lifelink_core::result::AppResult;
use lifelink_database::repositories::{DonorRepository, HospitalRepository, RequestRepository};
use lifelink_entity::blood::BloodType;
use lifelink_entity::donor::DonorCandidate;
use lifelink_entity::notification::{NewNotification, NotificationKind};
use lifelink_entity::request::{BloodRequest, CreateBloodRequest, RequestStatus, Urgency};
use lifelink_notify::{SmsBatchOutcome, SmsRecipient, SmsService};
use lifelink_notify::template::{critical_blood_request_sms, normal_blood_request_sms};

use super::eligibility::partition_targets;

/// A hospital's blood request submission. Hospital name and location
/// are injected from the hospital's profile, never taken from the
/// request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitBloodRequest {
    /// The submitting hospital's user id.
    pub hospital_id: Uuid,
    /// The blood type needed.
    pub blood_type: BloodType,
    /// Units needed; must be positive.
    pub units_needed: i32,
    /// Urgency tier.
    pub urgency: Urgency,
    /// Patient condition text.
    pub patient_condition: Option<String>,
    /// Contact person name.
    pub contact_person: String,
    /// Contact phone number.
    pub contact_phone: String,
    /// Additional notes.
    pub additional_notes: Option<String>,
    /// Expiry timestamp.
    pub expiry_date: DateTime<Utc>,
}

/// What a completed fan-out produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanoutOutcome {
    /// The committed request.
    pub request: BloodRequest,
    /// In-app notifications written in the same transaction.
    pub notified_donors: usize,
}

/// Converts one blood-request submission into a durable request row,
/// an in-app notification batch, and (for critical requests) an SMS
/// batch.
#[derive(Clone)]
pub struct FanoutService {
    requests: Arc<RequestRepository>,
    donors: Arc<DonorRepository>,
    hospitals: Arc<HospitalRepository>,
    sms: SmsService,
}

impl FanoutService {
    /// Create a new fan-out service.
    pub fn new(
        requests: Arc<RequestRepository>,
        donors: Arc<DonorRepository>,
        hospitals: Arc<HospitalRepository>,
        sms: SmsService,
    ) -> Self {
        Self {
            requests,
            donors,
            hospitals,
            sms,
        }
    }

    /// Handle one blood-request submission end to end.
    ///
    /// The request row and its notification batch either fully commit
    /// or fully fail; SMS dispatch happens afterwards and cannot affect
    /// the already-committed outcome.
    pub async fn create_blood_request(
        &self,
        submit: SubmitBloodRequest,
    ) -> AppResult<FanoutOutcome> {
        if submit.units_needed <= 0 {
            return Err(AppError::validation("units_needed must be positive"));
        }

        let hospital = self.hospitals.get_profile(submit.hospital_id).await?;

        let compatible = submit.blood_type.compatible_donor_types();
        let pool = self.donors.candidate_pool().await?;
        let partition = partition_targets(pool, compatible);

        let create = CreateBloodRequest {
            hospital_id: submit.hospital_id,
            hospital_name: hospital.name.clone(),
            blood_type: submit.blood_type,
            units_needed: submit.units_needed,
            urgency: submit.urgency,
            patient_condition: submit.patient_condition.clone(),
            contact_person: submit.contact_person.clone(),
            contact_phone: submit.contact_phone.clone(),
            location: hospital.address.clone(),
            additional_notes: submit.additional_notes.clone(),
            expiry_date: submit.expiry_date,
        };

        let request = self
            .commit_request_and_notifications(&create, &partition.in_app)
            .await?;

        info!(
            request_id = %request.id,
            blood_type = %request.blood_type,
            urgency = %request.urgency,
            in_app = partition.in_app.len(),
            sms_eligible = partition.sms.len(),
            "Blood request committed"
        );

        if request.urgency.triggers_sms() {
            self.dispatch_sms_best_effort(&request, &partition.sms)
                .await;
        } else {
            info!(
                request_id = %request.id,
                urgency = %request.urgency,
                "Non-critical request, in-app notifications only"
            );
        }

        Ok(FanoutOutcome {
            notified_donors: partition.in_app.len(),
            request,
        })
    }

    /// Phase one: insert the request and one notification per in-app
    /// target in a single transaction.
    pub async fn commit_request_and_notifications(
        &self,
        create: &CreateBloodRequest,
        in_app_targets: &[DonorCandidate],
    ) -> AppResult<BloodRequest> {
        let (title, message) = compose_in_app_notification(create);
        let notifications: Vec<NewNotification> = in_app_targets
            .iter()
            .map(|target| NewNotification {
                user_id: target.user_id,
                kind: NotificationKind::BloodRequest,
                title: title.clone(),
                message: message.clone(),
                blood_request_id: None,
            })
            .collect();

        self.requests
            .create_with_notifications(create, &notifications)
            .await
    }

    /// Phase two: best-effort SMS to the phone-bearing compatible
    /// subset. The sent/failed tally is logged; nothing is escalated.
    pub async fn dispatch_sms_best_effort(
        &self,
        request: &BloodRequest,
        sms_targets: &[DonorCandidate],
    ) -> SmsBatchOutcome {
        let recipients: Vec<SmsRecipient> = sms_targets
            .iter()
            .filter_map(|target| {
                target.phone_number.as_ref().map(|phone| SmsRecipient {
                    phone_number: phone.clone(),
                    user_id: Some(target.user_id),
                })
            })
            .collect();

        if recipients.is_empty() {
            info!(request_id = %request.id, "No SMS-eligible donors for request");
            return SmsBatchOutcome::default();
        }

        let message = if request.urgency == Urgency::Critical {
            critical_blood_request_sms(request)
        } else {
            normal_blood_request_sms(request)
        };

        self.sms
            .send_batch(&recipients, &message, Some(request.id))
            .await
    }

    /// List active, unexpired requests, most urgent first.
    pub async fn active_requests(&self) -> AppResult<Vec<BloodRequest>> {
        self.requests.list_active().await
    }

    /// Apply a lifecycle transition to a request, rejecting moves out
    /// of a terminal state.
    pub async fn update_request_status(
        &self,
        id: Uuid,
        status: RequestStatus,
    ) -> AppResult<BloodRequest> {
        let current = self
            .requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Blood request {id} not found")))?;
        if !current.status.can_transition_to(status) {
            return Err(AppError::conflict(format!(
                "Cannot transition request from {} to {}",
                current.status, status
            )));
        }
        self.requests.update_status(id, status).await
    }
}

/// Compose the shared in-app title and message for one request.
/// Critical requests get a distinct, urgency-flagged title.
fn compose_in_app_notification(create: &CreateBloodRequest) -> (String, String) {
    let title = if create.urgency == Urgency::Critical {
        format!("CRITICAL: {} Blood Needed Urgently", create.blood_type)
    } else {
        format!("Urgent: {} Blood Needed", create.blood_type)
    };
    let message = format!(
        "{} needs {} units of {} blood. Urgency: {}. Contact: {}",
        create.hospital_name,
        create.units_needed,
        create.blood_type,
        create.urgency,
        create.contact_phone,
    );
    (title, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_create(urgency: Urgency) -> CreateBloodRequest {
        CreateBloodRequest {
            hospital_id: Uuid::new_v4(),
            hospital_name: "Kigali Central".into(),
            blood_type: BloodType::ONeg,
            units_needed: 3,
            urgency,
            patient_condition: None,
            contact_person: "Dr. Uwase".into(),
            contact_phone: "+250788123456".into(),
            location: None,
            additional_notes: None,
            expiry_date: Utc::now(),
        }
    }

    #[test]
    fn test_critical_title_is_flagged() {
        let (title, message) = compose_in_app_notification(&sample_create(Urgency::Critical));
        assert_eq!(title, "CRITICAL: O- Blood Needed Urgently");
        assert!(message.contains("Kigali Central needs 3 units of O- blood"));
        assert!(message.contains("critical"));
    }

    #[test]
    fn test_non_critical_title() {
        let (title, _) = compose_in_app_notification(&sample_create(Urgency::Normal));
        assert_eq!(title, "Urgent: O- Blood Needed");
    }
}
