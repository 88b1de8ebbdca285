//! Donation status updates and the completion workflow.
//!
//! Badge awarding, award notifications, and the consent email are all
//! secondary enrichments of a completed donation: each is caught and
//! logged on failure, never allowed to fail the status update itself.

use std::sync::Arc;

use tracing::{error, warn};
use uuid::Uuid;

use lifelink_core::result::AppResult;
use lifelink_database::repositories::{
    DonationRepository, HospitalRepository, NotificationRepository, UserRepository,
};
use lifelink_entity::badge::EarnedBadge;
use lifelink_entity::donation::{Donation, DonationStatus};
use lifelink_entity::notification::{NewNotification, NotificationKind};
use lifelink_notify::EmailSender;

use crate::badge::BadgeService;
use crate::hospital::HospitalService;

/// Applies donation status transitions and runs the completion
/// side effects.
#[derive(Clone)]
pub struct DonationService {
    donations: Arc<DonationRepository>,
    users: Arc<UserRepository>,
    hospitals: Arc<HospitalRepository>,
    notifications: Arc<NotificationRepository>,
    badges: BadgeService,
    hospital_service: HospitalService,
    email: Arc<dyn EmailSender>,
}

impl DonationService {
    /// Create a new donation service.
    pub fn new(
        donations: Arc<DonationRepository>,
        users: Arc<UserRepository>,
        hospitals: Arc<HospitalRepository>,
        notifications: Arc<NotificationRepository>,
        badges: BadgeService,
        hospital_service: HospitalService,
        email: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            donations,
            users,
            hospitals,
            notifications,
            badges,
            hospital_service,
            email,
        }
    }

    /// Update a donation's status. When the transition lands on
    /// `completed` for the first time, run the completion workflow;
    /// its failures are logged, never propagated.
    pub async fn update_status(
        &self,
        donation_id: Uuid,
        status: DonationStatus,
    ) -> AppResult<Donation> {
        let before = self
            .donations
            .find_by_id(donation_id)
            .await?
            .ok_or_else(|| {
                lifelink_core::AppError::not_found(format!("Donation {donation_id} not found"))
            })?;

        let updated = self.donations.update_status(donation_id, status).await?;

        if before.status != DonationStatus::Completed
            && updated.status == DonationStatus::Completed
        {
            self.run_completion_workflow(&updated).await;
        }

        Ok(updated)
    }

    /// Badge award, award notifications, and the first-donation consent
    /// email. Each step is independent and best-effort.
    async fn run_completion_workflow(&self, donation: &Donation) {
        match self.badges.award_new_badges(donation.donor_id).await {
            Ok(newly_awarded) => {
                for badge in &newly_awarded {
                    if let Err(e) = self.notify_badge_award(donation.donor_id, badge).await {
                        warn!(
                            donor_id = %donation.donor_id,
                            badge = %badge.key,
                            error = %e,
                            "Failed to write badge award notification"
                        );
                    }
                }
            }
            Err(e) => {
                error!(
                    donor_id = %donation.donor_id,
                    error = %e,
                    "Badge award failed during donation completion"
                );
            }
        }

        if let Err(e) = self.maybe_send_consent_email(donation).await {
            warn!(
                donor_id = %donation.donor_id,
                hospital_id = %donation.hospital_id,
                error = %e,
                "Consent email not sent"
            );
        }
    }

    async fn notify_badge_award(&self, donor_id: Uuid, badge: &EarnedBadge) -> AppResult<()> {
        self.notifications
            .create(&NewNotification {
                user_id: donor_id,
                kind: NotificationKind::BadgeAward,
                title: format!("New badge: {}", badge.title),
                message: badge.description.clone(),
                blood_request_id: None,
            })
            .await?;
        Ok(())
    }

    /// Send the opt-in consent email when this is the donor's first
    /// completed donation at this hospital and no consented membership
    /// exists yet.
    async fn maybe_send_consent_email(&self, donation: &Donation) -> AppResult<()> {
        let already_consented = self
            .hospitals
            .has_consented_membership(donation.donor_id, donation.hospital_id)
            .await?;
        if already_consented {
            return Ok(());
        }

        let prior_completed = self
            .donations
            .completed_count_at_hospital(donation.donor_id, donation.hospital_id)
            .await?;
        // The donation just completed is already counted.
        if prior_completed > 1 {
            return Ok(());
        }

        let donor = self.users.get_by_id(donation.donor_id).await?;
        let hospital = self.hospitals.get_profile(donation.hospital_id).await?;
        let link = self.hospital_service.opt_in_link(
            donation.donor_id,
            donation.hospital_id,
            donation.id,
        )?;

        let html = format!(
            "<p>Thank you for your donation at {name}.</p>\
             <p>Would you like to be listed as an available donor for this hospital?</p>\
             <p><a href=\"{link}\">Yes, list me for {name}</a></p>",
            name = hospital.name,
        );
        self.email
            .send(&donor.email, "Confirm to be listed as a donor", &html)
            .await
    }
}
