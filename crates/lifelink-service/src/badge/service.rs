//! Badge computation and idempotent awarding.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use lifelink_core::result::AppResult;
use lifelink_database::repositories::{BadgeRepository, DonationRepository, DonorRepository};
use lifelink_entity::badge::{BadgeProgress, EarnedBadge};

use super::streak::consecutive_month_streak;
use super::tiers::{DonorMetrics, evaluate_tiers};

/// A donor's full badge state: tiers met and tiers in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeSnapshot {
    /// Tiers the current aggregates satisfy.
    pub earned: Vec<EarnedBadge>,
    /// Tiers not yet met, with progress.
    pub in_progress: Vec<BadgeProgress>,
}

/// Derives badge state from live donation aggregates and persists
/// newly-crossed thresholds at most once per (donor, badge key).
#[derive(Clone)]
pub struct BadgeService {
    donations: Arc<DonationRepository>,
    donors: Arc<DonorRepository>,
    badges: Arc<BadgeRepository>,
}

impl BadgeService {
    /// Create a new badge service.
    pub fn new(
        donations: Arc<DonationRepository>,
        donors: Arc<DonorRepository>,
        badges: Arc<BadgeRepository>,
    ) -> Self {
        Self {
            donations,
            donors,
            badges,
        }
    }

    /// Recompute a donor's badge state from scratch.
    ///
    /// Earned entries are stamped with the computation time, not any
    /// original award time; the award path is what reads persisted
    /// timestamps.
    pub async fn compute_progress(&self, donor_id: Uuid) -> AppResult<BadgeSnapshot> {
        let metrics = self.load_metrics(donor_id).await?;
        let (earned, in_progress) = evaluate_tiers(&metrics, Utc::now());
        Ok(BadgeSnapshot { earned, in_progress })
    }

    /// Persist every earned-but-not-yet-awarded badge and return only
    /// the rows this call actually created, stamped with the persisted
    /// earn time. Conflict losers under concurrent calls are excluded,
    /// so calling twice in succession yields an empty list the second
    /// time.
    pub async fn award_new_badges(&self, donor_id: Uuid) -> AppResult<Vec<EarnedBadge>> {
        let snapshot = self.compute_progress(donor_id).await?;
        let existing: HashSet<String> =
            self.badges.existing_keys(donor_id).await?.into_iter().collect();

        let mut newly_awarded = Vec::new();
        for badge in snapshot.earned {
            if existing.contains(&badge.key) {
                continue;
            }
            let meta = json!({
                "title": badge.title,
                "description": badge.description,
            });
            if let Some(row) = self
                .badges
                .insert_ignore(donor_id, &badge.key, &meta)
                .await?
            {
                newly_awarded.push(EarnedBadge {
                    earned_at: row.earned_at,
                    ..badge
                });
            }
        }

        if !newly_awarded.is_empty() {
            info!(
                %donor_id,
                count = newly_awarded.len(),
                "Awarded new badges"
            );
        }
        Ok(newly_awarded)
    }

    async fn load_metrics(&self, donor_id: Uuid) -> AppResult<DonorMetrics> {
        let aggregates = self.donations.aggregates(donor_id).await?;
        let months = self.donations.completed_donation_months(donor_id).await?;
        let blood_group = self
            .donors
            .find_profile(donor_id)
            .await?
            .and_then(|profile| profile.blood_group);

        Ok(DonorMetrics {
            donation_count: aggregates.completed_count,
            total_units: aggregates.total_units,
            streak_months: consecutive_month_streak(&months),
            blood_group,
        })
    }
}
