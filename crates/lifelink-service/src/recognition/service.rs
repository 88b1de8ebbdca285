//! Hospital-scoped recognition rollups.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lifelink_core::result::AppResult;
use lifelink_database::repositories::RecognitionRepository;
use lifelink_database::repositories::recognition::{BadgeKeyCount, RecognitionCounters};

use super::points::points_for_keys;

/// Leaderboard size for hospital dashboards.
const TOP_DONOR_LIMIT: i64 = 10;

/// One leaderboard entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDonor {
    /// The donor's user id.
    pub donor_id: Uuid,
    /// Display name from the donor profile.
    pub name: String,
    /// Completed donations at this hospital.
    pub donation_count: i64,
    /// Total units across those donations.
    pub total_units: i64,
    /// Most recent donation date here.
    pub last_donation: NaiveDate,
    /// Every badge key this donor holds.
    pub badges: Vec<String>,
    /// Weighted score over those badge keys.
    pub points: i64,
}

/// The full recognition payload for one hospital.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionStats {
    /// Summary counters.
    pub summary: RecognitionCounters,
    /// Ranked top donors.
    pub top_donors: Vec<TopDonor>,
    /// Per-badge-key counts across the hospital's donors.
    pub badge_counts: Vec<BadgeKeyCount>,
}

/// Pure read-side aggregator. A hospital with no donors yields zero
/// counters and empty lists, never an error.
#[derive(Clone)]
pub struct RecognitionService {
    recognition: Arc<RecognitionRepository>,
}

impl RecognitionService {
    /// Create a new recognition service.
    pub fn new(recognition: Arc<RecognitionRepository>) -> Self {
        Self { recognition }
    }

    /// Assemble summary counters, the top-10 leaderboard, and badge
    /// counts for one hospital.
    pub async fn stats(&self, hospital_id: Uuid) -> AppResult<RecognitionStats> {
        let summary = self.recognition.counters(hospital_id).await?;
        let rows = self
            .recognition
            .top_donors(hospital_id, TOP_DONOR_LIMIT)
            .await?;
        let badge_counts = self.recognition.badge_counts(hospital_id).await?;

        let donor_ids: Vec<Uuid> = rows.iter().map(|row| row.donor_id).collect();
        let mut badges_by_donor: HashMap<Uuid, Vec<String>> = HashMap::new();
        if !donor_ids.is_empty() {
            for pair in self.recognition.badge_keys_for(&donor_ids).await? {
                badges_by_donor
                    .entry(pair.donor_id)
                    .or_default()
                    .push(pair.badge_key);
            }
        }

        let top_donors = rows
            .into_iter()
            .map(|row| {
                let badges = badges_by_donor.remove(&row.donor_id).unwrap_or_default();
                let points = points_for_keys(badges.iter().map(String::as_str));
                TopDonor {
                    donor_id: row.donor_id,
                    name: format!("{} {}", row.first_name, row.last_name),
                    donation_count: row.donation_count,
                    total_units: row.total_units,
                    last_donation: row.last_donation,
                    badges,
                    points,
                }
            })
            .collect();

        Ok(RecognitionStats {
            summary,
            top_donors,
            badge_counts,
        })
    }
}
