//! Donation record entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

use crate::blood::BloodType;

/// Units-to-lives multiplier: each donated unit is counted as three
/// lives potentially saved.
pub const IMPACT_PER_UNIT: i64 = 3;

/// Lifecycle status of a donation record.
///
/// Only `Completed` rows feed badge computation and recognition rollups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "donation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    /// Scheduled but not yet performed.
    Scheduled,
    /// The donation took place.
    Completed,
    /// The donation was cancelled.
    Cancelled,
}

impl DonationStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One donation record. Immutable once `Completed` for badge purposes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Donation {
    /// Unique donation identifier.
    pub id: Uuid,
    /// The donating user.
    pub donor_id: Uuid,
    /// The receiving hospital.
    pub hospital_id: Uuid,
    /// Date the donation took place (or is scheduled for).
    pub donation_date: NaiveDate,
    /// Blood type at the time of donation.
    pub blood_type: Option<BloodType>,
    /// Units donated.
    pub units: i32,
    /// Lifecycle status.
    pub status: DonationStatus,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Donation {
    /// Lives-saved heuristic for this donation.
    pub fn impact(&self) -> i64 {
        i64::from(self.units) * IMPACT_PER_UNIT
    }
}

/// Live aggregates over a donor's completed donations, re-read on every
/// badge computation rather than maintained incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct DonationAggregates {
    /// Number of completed donations.
    pub completed_count: i64,
    /// Sum of units across completed donations.
    pub total_units: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_heuristic() {
        let donation = Donation {
            id: Uuid::nil(),
            donor_id: Uuid::nil(),
            hospital_id: Uuid::nil(),
            donation_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            blood_type: Some(BloodType::OPos),
            units: 2,
            status: DonationStatus::Completed,
            created_at: Utc::now(),
        };
        assert_eq!(donation.impact(), 6);
    }
}
