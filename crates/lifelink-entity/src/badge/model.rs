//! Donor badge entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted badge award.
///
/// Uniqueness invariant: at most one row per (donor_id, badge_key) pair,
/// enforced by a database constraint with insert-or-ignore semantics.
/// A badge, once earned, is never revoked.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DonorBadge {
    /// Unique badge row identifier.
    pub id: Uuid,
    /// The awarded donor.
    pub donor_id: Uuid,
    /// Stable tier key, e.g. `donation_10`.
    pub badge_key: String,
    /// Title/description snapshot taken at award time.
    pub meta: serde_json::Value,
    /// When the badge was earned.
    pub earned_at: DateTime<Utc>,
}

/// A badge tier the donor's current aggregates satisfy.
///
/// Produced fresh by every progress computation; the timestamp is the
/// computation time, not the original award time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarnedBadge {
    /// Stable tier key.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// When this computation stamped the badge.
    pub earned_at: DateTime<Utc>,
}

/// A badge tier not yet met, with progress toward its threshold.
///
/// Never persisted; derived from live donation aggregates on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeProgress {
    /// Stable tier key.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Current metric value.
    pub current: i64,
    /// Threshold to earn the tier.
    pub target: i64,
    /// `min(100, round(current / target * 100))`.
    pub percent: u8,
}
