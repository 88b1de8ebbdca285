//! Donor profile entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::blood::BloodType;

/// A donor's profile, owned by a `donor`-role user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DonorProfile {
    /// The owning user's id.
    pub user_id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Blood group, if the donor has registered one. An unset group keeps
    /// the donor in the in-app notification pool but never in SMS outreach.
    pub blood_group: Option<BloodType>,
    /// Contact phone number. Absence excludes the donor from SMS targeting.
    pub phone_number: Option<String>,
    /// District of residence.
    pub district: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Date of the donor's most recent donation, if any.
    pub last_donation_date: Option<NaiveDate>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

impl DonorProfile {
    /// The donor's display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One row of the notification targeting pool: the donor fields the
/// eligibility filter reads, joined with the account's active flag.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DonorCandidate {
    /// The donor's user id.
    pub user_id: Uuid,
    /// Registered blood group, if any.
    pub blood_group: Option<BloodType>,
    /// Contact phone number, if any.
    pub phone_number: Option<String>,
    /// Whether the owning account is active.
    pub is_active: bool,
}

impl DonorCandidate {
    /// Whether this candidate has a usable (non-blank) phone number.
    pub fn has_phone(&self) -> bool {
        self.phone_number
            .as_deref()
            .map(|p| !p.trim().is_empty())
            .unwrap_or(false)
    }
}
