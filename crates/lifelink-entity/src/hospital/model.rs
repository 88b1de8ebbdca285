//! Hospital profile and membership entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A hospital's profile, owned by a `hospital`-role user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HospitalProfile {
    /// The owning user's id.
    pub user_id: Uuid,
    /// Hospital name, injected into blood requests it submits.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// District.
    pub district: Option<String>,
    /// Front-desk contact phone.
    pub contact_phone: Option<String>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

/// A donor's opt-in consent record for one hospital.
///
/// Written by the email-consent flow after a first completed donation;
/// read by the recognition aggregator. At most one row per
/// (donor, hospital) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HospitalDonorMembership {
    /// Unique membership identifier.
    pub id: Uuid,
    /// The consenting donor.
    pub donor_id: Uuid,
    /// The hospital the donor opted in to.
    pub hospital_id: Uuid,
    /// Whether the donor has consented to be listed by this hospital.
    pub consented: bool,
    /// When consent was recorded.
    pub consented_at: Option<DateTime<Utc>>,
    /// When the membership row was created.
    pub created_at: DateTime<Utc>,
}
