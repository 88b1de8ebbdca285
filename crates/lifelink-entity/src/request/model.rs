//! Blood request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::blood::BloodType;

use super::status::RequestStatus;
use super::urgency::Urgency;

/// A hospital's request for blood donations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BloodRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// The requesting hospital's user id.
    pub hospital_id: Uuid,
    /// Hospital name at submission time, injected from the hospital's
    /// profile rather than supplied by the requester.
    pub hospital_name: String,
    /// The blood type needed.
    pub blood_type: BloodType,
    /// Number of units needed (positive).
    pub units_needed: i32,
    /// Urgency tier.
    pub urgency: Urgency,
    /// Free-text description of the patient's condition.
    pub patient_condition: Option<String>,
    /// Name of the person donors should contact.
    pub contact_person: String,
    /// Phone number donors should contact.
    pub contact_phone: String,
    /// Location text, injected from the hospital's profile.
    pub location: Option<String>,
    /// Any additional notes from the hospital.
    pub additional_notes: Option<String>,
    /// When the request stops being relevant.
    pub expiry_date: DateTime<Utc>,
    /// Lifecycle status.
    pub status: RequestStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new blood request.
///
/// `hospital_name` and `location` are filled in by the service from the
/// hospital's profile before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBloodRequest {
    /// The requesting hospital's user id.
    pub hospital_id: Uuid,
    /// Hospital name (profile-derived).
    pub hospital_name: String,
    /// The blood type needed.
    pub blood_type: BloodType,
    /// Number of units needed (must be positive).
    pub units_needed: i32,
    /// Urgency tier.
    pub urgency: Urgency,
    /// Patient condition text.
    pub patient_condition: Option<String>,
    /// Contact person name.
    pub contact_person: String,
    /// Contact phone number.
    pub contact_phone: String,
    /// Location text (profile-derived).
    pub location: Option<String>,
    /// Additional notes.
    pub additional_notes: Option<String>,
    /// Expiry timestamp.
    pub expiry_date: DateTime<Utc>,
}
