//! Request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lifelink_entity::blood::BloodType;
use lifelink_entity::donation::DonationStatus;
use lifelink_entity::request::{RequestStatus, Urgency};

/// Body of `POST /api/requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequestBody {
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

/// Body of `PUT /api/requests/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequestStatusBody {
    /// The new lifecycle status.
    pub status: RequestStatus,
}

/// Body of `PUT /api/donations/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDonationStatusBody {
    /// The new lifecycle status.
    pub status: DonationStatus,
}

/// Query string of `GET /api/hospitals/{id}/opt-in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptInQuery {
    /// The signed opt-in token from the consent email.
    pub token: String,
}
