//! SMS delivery log entities.
//!
//! One row per attempted SMS, success or failure. These writes are
//! independent of the blood-request fan-out transaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Delivery outcome of one SMS attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sms_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SmsStatus {
    /// The provider accepted the message.
    Sent,
    /// The provider rejected the message or the call failed.
    Failed,
}

impl SmsStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for SmsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One logged SMS attempt.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SmsLog {
    /// Unique log row identifier.
    pub id: Uuid,
    /// The recipient user, when known.
    pub user_id: Option<Uuid>,
    /// The phone number the message was sent to.
    pub phone_number: String,
    /// The message body.
    pub message: String,
    /// The blood request that triggered the send, if any.
    pub blood_request_id: Option<Uuid>,
    /// Delivery outcome.
    pub status: SmsStatus,
    /// Provider name, e.g. `twilio` or `disabled`.
    pub provider: String,
    /// Provider-assigned message id on success.
    pub provider_message_id: Option<String>,
    /// Provider error text on failure.
    pub error_message: Option<String>,
    /// When the attempt was made.
    pub created_at: DateTime<Utc>,
}

/// Data for inserting one SMS log row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSmsLog {
    /// The recipient user, when known.
    pub user_id: Option<Uuid>,
    /// The phone number the message was sent to.
    pub phone_number: String,
    /// The message body.
    pub message: String,
    /// The blood request that triggered the send, if any.
    pub blood_request_id: Option<Uuid>,
    /// Delivery outcome.
    pub status: SmsStatus,
    /// Provider name.
    pub provider: String,
    /// Provider-assigned message id on success.
    pub provider_message_id: Option<String>,
    /// Provider error text on failure.
    pub error_message: Option<String>,
}
