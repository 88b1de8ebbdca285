//! SMS sending: provider trait, implementations, and the logging
//! service the fan-out engine calls.

mod disabled;
mod service;
mod twilio;

pub use disabled::DisabledSmsSender;
pub use service::{SmsBatchOutcome, SmsService};
pub use twilio::TwilioSmsSender;

use async_trait::async_trait;
use uuid::Uuid;

/// Outcome of one provider send attempt.
#[derive(Debug, Clone)]
pub struct SmsResult {
    /// Whether the provider accepted the message.
    pub success: bool,
    /// Provider-assigned message id on success.
    pub message_id: Option<String>,
    /// Provider error text on failure.
    pub error: Option<String>,
}

impl SmsResult {
    /// A successful send.
    pub fn sent(message_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message_id: Some(message_id.into()),
            error: None,
        }
    }

    /// A failed send.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.into()),
        }
    }
}

/// One SMS target.
#[derive(Debug, Clone)]
pub struct SmsRecipient {
    /// Phone number, already known non-blank.
    pub phone_number: String,
    /// The recipient user, when known.
    pub user_id: Option<Uuid>,
}

/// A black-box SMS provider.
///
/// Implementations never return `Err` for delivery problems; every
/// per-recipient outcome is an [`SmsResult`] so the caller can count
/// and log partial failures without aborting the batch.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Provider name used in delivery logs.
    fn provider_name(&self) -> &'static str;

    /// Send one message to one normalized phone number.
    async fn send(&self, to: &str, message: &str) -> SmsResult;
}
