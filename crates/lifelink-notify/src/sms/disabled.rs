//! Simulation sender used when SMS is disabled or unconfigured.

use async_trait::async_trait;
use tracing::info;

use super::{SmsResult, SmsSender};

/// Logs what would have been sent and reports every message as failed,
/// so delivery logs still record the attempt.
#[derive(Debug, Clone, Default)]
pub struct DisabledSmsSender;

#[async_trait]
impl SmsSender for DisabledSmsSender {
    fn provider_name(&self) -> &'static str {
        "disabled"
    }

    async fn send(&self, to: &str, _message: &str) -> SmsResult {
        info!(%to, "SMS disabled, message not sent");
        SmsResult::failed("SMS disabled")
    }
}
