//! Simulation sender used when email is disabled or unconfigured.

use async_trait::async_trait;
use tracing::info;

use lifelink_core::result::AppResult;

use super::EmailSender;

/// Logs what would have been sent and succeeds.
#[derive(Debug, Clone, Default)]
pub struct DisabledEmailSender;

#[async_trait]
impl EmailSender for DisabledEmailSender {
    async fn send(&self, to: &str, subject: &str, _html_body: &str) -> AppResult<()> {
        info!(%to, %subject, "Email disabled, message not sent");
        Ok(())
    }
}
