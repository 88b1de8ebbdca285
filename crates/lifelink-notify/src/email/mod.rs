//! Email sending: provider trait and implementations.

mod disabled;
mod sendgrid;

pub use disabled::DisabledEmailSender;
pub use sendgrid::SendGridEmailSender;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use lifelink_core::config::EmailConfig;
use lifelink_core::result::AppResult;

/// A black-box email provider. Fire-and-forget from the caller's
/// perspective; failures surface as `Err` for the caller to log.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send one HTML email.
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> AppResult<()>;
}

/// Build the configured email sender, falling back to the simulation
/// sender when email is disabled or unconfigured.
pub fn sender_from_config(config: &EmailConfig) -> Arc<dyn EmailSender> {
    if !config.enabled {
        info!("Email service is disabled");
        return Arc::new(DisabledEmailSender);
    }
    match SendGridEmailSender::new(config) {
        Ok(sendgrid) => {
            info!("Using SendGrid email provider");
            Arc::new(sendgrid)
        }
        Err(e) => {
            warn!(error = %e, "No usable email provider, falling back to simulation");
            Arc::new(DisabledEmailSender)
        }
    }
}
