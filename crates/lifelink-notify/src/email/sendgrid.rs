//! SendGrid REST email provider.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use lifelink_core::config::EmailConfig;
use lifelink_core::error::{AppError, ErrorKind};
use lifelink_core::result::AppResult;

use super::EmailSender;

/// Sends email through the SendGrid v3 mail/send API.
#[derive(Debug, Clone)]
pub struct SendGridEmailSender {
    client: reqwest::Client,
    api_key: String,
    from_address: String,
}

impl SendGridEmailSender {
    /// Build a SendGrid sender from configuration.
    pub fn new(config: &EmailConfig) -> Result<Self, AppError> {
        if config.api_key.is_empty() {
            return Err(AppError::configuration(
                "SendGrid configuration missing: set email.api_key",
            ));
        }
        if config.from_address.is_empty() {
            return Err(AppError::configuration(
                "Email sender address missing: set email.from_address",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.send_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build HTTP client for SendGrid",
                    e,
                )
            })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for SendGridEmailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> AppResult<()> {
        let payload = json!({
            "personalizations": [{ "to": [{ "email": to }] }],
            "from": { "email": self.from_address },
            "subject": subject,
            "content": [{ "type": "text/html", "value": html_body }],
        });

        let response = self
            .client
            .post("https://api.sendgrid.com/v3/mail/send")
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "SendGrid request failed", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "SendGrid rejected email: HTTP {status}: {body}"
            )));
        }

        debug!(%to, "Email accepted by SendGrid");
        Ok(())
    }
}
