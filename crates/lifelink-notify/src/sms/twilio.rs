//! Twilio REST SMS provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use lifelink_core::config::SmsConfig;
use lifelink_core::error::AppError;

use super::{SmsResult, SmsSender};

/// Sends SMS through the Twilio Messages REST API.
#[derive(Debug, Clone)]
pub struct TwilioSmsSender {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

#[derive(Debug, Deserialize)]
struct TwilioMessageResponse {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioErrorResponse {
    message: Option<String>,
}

impl TwilioSmsSender {
    /// Build a Twilio sender from configuration.
    pub fn new(config: &SmsConfig) -> Result<Self, AppError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(AppError::configuration(
                "Twilio credentials missing: set sms.account_sid and sms.auth_token",
            ));
        }
        if config.from_number.is_empty() {
            return Err(AppError::configuration(
                "Twilio sender number missing: set sms.from_number",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.send_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    lifelink_core::error::ErrorKind::Configuration,
                    "Failed to build HTTP client for Twilio",
                    e,
                )
            })?;

        Ok(Self {
            client,
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.from_number.clone(),
        })
    }
}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    fn provider_name(&self) -> &'static str {
        "twilio"
    }

    async fn send(&self, to: &str, message: &str) -> SmsResult {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", &self.from_number), ("Body", message)])
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                match resp.json::<TwilioMessageResponse>().await {
                    Ok(body) => {
                        debug!(sid = %body.sid, "SMS accepted by Twilio");
                        SmsResult::sent(body.sid)
                    }
                    Err(e) => SmsResult::failed(format!("Unreadable Twilio response: {e}")),
                }
            }
            Ok(resp) => {
                let status = resp.status();
                let detail = resp
                    .json::<TwilioErrorResponse>()
                    .await
                    .ok()
                    .and_then(|b| b.message)
                    .unwrap_or_else(|| format!("HTTP {status}"));
                warn!(%status, error = %detail, "Twilio rejected SMS");
                SmsResult::failed(detail)
            }
            Err(e) => {
                warn!(error = %e, "Twilio request failed");
                SmsResult::failed(e.to_string())
            }
        }
    }
}
