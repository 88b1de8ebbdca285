//! SMS batch dispatch with per-attempt delivery logging.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};
use uuid::Uuid;

use lifelink_core::config::SmsConfig;
use lifelink_core::result::AppResult;
use lifelink_database::repositories::SmsLogRepository;
use lifelink_entity::sms_log::{NewSmsLog, SmsStatus};

use crate::phone::normalize_phone;

use super::{DisabledSmsSender, SmsRecipient, SmsResult, SmsSender, TwilioSmsSender};

/// Sent/failed tally for one batch. This summary is logged and counted
/// only; it is never surfaced as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmsBatchOutcome {
    /// Messages the provider accepted.
    pub sent: usize,
    /// Messages that failed to send.
    pub failed: usize,
}

/// Dispatches SMS batches through the configured provider and records
/// every attempt in `sms_logs`.
#[derive(Clone)]
pub struct SmsService {
    sender: Arc<dyn SmsSender>,
    sms_logs: Arc<SmsLogRepository>,
    country_prefix: String,
}

impl SmsService {
    /// Build the service from configuration, falling back to the
    /// simulation sender when SMS is disabled or unconfigured.
    pub fn from_config(config: &SmsConfig, sms_logs: Arc<SmsLogRepository>) -> Self {
        let sender: Arc<dyn SmsSender> = if !config.enabled {
            info!("SMS service is disabled");
            Arc::new(DisabledSmsSender)
        } else {
            match TwilioSmsSender::new(config) {
                Ok(twilio) => {
                    info!("Using Twilio SMS provider");
                    Arc::new(twilio)
                }
                Err(e) => {
                    warn!(error = %e, "No usable SMS provider, falling back to simulation");
                    Arc::new(DisabledSmsSender)
                }
            }
        };
        Self::new(sender, sms_logs, config.default_country_prefix.clone())
    }

    /// Build the service around an explicit sender.
    pub fn new(
        sender: Arc<dyn SmsSender>,
        sms_logs: Arc<SmsLogRepository>,
        country_prefix: String,
    ) -> Self {
        Self {
            sender,
            sms_logs,
            country_prefix,
        }
    }

    /// Send one message to every recipient, concurrently, logging each
    /// attempt. Delivery failures are reflected only in the returned
    /// tally and the logs.
    pub async fn send_batch(
        &self,
        recipients: &[SmsRecipient],
        message: &str,
        blood_request_id: Option<Uuid>,
    ) -> SmsBatchOutcome {
        if recipients.is_empty() {
            return SmsBatchOutcome::default();
        }

        let sends = recipients.iter().map(|recipient| {
            let phone = normalize_phone(&recipient.phone_number, &self.country_prefix);
            async move {
                let result = self.sender.send(&phone, message).await;
                (recipient, phone, result)
            }
        });
        let results = join_all(sends).await;

        let mut outcome = SmsBatchOutcome::default();
        for (recipient, phone, result) in results {
            if result.success {
                outcome.sent += 1;
            } else {
                outcome.failed += 1;
            }
            if let Err(e) = self
                .log_attempt(recipient.user_id, &phone, message, blood_request_id, &result)
                .await
            {
                warn!(error = %e, %phone, "Failed to log SMS attempt");
            }
        }

        info!(
            sent = outcome.sent,
            failed = outcome.failed,
            "SMS batch dispatched"
        );
        outcome
    }

    async fn log_attempt(
        &self,
        user_id: Option<Uuid>,
        phone: &str,
        message: &str,
        blood_request_id: Option<Uuid>,
        result: &SmsResult,
    ) -> AppResult<()> {
        let status = if result.success {
            SmsStatus::Sent
        } else {
            SmsStatus::Failed
        };
        self.sms_logs
            .insert(&NewSmsLog {
                user_id,
                phone_number: phone.to_string(),
                message: message.to_string(),
                blood_request_id,
                status,
                provider: self.sender.provider_name().to_string(),
                provider_message_id: result.message_id.clone(),
                error_message: result.error.clone(),
            })
            .await
    }
}
