//! Outbound SMS and email provider configuration.

use serde::{Deserialize, Serialize};

/// SMS provider configuration.
///
/// When `enabled` is false, or the credentials are empty, the SMS sender
/// runs in simulation mode: every send is logged but nothing leaves the
/// process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    /// Whether outbound SMS is enabled at all.
    #[serde(default)]
    pub enabled: bool,
    /// Twilio account SID.
    #[serde(default)]
    pub account_sid: String,
    /// Twilio auth token.
    #[serde(default)]
    pub auth_token: String,
    /// Sender phone number in E.164 format.
    #[serde(default)]
    pub from_number: String,
    /// Default country dial prefix applied to local numbers (e.g. `"+250"`).
    #[serde(default = "default_country_prefix")]
    pub default_country_prefix: String,
    /// Per-message send timeout in seconds.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_seconds: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            default_country_prefix: default_country_prefix(),
            send_timeout_seconds: default_send_timeout(),
        }
    }
}

/// Email provider configuration (SendGrid REST API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether outbound email is enabled at all.
    #[serde(default)]
    pub enabled: bool,
    /// SendGrid API key.
    #[serde(default)]
    pub api_key: String,
    /// Sender address.
    #[serde(default)]
    pub from_address: String,
    /// Per-message send timeout in seconds.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: String::new(),
            from_address: String::new(),
            send_timeout_seconds: default_send_timeout(),
        }
    }
}

fn default_country_prefix() -> String {
    "+250".to_string()
}

fn default_send_timeout() -> u64 {
    15
}
