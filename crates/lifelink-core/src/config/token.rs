//! Signed opt-in link configuration.

use serde::{Deserialize, Serialize};

/// Settings for the signed donor opt-in links sent by email after a first
/// completed donation at a hospital.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptInTokenConfig {
    /// HMAC signing secret for opt-in tokens.
    pub secret: String,
    /// Token validity in days.
    #[serde(default = "default_expiry_days")]
    pub expiry_days: i64,
}

fn default_expiry_days() -> i64 {
    7
}
