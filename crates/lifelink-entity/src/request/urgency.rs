//! Blood request urgency tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority classification of a blood request.
///
/// Ordered `Critical > Urgent > Normal`. Only `Critical` triggers SMS
/// outreach to compatible donors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "urgency", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Immediate need; gates SMS dispatch.
    Critical,
    /// Needed soon.
    Urgent,
    /// Routine replenishment.
    Normal,
}

impl Urgency {
    /// Whether this tier triggers SMS outreach.
    pub fn triggers_sms(&self) -> bool {
        matches!(self, Self::Critical)
    }

    /// Return the tier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Urgent => "urgent",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = lifelink_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "urgent" => Ok(Self::Urgent),
            "normal" => Ok(Self::Normal),
            _ => Err(lifelink_core::AppError::validation(format!(
                "Invalid urgency: '{s}'. Expected one of: critical, urgent, normal"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_critical_triggers_sms() {
        assert!(Urgency::Critical.triggers_sms());
        assert!(!Urgency::Urgent.triggers_sms());
        assert!(!Urgency::Normal.triggers_sms());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("critical".parse::<Urgency>().unwrap(), Urgency::Critical);
        assert_eq!("Normal".parse::<Urgency>().unwrap(), Urgency::Normal);
        assert!("severe".parse::<Urgency>().is_err());
    }
}
