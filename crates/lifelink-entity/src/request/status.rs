//! Blood request lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a blood request.
///
/// Transitions are monotonic: `Active` may move to `Fulfilled` or
/// `Expired`; terminal states never move back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Open and visible to donors.
    Active,
    /// Enough units were secured.
    Fulfilled,
    /// The expiry date passed before fulfilment.
    Expired,
}

impl RequestStatus {
    /// Whether the given transition is allowed.
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (Self::Active, Self::Fulfilled) | (Self::Active, Self::Expired)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Fulfilled => "fulfilled",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_are_monotonic() {
        assert!(RequestStatus::Active.can_transition_to(RequestStatus::Fulfilled));
        assert!(RequestStatus::Active.can_transition_to(RequestStatus::Expired));
        assert!(!RequestStatus::Fulfilled.can_transition_to(RequestStatus::Active));
        assert!(!RequestStatus::Expired.can_transition_to(RequestStatus::Fulfilled));
    }
}
