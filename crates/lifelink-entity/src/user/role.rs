//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account roles in the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A blood donor.
    Donor,
    /// A hospital or blood bank account.
    Hospital,
    /// Platform administrator.
    Admin,
}

impl UserRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Hospital => "hospital",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = lifelink_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "donor" => Ok(Self::Donor),
            "hospital" => Ok(Self::Hospital),
            "admin" => Ok(Self::Admin),
            _ => Err(lifelink_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: donor, hospital, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("donor".parse::<UserRole>().unwrap(), UserRole::Donor);
        assert_eq!("HOSPITAL".parse::<UserRole>().unwrap(), UserRole::Hospital);
        assert!("nurse".parse::<UserRole>().is_err());
    }
}
