//! The eight ABO/Rh blood types and their donor compatibility sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use lifelink_core::AppError;

/// One of the eight ABO/Rh blood type combinations.
///
/// Serialized (JSON and database) using the clinical notation, e.g. `"O-"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "blood_type")]
pub enum BloodType {
    /// O negative — universal donor.
    #[serde(rename = "O-")]
    #[sqlx(rename = "O-")]
    ONeg,
    /// O positive.
    #[serde(rename = "O+")]
    #[sqlx(rename = "O+")]
    OPos,
    /// A negative.
    #[serde(rename = "A-")]
    #[sqlx(rename = "A-")]
    ANeg,
    /// A positive.
    #[serde(rename = "A+")]
    #[sqlx(rename = "A+")]
    APos,
    /// B negative.
    #[serde(rename = "B-")]
    #[sqlx(rename = "B-")]
    BNeg,
    /// B positive.
    #[serde(rename = "B+")]
    #[sqlx(rename = "B+")]
    BPos,
    /// AB negative.
    #[serde(rename = "AB-")]
    #[sqlx(rename = "AB-")]
    AbNeg,
    /// AB positive — universal recipient.
    #[serde(rename = "AB+")]
    #[sqlx(rename = "AB+")]
    AbPos,
}

impl BloodType {
    /// All eight blood types.
    pub const ALL: [BloodType; 8] = [
        Self::ONeg,
        Self::OPos,
        Self::ANeg,
        Self::APos,
        Self::BNeg,
        Self::BPos,
        Self::AbNeg,
        Self::AbPos,
    ];

    /// The set of donor blood types that may safely be transfused into a
    /// recipient of this type, per the standard one-way ABO/Rh table.
    ///
    /// Total over the enumeration: every requested type has a non-empty set
    /// containing at least itself. `O-` maps to exactly `[O-]`; `AB+` maps
    /// to all eight types.
    pub fn compatible_donor_types(self) -> &'static [BloodType] {
        match self {
            Self::ONeg => &[Self::ONeg],
            Self::OPos => &[Self::ONeg, Self::OPos],
            Self::ANeg => &[Self::ONeg, Self::ANeg],
            Self::APos => &[Self::ONeg, Self::OPos, Self::ANeg, Self::APos],
            Self::BNeg => &[Self::ONeg, Self::BNeg],
            Self::BPos => &[Self::ONeg, Self::OPos, Self::BNeg, Self::BPos],
            Self::AbNeg => &[Self::ONeg, Self::ANeg, Self::BNeg, Self::AbNeg],
            Self::AbPos => &[
                Self::ONeg,
                Self::OPos,
                Self::ANeg,
                Self::APos,
                Self::BNeg,
                Self::BPos,
                Self::AbNeg,
                Self::AbPos,
            ],
        }
    }

    /// Whether a donor of type `donor` may give to a recipient of this type.
    pub fn accepts_donor(self, donor: BloodType) -> bool {
        self.compatible_donor_types().contains(&donor)
    }

    /// Return the blood type in clinical notation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ONeg => "O-",
            Self::OPos => "O+",
            Self::ANeg => "A-",
            Self::APos => "A+",
            Self::BNeg => "B-",
            Self::BPos => "B+",
            Self::AbNeg => "AB-",
            Self::AbPos => "AB+",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "O-" => Ok(Self::ONeg),
            "O+" => Ok(Self::OPos),
            "A-" => Ok(Self::ANeg),
            "A+" => Ok(Self::APos),
            "B-" => Ok(Self::BNeg),
            "B+" => Ok(Self::BPos),
            "AB-" => Ok(Self::AbNeg),
            "AB+" => Ok(Self::AbPos),
            _ => Err(AppError::validation(format!(
                "Invalid blood type: '{s}'. Expected one of: O-, O+, A-, A+, B-, B+, AB-, AB+"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_is_total_and_reflexive() {
        for requested in BloodType::ALL {
            let donors = requested.compatible_donor_types();
            assert!(!donors.is_empty());
            assert!(donors.contains(&requested));
        }
    }

    #[test]
    fn test_universal_donor_and_recipient() {
        assert_eq!(BloodType::ONeg.compatible_donor_types(), &[BloodType::ONeg]);
        assert_eq!(BloodType::AbPos.compatible_donor_types().len(), 8);
    }

    #[test]
    fn test_one_way_compatibility() {
        // O- gives to everyone but receives only O-.
        for requested in BloodType::ALL {
            assert!(requested.accepts_donor(BloodType::ONeg));
        }
        assert!(!BloodType::ONeg.accepts_donor(BloodType::OPos));
        assert!(!BloodType::ANeg.accepts_donor(BloodType::APos));
        assert!(BloodType::BPos.accepts_donor(BloodType::BNeg));
    }

    #[test]
    fn test_from_str_round_trip() {
        for bt in BloodType::ALL {
            assert_eq!(bt.as_str().parse::<BloodType>().unwrap(), bt);
        }
        assert!("AB".parse::<BloodType>().is_err());
        assert_eq!("ab+".parse::<BloodType>().unwrap(), BloodType::AbPos);
    }

    #[test]
    fn test_serde_uses_clinical_notation() {
        let json = serde_json::to_string(&BloodType::AbNeg).unwrap();
        assert_eq!(json, "\"AB-\"");
        let parsed: BloodType = serde_json::from_str("\"O+\"").unwrap();
        assert_eq!(parsed, BloodType::OPos);
    }
}
