//! Signed opt-in consent tokens.
//!
//! The consent email contains a link carrying one of these tokens; the
//! opt-in endpoint verifies it before recording the membership.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lifelink_core::config::OptInTokenConfig;
use lifelink_core::error::AppError;

/// Purpose tag every opt-in token must carry.
const OPT_IN_PURPOSE: &str = "hospital-opt-in";

/// Claims inside one opt-in token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptInClaims {
    /// The consenting donor.
    pub donor_id: Uuid,
    /// The hospital being opted in to.
    pub hospital_id: Uuid,
    /// The donation that triggered the consent email.
    pub donation_id: Uuid,
    /// Must equal `hospital-opt-in`.
    pub purpose: String,
    /// Expiration timestamp (seconds).
    pub exp: i64,
}

/// Issues and verifies signed opt-in tokens.
#[derive(Clone)]
pub struct OptInTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_days: i64,
}

impl OptInTokens {
    /// Create a token signer/verifier from configuration.
    pub fn new(config: &OptInTokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            expiry_days: config.expiry_days,
        }
    }

    /// Issue a token for one (donor, hospital, donation) triple.
    pub fn issue(
        &self,
        donor_id: Uuid,
        hospital_id: Uuid,
        donation_id: Uuid,
    ) -> Result<String, AppError> {
        let claims = OptInClaims {
            donor_id,
            hospital_id,
            donation_id,
            purpose: OPT_IN_PURPOSE.to_string(),
            exp: (Utc::now() + chrono::Duration::days(self.expiry_days)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign opt-in token: {e}")))
    }

    /// Verify a token and check it targets the expected hospital.
    pub fn verify(&self, token: &str, hospital_id: Uuid) -> Result<OptInClaims, AppError> {
        let data = decode::<OptInClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::validation("Opt-in link has expired")
                }
                _ => AppError::validation("Invalid opt-in token"),
            })?;

        if data.claims.purpose != OPT_IN_PURPOSE {
            return Err(AppError::validation("Invalid opt-in token purpose"));
        }
        if data.claims.hospital_id != hospital_id {
            return Err(AppError::validation(
                "Opt-in token does not match this hospital",
            ));
        }
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> OptInTokens {
        OptInTokens::new(&OptInTokenConfig {
            secret: "test-secret".into(),
            expiry_days: 7,
        })
    }

    #[test]
    fn test_round_trip() {
        let tokens = tokens();
        let (donor, hospital, donation) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let token = tokens.issue(donor, hospital, donation).unwrap();
        let claims = tokens.verify(&token, hospital).unwrap();
        assert_eq!(claims.donor_id, donor);
        assert_eq!(claims.donation_id, donation);
        assert_eq!(claims.purpose, "hospital-opt-in");
    }

    #[test]
    fn test_wrong_hospital_rejected() {
        let tokens = tokens();
        let token = tokens
            .issue(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
            .unwrap();
        assert!(tokens.verify(&token, Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = tokens()
            .issue(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
            .unwrap();
        let other = OptInTokens::new(&OptInTokenConfig {
            secret: "another-secret".into(),
            expiry_days: 7,
        });
        assert!(other.verify(&token, Uuid::new_v4()).is_err());
    }
}
