//! Hospital profile lookups and the opt-in consent flow.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use lifelink_core::result::AppResult;
use lifelink_database::repositories::HospitalRepository;
use lifelink_entity::donor::DonorProfile;
use lifelink_entity::hospital::{HospitalDonorMembership, HospitalProfile};

use super::opt_in::OptInTokens;

/// Hospital profile reads plus the donor opt-in membership flow.
#[derive(Clone)]
pub struct HospitalService {
    hospitals: Arc<HospitalRepository>,
    tokens: OptInTokens,
    public_base_url: String,
}

impl HospitalService {
    /// Create a new hospital service.
    pub fn new(
        hospitals: Arc<HospitalRepository>,
        tokens: OptInTokens,
        public_base_url: String,
    ) -> Self {
        Self {
            hospitals,
            tokens,
            public_base_url,
        }
    }

    /// Fetch a hospital's profile.
    pub async fn get_profile(&self, hospital_id: Uuid) -> AppResult<HospitalProfile> {
        self.hospitals.get_profile(hospital_id).await
    }

    /// Build the signed opt-in link embedded in the consent email.
    pub fn opt_in_link(
        &self,
        donor_id: Uuid,
        hospital_id: Uuid,
        donation_id: Uuid,
    ) -> AppResult<String> {
        let token = self.tokens.issue(donor_id, hospital_id, donation_id)?;
        Ok(format!(
            "{}/api/hospitals/{}/opt-in?token={}",
            self.public_base_url.trim_end_matches('/'),
            hospital_id,
            urlencode(&token),
        ))
    }

    /// Verify an opt-in token and record the donor's consent.
    pub async fn record_opt_in(
        &self,
        hospital_id: Uuid,
        token: &str,
    ) -> AppResult<HospitalDonorMembership> {
        let claims = self.tokens.verify(token, hospital_id)?;
        let membership = self
            .hospitals
            .record_consent(claims.donor_id, hospital_id)
            .await?;
        info!(
            donor_id = %claims.donor_id,
            %hospital_id,
            "Donor opt-in recorded"
        );
        Ok(membership)
    }

    /// List the donors who have opted in to this hospital.
    pub async fn recognized_donors(&self, hospital_id: Uuid) -> AppResult<Vec<DonorProfile>> {
        self.hospitals.list_recognized_donors(hospital_id).await
    }
}

/// Percent-encode a token for safe inclusion in a query string. JWTs
/// are base64url plus dots, so only a handful of characters ever need
/// escaping.
fn urlencode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencode_passes_jwt_alphabet() {
        assert_eq!(urlencode("abc.DEF-123_~"), "abc.DEF-123_~");
        assert_eq!(urlencode("a=b"), "a%3Db");
    }
}
