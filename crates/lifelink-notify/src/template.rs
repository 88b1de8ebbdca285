//! SMS message templates for blood request outreach.

use lifelink_entity::request::BloodRequest;

/// The long-form SMS sent for critical requests. Includes the patient
/// condition and a named contact person.
pub fn critical_blood_request_sms(request: &BloodRequest) -> String {
    let condition = request.patient_condition.as_deref().unwrap_or_default();
    format!(
        "URGENT BLOOD NEEDED\n\n\
         Hospital: {}\n\
         Blood Type: {}\n\
         Units: {}\n\
         Urgency: CRITICAL\n\n\
         Contact: {}\n\
         Phone: {}\n\n\
         {}\n\n\
         Please respond if you can donate.\n\
         Lives depend on you!",
        request.hospital_name,
        request.blood_type,
        request.units_needed,
        request.contact_person,
        request.contact_phone,
        condition,
    )
}

/// The short generic SMS for non-critical requests. Only critical
/// requests reach SMS dispatch today, but the template stays so the
/// urgency gate and the wording remain independent decisions.
pub fn normal_blood_request_sms(request: &BloodRequest) -> String {
    format!(
        "Blood Donation Request\n\n\
         Hospital: {}\n\
         Blood Type: {}\n\
         Units Needed: {}\n\n\
         Contact: {}\n\n\
         Your donation can save lives!",
        request.hospital_name, request.blood_type, request.units_needed, request.contact_phone,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lifelink_entity::blood::BloodType;
    use lifelink_entity::request::{RequestStatus, Urgency};
    use uuid::Uuid;

    fn sample_request(urgency: Urgency) -> BloodRequest {
        BloodRequest {
            id: Uuid::new_v4(),
            hospital_id: Uuid::new_v4(),
            hospital_name: "Kigali Central".into(),
            blood_type: BloodType::ONeg,
            units_needed: 3,
            urgency,
            patient_condition: Some("Post-surgical hemorrhage".into()),
            contact_person: "Dr. Uwase".into(),
            contact_phone: "+250788123456".into(),
            location: None,
            additional_notes: None,
            expiry_date: Utc::now(),
            status: RequestStatus::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_critical_template_includes_condition_and_contact_person() {
        let msg = critical_blood_request_sms(&sample_request(Urgency::Critical));
        assert!(msg.contains("URGENT BLOOD NEEDED"));
        assert!(msg.contains("Post-surgical hemorrhage"));
        assert!(msg.contains("Dr. Uwase"));
        assert!(msg.contains("O-"));
    }

    #[test]
    fn test_normal_template_is_short_form() {
        let msg = normal_blood_request_sms(&sample_request(Urgency::Normal));
        assert!(!msg.contains("URGENT BLOOD NEEDED"));
        assert!(!msg.contains("Dr. Uwase"));
        assert!(msg.contains("Kigali Central"));
        assert!(msg.contains("+250788123456"));
    }
}
