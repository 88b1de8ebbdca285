//! Donor eligibility partitioning for one blood request.

use lifelink_entity::blood::BloodType;
use lifelink_entity::donor::DonorCandidate;

/// The two target lists produced for one request.
#[derive(Debug, Clone, Default)]
pub struct TargetPartition {
    /// Donors who receive an in-app notification.
    pub in_app: Vec<DonorCandidate>,
    /// The subset of `in_app` that also receives SMS when the request
    /// is critical.
    pub sms: Vec<DonorCandidate>,
}

/// Partition a donor pool against the compatible-type set for one
/// request.
///
/// Inactive donors are dropped first, unconditionally. The in-app list
/// is every remaining donor whose blood group is in the compatible set,
/// plus donors with an unset blood group (unknown is treated as
/// possibly compatible). The SMS list is restricted to donors with a
/// known-compatible blood group and a non-blank phone number.
pub fn partition_targets(
    pool: Vec<DonorCandidate>,
    compatible: &[BloodType],
) -> TargetPartition {
    let mut partition = TargetPartition::default();

    for candidate in pool {
        if !candidate.is_active {
            continue;
        }
        let known_compatible = candidate
            .blood_group
            .map(|group| compatible.contains(&group))
            .unwrap_or(false);
        let possibly_compatible = known_compatible || candidate.blood_group.is_none();
        if !possibly_compatible {
            continue;
        }
        if known_compatible && candidate.has_phone() {
            partition.sms.push(candidate.clone());
        }
        partition.in_app.push(candidate);
    }

    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn candidate(
        blood_group: Option<BloodType>,
        phone: Option<&str>,
        is_active: bool,
    ) -> DonorCandidate {
        DonorCandidate {
            user_id: Uuid::new_v4(),
            blood_group,
            phone_number: phone.map(String::from),
            is_active,
        }
    }

    #[test]
    fn test_inactive_donors_excluded_unconditionally() {
        let pool = vec![
            candidate(Some(BloodType::ONeg), Some("0788000001"), false),
            candidate(None, Some("0788000002"), false),
        ];
        let partition = partition_targets(pool, BloodType::ONeg.compatible_donor_types());
        assert!(partition.in_app.is_empty());
        assert!(partition.sms.is_empty());
    }

    #[test]
    fn test_unknown_blood_group_targeted_in_app_but_never_sms() {
        let pool = vec![candidate(None, Some("0788000001"), true)];
        let partition = partition_targets(pool, BloodType::ONeg.compatible_donor_types());
        assert_eq!(partition.in_app.len(), 1);
        assert!(partition.sms.is_empty());
    }

    #[test]
    fn test_sms_requires_phone_number() {
        let pool = vec![
            candidate(Some(BloodType::ONeg), None, true),
            candidate(Some(BloodType::ONeg), Some("   "), true),
            candidate(Some(BloodType::ONeg), Some("0788000003"), true),
        ];
        let partition = partition_targets(pool, BloodType::ONeg.compatible_donor_types());
        assert_eq!(partition.in_app.len(), 3);
        assert_eq!(partition.sms.len(), 1);
        assert_eq!(partition.sms[0].phone_number.as_deref(), Some("0788000003"));
    }

    #[test]
    fn test_critical_o_neg_scenario() {
        // Donor A: O-, active, phone. Donor B: A+, active, phone.
        // Donor C: O-, inactive. Only A is targeted at all.
        let a = candidate(Some(BloodType::ONeg), Some("0788000001"), true);
        let a_id = a.user_id;
        let pool = vec![
            a,
            candidate(Some(BloodType::APos), Some("0788000002"), true),
            candidate(Some(BloodType::ONeg), Some("0788000003"), false),
        ];
        let partition = partition_targets(pool, BloodType::ONeg.compatible_donor_types());
        assert_eq!(partition.in_app.len(), 1);
        assert_eq!(partition.in_app[0].user_id, a_id);
        assert_eq!(partition.sms.len(), 1);
        assert_eq!(partition.sms[0].user_id, a_id);
    }
}
