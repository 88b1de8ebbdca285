//! The fixed badge tier table and its evaluation.

use chrono::{DateTime, Utc};

use lifelink_entity::badge::{BadgeProgress, EarnedBadge};
use lifelink_entity::blood::BloodType;

/// The aggregates one tier evaluation reads.
#[derive(Debug, Clone, Default)]
pub struct DonorMetrics {
    /// Completed donations.
    pub donation_count: i64,
    /// Units across completed donations.
    pub total_units: i64,
    /// Consecutive-month streak.
    pub streak_months: i64,
    /// Registered blood group, gating the rarity tiers.
    pub blood_group: Option<BloodType>,
}

struct Tier {
    key: &'static str,
    title: &'static str,
    description: &'static str,
    target: i64,
}

const DONATION_TIERS: &[Tier] = &[
    Tier { key: "donation_1", title: "Beginner Donor", description: "Complete 1 donation", target: 1 },
    Tier { key: "donation_5", title: "Lifesaver", description: "Complete 5 donations", target: 5 },
    Tier { key: "donation_10", title: "Hero", description: "Complete 10 donations", target: 10 },
    Tier { key: "donation_20", title: "Champion", description: "Complete 20 donations", target: 20 },
];

const IMPACT_TIERS: &[Tier] = &[
    Tier { key: "impact_5", title: "Bronze Impact", description: "Donate 5 total units", target: 5 },
    Tier { key: "impact_15", title: "Silver Impact", description: "Donate 15 total units", target: 15 },
    Tier { key: "impact_30", title: "Gold Impact", description: "Donate 30 total units", target: 30 },
];

const STREAK_TIERS: &[Tier] = &[
    Tier { key: "streak_3", title: "3-Month Streak", description: "Donate in 3 consecutive months", target: 3 },
    Tier { key: "streak_6", title: "6-Month Streak", description: "Donate in 6 consecutive months", target: 6 },
];

const RARE_O_NEG: Tier = Tier {
    key: "rare_on_5",
    title: "O- Champion",
    description: "O- donor with 5+ donations",
    target: 5,
};

const RARE_AB_POS: Tier = Tier {
    key: "rare_abp_5",
    title: "AB+ Ally",
    description: "AB+ donor with 5+ donations",
    target: 5,
};

/// Evaluate the full tier table against one donor's aggregates.
///
/// Every tier is checked independently with an inclusive `>=`
/// threshold: a donor crossing a higher tier has also earned every
/// lower tier. Earned badges are stamped with `now`; unmet tiers come
/// back in-progress with `percent = min(100, round(current/target*100))`.
pub fn evaluate_tiers(
    metrics: &DonorMetrics,
    now: DateTime<Utc>,
) -> (Vec<EarnedBadge>, Vec<BadgeProgress>) {
    let mut earned = Vec::new();
    let mut in_progress = Vec::new();

    let mut push = |tier: &Tier, current: i64| {
        if current >= tier.target {
            earned.push(EarnedBadge {
                key: tier.key.to_string(),
                title: tier.title.to_string(),
                description: tier.description.to_string(),
                earned_at: now,
            });
        } else {
            let percent =
                ((current as f64 / tier.target as f64) * 100.0).round().min(100.0) as u8;
            in_progress.push(BadgeProgress {
                key: tier.key.to_string(),
                title: tier.title.to_string(),
                description: tier.description.to_string(),
                current,
                target: tier.target,
                percent,
            });
        }
    };

    for tier in DONATION_TIERS {
        push(tier, metrics.donation_count);
    }
    for tier in IMPACT_TIERS {
        push(tier, metrics.total_units);
    }
    for tier in STREAK_TIERS {
        push(tier, metrics.streak_months);
    }
    match metrics.blood_group {
        Some(BloodType::ONeg) => push(&RARE_O_NEG, metrics.donation_count),
        Some(BloodType::AbPos) => push(&RARE_AB_POS, metrics.donation_count),
        _ => {}
    }

    (earned, in_progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(earned: &[EarnedBadge]) -> Vec<&str> {
        earned.iter().map(|b| b.key.as_str()).collect()
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // Exactly 5 donations earns donation_5 and leaves donation_10
        // in progress at 50%.
        let metrics = DonorMetrics {
            donation_count: 5,
            ..Default::default()
        };
        let (earned, in_progress) = evaluate_tiers(&metrics, Utc::now());
        assert!(keys(&earned).contains(&"donation_5"));
        let next = in_progress.iter().find(|p| p.key == "donation_10").unwrap();
        assert_eq!(next.current, 5);
        assert_eq!(next.percent, 50);
    }

    #[test]
    fn test_lower_tiers_earned_alongside_higher() {
        let metrics = DonorMetrics {
            donation_count: 20,
            ..Default::default()
        };
        let (earned, _) = evaluate_tiers(&metrics, Utc::now());
        for key in ["donation_1", "donation_5", "donation_10", "donation_20"] {
            assert!(keys(&earned).contains(&key), "missing {key}");
        }
    }

    #[test]
    fn test_donor_with_four_donations_and_eight_units() {
        // 4 completed donations, 8 units, A+, no streak.
        let metrics = DonorMetrics {
            donation_count: 4,
            total_units: 8,
            streak_months: 0,
            blood_group: Some(BloodType::APos),
        };
        let (earned, in_progress) = evaluate_tiers(&metrics, Utc::now());

        let earned_keys = keys(&earned);
        assert!(earned_keys.contains(&"donation_1"));
        assert!(earned_keys.contains(&"impact_5"));
        assert!(!earned_keys.iter().any(|k| k.starts_with("rare_")));

        let donation_5 = in_progress.iter().find(|p| p.key == "donation_5").unwrap();
        assert_eq!((donation_5.current, donation_5.percent), (4, 80));

        let impact_15 = in_progress.iter().find(|p| p.key == "impact_15").unwrap();
        assert_eq!((impact_15.current, impact_15.percent), (8, 53));
    }

    #[test]
    fn test_rarity_tier_gated_by_blood_group() {
        let o_neg = DonorMetrics {
            donation_count: 5,
            blood_group: Some(BloodType::ONeg),
            ..Default::default()
        };
        let (earned, _) = evaluate_tiers(&o_neg, Utc::now());
        assert!(keys(&earned).contains(&"rare_on_5"));

        let ab_pos = DonorMetrics {
            donation_count: 3,
            blood_group: Some(BloodType::AbPos),
            ..Default::default()
        };
        let (earned, in_progress) = evaluate_tiers(&ab_pos, Utc::now());
        assert!(!keys(&earned).contains(&"rare_abp_5"));
        assert!(in_progress.iter().any(|p| p.key == "rare_abp_5"));
    }

    #[test]
    fn test_percent_capped_at_100() {
        let metrics = DonorMetrics {
            donation_count: 0,
            total_units: 0,
            streak_months: 0,
            blood_group: None,
        };
        let (_, in_progress) = evaluate_tiers(&metrics, Utc::now());
        assert!(in_progress.iter().all(|p| p.percent <= 100));
        assert!(in_progress.iter().all(|p| p.percent == 0));
    }
}
