//! Fixed badge-key to point-value table for leaderboard scoring.

/// Point value of one badge key. Unknown keys score zero.
pub fn points_for_key(key: &str) -> i64 {
    match key {
        "donation_1" => 10,
        "donation_5" => 25,
        "donation_10" => 50,
        "donation_20" => 100,
        "impact_5" => 15,
        "impact_15" => 40,
        "impact_30" => 80,
        "streak_3" => 30,
        "streak_6" => 60,
        "rare_on_5" | "rare_abp_5" => 35,
        _ => 0,
    }
}

/// Weighted sum over a donor's badge keys.
pub fn points_for_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> i64 {
    keys.into_iter().map(points_for_key).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_score_zero() {
        assert_eq!(points_for_key("not_a_badge"), 0);
    }

    #[test]
    fn test_points_sum() {
        assert_eq!(
            points_for_keys(["donation_1", "donation_5", "impact_5"]),
            50
        );
        assert_eq!(points_for_keys(Vec::<&str>::new()), 0);
    }
}
