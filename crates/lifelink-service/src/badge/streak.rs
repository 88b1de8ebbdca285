//! Consecutive-month donation streak.

use chrono::{Datelike, NaiveDate};

/// Count consecutive calendar months with at least one completed
/// donation, starting from the most recent donation month and walking
/// backward. Any gap greater than one calendar month breaks the
/// streak.
///
/// `months` must be distinct first-of-month dates sorted descending,
/// as produced by the donation repository.
pub fn consecutive_month_streak(months: &[NaiveDate]) -> i64 {
    let mut streak = 0i64;
    let mut previous: Option<NaiveDate> = None;

    for &month in months {
        match previous {
            None => streak = 1,
            Some(prev) => {
                if month_index(prev) - month_index(month) == 1 {
                    streak += 1;
                } else {
                    break;
                }
            }
        }
        previous = Some(month);
    }

    streak
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    #[test]
    fn test_empty_history_has_no_streak() {
        assert_eq!(consecutive_month_streak(&[]), 0);
    }

    #[test]
    fn test_single_month() {
        assert_eq!(consecutive_month_streak(&[month(2025, 6)]), 1);
    }

    #[test]
    fn test_consecutive_months_count() {
        let months = [month(2025, 6), month(2025, 5), month(2025, 4)];
        assert_eq!(consecutive_month_streak(&months), 3);
    }

    #[test]
    fn test_gap_breaks_streak() {
        // June, May, then February: the streak stops at two even though
        // older consecutive months follow the gap.
        let months = [month(2025, 6), month(2025, 5), month(2025, 2), month(2025, 1)];
        assert_eq!(consecutive_month_streak(&months), 2);
    }

    #[test]
    fn test_year_boundary() {
        let months = [month(2025, 1), month(2024, 12), month(2024, 11)];
        assert_eq!(consecutive_month_streak(&months), 3);
    }
}
