//! Calendar keys for daily and weekly grouping.
//!
//! Keys are plain UTC calendar dates so that grouping never shifts with a
//! local timezone. Weeks are ISO weeks: they start on Monday, and Sunday
//! belongs to the week that began the preceding Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Formats a date as its canonical `YYYY-MM-DD` day key.
#[must_use]
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns the Monday on or before `date` (the start of its ISO week).
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = i64::from(date.weekday().num_days_from_monday());
    date - Duration::days(days_from_monday)
}

/// Formats the `YYYY-MM-DD` key of the week containing `date`.
#[must_use]
pub fn week_key(date: NaiveDate) -> String {
    day_key(week_start(date))
}

/// Returns true if `date` is a Monday.
#[must_use]
pub fn is_week_start(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_key_is_fixed_format() {
        assert_eq!(day_key(date(2024, 1, 5)), "2024-01-05");
        assert_eq!(day_key(date(2024, 12, 31)), "2024-12-31");
    }

    #[test]
    fn monday_is_its_own_week_start() {
        // 2024-01-01 was a Monday
        assert_eq!(week_start(date(2024, 1, 1)), date(2024, 1, 1));
    }

    #[test]
    fn sunday_belongs_to_preceding_monday() {
        // 2024-01-07 was a Sunday; its week started 2024-01-01
        assert_eq!(week_start(date(2024, 1, 7)), date(2024, 1, 1));
        assert_eq!(week_key(date(2024, 1, 7)), "2024-01-01");
    }

    #[test]
    fn midweek_days_map_back_to_monday() {
        // Wednesday and Saturday of the same week
        assert_eq!(week_start(date(2024, 1, 3)), date(2024, 1, 1));
        assert_eq!(week_start(date(2024, 1, 6)), date(2024, 1, 1));
    }

    #[test]
    fn week_start_crosses_month_and_year_boundaries() {
        // 2024-01-01 is a Monday, so 2023-12-31 (Sunday) belongs to the
        // week of 2023-12-25
        assert_eq!(week_start(date(2023, 12, 31)), date(2023, 12, 25));
    }

    #[test]
    fn week_containment_holds_for_a_long_span() {
        let mut d = date(2023, 11, 1);
        let end = date(2024, 3, 1);
        while d <= end {
            let start = week_start(d);
            assert!(start <= d);
            assert!((d - start).num_days() <= 6);
            assert!(is_week_start(start));
            d = d.succ_opt().unwrap();
        }
    }
}
