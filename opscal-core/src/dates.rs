//! Calendar-day arithmetic for schedule math.
//!
//! Everything in this crate works in whole days: anchor dates, template
//! offsets, and user shifts. chrono carries the month/year rollover and
//! leap-year handling, so none of this is string math.

use chrono::{Datelike, Duration, NaiveDate};

/// Shift a date by a signed number of calendar days.
pub fn add_days(date: NaiveDate, delta: i64) -> NaiveDate {
    date + Duration::days(delta)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap() - Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_negative_offset_rolls_into_leap_february() {
        assert_eq!(add_days(d("2024-03-04"), -4), d("2024-02-29"));
    }

    #[test]
    fn test_add_days_crosses_year_boundary() {
        assert_eq!(add_days(d("2024-01-01"), -1), d("2023-12-31"));
        assert_eq!(add_days(d("2023-12-31"), 1), d("2024-01-01"));
    }

    #[test]
    fn test_non_leap_february_has_28_days() {
        assert_eq!(add_days(d("2023-03-04"), -4), d("2023-02-28"));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(start_of_month(d("2024-02-17")), d("2024-02-01"));
        assert_eq!(end_of_month(d("2024-02-17")), d("2024-02-29"));
        assert_eq!(end_of_month(d("2024-12-05")), d("2024-12-31"));
        assert_eq!(end_of_month(d("2024-04-30")), d("2024-04-30"));
    }
}
