//! Weekday arithmetic for sizing sprints in business days.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// Whether a date falls on Monday through Friday.
pub fn is_weekday(date: &DateTime<Utc>) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advance `weekday_count` business days past `start`.
///
/// Counting begins the day after `start`; Saturdays and Sundays are skipped.
/// The result is the last counted weekday, at the same time of day as `start`.
/// A count of zero returns the next calendar day, whatever weekday it is.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use rota::calendar::add_weekdays;
///
/// let friday = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
/// let monday = Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap();
/// assert_eq!(add_weekdays(friday, 1), monday);
/// ```
pub fn add_weekdays(start: DateTime<Utc>, weekday_count: u32) -> DateTime<Utc> {
    checked_add_weekdays(start, weekday_count).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// [`add_weekdays`] that returns `None` instead of running past the last
/// representable date.
pub fn checked_add_weekdays(start: DateTime<Utc>, weekday_count: u32) -> Option<DateTime<Utc>> {
    let mut date = start.checked_add_signed(Duration::days(1))?;
    if weekday_count == 0 {
        return Some(date);
    }

    // Every 7 consecutive days hold exactly 5 weekdays.
    let full_weeks = (weekday_count - 1) / 5;
    let mut remaining = weekday_count - full_weeks * 5;
    date = date.checked_add_signed(Duration::days(7 * i64::from(full_weeks)))?;

    loop {
        if is_weekday(&date) {
            remaining -= 1;
            if remaining == 0 {
                return Some(date);
            }
        }
        date = date.checked_add_signed(Duration::days(1))?;
    }
}

/// Number of weekdays from `start` to `end`, both ends included.
///
/// Returns 0 when `end` is before `start`.
pub fn count_weekdays(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let mut date = start;
    let mut count = 0;
    while date <= end {
        if is_weekday(&date) {
            count += 1;
        }
        match date.checked_add_signed(Duration::days(1)) {
            Some(next) => date = next,
            None => break,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_monday_plus_five_is_next_monday() {
        // 2024-01-01 is a Monday.
        assert_eq!(add_weekdays(day(2024, 1, 1), 5), day(2024, 1, 8));
    }

    #[test]
    fn test_friday_plus_one_skips_weekend() {
        assert_eq!(add_weekdays(day(2024, 1, 5), 1), day(2024, 1, 8));
    }

    #[test]
    fn test_zero_returns_next_calendar_day() {
        assert_eq!(add_weekdays(day(2024, 1, 1), 0), day(2024, 1, 2));
        // Even when that day is a Saturday.
        assert_eq!(add_weekdays(day(2024, 1, 5), 0), day(2024, 1, 6));
    }

    #[test]
    fn test_start_on_weekend() {
        // Saturday + 1 weekday lands on Monday.
        assert_eq!(add_weekdays(day(2024, 1, 6), 1), day(2024, 1, 8));
    }

    #[test]
    fn test_two_week_sprint() {
        assert_eq!(add_weekdays(day(2024, 1, 1), 10), day(2024, 1, 15));
    }

    #[test]
    fn test_time_of_day_preserved() {
        let start = Utc.with_ymd_and_hms(2024, 1, 3, 14, 30, 0).unwrap();
        let end = add_weekdays(start, 2);
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_long_runs_match_day_by_day_count() {
        let start = day(2024, 1, 3);
        for count in [1, 4, 5, 6, 9, 11, 23, 260] {
            let end = add_weekdays(start, count);
            assert!(is_weekday(&end));
            assert_eq!(count_weekdays(start + Duration::days(1), end), count, "count {}", count);
        }
    }

    #[test]
    fn test_checked_add_weekdays_overflow() {
        assert_eq!(checked_add_weekdays(day(2024, 1, 1), u32::MAX), None);
        assert_eq!(add_weekdays(day(2024, 1, 1), u32::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(checked_add_weekdays(day(2024, 1, 5), 1), Some(day(2024, 1, 8)));
    }

    #[test]
    fn test_count_weekdays_inclusive() {
        assert_eq!(count_weekdays(day(2024, 1, 1), day(2024, 1, 7)), 5);
        assert_eq!(count_weekdays(day(2024, 1, 1), day(2024, 1, 1)), 1);
        assert_eq!(count_weekdays(day(2024, 1, 6), day(2024, 1, 7)), 0);
        assert_eq!(count_weekdays(day(2024, 1, 8), day(2024, 1, 1)), 0);
    }
}
