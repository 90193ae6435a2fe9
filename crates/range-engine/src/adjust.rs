//! Duration-based end recomputation.
//!
//! When a session is configured with a default duration and the end of the
//! range has never been manually edited, every start-side edit recomputes the
//! end as `start + duration`. This is the only path that introduces a
//! midnight crossing deliberately.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// The end of a range recomputed from a start instant and a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdjustedEnd {
    /// Calendar day of the recomputed end.
    pub end_date: NaiveDate,
    /// Time-of-day of the recomputed end.
    pub end_time: NaiveTime,
}

/// Compute the end of a range as `start + duration_minutes`.
///
/// The resulting instant's calendar day and time-of-day become the new end
/// date and end time. Carries across midnight: a 90-minute duration from
/// 23:00 lands on the next day at 00:30.
///
/// Pure and total; no error conditions. The duration is unsigned, so the
/// recomputed end can never fall before the start.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use range_engine::adjust::auto_adjusted_end;
///
/// let start = NaiveDate::from_ymd_opt(2024, 10, 16)
///     .unwrap()
///     .and_hms_opt(23, 0, 0)
///     .unwrap();
/// let end = auto_adjusted_end(start, 90);
/// assert_eq!(end.end_date, NaiveDate::from_ymd_opt(2024, 10, 17).unwrap());
/// assert_eq!(end.end_time, NaiveTime::from_hms_opt(0, 30, 0).unwrap());
/// ```
pub fn auto_adjusted_end(start: NaiveDateTime, duration_minutes: u32) -> AdjustedEnd {
    let end = start + Duration::minutes(i64::from(duration_minutes));
    AdjustedEnd {
        end_date: end.date(),
        end_time: end.time(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_adjust_within_same_day() {
        let end = auto_adjusted_end(instant(2024, 10, 16, 9, 0), 60);
        assert_eq!(end.end_date, NaiveDate::from_ymd_opt(2024, 10, 16).unwrap());
        assert_eq!(end.end_time, instant(2024, 10, 16, 10, 0).time());
    }

    #[test]
    fn test_adjust_carries_across_midnight() {
        let end = auto_adjusted_end(instant(2024, 10, 16, 23, 0), 90);
        assert_eq!(end.end_date, NaiveDate::from_ymd_opt(2024, 10, 17).unwrap());
        assert_eq!(end.end_time, instant(2024, 10, 17, 0, 30).time());
    }

    #[test]
    fn test_adjust_carries_across_month_boundary() {
        let end = auto_adjusted_end(instant(2024, 10, 31, 23, 30), 45);
        assert_eq!(end.end_date, NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
        assert_eq!(end.end_time, instant(2024, 11, 1, 0, 15).time());
    }

    #[test]
    fn test_adjust_zero_duration_is_identity() {
        let start = instant(2024, 10, 16, 14, 0);
        let end = auto_adjusted_end(start, 0);
        assert_eq!(end.end_date, start.date());
        assert_eq!(end.end_time, start.time());
    }

    #[test]
    fn test_adjust_multi_day_duration() {
        // 48h30m from Friday noon lands Sunday 12:30.
        let end = auto_adjusted_end(instant(2024, 10, 18, 12, 0), 48 * 60 + 30);
        assert_eq!(end.end_date, NaiveDate::from_ymd_opt(2024, 10, 20).unwrap());
        assert_eq!(end.end_time, instant(2024, 10, 20, 12, 30).time());
    }
}
