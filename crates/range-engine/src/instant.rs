//! Instant combination and calendar-day comparison.
//!
//! A range is stored as separate calendar-day and time-of-day fields;
//! [`combine`] merges one of each into a single comparable instant. The
//! predicates here are the only ordering primitives the rest of the engine
//! uses, so "before" means exactly one thing everywhere: strict instant
//! comparison at minute resolution.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

// ── combine ─────────────────────────────────────────────────────────────────

/// Merge a calendar day and a time-of-day into a single instant.
///
/// Takes the year/month/day from `date_part` and the hour/minute from
/// `time_part`. Seconds and sub-second components are always normalized to
/// zero, so every instant the engine compares has minute resolution.
///
/// Total over all valid inputs; no error conditions.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use range_engine::instant::combine;
///
/// let date = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
/// let time = NaiveTime::from_hms_opt(13, 30, 59).unwrap();
/// let instant = combine(date, time);
/// assert_eq!(instant.to_string(), "2024-10-16 13:30:00");
/// ```
pub fn combine(date_part: NaiveDate, time_part: NaiveTime) -> NaiveDateTime {
    let normalized = NaiveTime::from_hms_opt(time_part.hour(), time_part.minute(), 0)
        .expect("hour/minute from a valid NaiveTime");
    date_part.and_time(normalized)
}

// ── comparison predicates ───────────────────────────────────────────────────

/// Whether two instants fall on the same calendar day.
///
/// Compares year, month, and day-of-month only; time-of-day is ignored.
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Minutes elapsed since midnight for an instant's time-of-day, in `[0, 1439]`.
pub fn minutes_since_midnight(x: NaiveDateTime) -> u32 {
    x.time().hour() * 60 + x.time().minute()
}

/// Whether `end` falls strictly before `start`.
///
/// Equal instants return `false` — a zero-length range is valid and must not
/// trigger any snap.
pub fn is_end_before_start(start: NaiveDateTime, end: NaiveDateTime) -> bool {
    end < start
}

// ── day extent ──────────────────────────────────────────────────────────────

/// The first instant of any day: 00:00.
pub fn start_of_day() -> NaiveTime {
    NaiveTime::MIN
}

/// The last representable instant of any day: 23:59.
///
/// [`combine`] zeroes seconds, so 23:59 is the latest time-of-day an instant
/// can carry.
pub fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).expect("23:59 is a valid time")
}
