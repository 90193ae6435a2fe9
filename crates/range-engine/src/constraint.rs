//! Same-day time-of-day constraint checks for individual time pickers.
//!
//! A time picker showing one half of a range calls [`check_time_bounds`]
//! against the other half before committing a candidate to the state
//! machine. The check is advisory: the picker decides whether to block the
//! keystroke/selection or merely display a message. Crucially, the
//! time-of-day comparison applies only when candidate and reference share a
//! calendar day — cross-day validity is the state machine's job, never this
//! check's.

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::instant::{minutes_since_midnight, same_day};

/// Why a candidate time-of-day is out of bounds relative to its paired
/// reference. Advisory, never fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintViolation {
    /// The candidate end time falls before the start time on the same day.
    #[error("end time is before the start time")]
    EndBeforeStart,

    /// The candidate start time falls after the end time on the same day.
    #[error("start time is after the end time")]
    StartAfterEnd,
}

/// Classify a candidate time against optional min/max references.
///
/// Rules, in order:
///
/// 1. If `min_ref` is present and shares a calendar day with `candidate`,
///    a candidate time-of-day earlier than the reference's is
///    [`ConstraintViolation::EndBeforeStart`].
/// 2. Else if `max_ref` is present and shares a calendar day with
///    `candidate`, a candidate time-of-day later than the reference's is
///    [`ConstraintViolation::StartAfterEnd`].
/// 3. Otherwise the candidate passes. A candidate on a different calendar
///    day than the reference is always accepted here.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use range_engine::constraint::{check_time_bounds, ConstraintViolation};
///
/// let day = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
/// let start = day.and_hms_opt(14, 0, 0).unwrap();
///
/// // 13:00 before a 14:00 minimum on the same day: violation.
/// let candidate = day.and_hms_opt(13, 0, 0).unwrap();
/// assert_eq!(
///     check_time_bounds(candidate, Some(start), None),
///     Some(ConstraintViolation::EndBeforeStart),
/// );
///
/// // Same wall-clock time a day later: accepted, days differ.
/// let next_day = day.succ_opt().unwrap().and_hms_opt(13, 0, 0).unwrap();
/// assert_eq!(check_time_bounds(next_day, Some(start), None), None);
/// ```
pub fn check_time_bounds(
    candidate: NaiveDateTime,
    min_ref: Option<NaiveDateTime>,
    max_ref: Option<NaiveDateTime>,
) -> Option<ConstraintViolation> {
    if let Some(min) = min_ref {
        if same_day(candidate, min) && minutes_since_midnight(candidate) < minutes_since_midnight(min)
        {
            return Some(ConstraintViolation::EndBeforeStart);
        }
    }

    if let Some(max) = max_ref {
        if same_day(candidate, max) && minutes_since_midnight(candidate) > minutes_since_midnight(max)
        {
            return Some(ConstraintViolation::StartAfterEnd);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_candidate_before_min_same_day_violates() {
        let result = check_time_bounds(instant(16, 13, 0), Some(instant(16, 14, 0)), None);
        assert_eq!(result, Some(ConstraintViolation::EndBeforeStart));
    }

    #[test]
    fn test_candidate_before_min_different_day_passes() {
        // Cross-day candidates are never compared.
        let result = check_time_bounds(instant(17, 13, 0), Some(instant(16, 14, 0)), None);
        assert_eq!(result, None);
    }

    #[test]
    fn test_candidate_after_max_same_day_violates() {
        let result = check_time_bounds(instant(16, 15, 30), None, Some(instant(16, 14, 0)));
        assert_eq!(result, Some(ConstraintViolation::StartAfterEnd));
    }

    #[test]
    fn test_candidate_after_max_different_day_passes() {
        let result = check_time_bounds(instant(15, 23, 0), None, Some(instant(16, 14, 0)));
        assert_eq!(result, None);
    }

    #[test]
    fn test_equal_times_pass_both_bounds() {
        let result = check_time_bounds(
            instant(16, 14, 0),
            Some(instant(16, 14, 0)),
            Some(instant(16, 14, 0)),
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_min_violation_reported_before_max() {
        // min is checked first; an impossible min/max pair still reports
        // the end-before-start classification.
        let result = check_time_bounds(
            instant(16, 13, 0),
            Some(instant(16, 14, 0)),
            Some(instant(16, 12, 0)),
        );
        assert_eq!(result, Some(ConstraintViolation::EndBeforeStart));
    }

    #[test]
    fn test_no_references_always_passes() {
        assert_eq!(check_time_bounds(instant(16, 0, 0), None, None), None);
    }

    #[test]
    fn test_violation_display_strings() {
        assert_eq!(
            ConstraintViolation::EndBeforeStart.to_string(),
            "end time is before the start time"
        );
        assert_eq!(
            ConstraintViolation::StartAfterEnd.to_string(),
            "start time is after the end time"
        );
    }
}
