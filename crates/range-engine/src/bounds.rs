//! Selectable-bound computation for external date/time pickers.
//!
//! The engine never reads the system clock; the caller supplies the
//! "today"/"now" anchor, keeping these functions deterministic and testable.
//! The bounds are advisory inputs for picker widgets — the transitions in
//! [`crate::range`] stay correct even if a caller ignores them.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::range::{RangeConfig, RangeState};

/// The earliest date a start-date picker should offer.
///
/// `None` when past starts are allowed (no lower bound), otherwise the
/// caller-supplied `today`.
pub fn min_selectable_start_date(config: &RangeConfig, today: NaiveDate) -> Option<NaiveDate> {
    if config.allow_past_start {
        None
    } else {
        Some(today)
    }
}

/// The earliest time a start-time picker should offer.
///
/// Only constrained when past starts are disallowed and the selected start
/// date is the caller-supplied "today" — on any other day every time of day
/// is selectable.
pub fn min_selectable_start_time(
    config: &RangeConfig,
    state: &RangeState,
    now: NaiveDateTime,
) -> Option<NaiveTime> {
    if config.allow_past_start || state.start_date() != now.date() {
        None
    } else {
        Some(now.time())
    }
}

/// The earliest date an end-date picker should offer: always the current
/// start date. The end date can never precede the start date.
pub fn min_selectable_end_date(state: &RangeState) -> NaiveDate {
    state.start_date()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    fn time(h: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, min, 0).unwrap()
    }

    fn state_starting(d: u32) -> RangeState {
        RangeState::new(date(d), time(13, 0), time(14, 0), false)
    }

    fn future_only() -> RangeConfig {
        RangeConfig {
            default_duration_minutes: None,
            allow_past_start: false,
        }
    }

    fn past_allowed() -> RangeConfig {
        RangeConfig {
            default_duration_minutes: None,
            allow_past_start: true,
        }
    }

    #[test]
    fn test_min_start_date_absent_when_past_allowed() {
        assert_eq!(min_selectable_start_date(&past_allowed(), date(16)), None);
    }

    #[test]
    fn test_min_start_date_is_today_when_past_disallowed() {
        assert_eq!(
            min_selectable_start_date(&future_only(), date(16)),
            Some(date(16))
        );
    }

    #[test]
    fn test_min_start_time_constrained_only_on_today() {
        let now = date(16).and_time(time(10, 30));

        let today = state_starting(16);
        assert_eq!(
            min_selectable_start_time(&future_only(), &today, now),
            Some(time(10, 30))
        );

        let tomorrow = state_starting(17);
        assert_eq!(min_selectable_start_time(&future_only(), &tomorrow, now), None);
    }

    #[test]
    fn test_min_start_time_absent_when_past_allowed() {
        let now = date(16).and_time(time(10, 30));
        let today = state_starting(16);
        assert_eq!(min_selectable_start_time(&past_allowed(), &today, now), None);
    }

    #[test]
    fn test_min_end_date_tracks_start_date() {
        let state = state_starting(16).set_start_date(&past_allowed(), date(20));
        assert_eq!(min_selectable_end_date(&state), date(20));
    }
}
