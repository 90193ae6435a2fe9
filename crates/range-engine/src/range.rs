//! The range state machine: one editing session's start/end state and the
//! transitions that keep it consistent.
//!
//! A [`RangeState`] owns the four date/time fields plus the all-day flag, the
//! one-way manual-edit latch, and the pre-all-day time snapshot. Every
//! transition is a pure function `(state, config, input) -> state`; the
//! [`RangeEditor`] wrapper owns a state, applies transitions, and fires a
//! synchronous observer exactly once per operation — including for rejected
//! edits, so the observer count always matches the call count.
//!
//! # Snap/reject asymmetry
//!
//! Start-side edits that would invert the range auto-correct by snapping the
//! end to the start. End-date edits that would invert it are auto-corrected
//! only when the edit lands on the start's calendar day; a cross-day
//! inversion is silently rejected and the prior state retained. This
//! asymmetry keeps drag/typing interactions smooth and is deliberate — do
//! not unify the branches.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::adjust::auto_adjusted_end;
use crate::instant::{combine, end_of_day, is_end_before_start, same_day, start_of_day};

// ── configuration ───────────────────────────────────────────────────────────

/// Fixed per-session configuration, supplied once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeConfig {
    /// When present, start-side edits recompute the end as
    /// `start + duration` until the end is manually edited. When absent,
    /// auto-adjustment is disabled for the whole session regardless of the
    /// manual-edit latch. Unsigned: a recomputed end can never precede the
    /// start it was derived from.
    pub default_duration_minutes: Option<u32>,
    /// Whether external pickers may offer past dates/times. Enforced by the
    /// caller's picker bounds (see [`crate::bounds`]), not by the
    /// transitions themselves.
    pub allow_past_start: bool,
}

/// The times in effect immediately before switching into all-day mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SavedTimes {
    start_time: NaiveTime,
    end_time: NaiveTime,
}

// ── state ───────────────────────────────────────────────────────────────────

/// One editing session's range state.
///
/// Constructed once per open form and discarded when the form closes; never
/// persisted here. All transitions return a new value — the latch and the
/// saved-times snapshot are explicit fields rather than hidden closure
/// variables, so the invariants are auditable:
///
/// - the end instant is never strictly before the start instant,
/// - in all-day mode the times are pinned to the full extent of the day and
///   the prior times are saved,
/// - the saved times are consumed (cleared) by the next all-day-off toggle,
/// - auto-adjustment runs only while a duration is configured and the end
///   has never been manually edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeState {
    start_date: NaiveDate,
    start_time: NaiveTime,
    end_date: NaiveDate,
    end_time: NaiveTime,
    is_all_day: bool,
    end_manually_set: bool,
    saved_pre_all_day: Option<SavedTimes>,
}

impl RangeState {
    /// Build the initial state for an editing session.
    ///
    /// The end date always starts equal to the start date; there is no
    /// separate initial end date. Times are normalized to minute resolution.
    /// If the initial end would fall before the initial start on the shared
    /// day, the end time is snapped to the start time. When
    /// `initial_is_all_day` is set, the supplied times are saved and the
    /// stored times pinned to the day's extent, exactly as a toggle-on
    /// would do.
    pub fn new(
        initial_start_date: NaiveDate,
        initial_start_time: NaiveTime,
        initial_end_time: NaiveTime,
        initial_is_all_day: bool,
    ) -> Self {
        let start_time = combine(initial_start_date, initial_start_time).time();
        let mut end_time = combine(initial_start_date, initial_end_time).time();
        if end_time < start_time {
            end_time = start_time;
        }

        let mut state = Self {
            start_date: initial_start_date,
            start_time,
            end_date: initial_start_date,
            end_time,
            is_all_day: false,
            end_manually_set: false,
            saved_pre_all_day: None,
        };

        if initial_is_all_day {
            state.saved_pre_all_day = Some(SavedTimes {
                start_time: state.start_time,
                end_time: state.end_time,
            });
            state.start_time = start_of_day();
            state.end_time = end_of_day();
            state.is_all_day = true;
        }

        state
    }

    // ── accessors ───────────────────────────────────────────────────────

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn is_all_day(&self) -> bool {
        self.is_all_day
    }

    /// The start as a single instant. Derived, never stored.
    pub fn start_instant(&self) -> NaiveDateTime {
        combine(self.start_date, self.start_time)
    }

    /// The end as a single instant. Derived, never stored.
    pub fn end_instant(&self) -> NaiveDateTime {
        combine(self.end_date, self.end_time)
    }

    /// The public view of this state. The manual-edit latch and the
    /// pre-all-day snapshot are internal and not exposed.
    pub fn snapshot(&self) -> RangeSnapshot {
        RangeSnapshot {
            start_date: self.start_date,
            start_time: self.start_time,
            end_date: self.end_date,
            end_time: self.end_time,
            is_all_day: self.is_all_day,
        }
    }

    // ── transitions ─────────────────────────────────────────────────────

    /// Move the start to a new calendar day, preserving the wall-clock
    /// start time.
    ///
    /// If the moved start would fall after the end, the end snaps to equal
    /// the new start and auto-adjustment is skipped. Otherwise, when a
    /// duration is configured and the end was never manually edited, the
    /// end is recomputed as `start + duration`.
    ///
    /// In all-day mode the time fields stay pinned: the snap moves only the
    /// end date, and auto-adjustment does not run (it would unpin the end
    /// time).
    pub fn set_start_date(&self, config: &RangeConfig, new_date: NaiveDate) -> Self {
        let mut next = *self;
        next.start_date = new_date;
        next.start_time = combine(new_date, self.start_time).time();

        let start = next.start_instant();
        if is_end_before_start(start, next.end_instant()) {
            next.end_date = start.date();
            if !next.is_all_day {
                next.end_time = start.time();
            }
            return next;
        }

        if !next.is_all_day {
            if let Some(duration) = config.default_duration_minutes {
                if !next.end_manually_set {
                    let adjusted = auto_adjusted_end(start, duration);
                    next.end_date = adjusted.end_date;
                    next.end_time = adjusted.end_time;
                }
            }
        }

        next
    }

    /// Change the start's time-of-day on the existing start date.
    ///
    /// Auto-adjustment takes priority in this transition: when a duration
    /// is configured and the end was never manually edited, the end is
    /// recomputed from the new start and no snap check runs. Otherwise, an
    /// inverted range snaps the end to the new start.
    ///
    /// A no-op in all-day mode, where the times are pinned and the UI's
    /// time pickers are hidden.
    pub fn set_start_time(&self, config: &RangeConfig, new_time: NaiveTime) -> Self {
        if self.is_all_day {
            return *self;
        }

        let mut next = *self;
        next.start_time = combine(self.start_date, new_time).time();

        let start = next.start_instant();
        if let Some(duration) = config.default_duration_minutes {
            if !next.end_manually_set {
                let adjusted = auto_adjusted_end(start, duration);
                next.end_date = adjusted.end_date;
                next.end_time = adjusted.end_time;
                return next;
            }
        }

        if is_end_before_start(start, next.end_instant()) {
            next.end_date = next.start_date;
            next.end_time = next.start_time;
        }

        next
    }

    /// Move the end to a new calendar day, keeping the existing end time.
    ///
    /// A candidate that would invert the range is auto-corrected when it
    /// lands on the start's calendar day (the end time snaps to the start
    /// time) and silently rejected when the days differ — the prior state
    /// is returned unchanged, latch included. A valid candidate commits
    /// and sets the manual-edit latch.
    pub fn set_end_date(&self, _config: &RangeConfig, new_date: NaiveDate) -> Self {
        let candidate = combine(new_date, self.end_time);
        let start = self.start_instant();

        if is_end_before_start(start, candidate) {
            if same_day(candidate, start) {
                let mut next = *self;
                next.end_date = new_date;
                next.end_time = next.start_time;
                next.end_manually_set = true;
                return next;
            }
            // Cross-day inversion: reject, keep prior state.
            return *self;
        }

        let mut next = *self;
        next.end_date = new_date;
        next.end_time = candidate.time();
        next.end_manually_set = true;
        next
    }

    /// Change the end's time-of-day on the existing end date.
    ///
    /// Commits unconditionally and sets the manual-edit latch. Per-candidate
    /// validity is the calling picker's job via
    /// [`crate::constraint::check_time_bounds`] before this transition is
    /// ever invoked; no re-validation happens here.
    ///
    /// A no-op in all-day mode, where the times are pinned and the UI's
    /// time pickers are hidden.
    pub fn set_end_time(&self, _config: &RangeConfig, new_time: NaiveTime) -> Self {
        if self.is_all_day {
            return *self;
        }

        let mut next = *self;
        next.end_time = combine(self.end_date, new_time).time();
        next.end_manually_set = true;
        next
    }

    /// Flip all-day mode.
    ///
    /// Switching on saves the current times and pins the range to the full
    /// extent of the day (00:00 to 23:59). Switching off restores and
    /// consumes the saved times; if none were saved the times are left
    /// as-is. The manual-edit latch is never touched by this transition.
    ///
    /// The dates may have moved while all-day was on, so a restoration
    /// that would invert the range snaps the end to the start.
    pub fn toggle_all_day(&self, _config: &RangeConfig) -> Self {
        let mut next = *self;
        if !self.is_all_day {
            next.saved_pre_all_day = Some(SavedTimes {
                start_time: self.start_time,
                end_time: self.end_time,
            });
            next.start_time = start_of_day();
            next.end_time = end_of_day();
            next.is_all_day = true;
        } else {
            next.is_all_day = false;
            if let Some(saved) = next.saved_pre_all_day.take() {
                next.start_time = saved.start_time;
                next.end_time = saved.end_time;
            }
            if is_end_before_start(next.start_instant(), next.end_instant()) {
                next.end_date = next.start_date;
                next.end_time = next.start_time;
            }
        }
        next
    }
}

// ── public snapshot ─────────────────────────────────────────────────────────

/// The state pushed to the observer after every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSnapshot {
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub is_all_day: bool,
}

// ── editor ──────────────────────────────────────────────────────────────────

/// Owns one session's state and configuration and notifies a synchronous
/// observer exactly once per operation, in the same call stack, with the
/// fully updated snapshot.
///
/// Single-threaded by design: every operation runs to completion before
/// returning, and the state is owned exclusively by the session that
/// created it.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use range_engine::range::{RangeConfig, RangeEditor};
///
/// let date = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
///
/// let mut seen = Vec::new();
/// let mut editor = RangeEditor::new(
///     RangeConfig::default(),
///     date,
///     nine,
///     ten,
///     false,
///     |snapshot| seen.push(*snapshot),
/// );
/// editor.set_start_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap());
/// drop(editor);
/// assert_eq!(seen.len(), 1);
/// assert_eq!(seen[0].start_time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
/// ```
pub struct RangeEditor<F: FnMut(&RangeSnapshot)> {
    state: RangeState,
    config: RangeConfig,
    on_change: F,
}

impl<F: FnMut(&RangeSnapshot)> RangeEditor<F> {
    /// Build an editor from the session's construction inputs. No
    /// notification fires for the initial state; the caller already holds
    /// the values it supplied.
    pub fn new(
        config: RangeConfig,
        initial_start_date: NaiveDate,
        initial_start_time: NaiveTime,
        initial_end_time: NaiveTime,
        initial_is_all_day: bool,
        on_change: F,
    ) -> Self {
        Self {
            state: RangeState::new(
                initial_start_date,
                initial_start_time,
                initial_end_time,
                initial_is_all_day,
            ),
            config,
            on_change,
        }
    }

    /// The current state, for picker-bound computation and direct reads.
    pub fn state(&self) -> &RangeState {
        &self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    pub fn set_start_date(&mut self, new_date: NaiveDate) -> RangeSnapshot {
        self.apply(|state, config| state.set_start_date(config, new_date))
    }

    pub fn set_start_time(&mut self, new_time: NaiveTime) -> RangeSnapshot {
        self.apply(|state, config| state.set_start_time(config, new_time))
    }

    pub fn set_end_date(&mut self, new_date: NaiveDate) -> RangeSnapshot {
        self.apply(|state, config| state.set_end_date(config, new_date))
    }

    pub fn set_end_time(&mut self, new_time: NaiveTime) -> RangeSnapshot {
        self.apply(|state, config| state.set_end_time(config, new_time))
    }

    pub fn toggle_all_day(&mut self) -> RangeSnapshot {
        self.apply(|state, config| state.toggle_all_day(config))
    }

    /// Run one transition and fire the observer once — also for rejected
    /// edits, so the notification count always equals the call count.
    fn apply(
        &mut self,
        transition: impl FnOnce(&RangeState, &RangeConfig) -> RangeState,
    ) -> RangeSnapshot {
        self.state = transition(&self.state, &self.config);
        let snapshot = self.state.snapshot();
        (self.on_change)(&snapshot);
        snapshot
    }
}
