//! # range-engine
//!
//! Deterministic date-time range editing for start/end pickers.
//!
//! The engine reconciles a start instant, an end instant, an all-day mode,
//! and an optional auto-duration policy while guaranteeing the range is
//! never logically inverted and that explicit user edits are never silently
//! overwritten by automation. It is a pure in-memory reducer over naive
//! local wall-clock values: no timezone conversion, no recurrence, no
//! persistence, no clock access — the caller supplies every anchor.
//!
//! ## Modules
//!
//! - [`instant`] — Combine a calendar day and a time-of-day into one instant; ordering predicates
//! - [`adjust`] — Recompute the end from `start + duration`, carrying across midnight
//! - [`range`] — The range state machine: per-session state, six transitions, change notification
//! - [`constraint`] — Same-day time-of-day checks for individual time pickers
//! - [`bounds`] — Minimum selectable date/time bounds for external pickers

pub mod adjust;
pub mod bounds;
pub mod constraint;
pub mod instant;
pub mod range;

pub use adjust::{auto_adjusted_end, AdjustedEnd};
pub use bounds::{min_selectable_end_date, min_selectable_start_date, min_selectable_start_time};
pub use constraint::{check_time_bounds, ConstraintViolation};
pub use instant::{combine, is_end_before_start, minutes_since_midnight, same_day};
pub use range::{RangeConfig, RangeEditor, RangeSnapshot, RangeState};
