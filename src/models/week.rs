//! Week and availability-window models.
//!
//! Defines the weekday calendar (Monday-first, indices 0-6) and the
//! `[start, end]` availability windows people declare per weekday.
//!
//! # Time Model
//! All times are plain time-of-day numbers in whatever unit the input data
//! uses (typically hours). Shift starts, shift durations, and availability
//! windows must share that unit; the crate never converts.
//!
//! # Containment
//! Availability containment is inclusive at both bounds: a window
//! `[t0, t1]` covers a shift spanning exactly `[t0, t1]`.

use serde::{Deserialize, Serialize};

/// Day of the week, Monday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Maps a 0-based index (0 = Monday) to a weekday.
    pub fn from_index(index: usize) -> Option<Weekday> {
        Weekday::ALL.get(index).copied()
    }

    /// 0-based index of this weekday (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// English name, as used in availability data and reports.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// An availability interval [start, end], inclusive at both ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeWindow {
    /// Window start (inclusive).
    pub start: f64,
    /// Window end (inclusive).
    pub end: f64,
}

impl TimeWindow {
    /// Creates a new window.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Whether this window fully contains the interval [start, end].
    ///
    /// Inclusive at both bounds: an exact-boundary shift fits its window.
    #[inline]
    pub fn covers(&self, start: f64, end: f64) -> bool {
        self.start <= start && self.end >= end
    }
}
