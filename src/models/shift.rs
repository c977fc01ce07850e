//! Shift template model.
//!
//! A shift is a time-boxed block of work on one weekday with a fixed
//! number of leader slots. Templates are loaded once and never mutated;
//! candidate schedules carry their own assignment vectors, one per shift.

use serde::{Deserialize, Serialize};

use super::Weekday;

/// Shift kind tag whose assignments require a car.
pub const DRIVING_KIND: u8 = 3;

/// A shift template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shift {
    /// Shift identifier, shown in reports.
    pub name: String,
    /// Day the shift takes place on.
    pub day: Weekday,
    /// Start time-of-day (same unit as availability windows).
    pub start: f64,
    /// Approximate duration (same unit).
    pub duration: f64,
    /// Small classification tag; kind 3 requires a car.
    pub kind: u8,
    /// Number of leader slots to fill.
    pub slots: usize,
}

impl Shift {
    /// Creates a single-slot shift of kind 1.
    pub fn new(name: impl Into<String>, day: Weekday, start: f64, duration: f64) -> Self {
        Self {
            name: name.into(),
            day,
            start,
            duration,
            kind: 1,
            slots: 1,
        }
    }

    /// Sets the kind tag.
    pub fn with_kind(mut self, kind: u8) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the slot count.
    pub fn with_slots(mut self, slots: usize) -> Self {
        self.slots = slots;
        self
    }

    /// End time-of-day of this shift.
    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Whether assignees must have a car.
    #[inline]
    pub fn requires_car(&self) -> bool {
        self.kind == DRIVING_KIND
    }
}
