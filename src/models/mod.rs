//! Rostering domain models.
//!
//! Pure data types for the rostering problem: the weekly calendar,
//! shift templates, and the shift-leader roster. No scheduling logic
//! lives here; constraint predicates are in [`crate::constraints`] and
//! input integrity checks in [`crate::validation`].

mod person;
mod shift;
mod week;

pub use person::{Person, Roster};
pub use shift::{Shift, DRIVING_KIND};
pub use week::{TimeWindow, Weekday};
