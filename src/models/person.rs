//! Shift leader and roster models.
//!
//! A person declares, per weekday, the availability windows during which
//! they can work, plus a car flag for shifts that require driving.
//! People are read-only reference data during a run.
//!
//! The roster wraps the person list with a name index: assignment slots
//! store names only, and the roster is the single join point back to the
//! person records. Name uniqueness is an input invariant, checked by
//! [`crate::validation::validate_input`] at load time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{TimeWindow, Weekday};

/// A shift leader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique name, used as the assignment key.
    pub name: String,
    /// Availability windows per weekday. Missing day = unavailable all day.
    #[serde(default)]
    pub availability: HashMap<Weekday, Vec<TimeWindow>>,
    /// Whether this person has a car.
    #[serde(default)]
    pub car: bool,
}

impl Person {
    /// Creates a person with no availability and no car.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            availability: HashMap::new(),
            car: false,
        }
    }

    /// Adds an availability window on a weekday.
    pub fn with_window(mut self, day: Weekday, start: f64, end: f64) -> Self {
        self.availability
            .entry(day)
            .or_default()
            .push(TimeWindow::new(start, end));
        self
    }

    /// Marks this person as having a car.
    pub fn with_car(mut self) -> Self {
        self.car = true;
        self
    }

    /// Availability windows for a weekday (empty slice if none declared).
    pub fn windows_on(&self, day: Weekday) -> &[TimeWindow] {
        self.availability.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The full set of shift leaders, indexed by name.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    people: Vec<Person>,
    by_name: HashMap<String, usize>,
}

impl Roster {
    /// Builds a roster from a person list.
    ///
    /// Duplicate names are not rejected here (the later entry wins in the
    /// index); run [`crate::validation::validate_input`] on the raw list
    /// first to enforce uniqueness.
    pub fn new(people: Vec<Person>) -> Self {
        let by_name = people
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        Self { people, by_name }
    }

    /// Looks a person up by name.
    ///
    /// A miss is not an error: callers score unresolvable names as
    /// "unknown, skip" rather than failing.
    pub fn get(&self, name: &str) -> Option<&Person> {
        self.by_name.get(name).map(|&i| &self.people[i])
    }

    /// All people, in input order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Number of people on the roster.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
