//! Input validation for rostering problems.
//!
//! Checks structural integrity of shift templates and the person list
//! before any evolution runs. Detects:
//! - Duplicate person names (names are the sole assignment join key)
//! - Shifts with zero slots
//! - Inverted availability windows (end before start)
//! - An empty roster
//!
//! Weekday keys are checked earlier: availability maps are keyed by the
//! [`crate::models::Weekday`] enum, so an unknown day name is rejected
//! at deserialization and can never reach this layer.

use std::collections::HashSet;

use crate::models::{Person, Shift};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two people share the same name.
    DuplicateName,
    /// A shift has no slots to fill.
    EmptyShift,
    /// An availability window ends before it starts.
    InvalidWindow,
    /// There is nobody to assign.
    EmptyRoster,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a rostering problem.
///
/// Checks:
/// 1. At least one person on the roster
/// 2. No duplicate person names
/// 3. Every shift has `slots >= 1`
/// 4. Every availability window has `start <= end`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(shifts: &[Shift], people: &[Person]) -> ValidationResult {
    let mut errors = Vec::new();

    if people.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "No people to assign",
        ));
    }

    let mut names = HashSet::new();
    for person in people {
        if !names.insert(person.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate person name: {}", person.name),
            ));
        }

        for (day, windows) in &person.availability {
            for w in windows {
                if w.end < w.start {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidWindow,
                        format!(
                            "Person '{}' has an inverted window [{}, {}] on {}",
                            person.name,
                            w.start,
                            w.end,
                            day.name()
                        ),
                    ));
                }
            }
        }
    }

    for shift in shifts {
        if shift.slots == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyShift,
                format!("Shift '{}' has zero slots", shift.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
