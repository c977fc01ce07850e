//! Constraint predicates and fitness scoring.
//!
//! Hard constraints make an assignment infeasible (availability, car
//! requirement); soft constraints are undesirable but not disqualifying
//! (currently a placeholder hook). The fitness function scores a whole
//! candidate schedule by subtracting a weighted penalty per violation.
//!
//! # Scoring
//!
//! Fitness starts at [`FitnessWeights::max_score`] and only decreases.
//! Hard and soft checks are independent: a single assignment can incur
//! both penalties in the same pass. Assigned names that do not resolve
//! against the roster are skipped entirely, neither penalized nor
//! rewarded, so partially repaired schedules stay scoreable.

use serde::{Deserialize, Serialize};

use crate::ga::Genome;
use crate::models::{Person, Roster, Shift, Weekday};

/// Penalty weights and the fitness ceiling.
///
/// Threaded explicitly through the evaluator and the evolution runner;
/// there is no global configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FitnessWeights {
    /// Score of a schedule with zero violations.
    pub max_score: f64,
    /// Penalty per hard-constraint violation.
    pub hard_conflict: f64,
    /// Penalty per soft-constraint violation.
    pub soft_conflict: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            max_score: 84.0,
            hard_conflict: 0.9,
            soft_conflict: 0.1,
        }
    }
}

/// Whether some availability window for `day` fully contains
/// `[start, end]`, inclusive at both bounds.
pub fn is_available(person: &Person, day: Weekday, start: f64, end: f64) -> bool {
    person.windows_on(day).iter().any(|w| w.covers(start, end))
}

/// Hard-constraint check for one assignment.
///
/// The person must be available over the whole shift span, and shifts
/// that require driving need a person with a car. Double-booking across
/// shifts is intentionally not checked here: the rest of the pipeline
/// (fitness scale, convergence) is calibrated to per-shift checks only.
pub fn satisfies_hard_constraints(shift: &Shift, person: &Person) -> bool {
    if !is_available(person, shift.day, shift.start, shift.end()) {
        return false;
    }
    if shift.requires_car() && !person.car {
        return false;
    }
    true
}

/// Soft-constraint check for one assignment.
///
/// Placeholder hook for preference-based scoring; always true for now.
/// It stays callable because the fitness formula subtracts its penalty
/// independently of the hard check.
pub fn satisfies_soft_constraints(_shift: &Shift, _person: &Person) -> bool {
    true
}

/// Scores a candidate schedule.
///
/// `genome.assignments` must be parallel to `shifts`. Higher is better;
/// the maximum is `weights.max_score`, reached exactly when every
/// resolvable assignment passes both constraint checks.
pub fn fitness(shifts: &[Shift], roster: &Roster, genome: &Genome, weights: &FitnessWeights) -> f64 {
    let mut score = weights.max_score;
    for (shift, assigned) in shifts.iter().zip(genome.assignments()) {
        for name in assigned {
            if let Some(person) = roster.get(name) {
                if !satisfies_hard_constraints(shift, person) {
                    score -= weights.hard_conflict;
                }
                if !satisfies_soft_constraints(shift, person) {
                    score -= weights.soft_conflict;
                }
            }
        }
    }
    score
}
