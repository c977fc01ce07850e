//! Assignment-vector genome.
//!
//! # Encoding
//!
//! A genome is one full candidate weekly schedule: one name vector per
//! shift, parallel to the problem's shift template list. Each inner
//! vector holds at most that shift's slot count; fewer entries mean
//! unfilled slots (expected when the roster is smaller than the total
//! slot count).
//!
//! Genomes never hold shift data themselves, so mutating one genome's
//! assignments can never leak into another genome or the templates.

use rand::Rng;

use crate::models::{Roster, Shift};

/// One candidate weekly schedule.
///
/// Higher fitness = better schedule (maximization convention).
#[derive(Debug, Clone, PartialEq)]
pub struct Genome {
    assignments: Vec<Vec<String>>,
    /// Cached fitness, set by the runner before ranking.
    pub fitness: f64,
}

impl Genome {
    /// Wraps pre-built assignment vectors.
    pub fn from_assignments(assignments: Vec<Vec<String>>) -> Self {
        Self {
            assignments,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Builds a random genome by draining the roster without replacement.
    ///
    /// For each shift slot a uniformly random remaining person is taken
    /// from a working copy of the roster; once the copy is exhausted,
    /// remaining slots are simply left unfilled. Each person therefore
    /// appears at most once per generated genome.
    pub fn random<R: Rng>(shifts: &[Shift], roster: &Roster, rng: &mut R) -> Self {
        let mut pool: Vec<&str> = roster.people().iter().map(|p| p.name.as_str()).collect();
        let mut assignments = Vec::with_capacity(shifts.len());

        for shift in shifts {
            let mut assigned = Vec::with_capacity(shift.slots.min(pool.len()));
            for _ in 0..shift.slots {
                if pool.is_empty() {
                    break;
                }
                let pick = rng.random_range(0..pool.len());
                assigned.push(pool.swap_remove(pick).to_string());
            }
            assignments.push(assigned);
        }

        Self::from_assignments(assignments)
    }

    /// Assignment vectors, one per shift.
    pub fn assignments(&self) -> &[Vec<String>] {
        &self.assignments
    }

    /// Mutable access for operators.
    pub(crate) fn assignments_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.assignments
    }

    /// Number of shifts this genome covers.
    pub fn shift_count(&self) -> usize {
        self.assignments.len()
    }

    /// Filled-slot counts per shift.
    pub fn slot_shape(&self) -> Vec<usize> {
        self.assignments.iter().map(Vec::len).collect()
    }

    /// Whether two genomes share shift count and per-shift slot counts.
    pub fn matches_shape(&self, other: &Genome) -> bool {
        self.assignments.len() == other.assignments.len()
            && self
                .assignments
                .iter()
                .zip(&other.assignments)
                .all(|(a, b)| a.len() == b.len())
    }

    /// Total number of filled slots.
    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().map(Vec::len).sum()
    }

    /// Resets the cached fitness to unevaluated.
    pub fn reset_fitness(&mut self) {
        self.fitness = f64::NEG_INFINITY;
    }
}
