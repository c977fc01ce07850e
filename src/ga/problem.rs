//! Rostering GA problem definition.
//!
//! Bridges the domain models (shifts, roster) to the GA operators:
//! the problem instance is the shared read-only data every genome is
//! generated from and evaluated against.

use rand::Rng;

use super::Genome;
use crate::constraints::{self, FitnessWeights};
use crate::models::{Roster, Shift};

/// A rostering problem instance.
///
/// Owns the shift templates and the roster; both are immutable for the
/// duration of a run.
#[derive(Debug, Clone)]
pub struct RosterProblem {
    shifts: Vec<Shift>,
    roster: Roster,
}

impl RosterProblem {
    /// Creates a problem instance.
    ///
    /// Run [`crate::validation::validate_input`] on the raw data first;
    /// this constructor assumes structurally sound input.
    pub fn new(shifts: Vec<Shift>, roster: Roster) -> Self {
        Self { shifts, roster }
    }

    /// Shift templates, in schedule order.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// The shift-leader roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Total slot count across all shifts.
    pub fn slot_total(&self) -> usize {
        self.shifts.iter().map(|s| s.slots).sum()
    }

    /// Creates one random genome.
    pub fn create_genome<R: Rng>(&self, rng: &mut R) -> Genome {
        Genome::random(&self.shifts, &self.roster, rng)
    }

    /// Creates an initial population of `size` random genomes.
    pub fn generate_population<R: Rng>(&self, size: usize, rng: &mut R) -> Vec<Genome> {
        (0..size).map(|_| self.create_genome(rng)).collect()
    }

    /// Scores one genome.
    pub fn evaluate(&self, genome: &Genome, weights: &FitnessWeights) -> f64 {
        constraints::fitness(&self.shifts, &self.roster, genome, weights)
    }

    /// Fills the cached fitness of every genome in `population`.
    pub fn evaluate_population(&self, population: &mut [Genome], weights: &FitnessWeights) {
        for genome in population {
            genome.fitness = self.evaluate(genome, weights);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, Weekday};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn make_problem() -> RosterProblem {
        let shifts = vec![
            Shift::new("Bar", Weekday::Monday, 9.0, 4.0).with_slots(2),
            Shift::new("Door", Weekday::Tuesday, 12.0, 6.0),
        ];
        let roster = Roster::new(vec![
            Person::new("Alice").with_window(Weekday::Monday, 8.0, 17.0),
            Person::new("Bob")
                .with_window(Weekday::Monday, 8.0, 17.0)
                .with_window(Weekday::Tuesday, 10.0, 20.0)
                .with_car(),
            Person::new("Carol").with_window(Weekday::Tuesday, 10.0, 20.0),
        ]);
        RosterProblem::new(shifts, roster)
    }

    #[test]
    fn test_slot_total() {
        assert_eq!(make_problem().slot_total(), 3);
    }

    #[test]
    fn test_generate_population() {
        let problem = make_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let population = problem.generate_population(10, &mut rng);
        assert_eq!(population.len(), 10);
        for g in &population {
            assert_eq!(g.shift_count(), 2);
            assert!(g.assigned_count() <= problem.slot_total());
        }
    }

    #[test]
    fn test_evaluate_population_fills_cache() {
        let problem = make_problem();
        let weights = FitnessWeights::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut population = problem.generate_population(5, &mut rng);

        problem.evaluate_population(&mut population, &weights);
        for g in &population {
            assert!(g.fitness.is_finite());
            assert_eq!(g.fitness, problem.evaluate(g, &weights));
        }
    }
}
