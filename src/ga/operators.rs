//! Genetic operators: tournament selection, repair crossover, mutation.
//!
//! # Repair crossover
//!
//! The crossover is assignment-level repair, not positional gene swapping.
//! Where one parent's assignment is infeasible for its shift, the sibling
//! parent's assignment at the same position is adopted if it is feasible;
//! names that fit neither schedule are set aside in a per-child pool and
//! redistributed over duplicate slots in a second pass. An empty pool
//! leaves a duplicate or infeasible slot in place for this generation —
//! soft degradation, not an error.

use std::collections::HashSet;

use rand::seq::index::sample;
use rand::Rng;

use super::{Genome, RosterProblem};
use crate::constraints::satisfies_hard_constraints;
use crate::error::EvolutionError;
use crate::models::{Roster, Shift};

/// Minimum population size that yields a non-empty tournament sample.
pub const MIN_POPULATION: usize = 4;

/// Whether `name` resolves to a person who may work `shift`.
///
/// Unresolvable names count as infeasible: they can never be validated,
/// so repair treats them like any other violating occupant.
fn slot_is_feasible(shift: &Shift, roster: &Roster, name: &str) -> bool {
    roster
        .get(name)
        .is_some_and(|person| satisfies_hard_constraints(shift, person))
}

/// Picks two breeding parents by tournament.
///
/// Each of the two independent draws samples `len / 4` genomes without
/// replacement and takes the fittest of the sample (cached fitness must
/// be filled in). The draws may land on the same genome twice; that is
/// accepted behavior.
pub fn tournament_select<'p, R: Rng>(
    population: &'p [Genome],
    rng: &mut R,
) -> Result<(&'p Genome, &'p Genome), EvolutionError> {
    let sample_size = population.len() / 4;
    if sample_size == 0 {
        return Err(EvolutionError::PopulationTooSmall {
            size: population.len(),
        });
    }

    let first = tournament_draw(population, sample_size, rng);
    let second = tournament_draw(population, sample_size, rng);
    Ok((first, second))
}

/// One tournament draw: sample without replacement, keep the fittest.
fn tournament_draw<'p, R: Rng>(
    population: &'p [Genome],
    sample_size: usize,
    rng: &mut R,
) -> &'p Genome {
    sample(rng, population.len(), sample_size)
        .iter()
        .map(|i| &population[i])
        .max_by(|x, y| x.fitness.total_cmp(&y.fitness))
        .expect("non-empty tournament sample")
}

/// Combines two parents into two repaired offspring.
///
/// Fails fast when the parents' shift structures differ (precondition
/// violation, not a runtime scenario). Otherwise:
///
/// 1. **Repair pass** — per slot position, a child whose occupant is
///    infeasible adopts the sibling parent's occupant at the same
///    position when that one is feasible for the shift; names feasible
///    for neither go to the child's remaining pool. Both decisions read
///    the parents' original occupants, so the two directions are
///    symmetric.
/// 2. **De-dup pass** — per child, feasible occupants are recorded in a
///    seen set; a feasible duplicate is replaced by a uniform pick from
///    the child's remaining pool (removed from the pool), or left as-is
///    when the pool is empty. Infeasible occupants are skipped here.
pub fn repair_crossover<R: Rng>(
    a: &Genome,
    b: &Genome,
    problem: &RosterProblem,
    rng: &mut R,
) -> Result<(Genome, Genome), EvolutionError> {
    let shifts = problem.shifts();
    if !a.matches_shape(b) || a.shift_count() != shifts.len() {
        return Err(EvolutionError::StructureMismatch);
    }
    let roster = problem.roster();

    let mut child_a = a.clone();
    let mut child_b = b.clone();
    let mut a_remaining: Vec<String> = Vec::new();
    let mut b_remaining: Vec<String> = Vec::new();

    // Repair pass: cross-pollinate feasible assignments from the sibling.
    for (idx, shift) in shifts.iter().enumerate() {
        for pos in 0..a.assignments()[idx].len() {
            let a_name = &a.assignments()[idx][pos];
            let b_name = &b.assignments()[idx][pos];
            let a_ok = slot_is_feasible(shift, roster, a_name);
            let b_ok = slot_is_feasible(shift, roster, b_name);

            if !a_ok {
                if b_ok {
                    child_a.assignments_mut()[idx][pos] = b_name.clone();
                } else {
                    a_remaining.push(a_name.clone());
                }
            }
            if !b_ok {
                if a_ok {
                    child_b.assignments_mut()[idx][pos] = a_name.clone();
                } else {
                    b_remaining.push(b_name.clone());
                }
            }
        }
    }

    dedup_pass(&mut child_a, shifts, roster, &mut a_remaining, rng);
    dedup_pass(&mut child_b, shifts, roster, &mut b_remaining, rng);

    child_a.reset_fitness();
    child_b.reset_fitness();
    Ok((child_a, child_b))
}

/// Replaces duplicated feasible occupants with picks from the remaining
/// pool. Slots that are still infeasible were already queued for the pool
/// in the repair pass and stay untouched.
fn dedup_pass<R: Rng>(
    child: &mut Genome,
    shifts: &[Shift],
    roster: &Roster,
    remaining: &mut Vec<String>,
    rng: &mut R,
) {
    let mut seen: HashSet<String> = HashSet::new();

    for (idx, shift) in shifts.iter().enumerate() {
        for pos in 0..child.assignments()[idx].len() {
            let name = &child.assignments()[idx][pos];
            if !slot_is_feasible(shift, roster, name) {
                continue;
            }
            if seen.insert(name.clone()) {
                continue;
            }
            // Duplicate of an already-placed name; redistribute from the
            // pool, or leave it when the pool is exhausted.
            if remaining.is_empty() {
                continue;
            }
            let pick = rng.random_range(0..remaining.len());
            child.assignments_mut()[idx][pos] = remaining.swap_remove(pick);
        }
    }
}

/// Perturbs a genome by swapping slot occupants between shifts.
///
/// For each shift with at least one filled slot, a uniform target slot is
/// chosen; with probability `1 - mutation_probability` its occupant is
/// swapped with slot 0 of a uniform random shift (skipped when that
/// shift has no filled slots). Available as an independent pipeline
/// stage, toggled via [`super::EvolutionConfig::with_mutation`].
pub fn mutate<R: Rng>(genome: &mut Genome, mutation_probability: f64, rng: &mut R) {
    let shift_count = genome.shift_count();
    for idx in 0..shift_count {
        let filled = genome.assignments()[idx].len();
        if filled == 0 {
            continue;
        }
        let target = rng.random_range(0..filled);
        if rng.random::<f64>() <= mutation_probability {
            continue;
        }
        let partner = rng.random_range(0..shift_count);
        if genome.assignments()[partner].is_empty() {
            continue;
        }
        swap_slots(genome, idx, target, partner);
    }
    genome.reset_fitness();
}

/// Swaps `assignments[idx][target]` with `assignments[partner][0]`.
fn swap_slots(genome: &mut Genome, idx: usize, target: usize, partner: usize) {
    let assignments = genome.assignments_mut();
    if idx == partner {
        assignments[idx].swap(target, 0);
        return;
    }
    let (low, high, low_slot, high_slot) = if idx < partner {
        (idx, partner, target, 0)
    } else {
        (partner, idx, 0, target)
    };
    let (head, tail) = assignments.split_at_mut(high);
    std::mem::swap(&mut head[low][low_slot], &mut tail[0][high_slot]);
}
