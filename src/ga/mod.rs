//! Genetic-algorithm rostering core.
//!
//! # Encoding
//!
//! A [`Genome`] is one candidate weekly schedule: an assignment vector
//! (leader names) per shift, parallel to the problem's shift templates.
//!
//! # Submodules
//!
//! - [`operators`]: tournament selection, repair crossover, mutation
//!
//! The crossover is constraint-aware repair rather than blind positional
//! swapping: infeasible assignments borrow the sibling parent's feasible
//! assignment at the same position, and leftover names are redistributed
//! over duplicated slots.

mod genome;
pub mod operators;
mod problem;
mod runner;

pub use genome::Genome;
pub use problem::RosterProblem;
pub use runner::{EvolutionConfig, EvolutionOutcome, EvolutionRunner};
