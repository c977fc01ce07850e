//! Evolution error types.

use thiserror::Error;

/// Errors surfaced by the GA operators and runner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvolutionError {
    /// Two genomes passed to an operator have different shift structure.
    ///
    /// Precondition violation: operators only combine genomes built from
    /// the same problem instance.
    #[error("genomes have mismatched shift structure")]
    StructureMismatch,

    /// The population is too small for tournament selection.
    #[error("population of {size} is too small for tournament selection (need at least 4)")]
    PopulationTooSmall { size: usize },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
