//! Error taxonomy for the solver.
//!
//! Configuration problems are reported as [`ConfigError`] before any
//! generation runs. [`TspError::SelectionInvariantViolation`] signals that
//! fitness bookkeeping is corrupt; it aborts the run and is never retried.

/// Invalid caller-supplied parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {size}")]
    PopulationTooSmall { size: usize },
    #[error("point set must contain at least one point")]
    EmptyPoints,
    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
}

/// Errors returned by the population engine and runner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TspError {
    #[error("InvalidConfiguration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error(
        "SelectionInvariantViolation: roulette selected no individual \
         (population_size={population_size}, total_fitness={total_fitness})"
    )]
    SelectionInvariantViolation {
        population_size: usize,
        total_fitness: f64,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TspError>;
