//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;
use crate::route::Point;

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generations(200)
///     .with_crossover_probability(0.7)
///     .with_mutation_probability(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals per generation. Must be at least 2.
    ///
    /// Breeding yields offspring in pairs; for an odd size the surplus
    /// offspring of the last pair is discarded.
    pub population_size: usize,

    /// Number of generations to breed. Zero returns the fittest of the
    /// initial random population.
    pub generations: usize,

    /// Probability that a parent pair is recombined with ordered crossover
    /// (0.0–1.0). Otherwise the children are copies of the parents.
    pub crossover_probability: f64,

    /// Per-gene probability of a swap mutation (0.0–1.0).
    pub mutation_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 10_000,
            crossover_probability: 0.3,
            mutation_probability: 0.005,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover probability. Not clamped; see [`validate`](Self::validate).
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p;
        self
    }

    /// Sets the mutation probability. Not clamped; see [`validate`](Self::validate).
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-range probabilities are rejected rather than clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_breeding(
            self.population_size,
            self.crossover_probability,
            self.mutation_probability,
        )
    }
}

/// Checks the parameters a population needs for breeding.
pub(crate) fn validate_breeding(
    population_size: usize,
    crossover_probability: f64,
    mutation_probability: f64,
) -> Result<(), ConfigError> {
    if population_size < 2 {
        return Err(ConfigError::PopulationTooSmall {
            size: population_size,
        });
    }
    check_probability("crossover_probability", crossover_probability)?;
    check_probability("mutation_probability", mutation_probability)?;
    Ok(())
}

/// Rejects an empty point set.
pub fn validate_points(points: &[Point]) -> Result<(), ConfigError> {
    if points.is_empty() {
        return Err(ConfigError::EmptyPoints);
    }
    Ok(())
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the range check as well.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
