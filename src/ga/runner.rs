//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives a [`Population`] for a fixed number of generations
//! and keeps the best tour seen along the way. Fitness is not monotonic
//! across generations, so the best-ever individual is tracked here rather
//! than read from the final generation.

use super::config::GaConfig;
use super::population::Population;
use super::types::Individual;
use crate::error::Result;
use crate::random::create_rng;
use crate::route::Point;
use rand::Rng;
use tracing::instrument;

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspResult {
    /// The best tour found, as points in visiting order.
    pub route: Vec<Point>,

    /// The same tour as indices into the input point list.
    pub order: Vec<usize>,

    /// Closed length of the best tour.
    pub distance: f64,

    /// Fitness of the best tour (inverse distance).
    pub fitness: f64,

    /// Number of generations bred.
    pub generations: usize,

    /// Best-ever fitness after the initial population and after each
    /// generation (`generations + 1` entries).
    pub fitness_history: Vec<f64>,
}

impl TspResult {
    fn from_best(best: &Individual, points: &[Point], generations: usize, history: Vec<f64>) -> Self {
        Self {
            route: best.route(points),
            order: best.chromosome().to_vec(),
            distance: best.distance(),
            fitness: best.fitness(),
            generations,
            fitness_history: history,
        }
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::ga::{GaConfig, GaRunner};
/// use tsp_ga::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(50)
///     .with_seed(42);
/// let result = GaRunner::run(&points, &config).unwrap();
/// assert_eq!(result.route.len(), 4);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// [`crate::TspError::InvalidConfiguration`] for bad parameters, before any
    /// generation runs; [`crate::TspError::SelectionInvariantViolation`] if
    /// breeding aborts.
    pub fn run(points: &[Point], config: &GaConfig) -> Result<TspResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(points, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`. `config.seed` is
    /// ignored.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            point_count = points.len(),
            population_size = config.population_size,
            generations = config.generations,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        points: &[Point],
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<TspResult> {
        let mut population = Population::new(
            config.population_size,
            config.crossover_probability,
            config.mutation_probability,
            points,
            rng,
        )?;

        let mut best = population.fittest().clone();
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(best.fitness());

        tracing::info!(
            initial_distance = best.distance(),
            "starting evolution"
        );

        for _ in 0..config.generations {
            population.advance_generation(rng)?;

            let gen_best = population.fittest();
            if gen_best.fitness() > best.fitness() {
                best = gen_best.clone();
            }
            fitness_history.push(best.fitness());
        }

        tracing::info!(
            best_distance = best.distance(),
            generations = population.generation(),
            "evolution finished"
        );

        Ok(TspResult::from_best(
            &best,
            population.points(),
            population.generation(),
            fitness_history,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
