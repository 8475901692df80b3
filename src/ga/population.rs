//! The population engine.
//!
//! [`Population`] owns one generation of tours and breeds the next:
//! roulette selection → ordered crossover → swap mutation → repeat until
//! the new generation is full.
//!
//! All randomness comes from the generator passed into each call, so two
//! populations built and advanced with identically seeded generators evolve
//! identically. Instances share nothing mutable and can run on separate
//! threads.

use super::config::{validate_breeding, validate_points};
use super::operators::{is_permutation, order_crossover, random_permutation, swap_mutation};
use super::selection::roulette;
use super::types::Individual;
use crate::error::Result;
use crate::route::Point;
use rand::Rng;
use std::sync::Arc;
use tracing::instrument;

/// One generation of candidate tours plus the breeding parameters.
#[derive(Debug, Clone)]
pub struct Population {
    points: Arc<[Point]>,
    current: Vec<Individual>,
    fitnesses: Vec<f64>,
    fittest: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    generation: usize,
}

impl Population {
    /// Builds an initial generation of `size` uniformly random tours.
    ///
    /// # Errors
    /// [`crate::TspError::InvalidConfiguration`] if `size < 2`, `points` is
    /// empty, or a probability lies outside `[0, 1]`.
    #[instrument(level = "debug", skip(points, rng), fields(point_count = tracing::field::Empty))]
    pub fn new<R: Rng>(
        size: usize,
        crossover_probability: f64,
        mutation_probability: f64,
        points: impl Into<Arc<[Point]>>,
        rng: &mut R,
    ) -> Result<Self> {
        let points: Arc<[Point]> = points.into();
        tracing::Span::current().record("point_count", points.len());
        validate_breeding(size, crossover_probability, mutation_probability)?;
        validate_points(&points)?;

        let current: Vec<Individual> = (0..size)
            .map(|_| Individual::new(random_permutation(points.len(), rng), &points))
            .collect();

        let mut population = Self {
            points,
            current: Vec::new(),
            fitnesses: Vec::with_capacity(size),
            fittest: 0,
            crossover_probability,
            mutation_probability,
            generation: 0,
        };
        population.replace(current);

        if population.fittest().is_degenerate() {
            tracing::warn!(
                point_count = population.points.len(),
                "fittest tour has zero or unrepresentably small length; fitness is the sentinel"
            );
        }

        Ok(population)
    }

    /// Replaces the current generation with a freshly bred one of the same
    /// size and increments the generation counter.
    ///
    /// Offspring come in pairs. For an odd population size the last pair's
    /// second child is dropped.
    ///
    /// # Errors
    /// [`crate::TspError::SelectionInvariantViolation`] if roulette selection
    /// fails. The current generation is left untouched in that case.
    pub fn advance_generation<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let size = self.current.len();
        let mut next = Vec::with_capacity(size);

        while next.len() < size {
            let (child1, child2) = self.breed(rng)?;
            next.push(child1);
            if next.len() < size {
                next.push(child2);
            }
        }

        self.replace(next);
        self.generation += 1;

        tracing::debug!(
            generation = self.generation,
            fittest_distance = self.fittest().distance(),
            "generation advanced"
        );
        Ok(())
    }

    /// Breeds two children from roulette-selected parents.
    fn breed<R: Rng>(&self, rng: &mut R) -> Result<(Individual, Individual)> {
        let mom = &self.current[roulette(&self.fitnesses, rng)?];
        let dad = &self.current[roulette(&self.fitnesses, rng)?];

        let (mut child1, mut child2) = if rng.random::<f64>() < self.crossover_probability {
            order_crossover(mom.chromosome(), dad.chromosome(), rng)
        } else {
            (mom.chromosome().to_vec(), dad.chromosome().to_vec())
        };

        swap_mutation(&mut child1, self.mutation_probability, rng);
        swap_mutation(&mut child2, self.mutation_probability, rng);

        debug_assert!(is_permutation(&child1, self.points.len()));
        debug_assert!(is_permutation(&child2, self.points.len()));

        Ok((
            Individual::new(child1, &self.points),
            Individual::new(child2, &self.points),
        ))
    }

    /// Installs a new generation and refreshes the cached fitness table and
    /// fittest index.
    fn replace(&mut self, next: Vec<Individual>) {
        self.current = next;
        self.fitnesses.clear();
        self.fitnesses
            .extend(self.current.iter().map(Individual::fitness));

        // First occurrence wins ties.
        let mut best = 0;
        for (i, &f) in self.fitnesses.iter().enumerate() {
            if f > self.fitnesses[best] {
                best = i;
            }
        }
        self.fittest = best;
    }

    /// Highest-fitness individual of the current generation.
    ///
    /// Not cumulative: a later generation may hold a worse fittest.
    pub fn fittest(&self) -> &Individual {
        &self.current[self.fittest]
    }

    /// Number of generations bred so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The current generation.
    pub fn individuals(&self) -> &[Individual] {
        &self.current
    }

    /// The shared point list.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Probability that a parent pair is recombined.
    pub fn crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    /// Per-gene swap mutation probability.
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, TspError};
    use crate::random::create_rng;
    use crate::route::random_points;

    fn instance(n: usize) -> Vec<Point> {
        random_points(n, 100.0, &mut create_rng(1))
    }

    fn assert_all_permutations(pop: &Population) {
        let n = pop.points().len();
        for ind in pop.individuals() {
            assert!(
                is_permutation(ind.chromosome(), n),
                "generation {} holds invalid chromosome {:?}",
                pop.generation(),
                ind.chromosome()
            );
        }
    }

    #[test]
    fn test_initialize_builds_valid_population() {
        let mut rng = create_rng(42);
        let pop = Population::new(30, 0.7, 0.02, instance(12), &mut rng).unwrap();

        assert_eq!(pop.individuals().len(), 30);
        assert_eq!(pop.generation(), 0);
        assert_eq!(pop.points().len(), 12);
        assert!((pop.crossover_probability() - 0.7).abs() < 1e-12);
        assert!((pop.mutation_probability() - 0.02).abs() < 1e-12);
        assert_all_permutations(&pop);
    }

    #[test]
    fn test_fittest_is_maximum() {
        let mut rng = create_rng(42);
        let mut pop = Population::new(25, 0.7, 0.02, instance(10), &mut rng).unwrap();

        for _ in 0..5 {
            let best = pop
                .individuals()
                .iter()
                .map(Individual::fitness)
                .fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(pop.fittest().fitness(), best);
            pop.advance_generation(&mut rng).unwrap();
        }
    }

    #[test]
    fn test_advance_keeps_size_and_permutations() {
        let mut rng = create_rng(42);
        let mut pop = Population::new(20, 0.9, 0.1, instance(15), &mut rng).unwrap();

        for g in 1..=25 {
            pop.advance_generation(&mut rng).unwrap();
            assert_eq!(pop.generation(), g);
            assert_eq!(pop.individuals().len(), 20);
            assert_all_permutations(&pop);
        }
    }

    #[test]
    fn test_odd_population_truncates_surplus() {
        let mut rng = create_rng(42);
        let mut pop = Population::new(7, 0.7, 0.05, instance(9), &mut rng).unwrap();

        for _ in 0..10 {
            pop.advance_generation(&mut rng).unwrap();
            assert_eq!(pop.individuals().len(), 7);
            assert_all_permutations(&pop);
        }
    }

    #[test]
    fn test_no_crossover_no_mutation_copies_parents() {
        let mut rng = create_rng(42);
        let mut pop = Population::new(10, 0.0, 0.0, instance(8), &mut rng).unwrap();
        let parents: Vec<Vec<usize>> = pop
            .individuals()
            .iter()
            .map(|ind| ind.chromosome().to_vec())
            .collect();

        pop.advance_generation(&mut rng).unwrap();
        for child in pop.individuals() {
            assert!(
                parents.iter().any(|p| p.as_slice() == child.chromosome()),
                "child {:?} is not a copy of any parent",
                child.chromosome()
            );
        }
    }

    #[test]
    fn test_full_rates_preserve_permutations() {
        let mut rng = create_rng(9);
        let mut pop = Population::new(12, 1.0, 1.0, instance(20), &mut rng).unwrap();
        for _ in 0..20 {
            pop.advance_generation(&mut rng).unwrap();
            assert_all_permutations(&pop);
        }
    }

    #[test]
    fn test_single_point_instance() {
        let mut rng = create_rng(42);
        let mut pop =
            Population::new(4, 0.7, 0.5, vec![Point::new(1.0, 2.0)], &mut rng).unwrap();
        assert!(pop.fittest().is_degenerate());

        pop.advance_generation(&mut rng).unwrap();
        assert_eq!(pop.fittest().chromosome(), &[0]);
        assert_eq!(pop.fittest().distance(), 0.0);
    }

    #[test]
    fn test_coincident_points_evolve_without_error() {
        let mut rng = create_rng(42);
        let pts = vec![Point::new(3.0, 3.0); 6];
        let mut pop = Population::new(10, 0.7, 0.1, pts, &mut rng).unwrap();
        for _ in 0..10 {
            pop.advance_generation(&mut rng).unwrap();
            assert_all_permutations(&pop);
            assert!(pop.individuals().iter().all(Individual::is_degenerate));
        }
    }

    #[test]
    fn test_rejects_small_population() {
        let mut rng = create_rng(42);
        let err = Population::new(1, 0.5, 0.5, instance(4), &mut rng).unwrap_err();
        assert_eq!(
            err,
            TspError::InvalidConfiguration(ConfigError::PopulationTooSmall { size: 1 })
        );
    }

    #[test]
    fn test_rejects_empty_points() {
        let mut rng = create_rng(42);
        let err = Population::new(4, 0.5, 0.5, Vec::<Point>::new(), &mut rng).unwrap_err();
        assert_eq!(err, TspError::InvalidConfiguration(ConfigError::EmptyPoints));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let mut rng = create_rng(42);
        assert!(Population::new(4, 1.5, 0.5, instance(4), &mut rng).is_err());
        assert!(Population::new(4, 0.5, -0.01, instance(4), &mut rng).is_err());
    }

    #[test]
    fn test_same_seed_same_generations() {
        let pts = instance(10);
        let mut rng_a = create_rng(123);
        let mut rng_b = create_rng(123);
        let mut a = Population::new(16, 0.7, 0.05, pts.clone(), &mut rng_a).unwrap();
        let mut b = Population::new(16, 0.7, 0.05, pts, &mut rng_b).unwrap();

        for _ in 0..15 {
            assert_eq!(a.individuals(), b.individuals());
            a.advance_generation(&mut rng_a).unwrap();
            b.advance_generation(&mut rng_b).unwrap();
        }
        assert_eq!(a.fittest(), b.fittest());
    }
}
