//! Candidate tours.

use super::operators::is_permutation;
use crate::route::{self, Point, DEGENERATE_FITNESS};

/// A chromosome (visiting order over the shared point list) plus its
/// cached distance and fitness.
///
/// Immutable once built: mutation always produces a new chromosome that is
/// wrapped in a new `Individual`.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: Box<[usize]>,
    distance: f64,
    fitness: f64,
}

impl Individual {
    /// Evaluates `chromosome` against `points` and caches the result.
    ///
    /// `chromosome` must be a permutation of `0..points.len()`; only the
    /// population engine builds individuals.
    pub(crate) fn new(chromosome: Vec<usize>, points: &[Point]) -> Self {
        debug_assert!(
            is_permutation(&chromosome, points.len()),
            "chromosome is not a permutation of 0..{}: {:?}",
            points.len(),
            chromosome
        );
        let distance = route::distance(points, &chromosome);
        Self {
            chromosome: chromosome.into_boxed_slice(),
            distance,
            fitness: route::fitness_from_distance(distance),
        }
    }

    /// Point indices in visiting order.
    pub fn chromosome(&self) -> &[usize] {
        &self.chromosome
    }

    /// Closed tour length.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Inverse tour length; higher is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// True when the tour carries the sentinel fitness: its length is zero or
    /// too small for the inverse to be represented.
    pub fn is_degenerate(&self) -> bool {
        self.fitness == DEGENERATE_FITNESS
    }

    /// Resolves the chromosome into the visited points.
    pub fn route(&self, points: &[Point]) -> Vec<Point> {
        self.chromosome.iter().map(|&i| points[i]).collect()
    }
}
