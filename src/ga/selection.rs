//! Fitness-proportional ("roulette wheel") parent selection.
//!
//! Fitness here is maximized: each individual's share of the wheel is its
//! fitness divided by the population total.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use crate::error::{Result, TspError};
use rand::Rng;

/// Selects an index from `fitnesses` with probability proportional to its
/// value.
///
/// Weights are the fitnesses divided by their maximum, so the wheel total
/// stays finite even for fitnesses near `f64::MAX`. A threshold is drawn
/// uniformly from `[0, total)` and the population is walked until the
/// running sum exceeds it. When every fitness is zero, or rounding leaves the
/// threshold above every cumulative sum, the last index is returned.
///
/// # Errors
/// [`TspError::SelectionInvariantViolation`] if `fitnesses` is empty or holds
/// a negative, infinite or NaN value.
///
/// # Complexity
/// O(n) per selection (linear scan)
pub fn roulette<R: Rng>(fitnesses: &[f64], rng: &mut R) -> Result<usize> {
    let n = fitnesses.len();

    if n == 0 || fitnesses.iter().any(|f| !f.is_finite() || *f < 0.0) {
        let total: f64 = fitnesses.iter().sum();
        tracing::error!(
            population_size = n,
            total_fitness = total,
            "roulette selection has no valid individual to pick"
        );
        return Err(TspError::SelectionInvariantViolation {
            population_size: n,
            total_fitness: total,
        });
    }

    let max = fitnesses.iter().copied().fold(0.0, f64::max);
    if max == 0.0 {
        return Ok(n - 1);
    }

    let total: f64 = fitnesses.iter().map(|f| f / max).sum();
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &f) in fitnesses.iter().enumerate() {
        cumulative += f / max;
        if cumulative > threshold {
            return Ok(i);
        }
    }

    Ok(n - 1) // floating-point fallback
}
