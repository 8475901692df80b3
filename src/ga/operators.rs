//! Permutation operators for tour chromosomes.
//!
//! Chromosomes are `usize` index vectors over the shared point list. Every
//! operator here maps valid permutations to valid permutations.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::SliceRandom;
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Uniformly random permutation of `0..n` (Fisher–Yates).
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

// ============================================================================
// Crossover
// ============================================================================

/// Ordered crossover (OX1) with random cut points.
///
/// Two cut points are drawn uniformly from `0..n`; the smaller is the
/// segment start and the larger the (exclusive) end. See
/// [`order_crossover_at`] for the recombination itself.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    order_crossover_at(parent1, parent2, a, b)
}

/// Ordered crossover (OX1) with explicit cut points.
///
/// The cuts are order-independent. Child 1 keeps `parent1[start..end]` in
/// place and fills the remaining positions from `parent2`; child 2 is the
/// mirror image. Filling starts at `end` and wraps, taking the donor's
/// entries in order from position `end`, skipping those already in the
/// segment.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or a cut exceeds `n`.
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    cut_a: usize,
    cut_b: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    let (start, end) = if cut_a <= cut_b {
        (cut_a, cut_b)
    } else {
        (cut_b, cut_a)
    };
    assert!(end <= n, "cut point {end} out of range for length {n}");

    let child1 = ox_build_child(parent1, parent2, start, end);
    let child2 = ox_build_child(parent2, parent1, start, end);
    (child1, child2)
}

/// Build one OX child: copy `template[start..end]`, fill from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    if n == 0 {
        return Vec::new();
    }
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    let mut pos = end % n;
    for offset in 0..n {
        let val = donor[(end + offset) % n];
        if !in_segment[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation applied gene by gene.
///
/// Each position is visited once; with probability `probability` it is
/// swapped with a position drawn uniformly from the whole chromosome
/// (possibly itself).
pub fn swap_mutation<R: Rng>(perm: &mut [usize], probability: f64, rng: &mut R) {
    let n = perm.len();
    for i in 0..n {
        if rng.random::<f64>() < probability {
            let j = rng.random_range(0..n);
            perm.swap(i, j);
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// True if `perm` contains every index of `0..n` exactly once.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
