//! Route evaluation.
//!
//! A route is a permutation of indices into a shared point list. The tour is
//! closed: the last point connects back to the first.

use rand::Rng;

/// Fitness assigned to a zero-length tour.
///
/// A closed tour has zero length only when every point is coincident
/// (including the single-point case), so every route of such an instance
/// gets this value. It is finite, which keeps selection arithmetic free of
/// infinities and NaN.
pub const DEGENERATE_FITNESS: f64 = f64::MAX;

/// A location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Length of the closed tour visiting `points` in `route` order.
///
/// O(n) in the route length. An empty route has length 0; a single-entry
/// route is a self-loop of length 0.
///
/// # Panics
/// Panics if `route` holds an index outside `points`.
pub fn distance(points: &[Point], route: &[usize]) -> f64 {
    let n = route.len();
    if n < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 0..n {
        let from = &points[route[i]];
        let to = &points[route[(i + 1) % n]];
        total += from.distance_to(to);
    }
    total
}

/// Converts a tour length into a fitness value (higher is better).
///
/// Zero-length tours map to [`DEGENERATE_FITNESS`]. Lengths so small that
/// their inverse overflows are capped at the same value.
pub fn fitness_from_distance(distance: f64) -> f64 {
    if distance > 0.0 {
        (1.0 / distance).min(DEGENERATE_FITNESS)
    } else {
        DEGENERATE_FITNESS
    }
}

/// Inverse tour length of `route`; see [`fitness_from_distance`].
pub fn fitness(points: &[Point], route: &[usize]) -> f64 {
    fitness_from_distance(distance(points, route))
}

/// Generates `n` points uniformly in `[-extent/2, extent/2)` on both axes.
pub fn random_points<R: Rng>(n: usize, extent: f64, rng: &mut R) -> Vec<Point> {
    (0..n)
        .map(|_| {
            Point::new(
                (rng.random::<f64>() - 0.5) * extent,
                (rng.random::<f64>() - 0.5) * extent,
            )
        })
        .collect()
}
