//! Genetic algorithm solver for the Euclidean Traveling Salesman Problem.
//!
//! Given a set of 2D points, the solver evolves a population of candidate
//! visiting orders and returns the shortest closed tour it finds.
//!
//! - [`route`]: Route evaluation — closed-tour distance and inverse-distance fitness
//! - [`ga`]: Population engine and runner — roulette selection, ordered
//!   crossover (OX1), swap mutation
//!
//! All randomness flows through an explicit generator (see [`random`]), so a
//! seeded run is exactly reproducible.
//!
//! # Example
//!
//! ```
//! use tsp_ga::ga::{GaConfig, GaRunner};
//! use tsp_ga::Point;
//!
//! let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 0.0)];
//! let config = GaConfig::default().with_generations(10).with_seed(1);
//! let result = GaRunner::run(&points, &config).unwrap();
//! assert!((result.distance - 12.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod ga;
pub mod random;
pub mod route;

pub use error::{ConfigError, Result, TspError};
pub use route::Point;
