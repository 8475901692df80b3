//! Genetic algorithm for the Traveling Salesman Problem.
//!
//! Tours are permutations of indices into a shared point list. Each
//! generation is bred from the previous one with fitness-proportional
//! selection, ordered crossover and swap mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, probabilities, seed)
//! - [`Population`]: One generation plus the breeding step
//! - [`GaRunner`]: Executes the evolutionary loop, tracking the best-ever tour
//! - [`TspResult`]: Best tour found with its distance and fitness history
//!
//! # Submodules
//!
//! - [`operators`]: Permutation initialization, OX1 crossover, swap mutation
//! - [`selection`]: Roulette wheel parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod types;

pub use config::{validate_points, GaConfig};
pub use population::Population;
pub use runner::{GaRunner, TspResult};
pub use types::Individual;
