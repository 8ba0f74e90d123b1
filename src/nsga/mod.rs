//! NSGA-II: elitist multi-objective genetic algorithm.
//!
//! A generational optimizer for two-objective minimization problems. The
//! user defines the problem by implementing [`BiObjectiveProblem`]; the
//! engine handles ranking, diversity preservation, and survivor selection.
//!
//! # Key Types
//!
//! - [`NsgaConfig`]: run parameters, validated at construction
//! - [`NsgaRunner`]: executes the generational loop
//! - [`NsgaResult`]: final front, population, and statistics
//!
//! # Submodules
//!
//! - [`pareto`]: non-dominated sorting and crowding distance, usable
//!   standalone on bare objective pairs
//! - [`operators`]: single-point crossover and uniform reset mutation
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II*
//! - Zitzler, Deb & Thiele (2000), *Comparison of Multiobjective
//!   Evolutionary Algorithms: Empirical Results*

mod config;
pub mod operators;
pub mod pareto;
mod runner;
mod selection;
mod survival;
mod types;

pub use config::NsgaConfig;
pub use pareto::{crowding_distance, non_dominated_sort, ParetoFronts};
pub use runner::{GenerationSnapshot, NsgaResult, NsgaRunner};
pub use selection::MatingSelection;
pub use survival::{select_survivors, Truncation};
pub use types::{BiObjectiveProblem, Individual, ObjectivePair};
