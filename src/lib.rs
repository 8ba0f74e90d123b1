//! Domain-agnostic multi-objective evolutionary optimization.
//!
//! Provides an NSGA-II generational engine and the Pareto machinery
//! around it:
//!
//! - **NSGA-II engine** ([`nsga`]): fast non-dominated sorting,
//!   crowding-distance diversity preservation, fixed-capacity elitist
//!   survivor selection, swappable mating-selection and truncation
//!   policies.
//! - **Quality indicators** ([`indicators`]): hypervolume and spacing
//!   over any non-dominated point set.
//! - **Benchmark problems** ([`problems`]): ZDT1 (convex front) and
//!   ZDT3 (disconnected front).
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no domain-specific concepts and no I/O: a reporting layer
//! drives runs, serializes results, and renders charts. The engine is
//! single-threaded by design; independent runs with different seeds are
//! embarrassingly parallel and each run owns its pseudo-random stream,
//! so an external driver can execute them concurrently.

pub mod error;
pub mod indicators;
pub mod nsga;
pub mod problems;

pub use error::MoeaError;
