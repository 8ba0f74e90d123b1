//! Core types for the NSGA-II engine.
//!
//! The central trait, [`BiObjectiveProblem`], defines the contract between
//! the generic engine and domain-specific problem implementations: how to
//! sample a gene and how to map a decision vector to two objective values.

use rand::Rng;

/// A pair of objective values `(f1, f2)`. Both objectives are **minimized**.
pub type ObjectivePair = [f64; 2];

/// Defines a two-objective optimization problem over a gene vector.
///
/// The engine stores every decision vector as `Vec<f64>` regardless of the
/// problem's encoding. Integer-encoded problems sample whole-number values
/// from [`sample_gene`](BiObjectiveProblem::sample_gene) and scale them
/// inside [`evaluate`](BiObjectiveProblem::evaluate); the engine never needs
/// to know the difference.
///
/// # Contract
///
/// - `evaluate` must be pure and deterministic: same genes, same objectives,
///   no side effects. The engine caches objective values and only
///   re-evaluates when genes change.
/// - `sample_gene` must draw uniformly over the gene's full domain. It is
///   used both for initialization and for reset mutation.
///
/// # Thread Safety
///
/// `Send + Sync` so that independent runs can execute concurrently from an
/// external driver. The engine itself is single-threaded.
pub trait BiObjectiveProblem: Send + Sync {
    /// Draws one gene uniformly from the problem's per-gene domain.
    fn sample_gene<R: Rng>(&self, rng: &mut R) -> f64;

    /// Maps a decision vector to its two objective values.
    ///
    /// Lower values are better in both positions.
    fn evaluate(&self, genes: &[f64]) -> ObjectivePair;
}

/// A candidate solution: decision vector, cached objectives, and the
/// NSGA-II bookkeeping attached by ranking and truncation.
///
/// Individuals are value objects. A population replacement discards the
/// prior generation wholesale; survivors are copied by value and no
/// identity persists across generations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Decision vector. Fixed length within a run.
    pub genes: Vec<f64>,

    /// Cached objective values for `genes`. Recomputed whenever the genes
    /// change.
    pub objectives: ObjectivePair,

    /// Pareto rank (0 = non-dominated front). Assigned by ranking.
    pub rank: usize,

    /// Crowding distance within this individual's front. Only comparable
    /// between individuals of the same rank.
    pub crowding: f64,
}

impl Individual {
    /// Creates an individual from genes, evaluating it immediately.
    ///
    /// Rank and crowding start at placeholder values and are overwritten
    /// by the next ranking pass.
    pub fn new<P: BiObjectiveProblem>(genes: Vec<f64>, problem: &P) -> Self {
        let objectives = problem.evaluate(&genes);
        Self {
            genes,
            objectives,
            rank: usize::MAX,
            crowding: 0.0,
        }
    }
}
