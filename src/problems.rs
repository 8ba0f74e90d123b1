//! Two-objective benchmark problems.
//!
//! Standard ZDT test functions used to exercise the NSGA-II engine:
//!
//! - [`Zdt1`]: convex Pareto-optimal front, integer-encoded genes.
//! - [`Zdt3`]: disconnected Pareto-optimal front, real-encoded genes.
//!
//! Both minimize both objectives, share the same `g` auxiliary function,
//! and reach their optimal front at `x2 = … = xN = 0`.
//!
//! # References
//!
//! - Zitzler, Deb & Thiele (2000), "Comparison of Multiobjective
//!   Evolutionary Algorithms: Empirical Results"

use crate::nsga::{BiObjectiveProblem, ObjectivePair};
use rand::Rng;

/// Upper bound of the integer gene domain used by [`Zdt1`].
const ZDT1_GENE_MAX: u32 = 1000;

/// `g(x) = 1 + 9 * mean(x2..xN)` over genes already scaled to `[0, 1]`.
///
/// Defined as 1.0 for a single-gene vector (empty tail), though the engine
/// rejects `gene_count < 2` before ever evaluating one.
fn g_aux(tail: &[f64]) -> f64 {
    if tail.is_empty() {
        return 1.0;
    }
    let mean = tail.iter().sum::<f64>() / tail.len() as f64;
    1.0 + 9.0 * mean
}

/// Ratio `f1 / g`, clamped to `>= 0` before it reaches a square root.
///
/// Upstream operators are expected to respect gene bounds, so a negative
/// ratio can only come from out-of-domain genes; clamping keeps the
/// evaluation total rather than poisoning the run with NaN.
fn sqrt_ratio(f1: f64, g: f64) -> f64 {
    (f1 / g).max(0.0)
}

/// ZDT1: convex Pareto front, integer-encoded.
///
/// Genes are whole numbers in `0..=1000`, scaled to `[0, 1]` during
/// evaluation:
///
/// - `f1 = x1`
/// - `f2 = g * (1 - sqrt(f1 / g))`
///
/// The Pareto-optimal front is `f2 = 1 - sqrt(f1)` on `g = 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zdt1;

impl BiObjectiveProblem for Zdt1 {
    fn sample_gene<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(0..=ZDT1_GENE_MAX) as f64
    }

    fn evaluate(&self, genes: &[f64]) -> ObjectivePair {
        let scaled: Vec<f64> = genes.iter().map(|&x| x / ZDT1_GENE_MAX as f64).collect();
        let f1 = scaled[0];
        let g = g_aux(&scaled[1..]);
        let f2 = g * (1.0 - sqrt_ratio(f1, g).sqrt());
        [f1, f2]
    }
}

/// ZDT3: disconnected Pareto front, real-encoded.
///
/// Genes are reals in `[0, 1]`:
///
/// - `f1 = x1`
/// - `f2 = g * (1 - sqrt(f1 / g) - (f1 / g) * sin(10 * pi * f1))`
///
/// The sine term splits the optimal front into several disjoint segments,
/// so rank-0 sets legitimately contain multiple disconnected clusters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zdt3;

impl BiObjectiveProblem for Zdt3 {
    fn sample_gene<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(0.0..=1.0)
    }

    fn evaluate(&self, genes: &[f64]) -> ObjectivePair {
        let f1 = genes[0];
        let g = g_aux(&genes[1..]);
        let ratio = sqrt_ratio(f1, g);
        let f2 = g * (1.0 - ratio.sqrt() - ratio * (10.0 * std::f64::consts::PI * f1).sin());
        [f1, f2]
    }
}
