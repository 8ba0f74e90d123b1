//! Genetic operators for gene-vector chromosomes.
//!
//! Free-function operators over `&[f64]` decision vectors:
//!
//! - [`single_point_crossover`]: swap gene tails at a random cut
//! - [`uniform_reset_mutation`]: per-gene resample over the domain
//!
//! Both draw every random decision from the caller-supplied RNG so a run
//! stays reproducible from its seed.

use super::types::BiObjectiveProblem;
use rand::Rng;

/// Single-point crossover.
///
/// Picks a cut index uniformly from `[1, N-1]` and produces two children by
/// exchanging the gene tails of the parents at the cut. Parents of fewer
/// than two genes have no interior cut point and are returned unchanged.
///
/// # Panics
///
/// Panics if the parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);

    let mut child1 = Vec::with_capacity(n);
    child1.extend_from_slice(&parent1[..cut]);
    child1.extend_from_slice(&parent2[cut..]);

    let mut child2 = Vec::with_capacity(n);
    child2.extend_from_slice(&parent2[..cut]);
    child2.extend_from_slice(&parent1[cut..]);

    (child1, child2)
}

/// Uniform reset mutation.
///
/// Visits every gene independently; with probability `rate` the gene is
/// replaced by a fresh uniform sample from the problem's gene domain.
/// Returns the number of genes mutated.
pub fn uniform_reset_mutation<P: BiObjectiveProblem, R: Rng>(
    genes: &mut [f64],
    problem: &P,
    rate: f64,
    rng: &mut R,
) -> usize {
    let mut mutated = 0;
    for gene in genes.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            *gene = problem.sample_gene(rng);
            mutated += 1;
        }
    }
    mutated
}

// ============================================================================
// Tests
// ============================================================================
