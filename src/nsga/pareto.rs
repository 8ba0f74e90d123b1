//! Pareto dominance tools: non-dominated sorting and crowding distance.
//!
//! Both functions are pure and operate on bare objective pairs, so external
//! reporting layers can rank arbitrary point sets without constructing a
//! population.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II", IEEE Transactions on Evolutionary Computation,
//!   6(2), 182-197

use super::types::ObjectivePair;

/// Result of non-dominated sorting.
///
/// `ranks[i]` is the Pareto rank of the point at index `i`; `fronts[r]`
/// lists the indices of rank `r`. The fronts partition the input index set
/// exactly: every index appears in exactly one front.
#[derive(Debug, Clone)]
pub struct ParetoFronts {
    /// Pareto rank per point (0 = non-dominated).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` holds rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting over two-objective points (minimization).
///
/// # Algorithm (Deb et al., 2002)
///
/// An O(M²) pairwise pass records, for every point, which points it
/// dominates and how many points dominate it. Points with domination
/// count 0 form front 0; subsequent fronts are peeled by decrementing the
/// counts of everything the current front dominates. Terminates after at
/// most M peels.
///
/// Equal objective pairs dominate neither direction and land in the same
/// front. An empty input yields empty `ranks` and no fronts.
///
/// # Example
///
/// ```
/// use u_moea::nsga::non_dominated_sort;
///
/// let objectives = vec![
///     [0.1, 0.9],   // trade-off
///     [0.9, 0.1],   // trade-off
///     [0.5, 0.5],   // dominated by neither
///     [0.95, 0.95], // dominated
/// ];
/// let result = non_dominated_sort(&objectives);
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(result.fronts.len(), 2);
/// ```
pub fn non_dominated_sort(objectives: &[ObjectivePair]) -> ParetoFronts {
    let n = objectives.len();
    if n == 0 {
        return ParetoFronts {
            ranks: Vec::new(),
            fronts: Vec::new(),
        };
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance(&objectives[i], &objectives[j]) {
                Dominance::Left => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        if domination_count[i] == 0 {
            ranks[i] = 0;
            front_0.push(i);
        }
    }

    let mut fronts = vec![front_0];
    loop {
        let current = fronts
            .last()
            .expect("fronts is initialized with front_0; never empty");
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len();
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    ParetoFronts { ranks, fronts }
}

/// Dominance comparison result.
#[derive(Debug, PartialEq)]
enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Pareto dominance between two objective pairs (minimization).
///
/// `a` dominates `b` iff `a <= b` in both objectives and `a < b` in at
/// least one.
fn dominance(a: &ObjectivePair, b: &ObjectivePair) -> Dominance {
    let mut a_better = false;
    let mut b_better = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better = true;
        } else if vb < va {
            b_better = true;
        }
    }

    match (a_better, b_better) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Crowding distance assignment within one front (Deb et al., 2002).
///
/// For each objective: sort the front by that objective, give the two
/// extremes infinite distance, and add to every interior point the gap
/// between its immediate neighbors divided by the objective's range.
/// A zero range contributes nothing. Fronts of two or fewer points are
/// all boundaries and come back as infinity; in particular a singleton
/// front, whose neighbors are undefined on both sides.
///
/// `fixed_bounds`, when given, replaces the observed per-objective
/// min/max as the normalization range `(lo, hi)`, so crowding stays
/// comparable across generations instead of adapting to the current
/// front's spread.
///
/// # Example
///
/// ```
/// use u_moea::nsga::crowding_distance;
///
/// let distances = crowding_distance(&[[0.0, 1.0], [0.5, 0.5], [1.0, 0.0]], None);
/// assert!(distances[0].is_infinite());
/// assert!(distances[1].is_finite());
/// assert!(distances[2].is_infinite());
/// ```
pub fn crowding_distance(
    objectives: &[ObjectivePair],
    fixed_bounds: Option<[(f64, f64); 2]>,
) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let mut distances = vec![0.0f64; n];

    for obj_idx in 0..2 {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| {
            objectives[a][obj_idx]
                .partial_cmp(&objectives[b][obj_idx])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let range = match fixed_bounds {
            Some(bounds) => bounds[obj_idx].1 - bounds[obj_idx].0,
            None => objectives[indices[n - 1]][obj_idx] - objectives[indices[0]][obj_idx],
        };

        if range > 0.0 {
            for i in 1..(n - 1) {
                let prev = objectives[indices[i - 1]][obj_idx];
                let next = objectives[indices[i + 1]][obj_idx];
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    distances
}

// ============================================================================
// Tests
// ============================================================================
