//! Environmental selection: truncating a combined population to capacity.
//!
//! Whole fronts are admitted in rank order while they fit. The first front
//! that would overflow the capacity is admitted only partially, and the
//! [`Truncation`] policy decides which of its members survive.

use super::pareto::{crowding_distance, ParetoFronts};
use super::types::Individual;
use crate::error::MoeaError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Policy for partially admitting the overflowing front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Truncation {
    /// Keep the members with the largest crowding distance (NSGA-II).
    #[default]
    Crowding,

    /// Keep a uniformly random subset. Ablation policy: isolates how much
    /// of the algorithm's diversity comes from crowding truncation.
    NoCrowding,
}

/// Truncates `combined` to exactly `capacity` survivors.
///
/// `fronts` must be the non-dominated sort of `combined`'s objective
/// vectors. Survivors are copied out by value with their rank and crowding
/// distance filled in; crowding is computed per front, against
/// `fixed_bounds` when provided and the front's observed objective ranges
/// otherwise.
///
/// Random tie-break subsets for [`Truncation::NoCrowding`] draw from `rng`,
/// the run's own stream, so truncation stays reproducible from the seed.
///
/// # Errors
///
/// [`MoeaError::InvariantViolation`] if the fronts do not cover enough
/// individuals to fill the capacity. The engine always ranks a combined
/// population of at least `capacity` members, so falling short means the
/// partition itself is broken.
pub fn select_survivors<R: Rng>(
    combined: &[Individual],
    fronts: &ParetoFronts,
    capacity: usize,
    truncation: Truncation,
    fixed_bounds: Option<[(f64, f64); 2]>,
    rng: &mut R,
) -> Result<Vec<Individual>, MoeaError> {
    let mut survivors: Vec<Individual> = Vec::with_capacity(capacity);

    for (rank, front) in fronts.fronts.iter().enumerate() {
        let remaining = capacity - survivors.len();
        if remaining == 0 {
            break;
        }

        let front_objectives: Vec<_> = front.iter().map(|&i| combined[i].objectives).collect();
        let crowding = crowding_distance(&front_objectives, fixed_bounds);

        let admit = |member: usize| -> Individual {
            let mut ind = combined[front[member]].clone();
            ind.rank = rank;
            ind.crowding = crowding[member];
            ind
        };

        if front.len() <= remaining {
            survivors.extend((0..front.len()).map(admit));
            continue;
        }

        // Overflowing front: admit `remaining` members per policy.
        let mut order: Vec<usize> = (0..front.len()).collect();
        match truncation {
            Truncation::Crowding => {
                order.sort_by(|&a, &b| {
                    crowding[b]
                        .partial_cmp(&crowding[a])
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
            Truncation::NoCrowding => {
                order.shuffle(rng);
            }
        }
        survivors.extend(order[..remaining].iter().map(|&m| admit(m)));
        break;
    }

    if survivors.len() != capacity {
        return Err(MoeaError::InvariantViolation(format!(
            "environmental selection produced {} of {} survivors",
            survivors.len(),
            capacity
        )));
    }

    Ok(survivors)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nsga::pareto::non_dominated_sort;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_individuals(objectives: &[[f64; 2]]) -> Vec<Individual> {
        objectives
            .iter()
            .map(|&objs| Individual {
                genes: vec![0.0, 0.0],
                objectives: objs,
                rank: usize::MAX,
                crowding: 0.0,
            })
            .collect()
    }

    fn select(
        objectives: &[[f64; 2]],
        capacity: usize,
        truncation: Truncation,
    ) -> Result<Vec<Individual>, MoeaError> {
        let combined = make_individuals(objectives);
        let fronts = non_dominated_sort(objectives);
        let mut rng = StdRng::seed_from_u64(42);
        select_survivors(&combined, &fronts, capacity, truncation, None, &mut rng)
    }

    // ---- Whole-front admission ----

    #[test]
    fn test_exact_fit_admits_whole_fronts() {
        // Front 0: two trade-off points. Front 1: one dominated point.
        let objs = [[0.1, 0.9], [0.9, 0.1], [0.95, 0.95]];
        let survivors = select(&objs, 3, Truncation::Crowding).unwrap();
        assert_eq!(survivors.len(), 3);
        assert_eq!(
            survivors.iter().filter(|s| s.rank == 0).count(),
            2,
            "both rank-0 members survive"
        );
        assert_eq!(survivors.iter().filter(|s| s.rank == 1).count(), 1);
    }

    #[test]
    fn test_lower_ranks_admitted_before_higher() {
        let objs = [[0.1, 0.9], [0.9, 0.1], [0.95, 0.95], [0.99, 0.99]];
        let survivors = select(&objs, 3, Truncation::Crowding).unwrap();
        // Capacity 3: both rank-0 and the single rank-1; rank-2 cut.
        assert!(survivors.iter().all(|s| s.rank <= 1));
    }

    // ---- Partial admission, crowding policy ----

    #[test]
    fn test_crowding_truncation_keeps_extremes() {
        // One front of 5 points on a line; capacity 3. The two boundary
        // points have infinite crowding and must survive.
        let objs = [
            [0.0, 4.0],
            [1.0, 3.0],
            [2.0, 2.0],
            [3.0, 1.0],
            [4.0, 0.0],
        ];
        let survivors = select(&objs, 3, Truncation::Crowding).unwrap();
        assert_eq!(survivors.len(), 3);

        let kept: Vec<_> = survivors.iter().map(|s| s.objectives).collect();
        assert!(kept.contains(&[0.0, 4.0]), "low-f1 extreme lost: {kept:?}");
        assert!(kept.contains(&[4.0, 0.0]), "high-f1 extreme lost: {kept:?}");
    }

    #[test]
    fn test_selection_cardinality_is_exact() {
        let objs = [
            [0.0, 4.0],
            [1.0, 3.0],
            [2.0, 2.0],
            [3.0, 1.0],
            [4.0, 0.0],
            [5.0, 5.0],
        ];
        for capacity in 1..=6 {
            for truncation in [Truncation::Crowding, Truncation::NoCrowding] {
                let survivors = select(&objs, capacity, truncation).unwrap();
                assert_eq!(survivors.len(), capacity, "policy {truncation:?}");
            }
        }
    }

    // ---- Partial admission, ablation policy ----

    #[test]
    fn test_no_crowding_draws_from_overflowing_front() {
        let objs = [
            [0.0, 4.0],
            [1.0, 3.0],
            [2.0, 2.0],
            [3.0, 1.0],
            [4.0, 0.0],
        ];
        let survivors = select(&objs, 2, Truncation::NoCrowding).unwrap();
        assert_eq!(survivors.len(), 2);
        assert!(survivors.iter().all(|s| s.rank == 0));
    }

    #[test]
    fn test_no_crowding_is_seed_reproducible() {
        let objs = [
            [0.0, 4.0],
            [1.0, 3.0],
            [2.0, 2.0],
            [3.0, 1.0],
            [4.0, 0.0],
        ];
        let combined = make_individuals(&objs);
        let fronts = non_dominated_sort(&objs);

        let pick = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            select_survivors(&combined, &fronts, 2, Truncation::NoCrowding, None, &mut rng)
                .unwrap()
                .iter()
                .map(|s| s.objectives)
                .collect::<Vec<_>>()
        };
        assert_eq!(pick(7), pick(7));
    }

    // ---- Crowding metadata on survivors ----

    #[test]
    fn test_survivors_carry_rank_and_crowding() {
        let objs = [[0.1, 0.9], [0.5, 0.5], [0.9, 0.1], [0.95, 0.95]];
        let survivors = select(&objs, 4, Truncation::Crowding).unwrap();
        let rank0: Vec<_> = survivors.iter().filter(|s| s.rank == 0).collect();
        assert_eq!(rank0.len(), 3);
        // Extremes infinite, interior finite.
        assert_eq!(
            rank0.iter().filter(|s| s.crowding.is_infinite()).count(),
            2
        );
        // Singleton rank-1 front: infinite by the undefined-neighbors rule.
        let rank1: Vec<_> = survivors.iter().filter(|s| s.rank == 1).collect();
        assert!(rank1[0].crowding.is_infinite());
    }

    // ---- Invariant surface ----

    #[test]
    fn test_capacity_beyond_population_is_invariant_violation() {
        let objs = [[0.1, 0.9], [0.9, 0.1]];
        let err = select(&objs, 5, Truncation::Crowding).unwrap_err();
        assert!(matches!(err, MoeaError::InvariantViolation(_)));
    }
}
