//! Mating-selection strategies.
//!
//! Selection determines which individuals become parents for crossover.
//! The default, [`MatingSelection::UniformRandom`], picks two candidates
//! uniformly and returns either with equal probability: no selection
//! pressure at all. That is deliberately preserved as the historical
//! default behavior of this engine; the tournament variants implement the
//! canonical NSGA-II mating pressure and can be swapped in without
//! touching the runner.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II" (crowded-comparison operator, section V)

use super::types::Individual;
use rand::Rng;

/// Strategy for choosing mating parents from the current population.
///
/// All strategies assume the population carries up-to-date rank and
/// crowding values from the last ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatingSelection {
    /// Draw two candidates uniformly at random and return one of them
    /// with probability 1/2, regardless of dominance.
    ///
    /// Effectively non-elitist parent selection; elitism comes entirely
    /// from survivor truncation.
    #[default]
    UniformRandom,

    /// Binary tournament on Pareto rank: the lower-ranked candidate wins,
    /// ties broken by coin flip.
    DominanceTournament,

    /// Binary tournament on the crowded-comparison operator: lower rank
    /// wins; equal ranks are decided by the larger crowding distance;
    /// a full tie falls back to a coin flip.
    CrowdedComparisonTournament,
}

impl MatingSelection {
    /// Selects a parent index from the population.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let n = population.len();
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);

        match self {
            MatingSelection::UniformRandom => {
                if rng.random_range(0.0..1.0) < 0.5 {
                    a
                } else {
                    b
                }
            }
            MatingSelection::DominanceTournament => {
                match population[a].rank.cmp(&population[b].rank) {
                    std::cmp::Ordering::Less => a,
                    std::cmp::Ordering::Greater => b,
                    std::cmp::Ordering::Equal => coin_flip(a, b, rng),
                }
            }
            MatingSelection::CrowdedComparisonTournament => {
                match population[a].rank.cmp(&population[b].rank) {
                    std::cmp::Ordering::Less => a,
                    std::cmp::Ordering::Greater => b,
                    std::cmp::Ordering::Equal => {
                        let ca = population[a].crowding;
                        let cb = population[b].crowding;
                        if ca > cb {
                            a
                        } else if cb > ca {
                            b
                        } else {
                            coin_flip(a, b, rng)
                        }
                    }
                }
            }
        }
    }
}

fn coin_flip<R: Rng>(a: usize, b: usize, rng: &mut R) -> usize {
    if rng.random_range(0.0..1.0) < 0.5 {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_population(ranks_and_crowding: &[(usize, f64)]) -> Vec<Individual> {
        ranks_and_crowding
            .iter()
            .map(|&(rank, crowding)| Individual {
                genes: vec![0.0, 0.0],
                objectives: [0.0, 0.0],
                rank,
                crowding,
            })
            .collect()
    }

    #[test]
    fn test_uniform_random_ignores_rank() {
        // One far superior individual must not be favored.
        let pop = make_population(&[(0, f64::INFINITY), (5, 0.0), (5, 0.0), (5, 0.0)]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[MatingSelection::UniformRandom.select(&pop, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_dominance_tournament_favors_lower_rank() {
        let pop = make_population(&[(0, 0.0), (1, 0.0), (2, 0.0), (3, 0.0)]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[MatingSelection::DominanceTournament.select(&pop, &mut rng)] += 1;
        }
        assert!(
            counts[0] > counts[3],
            "rank 0 should beat rank 3: {counts:?}"
        );
    }

    #[test]
    fn test_crowded_comparison_breaks_rank_ties_by_crowding() {
        // Same rank everywhere; crowding decides.
        let pop = make_population(&[(0, 10.0), (0, 0.1), (0, 0.1), (0, 0.1)]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[MatingSelection::CrowdedComparisonTournament.select(&pop, &mut rng)] += 1;
        }
        assert!(
            counts[0] > counts[1] && counts[0] > counts[2] && counts[0] > counts[3],
            "most crowded-distant should win ties: {counts:?}"
        );
    }

    #[test]
    fn test_crowded_comparison_rank_beats_crowding() {
        let pop = make_population(&[(0, 0.0), (1, f64::INFINITY)]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut rank0 = 0u32;
        let n = 10_000;
        for _ in 0..n {
            if MatingSelection::CrowdedComparisonTournament.select(&pop, &mut rng) == 0 {
                rank0 += 1;
            }
        }
        // Whenever both candidates differ, rank 0 wins; same-candidate
        // draws keep it from being 100%.
        assert!(rank0 > 6000, "rank should dominate crowding: {rank0}/{n}");
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[(0, 0.0)]);
        let mut rng = StdRng::seed_from_u64(42);
        for strategy in [
            MatingSelection::UniformRandom,
            MatingSelection::DominanceTournament,
            MatingSelection::CrowdedComparisonTournament,
        ] {
            assert_eq!(strategy.select(&pop, &mut rng), 0);
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Individual> = Vec::new();
        let mut rng = StdRng::seed_from_u64(42);
        MatingSelection::UniformRandom.select(&pop, &mut rng);
    }

    #[test]
    fn test_default_is_uniform_random() {
        assert_eq!(MatingSelection::default(), MatingSelection::UniformRandom);
    }
}
