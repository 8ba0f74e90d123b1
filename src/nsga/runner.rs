//! NSGA-II generational loop execution.
//!
//! [`NsgaRunner`] drives the complete evolutionary process:
//! initialize → (evaluate → reproduce → combine → rank → select)* →
//! terminate. Every stochastic decision (initialization, mating
//! selection, crossover cut, per-gene mutation, truncation tie-breaks)
//! draws from a single run-owned RNG, so a seed fully determines a run
//! and independent runs never share state.

use super::config::NsgaConfig;
use super::operators::{single_point_crossover, uniform_reset_mutation};
use super::pareto::{crowding_distance, non_dominated_sort, ParetoFronts};
use super::survival::select_survivors;
use super::types::{BiObjectiveProblem, Individual, ObjectivePair};
use crate::error::MoeaError;
use crate::indicators::{derived_reference, hypervolume, spacing};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One recorded point of the convergence series.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationSnapshot {
    /// Generation counter at recording time (1-based; 0 for a run with
    /// zero generations).
    pub generation: usize,

    /// Hypervolume of the current front 0 against the configured or
    /// derived reference point.
    pub hypervolume: f64,

    /// Spacing of the current front 0.
    pub spacing: f64,

    /// Number of rank-0 individuals.
    pub front0_size: usize,
}

/// Result of an NSGA-II run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsgaResult {
    /// The final non-dominated set (rank 0), genes and objectives.
    pub front: Vec<Individual>,

    /// The full final population, exactly `population_size` members.
    pub population: Vec<Individual>,

    /// Generations executed.
    pub generations: usize,

    /// Total objective evaluations performed across the run.
    pub evaluations: usize,

    /// Convergence series; empty unless `track_convergence` was set.
    pub convergence: Vec<GenerationSnapshot>,
}

/// Executes the NSGA-II loop.
///
/// # Usage
///
/// ```
/// use u_moea::nsga::{NsgaConfig, NsgaRunner};
/// use u_moea::problems::Zdt1;
///
/// let config = NsgaConfig::default()
///     .with_population_size(20)
///     .with_gene_count(10)
///     .with_max_generations(5)
///     .with_seed(42);
/// let result = NsgaRunner::run(&Zdt1, &config).unwrap();
/// assert!(!result.front.is_empty());
/// ```
pub struct NsgaRunner;

impl NsgaRunner {
    /// Runs the optimization.
    ///
    /// # Errors
    ///
    /// - [`MoeaError::InvalidConfig`] if the configuration fails
    ///   validation; nothing is evaluated in that case.
    /// - [`MoeaError::InvariantViolation`] if the engine breaks one of its
    ///   structural guarantees mid-run (a bug in this crate).
    pub fn run<P: BiObjectiveProblem>(
        problem: &P,
        config: &NsgaConfig,
    ) -> Result<NsgaResult, MoeaError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut evaluations = 0usize;

        // Initialize: K random individuals, evaluated at construction.
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| {
                let genes = (0..config.gene_count)
                    .map(|_| problem.sample_gene(&mut rng))
                    .collect();
                evaluations += 1;
                Individual::new(genes, problem)
            })
            .collect();

        // Rank the initial population so mating tournaments and a
        // zero-generation result have dominance data to work with.
        assign_ranks(&mut population, config.fixed_bounds)?;

        let mut convergence = Vec::new();
        if config.track_convergence && config.max_generations == 0 {
            convergence.push(record_snapshot(0, &population, config));
        }

        let quota = config.effective_offspring_count();

        for gen in 0..config.max_generations {
            // Reproduce: fill the offspring quota pair by pair.
            let mut offspring: Vec<Individual> = Vec::with_capacity(quota);
            while offspring.len() < quota {
                let i1 = config.mating.select(&population, &mut rng);
                let i2 = config.mating.select(&population, &mut rng);

                let (mut g1, mut g2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    single_point_crossover(
                        &population[i1].genes,
                        &population[i2].genes,
                        &mut rng,
                    )
                } else {
                    (population[i1].genes.clone(), population[i2].genes.clone())
                };

                uniform_reset_mutation(&mut g1, problem, config.mutation_rate, &mut rng);
                evaluations += 1;
                offspring.push(Individual::new(g1, problem));

                // An odd quota discards the surplus child of the final pair.
                if offspring.len() < quota {
                    uniform_reset_mutation(&mut g2, problem, config.mutation_rate, &mut rng);
                    evaluations += 1;
                    offspring.push(Individual::new(g2, problem));
                }
            }

            // Combine: parents ∪ offspring, transiently up to 2K.
            let mut combined = std::mem::take(&mut population);
            combined.extend(offspring);

            // Rank.
            let objectives: Vec<ObjectivePair> =
                combined.iter().map(|ind| ind.objectives).collect();
            let fronts = non_dominated_sort(&objectives);
            verify_partition(&fronts, combined.len())?;

            // Select.
            population = select_survivors(
                &combined,
                &fronts,
                config.population_size,
                config.truncation,
                config.fixed_bounds,
                &mut rng,
            )?;

            // Advance.
            let counter = gen + 1;
            tracing::trace!(generation = counter, "generation complete");
            if config.track_convergence
                && (counter % config.snapshot_interval == 0 || counter == config.max_generations)
            {
                let snapshot = record_snapshot(counter, &population, config);
                tracing::debug!(
                    generation = snapshot.generation,
                    hypervolume = snapshot.hypervolume,
                    spacing = snapshot.spacing,
                    front0_size = snapshot.front0_size,
                    "convergence snapshot"
                );
                convergence.push(snapshot);
            }
        }

        let front: Vec<Individual> = population
            .iter()
            .filter(|ind| ind.rank == 0)
            .cloned()
            .collect();

        tracing::debug!(
            generations = config.max_generations,
            evaluations,
            front0_size = front.len(),
            "run complete"
        );

        Ok(NsgaResult {
            front,
            population,
            generations: config.max_generations,
            evaluations,
            convergence,
        })
    }
}

/// Ranks a population in place: Pareto rank plus per-front crowding.
fn assign_ranks(
    population: &mut [Individual],
    fixed_bounds: Option<[(f64, f64); 2]>,
) -> Result<(), MoeaError> {
    let objectives: Vec<ObjectivePair> = population.iter().map(|ind| ind.objectives).collect();
    let sorted = non_dominated_sort(&objectives);
    verify_partition(&sorted, population.len())?;

    for (rank, front) in sorted.fronts.iter().enumerate() {
        let front_objectives: Vec<ObjectivePair> =
            front.iter().map(|&i| objectives[i]).collect();
        let crowding = crowding_distance(&front_objectives, fixed_bounds);
        for (k, &i) in front.iter().enumerate() {
            population[i].rank = rank;
            population[i].crowding = crowding[k];
        }
    }
    Ok(())
}

/// Checks that the fronts cover every index exactly once.
fn verify_partition(fronts: &ParetoFronts, expected: usize) -> Result<(), MoeaError> {
    let covered: usize = fronts.fronts.iter().map(Vec::len).sum();
    if covered != expected {
        return Err(MoeaError::InvariantViolation(format!(
            "fronts cover {covered} of {expected} individuals"
        )));
    }
    Ok(())
}

/// Computes one convergence snapshot over the population's front 0.
fn record_snapshot(
    generation: usize,
    population: &[Individual],
    config: &NsgaConfig,
) -> GenerationSnapshot {
    let front: Vec<ObjectivePair> = population
        .iter()
        .filter(|ind| ind.rank == 0)
        .map(|ind| ind.objectives)
        .collect();

    let reference = config
        .reference_point
        .unwrap_or_else(|| derived_reference(&front));

    GenerationSnapshot {
        generation,
        hypervolume: hypervolume(&front, reference),
        spacing: spacing(&front),
        front0_size: front.len(),
    }
}

// ============================================================================
// Tests
// ============================================================================
