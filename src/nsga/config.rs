//! Engine configuration.
//!
//! [`NsgaConfig`] holds every parameter that controls a run. Values are
//! stored exactly as given and checked by [`NsgaConfig::validate`]; an
//! out-of-range parameter is rejected before the generational loop starts
//! rather than silently repaired or discovered mid-run.

use super::selection::MatingSelection;
use super::survival::Truncation;
use crate::error::MoeaError;

/// Configuration for an NSGA-II run.
///
/// # Defaults
///
/// ```
/// use u_moea::nsga::NsgaConfig;
///
/// let config = NsgaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 250);
/// ```
///
/// # Builder pattern
///
/// ```
/// use u_moea::nsga::{MatingSelection, NsgaConfig, Truncation};
///
/// let config = NsgaConfig::default()
///     .with_population_size(60)
///     .with_gene_count(30)
///     .with_mating(MatingSelection::CrowdedComparisonTournament)
///     .with_truncation(Truncation::Crowding)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsgaConfig {
    /// Number of individuals kept after each survivor selection.
    ///
    /// The population transiently grows to `population_size +
    /// offspring_count` during combination. Must be at least 2.
    pub population_size: usize,

    /// Genes per decision vector. Must be at least 2 (the ZDT `g`
    /// auxiliary needs a non-empty tail).
    pub gene_count: usize,

    /// Number of generations to run. Zero is valid and returns the ranked
    /// initial population without any reproduction.
    pub max_generations: usize,

    /// Probability of applying crossover to a mating pair, in `[0, 1]`.
    ///
    /// When crossover is skipped, both parents are copied unchanged into
    /// the offspring pipeline (mutation still applies).
    pub crossover_rate: f64,

    /// Per-gene mutation probability, in `[0, 1]`.
    pub mutation_rate: f64,

    /// Offspring produced per generation. `None` uses `population_size`.
    ///
    /// An odd quota discards the surplus child of the final pair.
    pub offspring_count: Option<usize>,

    /// Mating-selection strategy.
    pub mating: MatingSelection,

    /// Policy for truncating the overflowing front.
    pub truncation: Truncation,

    /// Fixed per-objective `(min, max)` normalization bounds for crowding
    /// distance. `None` normalizes against each front's observed ranges.
    pub fixed_bounds: Option<[(f64, f64); 2]>,

    /// Reference point for hypervolume. `None` derives one from the
    /// current front's per-objective maxima scaled by 1.2 plus epsilon.
    pub reference_point: Option<[f64; 2]>,

    /// Whether to record a convergence snapshot series during the run.
    pub track_convergence: bool,

    /// Generations between convergence snapshots. The final generation is
    /// always recorded. Must be nonzero when `track_convergence` is set.
    pub snapshot_interval: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for NsgaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            gene_count: 50,
            max_generations: 250,
            crossover_rate: 0.9,
            mutation_rate: 0.05,
            offspring_count: None,
            mating: MatingSelection::default(),
            truncation: Truncation::default(),
            fixed_bounds: None,
            reference_point: None,
            track_convergence: false,
            snapshot_interval: 10,
            seed: None,
        }
    }
}

impl NsgaConfig {
    /// Sets the population capacity.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of genes per decision vector.
    pub fn with_gene_count(mut self, n: usize) -> Self {
        self.gene_count = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the offspring quota per generation.
    pub fn with_offspring_count(mut self, n: usize) -> Self {
        self.offspring_count = Some(n);
        self
    }

    /// Sets the mating-selection strategy.
    pub fn with_mating(mut self, mating: MatingSelection) -> Self {
        self.mating = mating;
        self
    }

    /// Sets the truncation policy.
    pub fn with_truncation(mut self, truncation: Truncation) -> Self {
        self.truncation = truncation;
        self
    }

    /// Sets fixed crowding normalization bounds per objective.
    pub fn with_fixed_bounds(mut self, bounds: [(f64, f64); 2]) -> Self {
        self.fixed_bounds = Some(bounds);
        self
    }

    /// Sets the hypervolume reference point.
    pub fn with_reference_point(mut self, reference: [f64; 2]) -> Self {
        self.reference_point = Some(reference);
        self
    }

    /// Enables convergence tracking.
    pub fn with_track_convergence(mut self, track: bool) -> Self {
        self.track_convergence = track;
        self
    }

    /// Sets the snapshot interval.
    pub fn with_snapshot_interval(mut self, interval: usize) -> Self {
        self.snapshot_interval = interval;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective offspring quota: the configured count or the population
    /// size.
    pub fn effective_offspring_count(&self) -> usize {
        self.offspring_count.unwrap_or(self.population_size)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`MoeaError::InvalidConfig`] naming the offending parameter.
    pub fn validate(&self) -> Result<(), MoeaError> {
        if self.population_size < 2 {
            return Err(MoeaError::config(
                "population_size",
                format!("must be at least 2, got {}", self.population_size),
            ));
        }
        if self.gene_count < 2 {
            return Err(MoeaError::config(
                "gene_count",
                format!("must be at least 2, got {}", self.gene_count),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(MoeaError::config(
                "crossover_rate",
                format!("must be within [0, 1], got {}", self.crossover_rate),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(MoeaError::config(
                "mutation_rate",
                format!("must be within [0, 1], got {}", self.mutation_rate),
            ));
        }
        if self.offspring_count == Some(0) {
            return Err(MoeaError::config(
                "offspring_count",
                "must be at least 1 when set",
            ));
        }
        if self.track_convergence && self.snapshot_interval == 0 {
            return Err(MoeaError::config(
                "snapshot_interval",
                "must be nonzero when track_convergence is enabled",
            ));
        }
        if let Some(bounds) = self.fixed_bounds {
            for (axis, (lo, hi)) in bounds.iter().enumerate() {
                if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                    return Err(MoeaError::config(
                        "fixed_bounds",
                        format!("objective {axis}: expected finite min < max, got ({lo}, {hi})"),
                    ));
                }
            }
        }
        if let Some(reference) = self.reference_point {
            if reference.iter().any(|r| !r.is_finite()) {
                return Err(MoeaError::config(
                    "reference_point",
                    format!("must be finite, got {reference:?}"),
                ));
            }
        }
        Ok(())
    }
}
