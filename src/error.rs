//! Error taxonomy for the optimization engine.
//!
//! Two failure classes exist and must stay distinguishable:
//!
//! - [`MoeaError::InvalidConfig`]: a caller supplied out-of-range
//!   parameters. Raised by validation before any evolutionary work starts.
//! - [`MoeaError::InvariantViolation`]: the engine itself broke one of its
//!   structural guarantees (fronts no longer partition the population,
//!   selection produced the wrong cardinality). Indicates a bug in this
//!   crate, never a user mistake.
//!
//! Numeric edge cases at the objective-evaluation boundary (a negative
//! radicand from out-of-domain genes) are clamped at the call site and do
//! not surface as errors.

/// Errors produced by the NSGA-II engine.
#[derive(Debug, thiserror::Error)]
pub enum MoeaError {
    /// A configuration parameter is outside its documented range.
    ///
    /// Checked by [`NsgaConfig::validate`](crate::nsga::NsgaConfig::validate)
    /// before the generational loop starts; the loop itself never raises this.
    #[error("invalid configuration: {parameter}: {reason}")]
    InvalidConfig {
        /// Name of the offending configuration field.
        parameter: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// An internal structural guarantee was broken mid-run.
    #[error("invariant violation (engine bug): {0}")]
    InvariantViolation(String),
}

impl MoeaError {
    /// Shorthand for constructing an [`MoeaError::InvalidConfig`].
    pub(crate) fn config(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter,
            reason: reason.into(),
        }
    }
}
