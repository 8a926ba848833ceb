//! Trial outcome and aggregate statistics value types.
//!
//! These are plain value objects: each trial produces one
//! [`TrialOutcome`], a batch of trials reduces to one
//! [`AggregateStats`], and a [`StatsSnapshot`] packages the current
//! results for an external persistence collaborator.

use crate::config::ReportConfig;

/// The result of comparing one reported path against the true path.
///
/// `length_ratio` is `None` when undefined (both paths empty) and
/// `Some(f64::INFINITY)` when the reported path is missing while the
/// true path exists. When the true path is empty but a reported path
/// exists, the value is the reported path's raw length, a degenerate
/// sentinel rather than a true ratio; callers must check true-path
/// emptiness before reading it as a ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialOutcome {
    /// Whether the reported path differs from the true path.
    pub changed: bool,
    /// Reported path length divided by true path length, if defined.
    pub length_ratio: Option<f64>,
}

impl TrialOutcome {
    /// Creates a trial outcome.
    #[must_use]
    pub const fn new(changed: bool, length_ratio: Option<f64>) -> Self {
        Self {
            changed,
            length_ratio,
        }
    }

    /// Returns the length ratio only when it is defined and finite.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_types::TrialOutcome;
    ///
    /// assert_eq!(TrialOutcome::new(false, Some(1.5)).finite_ratio(), Some(1.5));
    /// assert_eq!(TrialOutcome::new(true, Some(f64::INFINITY)).finite_ratio(), None);
    /// assert_eq!(TrialOutcome::new(false, None).finite_ratio(), None);
    /// ```
    #[must_use]
    pub fn finite_ratio(&self) -> Option<f64> {
        self.length_ratio.filter(|r| r.is_finite())
    }
}

/// Summary statistics over a batch of trial outcomes.
///
/// `mean_length_ratio` averages only the defined, finite ratios;
/// outcomes with undefined or infinite ratios still count toward
/// `change_rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateStats {
    /// Fraction of trials whose path changed, in `[0, 1]`.
    pub change_rate: f64,
    /// Mean of the defined, finite length ratios, if any exist.
    pub mean_length_ratio: Option<f64>,
}

impl AggregateStats {
    /// Creates aggregate statistics.
    #[must_use]
    pub const fn new(change_rate: f64, mean_length_ratio: Option<f64>) -> Self {
        Self {
            change_rate,
            mean_length_ratio,
        }
    }
}

/// The record an external persistence collaborator consumes.
///
/// Captures the noise parameters together with whatever results are
/// currently available: aggregate statistics after a batch run, the
/// last single-trial outcome, or neither. No storage format is
/// mandated here; with the `serde` feature the snapshot is directly
/// serializable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    /// Noise standard deviation in effect.
    pub sigma: f64,
    /// Beacon snap radius in effect.
    pub beacon_radius: f64,
    /// Aggregate statistics from the most recent batch run, if any.
    pub aggregate: Option<AggregateStats>,
    /// Outcome of the most recent single trial, if any.
    pub last_outcome: Option<TrialOutcome>,
}

impl StatsSnapshot {
    /// Creates a snapshot from a configuration and the current results.
    #[must_use]
    pub const fn new(
        config: &ReportConfig,
        aggregate: Option<AggregateStats>,
        last_outcome: Option<TrialOutcome>,
    ) -> Self {
        Self {
            sigma: config.sigma(),
            beacon_radius: config.beacon_radius(),
            aggregate,
            last_outcome,
        }
    }
}
