//! Configuration for the reported-position model.

use crate::error::NavError;

/// Configuration for position reporting and trial runs.
///
/// Bundles the Gaussian noise level, the beacon snap radius, and an
/// optional RNG seed for reproducible experiments.
///
/// Values are validated with [`ReportConfig::validate`] rather than
/// clamped: a negative sigma or radius is a caller contract violation
/// and is rejected at the boundary.
///
/// # Example
///
/// ```
/// use nav_types::ReportConfig;
///
/// let config = ReportConfig::new()
///     .with_sigma(0.5)
///     .with_beacon_radius(1.0)
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// assert!(ReportConfig::new().with_sigma(-0.1).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportConfig {
    /// Standard deviation of the per-axis Gaussian noise.
    sigma: f64,
    /// Inclusive snap radius around each beacon.
    beacon_radius: f64,
    /// Optional seed for deterministic noise draws.
    seed: Option<u64>,
}

impl ReportConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults: `sigma = 0.3`, `beacon_radius = 1.0`, no seed
    /// (entropy-seeded RNG).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sigma: 0.3,
            beacon_radius: 1.0,
            seed: None,
        }
    }

    /// Sets the noise standard deviation.
    #[must_use]
    pub const fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Sets the beacon snap radius.
    #[must_use]
    pub const fn with_beacon_radius(mut self, radius: f64) -> Self {
        self.beacon_radius = radius;
        self
    }

    /// Sets a fixed RNG seed for reproducible trials.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Removes the seed (entropy-seeded RNG).
    #[must_use]
    pub const fn without_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Returns the noise standard deviation.
    #[must_use]
    pub const fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the beacon snap radius.
    #[must_use]
    pub const fn beacon_radius(&self) -> f64 {
        self.beacon_radius
    }

    /// Returns the seed, if set.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if sigma or the beacon
    /// radius is negative or non-finite. Zero is valid for both:
    /// `sigma = 0` produces exact reports and `beacon_radius = 0`
    /// only snaps positions that land exactly on a beacon.
    pub fn validate(&self) -> Result<(), NavError> {
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(NavError::invalid_config(format!(
                "sigma must be non-negative and finite, got {}",
                self.sigma
            )));
        }
        if !self.beacon_radius.is_finite() || self.beacon_radius < 0.0 {
            return Err(NavError::invalid_config(format!(
                "beacon radius must be non-negative and finite, got {}",
                self.beacon_radius
            )));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}
