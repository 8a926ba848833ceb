//! Stochastic reported-position model.

use nav_types::{GridCell, NavError, NavGrid, ReportConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::noise::NoiseModel;
use crate::resolve::{resolve_cell, snap_to_beacon};

/// Produces reported grid positions from true positions.
///
/// Each report perturbs the true position with per-axis Gaussian noise,
/// snaps to the nearest beacon if one lies within the configured
/// radius of the noisy point, and otherwise resolves the noisy point
/// back to the nearest in-bounds cell. The reported cell may be a wall.
///
/// The generator is injectable for deterministic tests; the default
/// constructor seeds from [`ReportConfig::seed`] when one is set and
/// from OS entropy otherwise.
///
/// # Example
///
/// ```
/// use nav_report::PositionReporter;
/// use nav_types::{GridCell, NavGrid, ReportConfig};
///
/// let grid = NavGrid::new(20, 12).unwrap();
/// let config = ReportConfig::new().with_sigma(0.0).with_seed(7);
/// let mut reporter = PositionReporter::new(config).unwrap();
///
/// // No noise, no beacons in range: the report is exact.
/// let reported = reporter.report(&grid, GridCell::new(2, 6));
/// assert_eq!(reported, GridCell::new(2, 6));
/// ```
#[derive(Debug)]
pub struct PositionReporter<R: Rng = StdRng> {
    config: ReportConfig,
    noise: NoiseModel,
    rng: R,
}

impl PositionReporter<StdRng> {
    /// Creates a reporter, seeding its generator from the config.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if the configuration fails
    /// [`ReportConfig::validate`].
    pub fn new(config: ReportConfig) -> Result<Self, NavError> {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> PositionReporter<R> {
    /// Creates a reporter driven by a caller-supplied generator.
    ///
    /// The config's seed field is ignored here; the provided `rng`
    /// defines the random stream.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if the configuration fails
    /// [`ReportConfig::validate`].
    pub fn with_rng(config: ReportConfig, rng: R) -> Result<Self, NavError> {
        config.validate()?;
        let noise = NoiseModel::new(config.sigma())?;
        Ok(Self { config, noise, rng })
    }

    /// The configuration currently in effect.
    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Changes the noise level for subsequent reports.
    ///
    /// The RNG stream is not reset.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if `sigma` is negative or
    /// not finite; the previous value stays in effect.
    pub fn set_sigma(&mut self, sigma: f64) -> Result<(), NavError> {
        self.noise = NoiseModel::new(sigma)?;
        self.config = self.config.with_sigma(sigma);
        Ok(())
    }

    /// Changes the beacon snap radius for subsequent reports.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if `radius` is negative or
    /// not finite; the previous value stays in effect.
    pub fn set_beacon_radius(&mut self, radius: f64) -> Result<(), NavError> {
        let config = self.config.with_beacon_radius(radius);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Reports a position for the given true cell.
    ///
    /// Always yields an in-bounds cell: snapping returns a beacon cell
    /// and resolution clamps to the grid.
    pub fn report(&mut self, grid: &NavGrid, true_cell: GridCell) -> GridCell {
        let noisy = self.noise.perturb(true_cell.to_point(), &mut self.rng);

        if let Some(beacon) = snap_to_beacon(noisy, grid.beacons(), self.config.beacon_radius()) {
            debug!(
                true_x = true_cell.x,
                true_y = true_cell.y,
                beacon_x = beacon.x,
                beacon_y = beacon.y,
                "snapped to beacon"
            );
            return beacon;
        }

        resolve_cell(noisy, grid)
    }
}
