//! Gaussian perturbation of continuous positions.

use nalgebra::{Point2, Vector2};
use nav_types::NavError;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Zero-mean Gaussian noise applied independently per axis.
///
/// A standard deviation of zero is valid and leaves every point
/// unchanged, which makes noiseless runs exercise the same code path
/// as noisy ones.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use nav_report::noise::NoiseModel;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let noise = NoiseModel::new(0.0).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let p = noise.perturb(Point2::new(2.0, 6.0), &mut rng);
/// assert_eq!(p, Point2::new(2.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NoiseModel {
    sigma: f64,
    normal: Normal<f64>,
}

impl NoiseModel {
    /// Creates a noise model with the given standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if `sigma` is negative or
    /// not finite.
    pub fn new(sigma: f64) -> Result<Self, NavError> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(NavError::invalid_config(format!(
                "sigma must be finite and non-negative, got {sigma}"
            )));
        }
        let normal = Normal::new(0.0, sigma)
            .map_err(|e| NavError::invalid_config(format!("invalid noise distribution: {e}")))?;
        Ok(Self { sigma, normal })
    }

    /// The standard deviation of the perturbation.
    #[must_use]
    pub const fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Samples a per-axis offset vector.
    pub fn sample_offset<R: Rng>(&self, rng: &mut R) -> Vector2<f64> {
        Vector2::new(self.normal.sample(rng), self.normal.sample(rng))
    }

    /// Returns `point` displaced by an independent Gaussian offset on
    /// each axis. With `sigma == 0` the point is returned unchanged
    /// (the distribution still consumes two samples, keeping RNG
    /// streams aligned across sigma values).
    pub fn perturb<R: Rng>(&self, point: Point2<f64>, rng: &mut R) -> Point2<f64> {
        point + self.sample_offset(rng)
    }
}
