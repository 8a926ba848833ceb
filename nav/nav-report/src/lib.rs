//! Reported positions under Gaussian noise with beacon snapping.
//!
//! Models an indoor positioning system: the true position is perturbed
//! with independent per-axis Gaussian noise, snapped to a nearby
//! beacon when one is within range, and resolved back to a grid cell.
//!
//! # Overview
//!
//! - **Noise**: per-axis zero-mean Gaussian offsets ([`NoiseModel`])
//! - **Resolution**: round-and-clamp onto the grid, nearest-beacon
//!   snapping ([`resolve_cell`], [`snap_to_beacon`])
//! - **Reporting**: the full noisy-report pipeline with an injectable
//!   RNG ([`PositionReporter`])
//!
//! # Example
//!
//! ```
//! use nav_report::PositionReporter;
//! use nav_types::{GridCell, NavGrid, ReportConfig};
//!
//! let grid = NavGrid::new(20, 12)
//!     .unwrap()
//!     .with_beacons([GridCell::new(1, 6), GridCell::new(3, 6)]);
//!
//! let config = ReportConfig::new().with_sigma(0.3).with_seed(42);
//! let mut reporter = PositionReporter::new(config).unwrap();
//!
//! let reported = reporter.report(&grid, GridCell::new(2, 6));
//! assert!(grid.in_bounds(reported));
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization for the shared types

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod noise;
pub mod reporter;
pub mod resolve;

pub use noise::NoiseModel;
pub use reporter::PositionReporter;
pub use resolve::{resolve_cell, snap_to_beacon};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;
    use nav_types::{GridCell, NavGrid, ReportConfig};

    /// With beacons covering the whole grid and a huge radius, every
    /// report is a beacon cell regardless of noise.
    #[test]
    fn test_saturating_beacons_dominate() {
        let grid = NavGrid::new(10, 10)
            .unwrap()
            .with_beacons([GridCell::new(2, 2), GridCell::new(7, 7)]);
        let config = ReportConfig::new()
            .with_sigma(5.0)
            .with_beacon_radius(1e6)
            .with_seed(11);
        let mut reporter = PositionReporter::new(config).unwrap();

        for _ in 0..100 {
            let reported = reporter.report(&grid, GridCell::new(5, 5));
            assert!(grid.beacons().contains(&reported));
        }
    }
}
