//! Core types for grid navigation under position uncertainty.
//!
//! This crate provides the foundational types shared by the navigation
//! domain: discrete grid coordinates, the immutable obstacle grid,
//! paths, the reported-position configuration, and trial statistics.
//!
//! # Overview
//!
//! - **Cells**: discrete `(column, row)` coordinates ([`GridCell`])
//! - **Grids**: bounded obstacle grids with named destinations and
//!   beacons ([`NavGrid`])
//! - **Paths**: ordered cell sequences where empty means "no path"
//!   ([`CellPath`])
//! - **Configuration**: noise and snap parameters with fail-fast
//!   validation ([`ReportConfig`])
//! - **Statistics**: per-trial and aggregate comparison results
//!   ([`TrialOutcome`], [`AggregateStats`], [`StatsSnapshot`])
//! - **Errors**: caller contract violations ([`NavError`])
//!
//! # Example
//!
//! ```
//! use nav_types::{CellPath, GridCell, NavGrid, ReportConfig};
//!
//! // A small terminal floor: one wall column, a gate, two beacons.
//! let grid = NavGrid::new(20, 12)
//!     .unwrap()
//!     .with_walls((2..=7).map(|y| GridCell::new(5, y)))
//!     .with_destination("Gate A", GridCell::new(17, 2))
//!     .with_beacons([GridCell::new(1, 6), GridCell::new(3, 6)]);
//!
//! assert!(grid.is_free(GridCell::new(2, 6)));
//! assert!(!grid.is_free(GridCell::new(5, 4)));
//!
//! // Paths are plain value objects; empty means "no path".
//! let none = CellPath::empty();
//! assert!(none.is_empty());
//!
//! // Configuration is validated, never clamped.
//! assert!(ReportConfig::new().with_sigma(-1.0).validate().is_err());
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod path;
pub mod stats;

// Re-export main types at crate root for convenience
pub use cell::GridCell;
pub use config::ReportConfig;
pub use error::NavError;
pub use grid::NavGrid;
pub use path::CellPath;
pub use stats::{AggregateStats, StatsSnapshot, TrialOutcome};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;

    /// Test that all types can be constructed and used together.
    #[test]
    fn test_full_workflow_types() {
        let grid = NavGrid::new(6, 6)
            .unwrap()
            .with_wall(GridCell::new(3, 3))
            .with_destination("exit", GridCell::new(5, 5))
            .with_beacon(GridCell::new(0, 1));

        let path = CellPath::new(vec![
            GridCell::new(0, 0),
            GridCell::new(1, 0),
            GridCell::new(2, 0),
        ]);
        assert!(path.is_connected());

        let config = ReportConfig::new().with_sigma(0.5).with_seed(1);
        config.validate().unwrap();

        let outcome = TrialOutcome::new(false, Some(1.0));
        let stats = AggregateStats::new(0.0, Some(1.0));
        let snapshot = StatsSnapshot::new(&config, Some(stats), Some(outcome));

        assert_eq!(snapshot.sigma, 0.5);
        assert_eq!(grid.destination("exit"), Some(GridCell::new(5, 5)));
    }
}
