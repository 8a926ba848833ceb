//! Trial orchestration and comparison statistics for grid navigation.
//!
//! Ties the deterministic pathfinder and the stochastic position
//! reporter together: each trial plans a true path and a path from a
//! noisy reported position, compares the two, and reduces batches of
//! trials to aggregate statistics.
//!
//! # Overview
//!
//! - **Comparison**: per-trial outcomes and batch reduction
//!   ([`compare_paths`], [`aggregate`])
//! - **Orchestration**: single trials and batches over a fixed grid
//!   ([`TrialRunner`], [`TrialRun`], [`TrialSummary`])
//! - **Sessions**: destination selection and result snapshots
//!   ([`NavSession`])
//!
//! # Example
//!
//! ```
//! use nav_trial::NavSession;
//! use nav_types::{GridCell, NavGrid, ReportConfig};
//!
//! let grid = NavGrid::new(20, 12)
//!     .unwrap()
//!     .with_destination("Gate A", GridCell::new(17, 2))
//!     .with_beacons([GridCell::new(1, 6), GridCell::new(3, 6)]);
//!
//! let config = ReportConfig::new().with_sigma(0.3).with_seed(42);
//! let mut session = NavSession::new(grid, GridCell::new(2, 6), config).unwrap();
//!
//! session.select_destination("Gate A").unwrap();
//! let summary = session.run_trials(100).unwrap();
//!
//! let rate = summary.aggregate().change_rate;
//! assert!((0.0..=1.0).contains(&rate));
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization for the shared types

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod compare;
pub mod runner;
pub mod session;

pub use compare::{aggregate, compare_paths};
pub use runner::{TrialRun, TrialRunner, TrialSummary};
pub use session::NavSession;
