//! Deterministic A* pathfinding over bounded obstacle grids.
//!
//! Given a [`NavGrid`](nav_types::NavGrid), this crate computes
//! shortest 4-connected paths between cells. The search is fully
//! deterministic: equal-cost frontier entries are broken by insertion
//! order, so identical queries always yield identical paths.
//!
//! # Overview
//!
//! - **Search**: binary-heap A* with a finalized set ([`GridAStar`],
//!   [`find_path`])
//! - **Heuristic**: Manhattan distance ([`manhattan`])
//! - **Neighbors**: deterministic 4-connected expansion
//!   ([`NeighborGenerator`])
//!
//! # Example
//!
//! ```
//! use nav_pathfind::find_path;
//! use nav_types::{GridCell, NavGrid};
//!
//! let grid = NavGrid::new(20, 12)
//!     .unwrap()
//!     .with_walls((2..=7).map(|y| GridCell::new(5, y)));
//!
//! let path = find_path(&grid, GridCell::new(2, 6), GridCell::new(17, 2));
//! assert!(!path.is_empty());
//! assert!(path.is_connected());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod astar;
pub mod heuristic;
pub mod neighbors;

pub use astar::{find_path, GridAStar};
pub use heuristic::manhattan;
pub use neighbors::NeighborGenerator;
