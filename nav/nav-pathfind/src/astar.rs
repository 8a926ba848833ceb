//! Deterministic A* search over an obstacle grid.
//!
//! The search uses a binary heap keyed by `f = g + h` with an
//! insertion-order tie-breaker, a finalized set instead of decrease-key,
//! and Manhattan distance as the heuristic. Identical queries always
//! produce identical paths, including when several optimal paths exist.
//!
//! # Example
//!
//! ```
//! use nav_pathfind::astar::find_path;
//! use nav_types::{GridCell, NavGrid};
//!
//! let grid = NavGrid::new(10, 10)
//!     .unwrap()
//!     .with_walls((0..9).map(|y| GridCell::new(5, y)));
//!
//! // Routes around the wall through the gap at y = 9.
//! let path = find_path(&grid, GridCell::new(0, 0), GridCell::new(9, 0));
//! assert!(!path.is_empty());
//! assert_eq!(path.first(), Some(&GridCell::new(0, 0)));
//! assert_eq!(path.last(), Some(&GridCell::new(9, 0)));
//! assert!(path.is_connected());
//! ```

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use nav_types::{CellPath, GridCell, NavGrid};
use tracing::debug;

use crate::heuristic::manhattan;
use crate::neighbors::NeighborGenerator;

/// A frontier entry: estimated total cost, insertion order, cell.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: u32,
    order: u64,
    cell: GridCell,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: invert so the lowest f is popped
        // first, with ties going to the earliest insertion. The order
        // counter is unique per entry, so the ordering is total.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// A* pathfinder over a [`NavGrid`].
///
/// Finds shortest paths by cell count under 4-connectivity. There are
/// no error cases: a degenerate query (start or goal blocked or out of
/// bounds) and an exhausted frontier both yield an empty path.
///
/// # Example
///
/// ```
/// use nav_pathfind::astar::GridAStar;
/// use nav_types::{GridCell, NavGrid};
///
/// let grid = NavGrid::new(5, 5).unwrap();
/// let pathfinder = GridAStar::new(&grid);
///
/// let path = pathfinder.find_path(GridCell::new(0, 0), GridCell::new(4, 0));
/// assert_eq!(path.len(), 5);
/// ```
pub struct GridAStar<'a> {
    grid: &'a NavGrid,
}

impl<'a> GridAStar<'a> {
    /// Creates a pathfinder over the given grid.
    #[must_use]
    pub const fn new(grid: &'a NavGrid) -> Self {
        Self { grid }
    }

    /// Finds a shortest path from `start` to `goal`.
    ///
    /// Returns an empty path when either endpoint is a wall or out of
    /// bounds, or when no route exists. A non-empty result starts at
    /// `start`, ends at `goal`, and steps between 4-adjacent free
    /// cells; `start == goal` yields a single-cell path.
    ///
    /// Determinism: equal-cost frontier entries are ordered by a
    /// monotonically increasing counter assigned at push time, so the
    /// same query always selects the same path.
    #[must_use]
    pub fn find_path(&self, start: GridCell, goal: GridCell) -> CellPath {
        if !self.grid.is_free(start) || !self.grid.is_free(goal) {
            return CellPath::empty();
        }

        let generator = NeighborGenerator::new(self.grid);

        let mut open = BinaryHeap::new();
        let mut g_score: HashMap<GridCell, u32> = HashMap::new();
        let mut came_from: HashMap<GridCell, GridCell> = HashMap::new();
        let mut finalized: HashSet<GridCell> = HashSet::new();
        let mut order: u64 = 0;

        g_score.insert(start, 0);
        open.push(OpenEntry {
            f: manhattan(start, goal),
            order,
            cell: start,
        });

        while let Some(OpenEntry { cell: current, .. }) = open.pop() {
            if current == goal {
                // Manhattan is consistent for unit-cost 4-connectivity,
                // so the first goal pop carries the optimal cost.
                let path = reconstruct(&came_from, goal);
                debug!(
                    expanded = finalized.len(),
                    path_len = path.len(),
                    "goal reached"
                );
                return path;
            }

            if !finalized.insert(current) {
                // Stale heap entry for an already-finalized cell.
                continue;
            }

            let current_g = g_score.get(&current).copied().unwrap_or(u32::MAX);

            for neighbor in generator.neighbors(current) {
                if finalized.contains(&neighbor) {
                    continue;
                }

                let tentative = current_g.saturating_add(1);
                if tentative < g_score.get(&neighbor).copied().unwrap_or(u32::MAX) {
                    came_from.insert(neighbor, current);
                    g_score.insert(neighbor, tentative);
                    order += 1;
                    open.push(OpenEntry {
                        f: tentative + manhattan(neighbor, goal),
                        order,
                        cell: neighbor,
                    });
                }
            }
        }

        debug!(expanded = finalized.len(), "frontier exhausted, no path");
        CellPath::empty()
    }
}

/// Walks parent pointers from the goal back to the start and reverses.
fn reconstruct(came_from: &HashMap<GridCell, GridCell>, goal: GridCell) -> CellPath {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(&parent) = came_from.get(&current) {
        current = parent;
        cells.push(current);
    }
    cells.reverse();
    CellPath::new(cells)
}

/// Convenience function for point-to-point pathfinding.
///
/// # Example
///
/// ```
/// use nav_pathfind::find_path;
/// use nav_types::{GridCell, NavGrid};
///
/// let grid = NavGrid::new(5, 5).unwrap();
/// let path = find_path(&grid, GridCell::new(0, 0), GridCell::new(2, 2));
/// assert_eq!(path.len(), 5); // 4 moves
/// ```
#[must_use]
pub fn find_path(grid: &NavGrid, start: GridCell, goal: GridCell) -> CellPath {
    GridAStar::new(grid).find_path(start, goal)
}
