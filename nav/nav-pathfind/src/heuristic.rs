//! Heuristic for 4-connected grid search.

use nav_types::GridCell;

/// Manhattan distance between two cells.
///
/// The only heuristic needed here: for 4-connectivity with unit edge
/// costs it is both admissible and consistent, so the first time A*
/// pops the goal the cost is optimal.
///
/// # Example
///
/// ```
/// use nav_pathfind::heuristic::manhattan;
/// use nav_types::GridCell;
///
/// let h = manhattan(GridCell::new(2, 6), GridCell::new(17, 2));
/// assert_eq!(h, 19);
/// ```
#[must_use]
pub const fn manhattan(from: GridCell, to: GridCell) -> u32 {
    from.manhattan_distance(to)
}
