//! Neighbor generation for grid-based pathfinding.
//!
//! # Example
//!
//! ```
//! use nav_pathfind::neighbors::NeighborGenerator;
//! use nav_types::{GridCell, NavGrid};
//!
//! let grid = NavGrid::new(10, 10).unwrap().with_wall(GridCell::new(6, 5));
//! let generator = NeighborGenerator::new(&grid);
//!
//! let neighbors: Vec<_> = generator.neighbors(GridCell::new(5, 5)).collect();
//! assert_eq!(neighbors.len(), 3); // 4 candidates, one blocked
//! ```

use nav_types::{GridCell, NavGrid};

/// Generator for valid neighboring cells during pathfinding.
///
/// Yields the axis-aligned neighbors of a cell, discarding any that
/// fall outside the grid or land on a wall. Movement is strictly
/// 4-connected; there is no diagonal stepping.
pub struct NeighborGenerator<'a> {
    grid: &'a NavGrid,
}

impl<'a> NeighborGenerator<'a> {
    /// Creates a neighbor generator over the given grid.
    #[must_use]
    pub const fn new(grid: &'a NavGrid) -> Self {
        Self { grid }
    }

    /// Returns `true` if the cell is in bounds and not a wall.
    #[must_use]
    pub fn is_free(&self, cell: GridCell) -> bool {
        self.grid.is_free(cell)
    }

    /// Returns an iterator over the valid neighbors of a cell.
    ///
    /// Neighbors are yielded in the fixed order of
    /// [`GridCell::face_neighbors`], which keeps expansion order (and
    /// therefore tie-breaking) deterministic.
    pub fn neighbors(&self, cell: GridCell) -> impl Iterator<Item = GridCell> + '_ {
        cell.face_neighbors()
            .into_iter()
            .filter(|&n| self.is_free(n))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_cell_has_four_neighbors() {
        let grid = NavGrid::new(10, 10).unwrap();
        let generator = NeighborGenerator::new(&grid);

        let neighbors: Vec<_> = generator.neighbors(GridCell::new(5, 5)).collect();
        assert_eq!(neighbors.len(), 4);
    }

    #[test]
    fn test_corner_cell_has_two_neighbors() {
        let grid = NavGrid::new(10, 10).unwrap();
        let generator = NeighborGenerator::new(&grid);

        let neighbors: Vec<_> = generator.neighbors(GridCell::new(0, 0)).collect();
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&GridCell::new(1, 0)));
        assert!(neighbors.contains(&GridCell::new(0, 1)));
    }

    #[test]
    fn test_walls_are_filtered() {
        let grid = NavGrid::new(10, 10)
            .unwrap()
            .with_wall(GridCell::new(4, 5))
            .with_wall(GridCell::new(6, 5));
        let generator = NeighborGenerator::new(&grid);

        let neighbors: Vec<_> = generator.neighbors(GridCell::new(5, 5)).collect();
        assert_eq!(neighbors.len(), 2);
        assert!(!neighbors.contains(&GridCell::new(4, 5)));
        assert!(!neighbors.contains(&GridCell::new(6, 5)));
    }

    #[test]
    fn test_fully_enclosed_cell_has_no_neighbors() {
        let center = GridCell::new(5, 5);
        let grid = NavGrid::new(10, 10).unwrap().with_walls(center.face_neighbors());
        let generator = NeighborGenerator::new(&grid);

        assert_eq!(generator.neighbors(center).count(), 0);
    }

    #[test]
    fn test_deterministic_order() {
        let grid = NavGrid::new(10, 10).unwrap();
        let generator = NeighborGenerator::new(&grid);

        let a: Vec<_> = generator.neighbors(GridCell::new(3, 3)).collect();
        let b: Vec<_> = generator.neighbors(GridCell::new(3, 3)).collect();
        assert_eq!(a, b);
    }
}
