//! Grid cell coordinate types.

use nalgebra::Point2;

/// A discrete 2D coordinate on a navigation grid.
///
/// Uses `i32` coordinates so that intermediate values produced while
/// resolving noisy continuous positions can fall outside the grid
/// before being clamped. Grids themselves only ever contain cells with
/// non-negative coordinates.
///
/// # Example
///
/// ```
/// use nav_types::GridCell;
///
/// let cell = GridCell::new(3, 7);
/// assert_eq!(cell.x, 3);
/// assert_eq!(cell.y, 7);
/// assert_eq!(cell.as_tuple(), (3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Column index (x axis).
    pub x: i32,
    /// Row index (y axis).
    pub y: i32,
}

impl GridCell {
    /// Creates a new grid cell.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a cell at the origin (0, 0).
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the cell as a `(column, row)` tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Manhattan distance to another cell.
    ///
    /// Sum of absolute coordinate differences: `|dx| + |dy|`. This is
    /// the admissible and consistent heuristic for 4-connected grids
    /// with unit edge costs.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_types::GridCell;
    ///
    /// let a = GridCell::new(0, 0);
    /// let b = GridCell::new(3, 4);
    /// assert_eq!(a.manhattan_distance(b), 7);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four axis-aligned neighbors of this cell.
    ///
    /// Neighbors are returned in a fixed order (east, west, south,
    /// north) so that iteration over them is deterministic. No bounds
    /// or obstacle filtering is applied here.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_types::GridCell;
    ///
    /// let neighbors = GridCell::new(5, 5).face_neighbors();
    /// assert_eq!(neighbors.len(), 4);
    /// assert!(neighbors.contains(&GridCell::new(6, 5)));
    /// ```
    #[must_use]
    pub const fn face_neighbors(self) -> [Self; 4] {
        [
            Self::new(self.x + 1, self.y),
            Self::new(self.x - 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x, self.y - 1),
        ]
    }

    /// Returns `true` if `other` is exactly one axis-aligned step away.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Converts to a continuous position at the cell's center.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_types::GridCell;
    /// use nalgebra::Point2;
    ///
    /// let p = GridCell::new(2, 6).to_point();
    /// assert_eq!(p, Point2::new(2.0, 6.0));
    /// ```
    #[must_use]
    pub fn to_point(self) -> Point2<f64> {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for GridCell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
