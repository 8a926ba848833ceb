//! Bounded obstacle grid with named destinations and beacons.

use std::collections::{BTreeMap, HashSet};

use crate::cell::GridCell;
use crate::error::NavError;

/// An immutable description of a navigable grid.
///
/// A `NavGrid` holds the grid dimensions, the set of blocked (wall)
/// cells, a mapping of named destinations, and an ordered sequence of
/// beacons that noisy position reports may snap to. It is constructed
/// once from static configuration and then shared read-only by the
/// pathfinding and reporting layers.
///
/// A wall cell that coincides with a destination or beacon is allowed;
/// the search simply treats such a destination as unreachable.
///
/// # Example
///
/// ```
/// use nav_types::{GridCell, NavGrid};
///
/// let grid = NavGrid::new(20, 12)
///     .unwrap()
///     .with_wall(GridCell::new(5, 2))
///     .with_destination("Gate A", GridCell::new(17, 2))
///     .with_beacon(GridCell::new(1, 6));
///
/// assert!(grid.is_wall(GridCell::new(5, 2)));
/// assert_eq!(grid.destination("Gate A"), Some(GridCell::new(17, 2)));
/// assert_eq!(grid.beacons().len(), 1);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavGrid {
    /// Number of columns.
    width: i32,
    /// Number of rows.
    height: i32,
    /// Blocked cells.
    walls: HashSet<GridCell>,
    /// Named destination cells, ordered by name for deterministic iteration.
    destinations: BTreeMap<String, GridCell>,
    /// Beacon cells in declaration order. Duplicates are permitted.
    beacons: Vec<GridCell>,
}

impl NavGrid {
    /// Creates an empty grid with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidDimensions`] if either dimension is
    /// not positive.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_types::NavGrid;
    ///
    /// let grid = NavGrid::new(20, 12).unwrap();
    /// assert_eq!(grid.width(), 20);
    /// assert_eq!(grid.height(), 12);
    ///
    /// assert!(NavGrid::new(0, 12).is_err());
    /// assert!(NavGrid::new(20, -1).is_err());
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self, NavError> {
        if width <= 0 || height <= 0 {
            return Err(NavError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            walls: HashSet::new(),
            destinations: BTreeMap::new(),
            beacons: Vec::new(),
        })
    }

    /// Adds a single wall cell.
    #[must_use]
    pub fn with_wall(mut self, cell: GridCell) -> Self {
        self.walls.insert(cell);
        self
    }

    /// Adds a collection of wall cells.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_types::{GridCell, NavGrid};
    ///
    /// let grid = NavGrid::new(10, 10)
    ///     .unwrap()
    ///     .with_walls((2..=7).map(|y| GridCell::new(5, y)));
    ///
    /// assert!(grid.is_wall(GridCell::new(5, 4)));
    /// assert!(!grid.is_wall(GridCell::new(5, 1)));
    /// ```
    #[must_use]
    pub fn with_walls(mut self, cells: impl IntoIterator<Item = GridCell>) -> Self {
        self.walls.extend(cells);
        self
    }

    /// Adds a named destination. A repeated name replaces the earlier cell.
    #[must_use]
    pub fn with_destination(mut self, name: impl Into<String>, cell: GridCell) -> Self {
        self.destinations.insert(name.into(), cell);
        self
    }

    /// Appends a beacon cell.
    ///
    /// Beacon order matters: ties between equidistant beacons resolve
    /// to the earliest one in this sequence.
    #[must_use]
    pub fn with_beacon(mut self, cell: GridCell) -> Self {
        self.beacons.push(cell);
        self
    }

    /// Appends a collection of beacon cells, preserving order.
    #[must_use]
    pub fn with_beacons(mut self, cells: impl IntoIterator<Item = GridCell>) -> Self {
        self.beacons.extend(cells);
        self
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns `true` if the cell lies within `[0, width) x [0, height)`.
    #[must_use]
    pub const fn in_bounds(&self, cell: GridCell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Returns `true` if the cell is blocked.
    #[must_use]
    pub fn is_wall(&self, cell: GridCell) -> bool {
        self.walls.contains(&cell)
    }

    /// Returns `true` if the cell is in bounds and not a wall.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_types::{GridCell, NavGrid};
    ///
    /// let grid = NavGrid::new(10, 10).unwrap().with_wall(GridCell::new(3, 3));
    ///
    /// assert!(grid.is_free(GridCell::new(0, 0)));
    /// assert!(!grid.is_free(GridCell::new(3, 3)));   // Wall
    /// assert!(!grid.is_free(GridCell::new(-1, 0)));  // Out of bounds
    /// assert!(!grid.is_free(GridCell::new(10, 0)));  // Out of bounds
    /// ```
    #[must_use]
    pub fn is_free(&self, cell: GridCell) -> bool {
        self.in_bounds(cell) && !self.is_wall(cell)
    }

    /// Returns the set of wall cells.
    #[must_use]
    pub const fn walls(&self) -> &HashSet<GridCell> {
        &self.walls
    }

    /// Looks up a destination cell by name.
    #[must_use]
    pub fn destination(&self, name: &str) -> Option<GridCell> {
        self.destinations.get(name).copied()
    }

    /// Returns an iterator over destination names in sorted order.
    pub fn destination_names(&self) -> impl Iterator<Item = &str> {
        self.destinations.keys().map(String::as_str)
    }

    /// Returns an iterator over `(name, cell)` destination pairs.
    pub fn destinations(&self) -> impl Iterator<Item = (&str, GridCell)> {
        self.destinations.iter().map(|(n, c)| (n.as_str(), *c))
    }

    /// Returns the beacon cells in declaration order.
    #[must_use]
    pub fn beacons(&self) -> &[GridCell] {
        &self.beacons
    }
}
