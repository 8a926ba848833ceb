//! Path representation for grid navigation.
//!
//! A [`CellPath`] is an ordered sequence of grid cells. The empty path
//! doubles as the "no path found / not computed" sentinel, so path
//! queries never need a separate error channel.

use crate::cell::GridCell;

/// An ordered sequence of grid cells forming a path.
///
/// A well-formed non-empty path starts at the query's start cell, ends
/// at its goal cell, and steps between 4-adjacent cells. An empty path
/// means "no path found" or "not computed".
///
/// # Example
///
/// ```
/// use nav_types::{CellPath, GridCell};
///
/// let path = CellPath::new(vec![
///     GridCell::new(0, 0),
///     GridCell::new(1, 0),
///     GridCell::new(1, 1),
/// ]);
///
/// assert_eq!(path.len(), 3);
/// assert!(path.is_connected());
/// assert_eq!(path.first(), Some(&GridCell::new(0, 0)));
/// assert_eq!(path.last(), Some(&GridCell::new(1, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPath {
    cells: Vec<GridCell>,
}

impl CellPath {
    /// Creates a path from a sequence of cells.
    #[must_use]
    pub const fn new(cells: Vec<GridCell>) -> Self {
        Self { cells }
    }

    /// Creates an empty path (the "no path" sentinel).
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    /// Creates a path containing a single cell.
    #[must_use]
    pub fn from_single(cell: GridCell) -> Self {
        Self { cells: vec![cell] }
    }

    /// Returns the number of cells in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the path has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cells as a slice.
    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Returns the first cell, if any.
    #[must_use]
    pub fn first(&self) -> Option<&GridCell> {
        self.cells.first()
    }

    /// Returns the last cell, if any.
    #[must_use]
    pub fn last(&self) -> Option<&GridCell> {
        self.cells.last()
    }

    /// Returns the cell at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    /// Returns an iterator over the cells.
    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    /// Returns an iterator over consecutive cell pairs (segments).
    pub fn segments(&self) -> impl Iterator<Item = (&GridCell, &GridCell)> {
        self.cells.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Returns `true` if every consecutive pair of cells is 4-adjacent.
    ///
    /// Empty and single-cell paths are trivially connected.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_types::{CellPath, GridCell};
    ///
    /// let connected = CellPath::new(vec![GridCell::new(0, 0), GridCell::new(0, 1)]);
    /// assert!(connected.is_connected());
    ///
    /// let broken = CellPath::new(vec![GridCell::new(0, 0), GridCell::new(2, 0)]);
    /// assert!(!broken.is_connected());
    /// ```
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.segments().all(|(a, b)| a.is_adjacent(*b))
    }
}

impl FromIterator<GridCell> for CellPath {
    fn from_iter<I: IntoIterator<Item = GridCell>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for CellPath {
    type Item = GridCell;
    type IntoIter = std::vec::IntoIter<GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellPath {
    type Item = &'a GridCell;
    type IntoIter = std::slice::Iter<'a, GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
