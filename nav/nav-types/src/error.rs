//! Error types for navigation operations.
//!
//! This module defines the [`NavError`] enum covering all reportable
//! failures. Degenerate pathfinding queries (blocked or unreachable
//! endpoints) are deliberately *not* errors; they are signalled by an
//! empty [`CellPath`](crate::CellPath).

/// Errors that can occur during navigation operations.
///
/// Invalid configuration is rejected at the boundary rather than
/// silently clamped, so every variant here represents a caller
/// contract violation that is reported immediately.
///
/// # Example
///
/// ```
/// use nav_types::NavError;
///
/// let error = NavError::invalid_config("sigma must be non-negative");
/// assert!(error.to_string().contains("sigma"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NavError {
    /// The grid dimensions are not positive.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// An invalid configuration parameter was provided.
    ///
    /// Covers negative or non-finite sigma, negative beacon radius,
    /// and zero trial counts.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A destination name was not found on the grid.
    #[error("unknown destination {0:?}")]
    UnknownDestination(String),

    /// A trial was requested before any destination was selected.
    #[error("no destination selected")]
    NoDestinationSelected,
}

impl NavError {
    /// Creates an invalid configuration error with the given message.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_types::NavError;
    ///
    /// let error = NavError::invalid_config("trial count must be at least 1");
    /// assert!(error.is_invalid_config());
    /// ```
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if this is an invalid configuration error.
    #[must_use]
    pub const fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}
