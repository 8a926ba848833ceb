//! Mapping continuous positions back onto the grid.

use nalgebra::Point2;
use nav_types::{GridCell, NavGrid};

/// Resolves a continuous position to the nearest in-bounds cell.
///
/// Coordinates are rounded half away from zero, then clamped to the
/// grid bounds, so every finite point maps to some valid cell. The
/// resolved cell may be a wall; resolution is purely geometric.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use nav_report::resolve::resolve_cell;
/// use nav_types::{GridCell, NavGrid};
///
/// let grid = NavGrid::new(20, 12).unwrap();
/// assert_eq!(resolve_cell(Point2::new(3.5, 6.2), &grid), GridCell::new(4, 6));
/// assert_eq!(resolve_cell(Point2::new(-2.0, 30.0), &grid), GridCell::new(0, 11));
/// ```
#[must_use]
pub fn resolve_cell(point: Point2<f64>, grid: &NavGrid) -> GridCell {
    // `as` saturates on overflow, so even absurd coordinates stay
    // clampable rather than wrapping.
    let x = (point.x.round() as i32).clamp(0, grid.width() - 1);
    let y = (point.y.round() as i32).clamp(0, grid.height() - 1);
    GridCell::new(x, y)
}

/// Finds the beacon nearest to `point`, if any lies within `radius`.
///
/// Distance is Euclidean and the radius test is inclusive. Ties on
/// distance keep the earliest beacon in the slice, so snapping is
/// deterministic for a fixed beacon order.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use nav_report::resolve::snap_to_beacon;
/// use nav_types::GridCell;
///
/// let beacons = [GridCell::new(1, 6), GridCell::new(3, 6)];
///
/// let hit = snap_to_beacon(Point2::new(2.9, 6.3), &beacons, 1.0);
/// assert_eq!(hit, Some(GridCell::new(3, 6)));
///
/// let miss = snap_to_beacon(Point2::new(10.0, 10.0), &beacons, 1.0);
/// assert_eq!(miss, None);
/// ```
#[must_use]
pub fn snap_to_beacon(point: Point2<f64>, beacons: &[GridCell], radius: f64) -> Option<GridCell> {
    let mut nearest: Option<(GridCell, f64)> = None;

    for &beacon in beacons {
        let d = nalgebra::distance(&point, &beacon.to_point());
        // Strict improvement only: the first beacon wins distance ties.
        let closer = match nearest {
            Some((_, best)) => d < best,
            None => true,
        };
        if closer {
            nearest = Some((beacon, d));
        }
    }

    nearest.and_then(|(beacon, d)| (d <= radius).then_some(beacon))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn grid() -> NavGrid {
        NavGrid::new(20, 12).unwrap()
    }

    #[test]
    fn test_resolve_rounds_to_nearest() {
        assert_eq!(resolve_cell(Point2::new(3.4, 6.6), &grid()), GridCell::new(3, 7));
    }

    #[test]
    fn test_resolve_half_rounds_away_from_zero() {
        assert_eq!(resolve_cell(Point2::new(3.5, 0.5), &grid()), GridCell::new(4, 1));
    }

    #[test]
    fn test_resolve_clamps_low() {
        assert_eq!(resolve_cell(Point2::new(-5.0, -0.9), &grid()), GridCell::new(0, 0));
    }

    #[test]
    fn test_resolve_clamps_high() {
        assert_eq!(resolve_cell(Point2::new(25.0, 11.7), &grid()), GridCell::new(19, 11));
    }

    #[test]
    fn test_resolve_extreme_coordinates_stay_in_bounds() {
        let cell = resolve_cell(Point2::new(1e300, -1e300), &grid());
        assert!(grid().in_bounds(cell));
    }

    #[test]
    fn test_snap_inclusive_radius() {
        let beacons = [GridCell::new(5, 5)];
        // Exactly at the radius boundary still snaps.
        let hit = snap_to_beacon(Point2::new(6.0, 5.0), &beacons, 1.0);
        assert_eq!(hit, Some(GridCell::new(5, 5)));
    }

    #[test]
    fn test_snap_outside_radius_misses() {
        let beacons = [GridCell::new(5, 5)];
        assert_eq!(snap_to_beacon(Point2::new(6.1, 5.0), &beacons, 1.0), None);
    }

    #[test]
    fn test_snap_zero_radius_requires_exact_hit() {
        let beacons = [GridCell::new(5, 5)];
        assert_eq!(
            snap_to_beacon(Point2::new(5.0, 5.0), &beacons, 0.0),
            Some(GridCell::new(5, 5))
        );
        assert_eq!(snap_to_beacon(Point2::new(5.0, 5.01), &beacons, 0.0), None);
    }

    #[test]
    fn test_snap_picks_nearest() {
        let beacons = [GridCell::new(0, 0), GridCell::new(4, 0)];
        let hit = snap_to_beacon(Point2::new(3.0, 0.0), &beacons, 2.0);
        assert_eq!(hit, Some(GridCell::new(4, 0)));
    }

    #[test]
    fn test_snap_tie_keeps_first_beacon() {
        // Equidistant beacons: the earlier one in the slice wins.
        let beacons = [GridCell::new(2, 0), GridCell::new(4, 0)];
        let hit = snap_to_beacon(Point2::new(3.0, 0.0), &beacons, 5.0);
        assert_eq!(hit, Some(GridCell::new(2, 0)));
    }

    #[test]
    fn test_snap_no_beacons() {
        assert_eq!(snap_to_beacon(Point2::new(3.0, 3.0), &[], 100.0), None);
    }
}
