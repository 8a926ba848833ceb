//! Comparison of reported paths against true paths.

use nav_types::{AggregateStats, CellPath, TrialOutcome};

/// Compares a reported path against the true path.
///
/// `changed` is a plain cell-for-cell inequality. The length ratio is
/// reported length over true length, with three degenerate cases:
///
/// - both paths empty: the ratio is undefined (`None`)
/// - true path exists, reported path empty: `Some(f64::INFINITY)`,
///   the reported route is missing entirely
/// - true path empty, reported path exists: the reported path's raw
///   length, a sentinel rather than a true ratio
///
/// # Example
///
/// ```
/// use nav_trial::compare::compare_paths;
/// use nav_types::{CellPath, GridCell};
///
/// let truth = CellPath::new(vec![GridCell::new(0, 0), GridCell::new(1, 0)]);
/// let same = compare_paths(&truth, &truth);
/// assert!(!same.changed);
/// assert_eq!(same.length_ratio, Some(1.0));
///
/// let missing = compare_paths(&truth, &CellPath::empty());
/// assert!(missing.changed);
/// assert_eq!(missing.length_ratio, Some(f64::INFINITY));
/// ```
#[must_use]
pub fn compare_paths(true_path: &CellPath, reported_path: &CellPath) -> TrialOutcome {
    let changed = true_path != reported_path;

    let length_ratio = match (true_path.is_empty(), reported_path.is_empty()) {
        (true, true) => None,
        (false, true) => Some(f64::INFINITY),
        (true, false) => Some(reported_path.len() as f64),
        (false, false) => Some(reported_path.len() as f64 / true_path.len() as f64),
    };

    TrialOutcome::new(changed, length_ratio)
}

/// Reduces a batch of outcomes to aggregate statistics.
///
/// The change rate counts every outcome. The mean length ratio
/// averages only the defined, finite ratios and is `None` when no
/// outcome has one. Aggregating zero outcomes yields a zero change
/// rate and an undefined mean.
///
/// # Example
///
/// ```
/// use nav_trial::compare::aggregate;
/// use nav_types::TrialOutcome;
///
/// let outcomes = [
///     TrialOutcome::new(false, Some(1.0)),
///     TrialOutcome::new(true, Some(1.5)),
///     TrialOutcome::new(true, Some(f64::INFINITY)),
/// ];
///
/// let stats = aggregate(&outcomes);
/// assert_eq!(stats.change_rate, 2.0 / 3.0);
/// assert_eq!(stats.mean_length_ratio, Some(1.25));
/// ```
#[must_use]
pub fn aggregate(outcomes: &[TrialOutcome]) -> AggregateStats {
    if outcomes.is_empty() {
        return AggregateStats::new(0.0, None);
    }

    let changed = outcomes.iter().filter(|o| o.changed).count();
    let change_rate = changed as f64 / outcomes.len() as f64;

    let ratios: Vec<f64> = outcomes.iter().filter_map(TrialOutcome::finite_ratio).collect();
    let mean_length_ratio = if ratios.is_empty() {
        None
    } else {
        Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
    };

    AggregateStats::new(change_rate, mean_length_ratio)
}
