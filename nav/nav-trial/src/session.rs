//! Interactive navigation session state.

use nav_pathfind::GridAStar;
use nav_report::PositionReporter;
use nav_types::{
    AggregateStats, CellPath, GridCell, NavError, NavGrid, ReportConfig, StatsSnapshot,
    TrialOutcome,
};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use crate::runner::{TrialRun, TrialRunner, TrialSummary};

#[derive(Debug, Clone)]
struct Selection {
    name: String,
    goal: GridCell,
    true_path: CellPath,
}

/// A user's navigation session: fixed start, chosen destination,
/// accumulated trial results.
///
/// The session is the stateful surface over the otherwise stateless
/// pieces: it remembers which named destination is selected, caches the
/// deterministic true path to it, runs trials against it, and keeps the
/// latest results for [`StatsSnapshot`] consumers. Nothing here mutates
/// the grid.
///
/// # Example
///
/// ```
/// use nav_trial::NavSession;
/// use nav_types::{GridCell, NavGrid, ReportConfig};
///
/// let grid = NavGrid::new(10, 10)
///     .unwrap()
///     .with_destination("exit", GridCell::new(9, 9));
/// let config = ReportConfig::new().with_sigma(0.0).with_seed(1);
///
/// let mut session = NavSession::new(grid, GridCell::new(0, 0), config).unwrap();
/// session.select_destination("exit").unwrap();
///
/// let run = session.run_trial().unwrap();
/// assert!(!run.outcome.changed);
/// ```
#[derive(Debug)]
pub struct NavSession<R: Rng = StdRng> {
    runner: TrialRunner<R>,
    start: GridCell,
    selection: Option<Selection>,
    last_reported_path: Option<CellPath>,
    last_outcome: Option<TrialOutcome>,
    last_aggregate: Option<AggregateStats>,
}

impl NavSession<StdRng> {
    /// Creates a session, seeding the reporter from the config.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if the configuration is
    /// invalid.
    pub fn new(grid: NavGrid, start: GridCell, config: ReportConfig) -> Result<Self, NavError> {
        let runner = TrialRunner::new(grid, config)?;
        Ok(Self::from_runner(runner, start))
    }
}

impl<R: Rng> NavSession<R> {
    /// Creates a session around a reporter with a caller-supplied RNG.
    #[must_use]
    pub fn with_reporter(grid: NavGrid, start: GridCell, reporter: PositionReporter<R>) -> Self {
        Self::from_runner(TrialRunner::with_reporter(grid, reporter), start)
    }

    fn from_runner(runner: TrialRunner<R>, start: GridCell) -> Self {
        Self {
            runner,
            start,
            selection: None,
            last_reported_path: None,
            last_outcome: None,
            last_aggregate: None,
        }
    }

    /// The grid this session navigates.
    #[must_use]
    pub const fn grid(&self) -> &NavGrid {
        self.runner.grid()
    }

    /// The session's fixed true start position.
    #[must_use]
    pub const fn start(&self) -> GridCell {
        self.start
    }

    /// The configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        self.runner.reporter().config()
    }

    /// The noise standard deviation in effect.
    #[must_use]
    pub const fn sigma(&self) -> f64 {
        self.config().sigma()
    }

    /// The beacon snap radius in effect.
    #[must_use]
    pub const fn beacon_radius(&self) -> f64 {
        self.config().beacon_radius()
    }

    /// Changes the noise level; the true path and selection stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] for a negative or non-finite
    /// value; the previous value stays in effect.
    pub fn set_sigma(&mut self, sigma: f64) -> Result<(), NavError> {
        self.runner.reporter_mut().set_sigma(sigma)
    }

    /// Changes the beacon snap radius.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] for a negative or non-finite
    /// value; the previous value stays in effect.
    pub fn set_beacon_radius(&mut self, radius: f64) -> Result<(), NavError> {
        self.runner.reporter_mut().set_beacon_radius(radius)
    }

    /// The currently selected destination, if any.
    #[must_use]
    pub fn selected_destination(&self) -> Option<(&str, GridCell)> {
        self.selection.as_ref().map(|s| (s.name.as_str(), s.goal))
    }

    /// Selects a named destination and returns the true path to it.
    ///
    /// Recomputes and caches the shortest path from the start; any
    /// results from the previous selection are cleared. An empty path
    /// means the destination is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnknownDestination`] if the grid has no
    /// destination with this name; the previous selection is kept.
    pub fn select_destination(&mut self, name: &str) -> Result<&CellPath, NavError> {
        let goal = self
            .grid()
            .destination(name)
            .ok_or_else(|| NavError::UnknownDestination(name.to_owned()))?;
        let true_path = GridAStar::new(self.grid()).find_path(self.start, goal);

        info!(
            destination = name,
            x = goal.x,
            y = goal.y,
            path_len = true_path.len(),
            "destination selected"
        );
        self.reset_stats();
        let selection = self.selection.insert(Selection {
            name: name.to_owned(),
            goal,
            true_path,
        });
        Ok(&selection.true_path)
    }

    /// Drops the selection and all accumulated results.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.reset_stats();
    }

    /// The cached shortest path from the start to the selected
    /// destination. Empty when the destination is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NoDestinationSelected`] if no destination
    /// has been selected.
    pub fn true_path(&self) -> Result<&CellPath, NavError> {
        self.selection
            .as_ref()
            .map(|s| &s.true_path)
            .ok_or(NavError::NoDestinationSelected)
    }

    /// The reported path from the most recent trial, if any.
    #[must_use]
    pub fn last_reported_path(&self) -> Option<&CellPath> {
        self.last_reported_path.as_ref()
    }

    /// Runs one trial against the selected destination.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NoDestinationSelected`] if no destination
    /// has been selected.
    pub fn run_trial(&mut self) -> Result<TrialRun, NavError> {
        let (goal, true_path) = self.require_selection()?;
        let run = self.runner.run_trial_with(&true_path, self.start, goal);
        self.last_outcome = Some(run.outcome);
        self.last_reported_path = Some(run.reported_path.clone());
        Ok(run)
    }

    /// Runs a batch of trials against the selected destination.
    ///
    /// Updates the batch aggregate, the last single-trial outcome, and
    /// the last reported path (all from the batch's final trial where
    /// applicable).
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NoDestinationSelected`] if no destination
    /// has been selected, or [`NavError::InvalidConfig`] if `count`
    /// is zero.
    pub fn run_trials(&mut self, count: usize) -> Result<TrialSummary, NavError> {
        let (goal, true_path) = self.require_selection()?;
        let summary = self
            .runner
            .run_trials_with(&true_path, self.start, goal, count)?;
        self.last_aggregate = Some(summary.aggregate());
        self.last_outcome = Some(summary.last_run().outcome);
        self.last_reported_path = Some(summary.last_run().reported_path.clone());
        Ok(summary)
    }

    /// A snapshot of the current configuration and results, for an
    /// external persistence collaborator.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot::new(self.config(), self.last_aggregate, self.last_outcome)
    }

    /// Clears accumulated results; configuration and selection remain.
    pub fn reset_stats(&mut self) {
        self.last_reported_path = None;
        self.last_outcome = None;
        self.last_aggregate = None;
    }

    fn require_selection(&self) -> Result<(GridCell, CellPath), NavError> {
        self.selection
            .as_ref()
            .map(|s| (s.goal, s.true_path.clone()))
            .ok_or(NavError::NoDestinationSelected)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn session() -> NavSession {
        let grid = NavGrid::new(10, 10)
            .unwrap()
            .with_destination("exit", GridCell::new(9, 9))
            .with_destination("cafe", GridCell::new(5, 1));
        let config = ReportConfig::new()
            .with_sigma(0.0)
            .with_beacon_radius(0.0)
            .with_seed(1);
        NavSession::new(grid, GridCell::new(0, 0), config).unwrap()
    }

    #[test]
    fn test_trial_without_selection_fails() {
        let mut s = session();
        assert!(matches!(
            s.run_trial().unwrap_err(),
            NavError::NoDestinationSelected
        ));
        assert!(matches!(
            s.true_path().unwrap_err(),
            NavError::NoDestinationSelected
        ));
    }

    #[test]
    fn test_unknown_destination_keeps_previous_selection() {
        let mut s = session();
        s.select_destination("exit").unwrap();

        let err = s.select_destination("atlantis").unwrap_err();
        assert!(matches!(err, NavError::UnknownDestination(name) if name == "atlantis"));
        assert_eq!(s.selected_destination(), Some(("exit", GridCell::new(9, 9))));
    }

    #[test]
    fn test_select_returns_cached_true_path() {
        let mut s = session();
        let path = s.select_destination("exit").unwrap().clone();

        assert_eq!(path.first(), Some(&GridCell::new(0, 0)));
        assert_eq!(path.last(), Some(&GridCell::new(9, 9)));
        assert_eq!(s.true_path().unwrap(), &path);
    }

    #[test]
    fn test_reselect_replaces_path_and_clears_results() {
        let mut s = session();
        s.select_destination("exit").unwrap();
        s.run_trial().unwrap();
        assert!(s.stats().last_outcome.is_some());
        assert!(s.last_reported_path().is_some());

        s.select_destination("cafe").unwrap();
        assert_eq!(s.selected_destination(), Some(("cafe", GridCell::new(5, 1))));
        assert!(s.stats().last_outcome.is_none());
        assert!(s.last_reported_path().is_none());
        assert_eq!(s.true_path().unwrap().last(), Some(&GridCell::new(5, 1)));
    }

    #[test]
    fn test_clear_selection() {
        let mut s = session();
        s.select_destination("exit").unwrap();
        s.run_trial().unwrap();

        s.clear_selection();
        assert!(s.selected_destination().is_none());
        assert!(s.true_path().is_err());
        assert!(s.stats().last_outcome.is_none());
    }

    #[test]
    fn test_stats_lifecycle() {
        let mut s = session();
        s.select_destination("exit").unwrap();

        let empty = s.stats();
        assert!(empty.aggregate.is_none());
        assert!(empty.last_outcome.is_none());
        assert_eq!(empty.sigma, 0.0);

        s.run_trial().unwrap();
        assert!(s.stats().last_outcome.is_some());
        assert!(s.stats().aggregate.is_none());

        let summary = s.run_trials(5).unwrap();
        let snapshot = s.stats();
        assert_eq!(snapshot.aggregate, Some(summary.aggregate()));
        assert_eq!(snapshot.last_outcome, Some(summary.outcomes()[4]));
        assert_eq!(
            s.last_reported_path(),
            Some(&summary.last_run().reported_path)
        );

        s.reset_stats();
        assert!(s.stats().aggregate.is_none());
        assert!(s.stats().last_outcome.is_none());
    }

    #[test]
    fn test_parameter_changes_fail_fast() {
        let mut s = session();
        s.select_destination("exit").unwrap();

        s.set_sigma(0.7).unwrap();
        s.set_beacon_radius(2.0).unwrap();
        assert_eq!(s.sigma(), 0.7);
        assert_eq!(s.beacon_radius(), 2.0);

        assert!(s.set_sigma(-0.1).is_err());
        assert!(s.set_beacon_radius(-1.0).is_err());
        assert_eq!(s.sigma(), 0.7);
        assert_eq!(s.beacon_radius(), 2.0);

        // The selection and cached path survive parameter changes.
        assert!(s.true_path().is_ok());
    }

    #[test]
    fn test_noiseless_batch_never_changes() {
        let mut s = session();
        s.select_destination("cafe").unwrap();

        let summary = s.run_trials(10).unwrap();
        assert_eq!(summary.aggregate().change_rate, 0.0);
        assert_eq!(summary.aggregate().mean_length_ratio, Some(1.0));
    }
}
