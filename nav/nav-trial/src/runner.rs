//! Trial orchestration: true path vs. reported path, repeated.

use nav_pathfind::GridAStar;
use nav_report::PositionReporter;
use nav_types::{AggregateStats, CellPath, GridCell, NavError, NavGrid, ReportConfig, TrialOutcome};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::compare::{aggregate, compare_paths};

/// The record of a single trial.
///
/// Holds everything the trial produced: the deterministic true path,
/// the sampled reported position, the path replanned from it, and the
/// comparison outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRun {
    /// Shortest path from the true start to the goal.
    pub true_path: CellPath,
    /// The noisy reported position for this trial.
    pub reported_cell: GridCell,
    /// Shortest path from the reported position to the goal.
    pub reported_path: CellPath,
    /// Comparison of the reported path against the true path.
    pub outcome: TrialOutcome,
}

/// The result of a batch of trials.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSummary {
    outcomes: Vec<TrialOutcome>,
    aggregate: AggregateStats,
    last_run: TrialRun,
}

impl TrialSummary {
    /// Per-trial outcomes, in trial order.
    #[must_use]
    pub fn outcomes(&self) -> &[TrialOutcome] {
        &self.outcomes
    }

    /// Aggregate statistics over all trials in the batch.
    #[must_use]
    pub const fn aggregate(&self) -> AggregateStats {
        self.aggregate
    }

    /// The full record of the final trial.
    #[must_use]
    pub const fn last_run(&self) -> &TrialRun {
        &self.last_run
    }
}

/// Runs noisy-position trials against a fixed grid.
///
/// Each trial samples a reported position for the true start, plans a
/// path from both positions to the goal, and compares the two. The
/// true path is deterministic, so within a batch it is computed once.
///
/// # Example
///
/// ```
/// use nav_trial::TrialRunner;
/// use nav_types::{GridCell, NavGrid, ReportConfig};
///
/// let grid = NavGrid::new(10, 10).unwrap();
/// let config = ReportConfig::new().with_sigma(0.0).with_seed(1);
/// let mut runner = TrialRunner::new(grid, config).unwrap();
///
/// let run = runner.run_trial(GridCell::new(0, 0), GridCell::new(9, 9));
/// assert!(!run.outcome.changed);
/// ```
#[derive(Debug)]
pub struct TrialRunner<R: Rng = StdRng> {
    grid: NavGrid,
    reporter: PositionReporter<R>,
}

impl TrialRunner<StdRng> {
    /// Creates a runner, seeding the reporter from the config.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if the configuration is
    /// invalid.
    pub fn new(grid: NavGrid, config: ReportConfig) -> Result<Self, NavError> {
        let reporter = PositionReporter::new(config)?;
        Ok(Self { grid, reporter })
    }
}

impl<R: Rng> TrialRunner<R> {
    /// Creates a runner around an existing reporter.
    #[must_use]
    pub const fn with_reporter(grid: NavGrid, reporter: PositionReporter<R>) -> Self {
        Self { grid, reporter }
    }

    /// The grid trials run against.
    #[must_use]
    pub const fn grid(&self) -> &NavGrid {
        &self.grid
    }

    /// The reporter driving the noisy positions.
    #[must_use]
    pub const fn reporter(&self) -> &PositionReporter<R> {
        &self.reporter
    }

    /// Mutable access to the reporter, for runtime parameter changes.
    pub fn reporter_mut(&mut self) -> &mut PositionReporter<R> {
        &mut self.reporter
    }

    /// Runs a single trial from `start` to `goal`.
    ///
    /// Degenerate queries are not errors: a blocked or out-of-bounds
    /// endpoint simply yields empty paths, and the outcome records
    /// that.
    pub fn run_trial(&mut self, start: GridCell, goal: GridCell) -> TrialRun {
        let true_path = GridAStar::new(&self.grid).find_path(start, goal);
        self.run_trial_with(&true_path, start, goal)
    }

    /// Runs `count` trials from `start` to `goal`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if `count` is zero.
    pub fn run_trials(
        &mut self,
        start: GridCell,
        goal: GridCell,
        count: usize,
    ) -> Result<TrialSummary, NavError> {
        let true_path = GridAStar::new(&self.grid).find_path(start, goal);
        self.run_trials_with(&true_path, start, goal, count)
    }

    /// Runs `count` trials against a caller-supplied true path.
    ///
    /// Useful when the true path is already computed (it is
    /// deterministic for a fixed grid and endpoints).
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if `count` is zero.
    pub fn run_trials_with(
        &mut self,
        true_path: &CellPath,
        start: GridCell,
        goal: GridCell,
        count: usize,
    ) -> Result<TrialSummary, NavError> {
        if count == 0 {
            return Err(NavError::invalid_config("trial count must be at least 1"));
        }

        let mut outcomes = Vec::with_capacity(count);
        let mut last_run = self.run_trial_with(true_path, start, goal);
        outcomes.push(last_run.outcome);
        for _ in 1..count {
            last_run = self.run_trial_with(true_path, start, goal);
            outcomes.push(last_run.outcome);
        }

        let aggregate = aggregate(&outcomes);

        info!(
            trials = count,
            change_rate = aggregate.change_rate,
            "batch complete"
        );

        Ok(TrialSummary {
            outcomes,
            aggregate,
            last_run,
        })
    }

    /// Runs a single trial against a caller-supplied true path.
    pub fn run_trial_with(
        &mut self,
        true_path: &CellPath,
        start: GridCell,
        goal: GridCell,
    ) -> TrialRun {
        let reported_cell = self.reporter.report(&self.grid, start);
        let reported_path = GridAStar::new(&self.grid).find_path(reported_cell, goal);
        let outcome = compare_paths(true_path, &reported_path);

        debug!(
            reported_x = reported_cell.x,
            reported_y = reported_cell.y,
            changed = outcome.changed,
            "trial complete"
        );

        TrialRun {
            true_path: true_path.clone(),
            reported_cell,
            reported_path,
            outcome,
        }
    }
}
