//! End-to-end trials on a realistic terminal-floor fixture.

#![allow(clippy::unwrap_used)]

use nav_trial::{NavSession, TrialRunner};
use nav_types::{GridCell, NavGrid, ReportConfig};

/// The 20x12 terminal floor: shop-front walls, five destinations,
/// beacons ringing the start area.
fn terminal_grid() -> NavGrid {
    let walls = [
        (5, 2),
        (5, 3),
        (5, 4),
        (5, 5),
        (5, 6),
        (5, 7),
        (11, 1),
        (12, 1),
        (13, 1),
        (14, 1),
        (11, 9),
        (12, 9),
        (15, 9),
        (16, 9),
        (8, 6),
        (9, 6),
        (9, 3),
        (9, 4),
        (11, 5),
        (13, 5),
        (14, 5),
        (16, 3),
        (16, 4),
        (17, 4),
    ];
    let beacons = [
        (1, 6),
        (3, 6),
        (2, 5),
        (2, 7),
        (4, 4),
        (4, 8),
        (0, 4),
        (0, 8),
    ];

    NavGrid::new(20, 12)
        .unwrap()
        .with_walls(walls.map(GridCell::from))
        .with_destination("Gate A", GridCell::new(17, 2))
        .with_destination("Gate B", GridCell::new(17, 9))
        .with_destination("Nandos", GridCell::new(10, 4))
        .with_destination("Boots", GridCell::new(13, 9))
        .with_destination("Sports Direct", GridCell::new(14, 2))
        .with_beacons(beacons.map(GridCell::from))
}

fn start() -> GridCell {
    GridCell::new(2, 6)
}

#[test]
fn test_noiseless_session_reproduces_true_path() {
    // Every beacon is at least 1.0 from the start, so radius 0 keeps
    // the exact report from snapping away.
    let config = ReportConfig::new()
        .with_sigma(0.0)
        .with_beacon_radius(0.0)
        .with_seed(1);
    let mut session = NavSession::new(terminal_grid(), start(), config).unwrap();
    session.select_destination("Gate A").unwrap();

    let run = session.run_trial().unwrap();
    assert_eq!(run.reported_cell, start());
    assert_eq!(run.true_path, run.reported_path);
    assert_eq!(run.true_path.len(), 22);
    assert!(!run.outcome.changed);
    assert_eq!(run.outcome.length_ratio, Some(1.0));
}

#[test]
fn test_extreme_noise_never_faults() {
    // Reports far outside the floor clamp back in; every trial still
    // produces a defined outcome.
    let config = ReportConfig::new()
        .with_sigma(100.0)
        .with_beacon_radius(0.0)
        .with_seed(2);
    let mut session = NavSession::new(terminal_grid(), start(), config).unwrap();
    session.select_destination("Gate B").unwrap();

    let summary = session.run_trials(200).unwrap();
    assert_eq!(summary.outcomes().len(), 200);
    for outcome in summary.outcomes() {
        // The goal is reachable and reports stay in bounds, so the
        // reported path exists unless the report lands on a wall.
        if let Some(ratio) = outcome.length_ratio {
            assert!(ratio.is_infinite() || ratio > 0.0);
        }
    }
}

#[test]
fn test_batch_reports_final_trial() {
    let config = ReportConfig::new().with_sigma(0.5).with_seed(3);
    let mut session = NavSession::new(terminal_grid(), start(), config).unwrap();
    session.select_destination("Nandos").unwrap();

    let summary = session.run_trials(10).unwrap();
    assert_eq!(summary.outcomes().len(), 10);
    assert_eq!(summary.last_run().outcome, summary.outcomes()[9]);
    assert!(!summary.last_run().true_path.is_empty());
    assert_eq!(
        summary.last_run().true_path.last(),
        Some(&GridCell::new(10, 4))
    );
}

#[test]
fn test_moderate_noise_with_beacons_is_reproducible() {
    let config = ReportConfig::new()
        .with_sigma(0.3)
        .with_beacon_radius(1.0)
        .with_seed(42);

    let mut a = NavSession::new(terminal_grid(), start(), config).unwrap();
    let mut b = NavSession::new(terminal_grid(), start(), config).unwrap();
    a.select_destination("Boots").unwrap();
    b.select_destination("Boots").unwrap();

    let sa = a.run_trials(50).unwrap();
    let sb = b.run_trials(50).unwrap();
    assert_eq!(sa.outcomes(), sb.outcomes());
    assert_eq!(sa.aggregate(), sb.aggregate());
}

#[test]
fn test_runner_visits_every_destination() {
    let grid = terminal_grid();
    let names: Vec<String> = grid.destination_names().map(str::to_owned).collect();
    let config = ReportConfig::new().with_sigma(0.3).with_seed(9);
    let mut runner = TrialRunner::new(grid, config).unwrap();

    assert_eq!(names.len(), 5);
    for name in &names {
        let goal = runner.grid().destination(name).unwrap();
        let summary = runner.run_trials(start(), goal, 20).unwrap();

        assert_eq!(summary.outcomes().len(), 20);
        let rate = summary.aggregate().change_rate;
        assert!((0.0..=1.0).contains(&rate));
    }
}

#[test]
fn test_stats_snapshot_round() {
    let config = ReportConfig::new()
        .with_sigma(0.3)
        .with_beacon_radius(1.0)
        .with_seed(4);
    let mut session = NavSession::new(terminal_grid(), start(), config).unwrap();
    session.select_destination("Sports Direct").unwrap();

    session.run_trials(30).unwrap();
    let snapshot = session.stats();

    assert_eq!(snapshot.sigma, 0.3);
    assert_eq!(snapshot.beacon_radius, 1.0);
    let aggregate = snapshot.aggregate.unwrap();
    assert!((0.0..=1.0).contains(&aggregate.change_rate));
    assert!(snapshot.last_outcome.is_some());
}
