#![cfg(feature = "dev")]

use whittaker_rs::internals::engine::executor::{locate_query, Executor, QueryRow};
use whittaker_rs::internals::engine::workspace::WhittakerWorkspace;

const KNOTS: [f64; 4] = [0.0, 1.0, 2.0, 3.0];

#[test]
fn test_locate_query_below_all_knots() {
    assert_eq!(locate_query(-5.0, &KNOTS), QueryRow::Insert(0));
}

#[test]
fn test_locate_query_above_all_knots() {
    assert_eq!(locate_query(7.0, &KNOTS), QueryRow::Insert(4));
}

#[test]
fn test_locate_query_interior() {
    assert_eq!(locate_query(0.5, &KNOTS), QueryRow::Insert(1));
    assert_eq!(locate_query(1.5, &KNOTS), QueryRow::Insert(2));
    assert_eq!(locate_query(2.9, &KNOTS), QueryRow::Insert(3));
}

#[test]
fn test_locate_query_coincident_knot() {
    assert_eq!(locate_query(0.0, &KNOTS), QueryRow::Coincident(0));
    assert_eq!(locate_query(2.0, &KNOTS), QueryRow::Coincident(2));
    assert_eq!(locate_query(3.0, &KNOTS), QueryRow::Coincident(3));
}

#[test]
fn test_run_fills_every_channel() {
    // Two affine channels; the solver recovers both exactly.
    let y_table = [1.0, -2.0, 3.0, 0.0, 5.0, 2.0, 7.0, 4.0];

    let mut ws = WhittakerWorkspace::new();
    let mut result = [0.0; 2];
    Executor::run(1.5, &KNOTS, &y_table, 2, 1.0, &mut ws, &mut result).unwrap();

    assert!((result[0] - 4.0).abs() < 1e-9, "got {}", result[0]);
    assert!((result[1] - 1.0).abs() < 1e-9, "got {}", result[1]);
}

#[test]
fn test_run_reuses_workspace_across_calls() {
    let y_table = [0.0, 1.0, 4.0, 9.0];

    let mut ws = WhittakerWorkspace::new();
    let mut first = [0.0];
    let mut second = [0.0];

    // A larger solve followed by a smaller one must not see stale state.
    Executor::run(1.5, &KNOTS, &y_table, 1, 1.0, &mut ws, &mut first).unwrap();
    Executor::run(0.5, &KNOTS[..2], &y_table[..2], 1, 1.0, &mut ws, &mut second).unwrap();
    assert!((second[0] - 0.5).abs() < 1e-9, "got {}", second[0]);

    let mut again = [0.0];
    Executor::run(1.5, &KNOTS, &y_table, 1, 1.0, &mut ws, &mut again).unwrap();
    assert_eq!(first[0], again[0]);
}

#[test]
fn test_run_coincident_query_uses_unaugmented_system() {
    // At a knot the system has m = n rows with uniform weights; the result
    // sits between the raw sample and its smoothed neighborhood.
    let y_table = [0.0, 1.0, 4.0, 9.0];

    let mut ws = WhittakerWorkspace::new();
    let mut result = [0.0];
    Executor::run(2.0, &KNOTS, &y_table, 1, 1.0, &mut ws, &mut result).unwrap();

    assert!((result[0] - 4.0).abs() < 0.5, "got {}", result[0]);
}
