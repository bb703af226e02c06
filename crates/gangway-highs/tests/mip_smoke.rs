//! End-to-end solves against the native HiGHS entry point.

use gangway_core::{MatrixFormat, MipProblem, ModelStatus, Sense, SolverStatus, VariableType};
use gangway_highs::Solver;

/// Maximize x0 + x1 + 3 over a 2-column, 3-row instance with integer
/// variables; the optimum sits at (4, 5).
fn fixture_problem() -> MipProblem {
    MipProblem {
        num_columns: 2,
        num_rows: 3,
        matrix_format: MatrixFormat::CompressedSparseColumn,
        sense: Sense::Maximize,
        offset: 3.0,
        column_costs: vec![1.0, 1.0],
        column_lower: vec![0.0, 1.0],
        column_upper: vec![4.0, 1e30],
        row_lower: vec![-1e30, 5.0, 6.0],
        row_upper: vec![7.0, 15.0, 1e30],
        matrix_starts: vec![0, 2],
        matrix_indices: vec![1, 2, 0, 1, 2],
        matrix_values: vec![1.0, 3.0, 1.0, 2.0, 2.0],
        integrality: vec![VariableType::Integer, VariableType::Integer],
    }
}

fn assert_close(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len());
    for (index, (got, want)) in got.iter().zip(want.iter()).enumerate() {
        assert!(
            (got - want).abs() < 1e-6,
            "value {} mismatch: expected {}, got {}",
            index,
            want,
            got
        );
    }
}

#[test]
fn test_mip_call_known_instance() {
    // Initialize tracing for diagnostics
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let solver = Solver::native();
    let solution = solver
        .solve(&fixture_problem())
        .expect("fixture shape is valid");

    assert_eq!(solution.solver_status(), SolverStatus::Ok);
    assert_eq!(solution.model_status(), ModelStatus::Optimal);
    assert_eq!(solution.solver_status().label(), "Ok");
    assert_eq!(solution.model_status().label(), "Optimal");

    assert_close(solution.column_values(), &[4.0, 5.0]);
    assert_close(solution.row_values(), &[5.0, 14.0, 22.0]);
}

#[test]
fn test_identical_calls_produce_identical_results() {
    let solver = Solver::native();
    let problem = fixture_problem();

    let first = solver.solve(&problem).expect("fixture shape is valid");
    let second = solver.solve(&problem).expect("fixture shape is valid");
    assert_eq!(first, second);
}

#[test]
fn test_heap_buffers_balance_after_solve() {
    let solver = Solver::native();
    let _ = solver.solve(&fixture_problem()).expect("fixture shape is valid");

    assert_eq!(
        solver.memory().alloc_count(),
        solver.memory().free_count(),
        "every foreign buffer must be released"
    );
    assert_eq!(solver.memory().live_count(), 0);
}

#[test]
fn test_infeasible_instance_reports_status() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    // x >= 3 and x <= 1 cannot both hold.
    let problem = MipProblem {
        num_columns: 1,
        num_rows: 2,
        matrix_format: MatrixFormat::CompressedSparseColumn,
        sense: Sense::Minimize,
        offset: 0.0,
        column_costs: vec![1.0],
        column_lower: vec![0.0],
        column_upper: vec![10.0],
        row_lower: vec![3.0, -1e30],
        row_upper: vec![1e30, 1.0],
        matrix_starts: vec![0],
        matrix_indices: vec![0, 1],
        matrix_values: vec![1.0, 1.0],
        integrality: vec![VariableType::Integer],
    };

    let solver = Solver::native();
    let solution = solver.solve(&problem).expect("problem shape is valid");
    assert_eq!(solution.model_status(), ModelStatus::Infeasible);
}

#[test]
fn test_highs_version_is_reported() {
    let version = gangway_highs::highs_version();
    assert!(version.is_some_and(|v| !v.is_empty()));
}
