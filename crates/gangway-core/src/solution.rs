//! Structured result of one marshalled solve call.

use crate::status::{ModelStatus, SolverStatus};

/// Solution read back from the solve entry point.
///
/// Immutable once constructed; the marshaller's involvement ends when it
/// hands this to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct MipSolution {
    solver_status: SolverStatus,
    model_status: ModelStatus,
    column_values: Vec<f64>,
    row_values: Vec<f64>,
}

impl MipSolution {
    /// Assemble a solution from unpacked buffers and translated codes.
    pub fn new(
        solver_status: SolverStatus,
        model_status: ModelStatus,
        column_values: Vec<f64>,
        row_values: Vec<f64>,
    ) -> Self {
        MipSolution {
            solver_status,
            model_status,
            column_values,
            row_values,
        }
    }

    /// Coarse outcome of the invocation itself.
    pub fn solver_status(&self) -> SolverStatus {
        self.solver_status
    }

    /// Outcome of the optimization relative to the problem.
    pub fn model_status(&self) -> ModelStatus {
        self.model_status
    }

    /// Primal values for all columns.
    pub fn column_values(&self) -> &[f64] {
        &self.column_values
    }

    /// Activity values for all rows.
    pub fn row_values(&self) -> &[f64] {
        &self.row_values
    }

    /// Get the column value at the given index.
    pub fn get_column_value(&self, index: usize) -> Option<f64> {
        self.column_values.get(index).copied()
    }

    /// Get the row activity at the given index.
    pub fn get_row_value(&self, index: usize) -> Option<f64> {
        self.row_values.get(index).copied()
    }

    /// Check if the invocation ran without internal error.
    pub fn is_ok(&self) -> bool {
        self.solver_status.is_ok()
    }

    /// Check if the optimization reached an optimal solution.
    pub fn is_optimal(&self) -> bool {
        self.model_status.is_optimal()
    }
}
