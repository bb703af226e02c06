//! MIP problem description and the caller-facing enumerations.

use crate::error::ProblemError;

/// Storage layout of the sparse constraint matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    /// Nonzeros grouped by column; starts offset into columns.
    CompressedSparseColumn,
    /// Nonzeros grouped by row; starts offset into rows.
    CompressedSparseRow,
}

impl MatrixFormat {
    /// Wire code passed to the solve entry point.
    pub fn code(self) -> i32 {
        match self {
            MatrixFormat::CompressedSparseColumn => 1,
            MatrixFormat::CompressedSparseRow => 2,
        }
    }
}

/// Optimization sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

impl Sense {
    /// Wire code passed to the solve entry point.
    pub fn code(self) -> i32 {
        match self {
            Sense::Minimize => 1,
            Sense::Maximize => -1,
        }
    }
}

/// Integrality tag for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    /// Real-valued variable.
    Continuous,
    /// Integer-valued variable.
    Integer,
    /// Zero or within its bounds, real-valued.
    SemiContinuous,
    /// Zero or within its bounds, integer-valued.
    SemiInteger,
    /// Treated as integral by the solver without branching priority.
    ImplicitInteger,
}

impl VariableType {
    /// Wire code passed to the solve entry point.
    pub fn code(self) -> i32 {
        match self {
            VariableType::Continuous => 0,
            VariableType::Integer => 1,
            VariableType::SemiContinuous => 2,
            VariableType::SemiInteger => 3,
            VariableType::ImplicitInteger => 4,
        }
    }
}

/// A fully-specified mixed-integer program in sparse form.
///
/// Transient: describes exactly one solve call and owns no foreign state.
/// Column-indexed sequences must have length `num_columns`, row-indexed
/// sequences length `num_rows`, and `matrix_starts` one entry per outer
/// dimension (columns for CSC, rows for CSR). The nonzero count is always
/// derived from `matrix_values`, never supplied separately.
#[derive(Debug, Clone, PartialEq)]
pub struct MipProblem {
    pub num_columns: usize,
    pub num_rows: usize,
    pub matrix_format: MatrixFormat,
    pub sense: Sense,
    /// Constant offset added to the objective.
    pub offset: f64,
    pub column_costs: Vec<f64>,
    pub column_lower: Vec<f64>,
    pub column_upper: Vec<f64>,
    pub row_lower: Vec<f64>,
    pub row_upper: Vec<f64>,
    pub matrix_starts: Vec<i32>,
    pub matrix_indices: Vec<i32>,
    pub matrix_values: Vec<f64>,
    pub integrality: Vec<VariableType>,
}

impl MipProblem {
    /// Number of nonzeros, derived from the values sequence.
    pub fn num_nonzeros(&self) -> usize {
        self.matrix_values.len()
    }

    /// Outer dimension of the matrix storage (columns for CSC, rows for
    /// CSR).
    pub fn outer_dimension(&self) -> usize {
        match self.matrix_format {
            MatrixFormat::CompressedSparseColumn => self.num_columns,
            MatrixFormat::CompressedSparseRow => self.num_rows,
        }
    }

    /// Inner dimension of the matrix storage, the range of `matrix_indices`.
    pub fn inner_dimension(&self) -> usize {
        match self.matrix_format {
            MatrixFormat::CompressedSparseColumn => self.num_rows,
            MatrixFormat::CompressedSparseRow => self.num_columns,
        }
    }

    /// Check the shape invariants of this description.
    ///
    /// The raw marshalling path does not call this; it exists for callers
    /// and for the validated solver surface.
    ///
    /// # Errors
    ///
    /// Returns a `ProblemError` naming the first violated invariant.
    pub fn validate(&self) -> Result<(), ProblemError> {
        check_length("column_costs", self.column_costs.len(), self.num_columns)?;
        check_length("column_lower", self.column_lower.len(), self.num_columns)?;
        check_length("column_upper", self.column_upper.len(), self.num_columns)?;
        check_length("integrality", self.integrality.len(), self.num_columns)?;
        check_length("row_lower", self.row_lower.len(), self.num_rows)?;
        check_length("row_upper", self.row_upper.len(), self.num_rows)?;
        check_length(
            "matrix_starts",
            self.matrix_starts.len(),
            self.outer_dimension(),
        )?;
        check_length(
            "matrix_indices",
            self.matrix_indices.len(),
            self.num_nonzeros(),
        )?;

        for (column, (lower, upper)) in self
            .column_lower
            .iter()
            .zip(self.column_upper.iter())
            .enumerate()
        {
            if lower > upper {
                return Err(ProblemError::InvalidColumnBounds {
                    column,
                    lower: *lower,
                    upper: *upper,
                });
            }
        }
        for (row, (lower, upper)) in self.row_lower.iter().zip(self.row_upper.iter()).enumerate() {
            if lower > upper {
                return Err(ProblemError::InvalidRowBounds {
                    row,
                    lower: *lower,
                    upper: *upper,
                });
            }
        }

        let num_nonzeros = self.num_nonzeros();
        let mut previous = 0i32;
        for (position, start) in self.matrix_starts.iter().copied().enumerate() {
            if start < 0 || start as usize > num_nonzeros {
                return Err(ProblemError::StartsOutOfRange {
                    position,
                    start,
                    num_nonzeros,
                });
            }
            if position > 0 && start < previous {
                return Err(ProblemError::StartsNotMonotone { position });
            }
            previous = start;
        }

        let bound = self.inner_dimension();
        for (position, index) in self.matrix_indices.iter().copied().enumerate() {
            if index < 0 || index as usize >= bound {
                return Err(ProblemError::IndexOutOfRange {
                    position,
                    index,
                    bound,
                });
            }
        }

        Ok(())
    }
}

fn check_length(sequence: &'static str, got: usize, expected: usize) -> Result<(), ProblemError> {
    if got != expected {
        return Err(ProblemError::SequenceLengthMismatch {
            sequence,
            expected,
            got,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> MipProblem {
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

    #[test]
    fn test_enum_wire_codes() {
        assert_eq!(MatrixFormat::CompressedSparseColumn.code(), 1);
        assert_eq!(MatrixFormat::CompressedSparseRow.code(), 2);
        assert_eq!(Sense::Minimize.code(), 1);
        assert_eq!(Sense::Maximize.code(), -1);
        assert_eq!(VariableType::Continuous.code(), 0);
        assert_eq!(VariableType::Integer.code(), 1);
        assert_eq!(VariableType::SemiContinuous.code(), 2);
        assert_eq!(VariableType::SemiInteger.code(), 3);
        assert_eq!(VariableType::ImplicitInteger.code(), 4);
    }

    #[test]
    fn test_nonzero_count_is_derived() {
        let mut problem = fixture();
        assert_eq!(problem.num_nonzeros(), 5);
        problem.matrix_values.push(9.0);
        assert_eq!(problem.num_nonzeros(), 6);
    }

    #[test]
    fn test_dimensions_follow_format() {
        let mut problem = fixture();
        assert_eq!(problem.outer_dimension(), 2);
        assert_eq!(problem.inner_dimension(), 3);
        problem.matrix_format = MatrixFormat::CompressedSparseRow;
        assert_eq!(problem.outer_dimension(), 3);
        assert_eq!(problem.inner_dimension(), 2);
    }

    #[test]
    fn test_validate_accepts_fixture() {
        assert!(fixture().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_column_length_mismatch() {
        let mut problem = fixture();
        problem.column_costs.pop();
        let err = problem.validate().unwrap_err();
        assert_eq!(err.code(), "SEQUENCE_LENGTH_MISMATCH");
        assert!(err.to_string().contains("column_costs"));
    }

    #[test]
    fn test_validate_rejects_integrality_length_mismatch() {
        let mut problem = fixture();
        problem.integrality.push(VariableType::Continuous);
        assert_eq!(
            problem.validate().unwrap_err().code(),
            "SEQUENCE_LENGTH_MISMATCH"
        );
    }

    #[test]
    fn test_validate_rejects_row_length_mismatch() {
        let mut problem = fixture();
        problem.row_upper.pop();
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_validate_starts_length_follows_format() {
        let mut problem = fixture();
        // CSR storage of the same matrix needs one start per row.
        problem.matrix_format = MatrixFormat::CompressedSparseRow;
        assert!(problem.validate().is_err());
        problem.matrix_starts = vec![0, 1, 3];
        problem.matrix_indices = vec![1, 0, 1, 0, 1];
        assert!(problem.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_decreasing_starts() {
        let mut problem = fixture();
        problem.matrix_starts = vec![2, 0];
        let err = problem.validate().unwrap_err();
        assert_eq!(err.code(), "STARTS_NOT_MONOTONE");
    }

    #[test]
    fn test_validate_rejects_start_beyond_nonzeros() {
        let mut problem = fixture();
        problem.matrix_starts = vec![0, 9];
        let err = problem.validate().unwrap_err();
        assert_eq!(err.code(), "STARTS_OUT_OF_RANGE");
    }

    #[test]
    fn test_validate_rejects_negative_start() {
        let mut problem = fixture();
        problem.matrix_starts = vec![-1, 2];
        assert_eq!(problem.validate().unwrap_err().code(), "STARTS_OUT_OF_RANGE");
    }

    #[test]
    fn test_validate_rejects_index_out_of_range() {
        let mut problem = fixture();
        problem.matrix_indices[0] = 3;
        let err = problem.validate().unwrap_err();
        assert_eq!(err.code(), "INDEX_OUT_OF_RANGE");
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut problem = fixture();
        problem.column_lower[0] = 5.0;
        assert_eq!(
            problem.validate().unwrap_err().code(),
            "COLUMN_INVALID_BOUNDS"
        );

        let mut problem = fixture();
        problem.row_lower[0] = 8.0;
        problem.row_upper[0] = 7.0;
        assert_eq!(problem.validate().unwrap_err().code(), "ROW_INVALID_BOUNDS");
    }
}
