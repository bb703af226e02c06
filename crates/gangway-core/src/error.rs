//! Problem shape error types.

/// Errors raised when a problem description violates its shape invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemError {
    /// A sequence does not have the length its dimension requires.
    SequenceLengthMismatch {
        sequence: &'static str,
        expected: usize,
        got: usize,
    },
    /// Matrix start offsets decrease somewhere.
    StartsNotMonotone { position: usize },
    /// A matrix start offset points outside the nonzero range.
    StartsOutOfRange {
        position: usize,
        start: i32,
        num_nonzeros: usize,
    },
    /// A matrix index points outside the inner dimension.
    IndexOutOfRange {
        position: usize,
        index: i32,
        bound: usize,
    },
    /// Column bounds are inverted.
    InvalidColumnBounds { column: usize, lower: f64, upper: f64 },
    /// Row bounds are inverted.
    InvalidRowBounds { row: usize, lower: f64, upper: f64 },
}

impl ProblemError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ProblemError::SequenceLengthMismatch { .. } => "SEQUENCE_LENGTH_MISMATCH",
            ProblemError::StartsNotMonotone { .. } => "STARTS_NOT_MONOTONE",
            ProblemError::StartsOutOfRange { .. } => "STARTS_OUT_OF_RANGE",
            ProblemError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            ProblemError::InvalidColumnBounds { .. } => "COLUMN_INVALID_BOUNDS",
            ProblemError::InvalidRowBounds { .. } => "ROW_INVALID_BOUNDS",
        }
    }
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::SequenceLengthMismatch {
                sequence,
                expected,
                got,
            } => write!(
                f,
                "[{}] {} length must be {} (got {})",
                self.code(),
                sequence,
                expected,
                got
            ),
            ProblemError::StartsNotMonotone { position } => write!(
                f,
                "[{}] matrix starts must be non-decreasing (position {})",
                self.code(),
                position
            ),
            ProblemError::StartsOutOfRange {
                position,
                start,
                num_nonzeros,
            } => write!(
                f,
                "[{}] matrix start {} at position {} outside nonzero range 0..={}",
                self.code(),
                start,
                position,
                num_nonzeros
            ),
            ProblemError::IndexOutOfRange {
                position,
                index,
                bound,
            } => write!(
                f,
                "[{}] matrix index {} at position {} outside 0..{}",
                self.code(),
                index,
                position,
                bound
            ),
            ProblemError::InvalidColumnBounds {
                column,
                lower,
                upper,
            } => write!(
                f,
                "[{}] column {} bounds invalid: lower ({}) > upper ({})",
                self.code(),
                column,
                lower,
                upper
            ),
            ProblemError::InvalidRowBounds { row, lower, upper } => write!(
                f,
                "[{}] row {} bounds invalid: lower ({}) > upper ({})",
                self.code(),
                row,
                lower,
                upper
            ),
        }
    }
}

impl std::error::Error for ProblemError {}
