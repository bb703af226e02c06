//! Status vocabularies returned by the native solve entry point.
//!
//! Two independent codes come back from every call: the solver status
//! (did the invocation itself run cleanly) and the model status (the
//! outcome of the optimization relative to the problem). Both are
//! exhaustive tagged enumerations; codes outside the documented tables
//! surface as an explicit `Unrecognized` variant carrying the raw code
//! instead of a silently substituted default.

/// Coarse outcome of the solve invocation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverStatus {
    /// The invocation failed inside the solver.
    Error,
    /// The invocation completed cleanly.
    Ok,
    /// The invocation completed with warnings.
    Warning,
    /// A code outside the documented table.
    Unrecognized(i32),
}

impl SolverStatus {
    /// Map a wire code to its status.
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => SolverStatus::Error,
            0 => SolverStatus::Ok,
            1 => SolverStatus::Warning,
            other => SolverStatus::Unrecognized(other),
        }
    }

    /// Wire code for this status.
    pub fn code(self) -> i32 {
        match self {
            SolverStatus::Error => -1,
            SolverStatus::Ok => 0,
            SolverStatus::Warning => 1,
            SolverStatus::Unrecognized(code) => code,
        }
    }

    /// Documented label for this status.
    pub fn label(self) -> &'static str {
        match self {
            SolverStatus::Error => "Error",
            SolverStatus::Ok => "Ok",
            SolverStatus::Warning => "Warning",
            SolverStatus::Unrecognized(_) => "Unrecognized",
        }
    }

    /// Check whether the invocation ran without internal error.
    pub fn is_ok(self) -> bool {
        matches!(self, SolverStatus::Ok)
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverStatus::Unrecognized(code) => write!(f, "Unrecognized solver status {}", code),
            other => write!(f, "{}", other.label()),
        }
    }
}

/// Outcome of the optimization relative to the problem, independent of
/// the solver status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelStatus {
    /// No status has been set.
    NotSet,
    /// The model failed to load.
    LoadError,
    /// The model is malformed.
    ModelError,
    /// Presolve failed.
    PresolveError,
    /// The solve itself failed.
    SolveError,
    /// Postsolve failed.
    PostsolveError,
    /// The model is empty.
    Empty,
    /// Optimal solution found.
    Optimal,
    /// The model is infeasible.
    Infeasible,
    /// The model is primal infeasible or unbounded.
    PrimalInfeasibleOrUnbounded,
    /// The model is unbounded.
    Unbounded,
    /// The objective bound was reached.
    ObjectiveBound,
    /// The objective target was reached.
    ObjectiveTarget,
    /// The time limit was reached (a feasible point may exist).
    TimeLimit,
    /// The iteration limit was reached (a feasible point may exist).
    IterationLimit,
    /// The outcome is unknown.
    Unknown,
    /// A code outside the documented table.
    Unrecognized(i32),
}

impl ModelStatus {
    /// Map a wire code to its status.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ModelStatus::NotSet,
            1 => ModelStatus::LoadError,
            2 => ModelStatus::ModelError,
            3 => ModelStatus::PresolveError,
            4 => ModelStatus::SolveError,
            5 => ModelStatus::PostsolveError,
            6 => ModelStatus::Empty,
            7 => ModelStatus::Optimal,
            8 => ModelStatus::Infeasible,
            9 => ModelStatus::PrimalInfeasibleOrUnbounded,
            10 => ModelStatus::Unbounded,
            11 => ModelStatus::ObjectiveBound,
            12 => ModelStatus::ObjectiveTarget,
            13 => ModelStatus::TimeLimit,
            14 => ModelStatus::IterationLimit,
            15 => ModelStatus::Unknown,
            other => ModelStatus::Unrecognized(other),
        }
    }

    /// Wire code for this status.
    pub fn code(self) -> i32 {
        match self {
            ModelStatus::NotSet => 0,
            ModelStatus::LoadError => 1,
            ModelStatus::ModelError => 2,
            ModelStatus::PresolveError => 3,
            ModelStatus::SolveError => 4,
            ModelStatus::PostsolveError => 5,
            ModelStatus::Empty => 6,
            ModelStatus::Optimal => 7,
            ModelStatus::Infeasible => 8,
            ModelStatus::PrimalInfeasibleOrUnbounded => 9,
            ModelStatus::Unbounded => 10,
            ModelStatus::ObjectiveBound => 11,
            ModelStatus::ObjectiveTarget => 12,
            ModelStatus::TimeLimit => 13,
            ModelStatus::IterationLimit => 14,
            ModelStatus::Unknown => 15,
            ModelStatus::Unrecognized(code) => code,
        }
    }

    /// Documented label for this status.
    pub fn label(self) -> &'static str {
        match self {
            ModelStatus::NotSet => "Not Set",
            ModelStatus::LoadError => "Load error",
            ModelStatus::ModelError => "Model error",
            ModelStatus::PresolveError => "Presolve error",
            ModelStatus::SolveError => "Solve error",
            ModelStatus::PostsolveError => "Postsolve error",
            ModelStatus::Empty => "Empty",
            ModelStatus::Optimal => "Optimal",
            ModelStatus::Infeasible => "Infeasible",
            ModelStatus::PrimalInfeasibleOrUnbounded => "Primal infeasible or unbounded",
            ModelStatus::Unbounded => "Unbounded",
            ModelStatus::ObjectiveBound => "Bound on objective reached",
            ModelStatus::ObjectiveTarget => "Target for objective reached",
            ModelStatus::TimeLimit => "Time limit reached",
            ModelStatus::IterationLimit => "Iteration limit reached",
            ModelStatus::Unknown => "Unknown",
            ModelStatus::Unrecognized(_) => "Unrecognized",
        }
    }

    /// Check if the status indicates an optimal solution.
    pub fn is_optimal(self) -> bool {
        matches!(self, ModelStatus::Optimal)
    }

    /// Check if the status indicates infeasibility.
    pub fn is_infeasible(self) -> bool {
        matches!(self, ModelStatus::Infeasible)
    }

    /// Check if the status indicates unboundedness.
    pub fn is_unbounded(self) -> bool {
        matches!(self, ModelStatus::Unbounded)
    }

    /// Check if the status may come with a feasible point (optimal or
    /// limit-reached).
    pub fn may_have_solution(self) -> bool {
        matches!(
            self,
            ModelStatus::Optimal | ModelStatus::TimeLimit | ModelStatus::IterationLimit
        )
    }
}

impl std::fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelStatus::Unrecognized(code) => write!(f, "Unrecognized model status {}", code),
            other => write!(f, "{}", other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVER_TABLE: &[(i32, &str)] = &[(-1, "Error"), (0, "Ok"), (1, "Warning")];

    const MODEL_TABLE: &[(i32, &str)] = &[
        (0, "Not Set"),
        (1, "Load error"),
        (2, "Model error"),
        (3, "Presolve error"),
        (4, "Solve error"),
        (5, "Postsolve error"),
        (6, "Empty"),
        (7, "Optimal"),
        (8, "Infeasible"),
        (9, "Primal infeasible or unbounded"),
        (10, "Unbounded"),
        (11, "Bound on objective reached"),
        (12, "Target for objective reached"),
        (13, "Time limit reached"),
        (14, "Iteration limit reached"),
        (15, "Unknown"),
    ];

    #[test]
    fn test_solver_status_table_is_complete() {
        for (code, label) in SOLVER_TABLE {
            let status = SolverStatus::from_code(*code);
            assert!(
                !matches!(status, SolverStatus::Unrecognized(_)),
                "documented code {} fell through to Unrecognized",
                code
            );
            assert_eq!(status.label(), *label);
            assert_eq!(status.code(), *code);
        }
    }

    #[test]
    fn test_model_status_table_is_complete() {
        for (code, label) in MODEL_TABLE {
            let status = ModelStatus::from_code(*code);
            assert!(
                !matches!(status, ModelStatus::Unrecognized(_)),
                "documented code {} fell through to Unrecognized",
                code
            );
            assert_eq!(status.label(), *label);
            assert_eq!(status.code(), *code);
        }
    }

    #[test]
    fn test_undocumented_codes_are_tagged() {
        assert_eq!(SolverStatus::from_code(2), SolverStatus::Unrecognized(2));
        assert_eq!(SolverStatus::from_code(-7), SolverStatus::Unrecognized(-7));
        assert_eq!(ModelStatus::from_code(16), ModelStatus::Unrecognized(16));
        assert_eq!(ModelStatus::from_code(-1), ModelStatus::Unrecognized(-1));

        assert_eq!(SolverStatus::Unrecognized(2).label(), "Unrecognized");
        assert_eq!(ModelStatus::Unrecognized(16).label(), "Unrecognized");
    }

    #[test]
    fn test_unrecognized_display_carries_code() {
        assert_eq!(
            format!("{}", SolverStatus::Unrecognized(3)),
            "Unrecognized solver status 3"
        );
        assert_eq!(
            format!("{}", ModelStatus::Unrecognized(42)),
            "Unrecognized model status 42"
        );
    }

    #[test]
    fn solver_status_is_ok() {
        assert!(SolverStatus::Ok.is_ok());
        assert!(!SolverStatus::Error.is_ok());
        assert!(!SolverStatus::Warning.is_ok());
        assert!(!SolverStatus::Unrecognized(0).is_ok());
    }

    #[test]
    fn model_status_helpers() {
        assert!(ModelStatus::Optimal.is_optimal());
        assert!(!ModelStatus::Infeasible.is_optimal());
        assert!(ModelStatus::Infeasible.is_infeasible());
        assert!(ModelStatus::Unbounded.is_unbounded());
        assert!(ModelStatus::Optimal.may_have_solution());
        assert!(ModelStatus::TimeLimit.may_have_solution());
        assert!(ModelStatus::IterationLimit.may_have_solution());
        assert!(!ModelStatus::Infeasible.may_have_solution());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", SolverStatus::Ok), "Ok");
        assert_eq!(format!("{}", ModelStatus::Optimal), "Optimal");
        assert_eq!(
            format!("{}", ModelStatus::PrimalInfeasibleOrUnbounded),
            "Primal infeasible or unbounded"
        );
    }
}
