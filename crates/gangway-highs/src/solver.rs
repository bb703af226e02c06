//! Validated solve facade over the raw marshalling call.

use crate::entry::{HighsEntryPoint, SolveEntryPoint};
use crate::marshal;
use crate::memory::{ForeignMemory, ProcessHeap};
use crate::probe::MemorySnapshot;
use gangway_core::{MipProblem, MipSolution, ProblemError};
use std::time::Instant;
use tracing::{debug, warn};

/// A host-memory / entry-point pairing with a validated solve surface.
///
/// The raw pass-through path is [`marshal::mip_call`]; this facade checks
/// the problem's shape invariants first and logs the solve outcome.
pub struct Solver<M, S> {
    memory: M,
    entry: S,
}

impl Solver<ProcessHeap, HighsEntryPoint> {
    /// Solver backed by the process heap and the native HiGHS entry
    /// point.
    pub fn native() -> Self {
        Solver {
            memory: ProcessHeap::new(),
            entry: HighsEntryPoint,
        }
    }
}

impl Default for Solver<ProcessHeap, HighsEntryPoint> {
    fn default() -> Self {
        Self::native()
    }
}

impl<M, S> Solver<M, S>
where
    M: ForeignMemory,
    S: SolveEntryPoint<M>,
{
    /// Pair an arbitrary host memory with an entry point.
    pub fn new(memory: M, entry: S) -> Self {
        Solver { memory, entry }
    }

    /// Borrow the host memory.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Validate the problem shape, then marshal and solve.
    ///
    /// Solve outcomes are data, not errors: a failed solve still comes
    /// back as `Ok` carrying its status codes.
    ///
    /// # Errors
    ///
    /// Returns a `ProblemError` if the description violates its shape
    /// invariants; nothing is marshalled in that case.
    pub fn solve(&self, problem: &MipProblem) -> Result<MipSolution, ProblemError> {
        if let Err(err) = problem.validate() {
            warn!(
                component = "solver",
                operation = "validate",
                status = "error",
                error = %err,
                "Problem shape validation failed"
            );
            return Err(err);
        }

        let rss_before = capture_rss("solve_start");
        let solve_started = Instant::now();
        debug!(
            component = "solver",
            operation = "solve",
            status = "success",
            num_columns = problem.num_columns,
            num_rows = problem.num_rows,
            num_nonzeros = problem.num_nonzeros(),
            rss_bytes = ?rss_before,
            "Starting marshalled solve"
        );

        let solution = marshal::mip_call(&self.memory, &self.entry, problem);

        let solve_ms = solve_started.elapsed().as_secs_f64() * 1000.0;
        let rss_after = capture_rss("solve_end");

        if solution.is_ok() && solution.is_optimal() {
            debug!(
                component = "solver",
                operation = "solve",
                status = "success",
                solver_status = solution.solver_status().label(),
                model_status = solution.model_status().label(),
                duration_ms = solve_ms,
                rss_bytes = ?rss_after,
                "Solve completed"
            );
        } else {
            warn!(
                component = "solver",
                operation = "solve",
                status = "warn",
                solver_status = solution.solver_status().label(),
                model_status = solution.model_status().label(),
                duration_ms = solve_ms,
                rss_bytes = ?rss_after,
                "Solve finished without an optimal outcome"
            );
        }

        Ok(solution)
    }
}

fn capture_rss(stage: &str) -> Option<u64> {
    MemorySnapshot::capture(stage)
        .ok()
        .map(|snapshot| snapshot.rss_bytes)
}
