//! Packs a problem into foreign memory, invokes the solve entry point,
//! and unpacks the result.

use crate::entry::{MipCallFrame, SolveEntryPoint};
use crate::memory::{ForeignMemory, IntBuffer, RealBuffer};
use gangway_core::{MipProblem, MipSolution, ModelStatus, SolverStatus};
use tracing::{debug, trace};

/// Marshal `problem` into `memory`, run the entry point, and read back
/// the solution.
///
/// Performs no shape validation: inconsistent sequence lengths pass
/// through to the entry point untouched. The nonzero count is derived
/// from the values sequence, never taken from the caller. Every foreign
/// buffer allocated here is released before this function returns,
/// whatever the solve outcome.
pub fn mip_call<M, S>(memory: &M, entry: &S, problem: &MipProblem) -> MipSolution
where
    M: ForeignMemory,
    S: SolveEntryPoint<M>,
{
    let num_nonzeros = problem.num_nonzeros();

    debug!(
        component = "marshal",
        operation = "mip_call",
        status = "success",
        num_columns = problem.num_columns,
        num_rows = problem.num_rows,
        num_nonzeros,
        matrix_format = problem.matrix_format.code(),
        sense = problem.sense.code(),
        "Packing problem into foreign memory"
    );

    let column_costs = RealBuffer::copy_in(memory, &problem.column_costs);
    let column_lower = RealBuffer::copy_in(memory, &problem.column_lower);
    let column_upper = RealBuffer::copy_in(memory, &problem.column_upper);
    let row_lower = RealBuffer::copy_in(memory, &problem.row_lower);
    let row_upper = RealBuffer::copy_in(memory, &problem.row_upper);
    let matrix_starts = IntBuffer::copy_in(memory, &problem.matrix_starts);
    let matrix_indices = IntBuffer::copy_in(memory, &problem.matrix_indices);
    let matrix_values = RealBuffer::copy_in(memory, &problem.matrix_values);
    let integrality_codes: Vec<i32> = problem.integrality.iter().map(|tag| tag.code()).collect();
    let integrality = IntBuffer::copy_in(memory, &integrality_codes);

    let column_values = RealBuffer::alloc(memory, problem.num_columns);
    let row_values = RealBuffer::alloc(memory, problem.num_rows);
    let model_status = IntBuffer::alloc(memory, 1);

    let frame = MipCallFrame {
        num_columns: problem.num_columns as i32,
        num_rows: problem.num_rows as i32,
        num_nonzeros: num_nonzeros as i32,
        matrix_format: problem.matrix_format.code(),
        sense: problem.sense.code(),
        offset: problem.offset,
        column_costs: column_costs.addr(),
        column_lower: column_lower.addr(),
        column_upper: column_upper.addr(),
        row_lower: row_lower.addr(),
        row_upper: row_upper.addr(),
        matrix_starts: matrix_starts.addr(),
        matrix_indices: matrix_indices.addr(),
        matrix_values: matrix_values.addr(),
        integrality: integrality.addr(),
        column_values: column_values.addr(),
        row_values: row_values.addr(),
        model_status: model_status.addr(),
    };

    let solver_code = entry.mip_call(memory, &frame);

    let column_out = column_values.copy_out();
    let row_out = row_values.copy_out();
    let model_code = model_status.read(0);

    trace!(
        component = "marshal",
        operation = "unpack",
        status = "success",
        solver_code,
        model_code,
        "Read back solution buffers"
    );

    // All twelve buffer guards release as this scope ends; order does
    // not matter since none alias.
    MipSolution::new(
        SolverStatus::from_code(solver_code),
        ModelStatus::from_code(model_code),
        column_out,
        row_out,
    )
}
