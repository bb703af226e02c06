//! The opaque solve entry point and its native HiGHS binding.
//!
//! This module contains unsafe code for interacting with the C library.
#![allow(unsafe_code)]

use crate::memory::{ForeignMemory, ProcessHeap};
use highs_sys::HighsInt;
use std::ffi::CStr;

/// The positional frame of one solve invocation.
///
/// Field order matches the native signature: three counts, matrix
/// format, sense, objective offset, nine input buffer addresses, three
/// output buffer addresses.
#[derive(Debug, Clone, Copy)]
pub struct MipCallFrame {
    pub num_columns: i32,
    pub num_rows: i32,
    pub num_nonzeros: i32,
    pub matrix_format: i32,
    pub sense: i32,
    pub offset: f64,
    pub column_costs: usize,
    pub column_lower: usize,
    pub column_upper: usize,
    pub row_lower: usize,
    pub row_upper: usize,
    pub matrix_starts: usize,
    pub matrix_indices: usize,
    pub matrix_values: usize,
    pub integrality: usize,
    pub column_values: usize,
    pub row_values: usize,
    pub model_status: usize,
}

/// Capability interface over the native solve routine.
///
/// One synchronous method: the call blocks for the full solve, performs
/// no callback, and communicates failure only through the returned
/// solver-status code and the model-status output buffer.
pub trait SolveEntryPoint<M: ForeignMemory> {
    /// Invoke the solve against buffers resident in `memory`.
    fn mip_call(&self, memory: &M, frame: &MipCallFrame) -> i32;
}

/// Entry point backed by the `Highs_mipCall` symbol.
///
/// Pairs only with [`ProcessHeap`]: the frame's buffer addresses must be
/// real pointers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighsEntryPoint;

impl SolveEntryPoint<ProcessHeap> for HighsEntryPoint {
    fn mip_call(&self, _memory: &ProcessHeap, frame: &MipCallFrame) -> i32 {
        // SAFETY: every address in the frame is a live ProcessHeap
        // allocation sized for the counts passed alongside it, and the
        // solver does not retain the pointers past the call.
        let status = unsafe {
            highs_sys::Highs_mipCall(
                frame.num_columns as HighsInt,
                frame.num_rows as HighsInt,
                frame.num_nonzeros as HighsInt,
                frame.matrix_format as HighsInt,
                frame.sense as HighsInt,
                frame.offset,
                frame.column_costs as *const f64,
                frame.column_lower as *const f64,
                frame.column_upper as *const f64,
                frame.row_lower as *const f64,
                frame.row_upper as *const f64,
                frame.matrix_starts as *const HighsInt,
                frame.matrix_indices as *const HighsInt,
                frame.matrix_values as *const f64,
                frame.integrality as *const HighsInt,
                frame.column_values as *mut f64,
                frame.row_values as *mut f64,
                frame.model_status as *mut HighsInt,
            )
        };
        status as i32
    }
}

/// Return the HiGHS solver version string, if available.
pub fn highs_version() -> Option<String> {
    unsafe {
        let ptr = highs_sys::Highs_version();
        if ptr.is_null() {
            None
        } else {
            CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
        }
    }
}
