//! Marshalling bridge between structured MIP problems and the HiGHS
//! native solve entry point.
//!
//! The bridge packs caller arrays into a foreign linear memory, invokes
//! the one exported solve routine, unpacks the two solution buffers, and
//! translates the returned status codes. The solver itself stays an
//! opaque collaborator behind [`SolveEntryPoint`]; host memories plug in
//! behind [`ForeignMemory`].

pub mod entry;
pub mod marshal;
pub mod memory;
pub mod probe;
pub mod solver;

pub use entry::{HighsEntryPoint, MipCallFrame, SolveEntryPoint, highs_version};
pub use marshal::mip_call;
pub use memory::{
    ArenaMemory, ForeignMemory, INT_WIDTH, IntBuffer, ProcessHeap, REAL_WIDTH, RealBuffer,
};
pub use probe::{MemorySnapshot, ProbeError};
pub use solver::Solver;
