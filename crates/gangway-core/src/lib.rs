//! Core data types for the gangway MIP bridge.
//!
//! A problem travels through the bridge as a [`MipProblem`], crosses the
//! foreign boundary as flat buffers, and comes back as a [`MipSolution`]
//! carrying the two translated status vocabularies. Nothing here touches
//! foreign memory; the marshalling itself lives in `gangway-highs`.

pub mod error;
pub mod problem;
pub mod solution;
pub mod status;

pub use error::ProblemError;
pub use problem::{MatrixFormat, MipProblem, Sense, VariableType};
pub use solution::MipSolution;
pub use status::{ModelStatus, SolverStatus};
