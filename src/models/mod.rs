//! Domain model types for the benchmark.
//!
//! Provides the tour produced by every method, the method tags, and the
//! per-method report handed to reporters.

mod method;
mod report;
mod tour;

pub use method::{BranchAndBoundType, Method};
pub use report::SolveReport;
pub use tour::{cycles, Tour};
