//! Arc-cost matrices.
//!
//! Provides a dense, possibly asymmetric cost matrix for the complete
//! directed graph the formulations are built over.

mod matrix;

pub use matrix::CostMatrix;
