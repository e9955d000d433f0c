//! # tsp-exact
//!
//! Exact algorithms for the asymmetric Traveling Salesman Problem, side by
//! side: the assignment relaxation with lazily separated max-flow subtour
//! cuts, the static cut-set, subtour-packing and Miller–Tucker–Zemlin
//! integer programs, and assignment-bound branch-and-bound.
//!
//! ## Modules
//!
//! - [`distance`] — Arc-cost matrix
//! - [`ilp`] — Minimization ILP model solved by LP branch-and-bound
//! - [`formulation`] — TSP model builders (assignment, cut-set, packing, MTZ)
//! - [`separation`] — Support graph, max-flow cut oracle, cut injection
//! - [`solvers`] — Solve methods
//! - [`models`] — Tours, method tags, reports
//! - [`report`] — Reporters (console, JSON lines)
//! - [`benchmark`] — Harness timing and reporting each method
//! - [`instance`] — Seeded random instances
//! - [`logging`] — `env_logger` setup for binaries

pub mod benchmark;
mod config;
pub mod distance;
mod error;
pub mod formulation;
pub mod ilp;
pub mod instance;
pub mod logging;
pub mod models;
pub mod report;
pub mod separation;
pub mod solvers;

pub use config::SolverConfig;
pub use error::{Error, Result};
