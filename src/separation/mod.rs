//! Subtour separation by max-flow / min-cut.
//!
//! - [`SupportGraph`] — selected arcs of the current solution, unit capacity
//! - [`CutOracle`] — root → probe max-flow and the matching min cut
//! - [`inject_cut`] — adds "at least one arc crosses the cut" to the model

mod cut_oracle;
mod injector;
mod support_graph;

pub use cut_oracle::{CutOracle, CutPartition, ROOT};
pub use injector::{crossing_expr, inject_cut};
pub use support_graph::SupportGraph;
