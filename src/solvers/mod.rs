//! Exact TSP solve methods.
//!
//! - [`solve_with_max_flow`] — assignment relaxation + lazy max-flow cuts
//! - [`solve_with_cut_set`] — full cut-set formulation, O(2ⁿ) constraints
//! - [`solve_with_subtour_elimination`] — full packing formulation, O(2ⁿ) constraints
//! - [`solve_with_mtz`] — Miller–Tucker–Zemlin, O(n²) constraints
//! - [`solve_with_branch_and_bound`] — assignment-bound tree search, binary or total branching

mod branch_and_bound;
mod max_flow;
mod static_model;

pub use branch_and_bound::{solve_with_branch_and_bound, BranchAndBoundOutcome};
pub use max_flow::{solve_with_max_flow, LazyCutOutcome};
pub use static_model::{
    solve_with_cut_set, solve_with_mtz, solve_with_subtour_elimination, StaticOutcome,
};
