//! Integer linear programming.
//!
//! A small minimization ILP layer: the LP relaxation is solved with
//! `minilp`'s dual simplex and integrality of binary variables is restored
//! by depth-first branch-and-bound.

mod branch;
mod model;
mod solution;

pub use model::{Comparison, Constraint, IlpModel, LinearExpr, Var, VarKind};
pub use solution::IlpSolution;
