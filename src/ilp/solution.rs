//! Solved assignment snapshot.

use super::Var;

/// An optimal assignment produced by [`IlpModel::solve`](super::IlpModel::solve).
///
/// Binary variables are rounded to exactly 0 or 1; continuous variables
/// keep their LP value.
#[derive(Debug, Clone, PartialEq)]
pub struct IlpSolution {
    values: Vec<f64>,
    objective: f64,
    lp_nodes: usize,
}

impl IlpSolution {
    pub(crate) fn new(values: Vec<f64>, objective: f64, lp_nodes: usize) -> Self {
        Self {
            values,
            objective,
            lp_nodes,
        }
    }

    /// Value assigned to `var`.
    pub fn value(&self, var: Var) -> f64 {
        self.values[var.index()]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Objective value of this assignment.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Number of LP relaxations solved to reach this assignment.
    pub fn lp_nodes(&self) -> usize {
        self.lp_nodes
    }
}
