//! Arc decision variables.

use crate::ilp::{IlpModel, IlpSolution, Var};

/// Maps each ordered pair `(i, j)`, `i != j`, to its binary variable `x[i,j]`.
#[derive(Debug, Clone)]
pub struct ArcVars {
    size: usize,
    vars: Vec<Option<Var>>,
}

impl ArcVars {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            vars: vec![None; size * size],
        }
    }

    pub(crate) fn insert(&mut self, from: usize, to: usize, var: Var) {
        self.vars[from * self.size + to] = Some(var);
    }

    /// Variable for arc `from → to`, or `None` on the diagonal.
    pub fn get(&self, from: usize, to: usize) -> Option<Var> {
        self.vars[from * self.size + to]
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterates over `((from, to), var)` for every arc.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Var)> + '_ {
        let n = self.size;
        self.vars
            .iter()
            .copied()
            .enumerate()
            .filter_map(move |(k, var)| var.map(|v| ((k / n, k % n), v)))
    }

    /// Arcs whose value in `solution` exceeds `threshold`.
    pub fn selected_arcs(&self, solution: &IlpSolution, threshold: f64) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|&(_, var)| solution.value(var) > threshold)
            .map(|(arc, _)| arc)
            .collect()
    }
}

/// An ILP over arc variables.
#[derive(Debug, Clone)]
pub struct TspModel {
    pub model: IlpModel,
    pub arcs: ArcVars,
}

impl TspModel {
    /// Fixes `x[from,to]` to `value` (0 or 1) through its bounds.
    pub fn fix_arc(&mut self, from: usize, to: usize, value: f64) {
        if let Some(var) = self.arcs.get(from, to) {
            self.model.set_bounds(var, value, value);
        }
    }
}
