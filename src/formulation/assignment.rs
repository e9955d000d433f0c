//! Assignment relaxation.

use crate::distance::CostMatrix;
use crate::ilp::{Comparison, IlpModel, LinearExpr};

use super::{ArcVars, TspModel};

/// Builds the assignment relaxation of the TSP.
///
/// One binary `x[i,j]` per arc, objective `Σ c[i,j]·x[i,j]`, and for every
/// node exactly one selected outgoing and one selected incoming arc. Any
/// permutation without fixed points is feasible, so solutions may be unions
/// of disjoint sub-tours.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::CostMatrix;
/// use tsp_exact::formulation::assignment_model;
///
/// let costs = CostMatrix::uniform(4, 1.0).expect("valid");
/// let tsp = assignment_model(&costs);
/// assert_eq!(tsp.model.num_vars(), 12);
/// assert_eq!(tsp.model.num_constraints(), 8);
/// ```
pub fn assignment_model(costs: &CostMatrix) -> TspModel {
    let n = costs.size();
    let mut model = IlpModel::new();
    let mut arcs = ArcVars::new(n);

    for (i, j) in costs.arcs() {
        let var = model.add_binary(format!("x_{i}_{j}"), costs.get(i, j));
        arcs.insert(i, j, var);
    }

    for i in 0..n {
        let outgoing: LinearExpr = (0..n)
            .filter_map(|j| arcs.get(i, j))
            .map(|v| (v, 1.0))
            .collect();
        model.add_constraint(outgoing, Comparison::Eq, 1.0);

        let incoming: LinearExpr = (0..n)
            .filter_map(|j| arcs.get(j, i))
            .map(|v| (v, 1.0))
            .collect();
        model.add_constraint(incoming, Comparison::Eq, 1.0);
    }

    TspModel { model, arcs }
}
