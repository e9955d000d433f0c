//! Miller–Tucker–Zemlin formulation.
//!
//! Adds a continuous position `u[i] ∈ [1, n-1]` for every node except the
//! root and, for every arc between two non-root nodes,
//!
//! ```text
//! u[i] - u[j] + (n - 1) x[i,j] <= n - 2
//! ```
//!
//! so that a selected arc forces `u[j] >= u[i] + 1`. A cycle avoiding the
//! root would need strictly increasing positions around a loop, which is
//! impossible. Polynomial size, weak LP bound.
//!
//! # Reference
//!
//! Miller, C.E., Tucker, A.W., Zemlin, R.A. (1960). "Integer Programming
//! Formulation of Traveling Salesman Problems", *Journal of the ACM* 7(4), 326-329.

use crate::distance::CostMatrix;
use crate::ilp::{Comparison, LinearExpr};

use super::{assignment_model, TspModel};

/// Builds the MTZ model on top of the assignment relaxation.
pub fn mtz_model(costs: &CostMatrix) -> TspModel {
    let n = costs.size();
    let mut tsp = assignment_model(costs);
    let last = (n - 1) as f64;

    let order: Vec<_> = (1..n)
        .map(|i| tsp.model.add_continuous(format!("u_{i}"), 0.0, 1.0, last))
        .collect();

    for i in 1..n {
        for j in 1..n {
            let Some(x) = tsp.arcs.get(i, j) else {
                continue;
            };
            let mut expr = LinearExpr::new();
            expr.add(order[i - 1], 1.0);
            expr.add(order[j - 1], -1.0);
            expr.add(x, last);
            tsp.model.add_constraint(expr, Comparison::Le, last - 1.0);
        }
    }

    tsp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_size() {
        let costs = CostMatrix::uniform(4, 1.0).expect("valid");
        let tsp = mtz_model(&costs);
        // 12 arcs + 3 positions
        assert_eq!(tsp.model.num_vars(), 15);
        // 8 degree + 3·2 ordering
        assert_eq!(tsp.model.num_constraints(), 14);
    }

    #[test]
    fn test_two_nodes_have_no_ordering_constraints() {
        let costs = CostMatrix::uniform(2, 3.0).expect("valid");
        let tsp = mtz_model(&costs);
        assert_eq!(tsp.model.num_constraints(), 4);
    }
}
