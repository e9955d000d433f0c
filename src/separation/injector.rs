//! Turns a min-cut partition into a model constraint.

use crate::formulation::ArcVars;
use crate::ilp::{Comparison, IlpModel, LinearExpr};

use super::CutPartition;

/// `Σ x[i,j]` over every ordered pair crossing from the source side to the sink side.
///
/// Covers all crossing pairs, not only the arcs of the support graph the
/// cut was found on, so the inequality stays valid for every later solution.
pub fn crossing_expr(arcs: &ArcVars, partition: &CutPartition) -> LinearExpr {
    partition
        .crossing_arcs()
        .filter_map(|(i, j)| arcs.get(i, j))
        .map(|var| (var, 1.0))
        .collect()
}

/// Adds `crossing_expr(partition) >= 1` to the model.
pub fn inject_cut(model: &mut IlpModel, arcs: &ArcVars, partition: &CutPartition) {
    model.add_constraint(crossing_expr(arcs, partition), Comparison::Ge, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::CostMatrix;
    use crate::formulation::assignment_model;

    #[test]
    fn test_injects_every_crossing_pair() {
        let costs = CostMatrix::uniform(4, 1.0).expect("valid");
        let mut tsp = assignment_model(&costs);
        let before = tsp.model.num_constraints();
        let partition = CutPartition::from_mask(&[true, true, false, false]);

        inject_cut(&mut tsp.model, &tsp.arcs, &partition);

        assert_eq!(tsp.model.num_constraints(), before + 1);
        let added = &tsp.model.constraints()[before];
        assert_eq!(added.cmp, Comparison::Ge);
        assert_eq!(added.rhs, 1.0);
        let mut names: Vec<_> = added
            .expr
            .terms()
            .iter()
            .map(|&(v, _)| tsp.model.var_name(v).to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["x_0_2", "x_0_3", "x_1_2", "x_1_3"]);
    }
}
