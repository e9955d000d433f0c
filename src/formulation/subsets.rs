//! Static Dantzig–Fulkerson–Johnson formulations.
//!
//! Both models enumerate every node subset `S ⊆ V \ {0}` with
//! `2 <= |S| <= n - 2`. Subsets containing node 0 are covered by their
//! complements: under the degree constraints the arcs leaving `S` and the
//! arcs leaving `V \ S` carry the same total. Singletons and `(n - 1)`-sets
//! are implied by the degree constraints alone.
//!
//! The number of constraints grows as `2^(n-1)`, so both builders refuse
//! instances above [`SolverConfig::max_cut_set_nodes`].

use crate::config::SolverConfig;
use crate::distance::CostMatrix;
use crate::error::{Error, Result};
use crate::ilp::{Comparison, LinearExpr};

use super::{assignment_model, TspModel};

/// Builds the cut-set model: for each subset `S`, `Σ_{i∈S, j∉S} x[i,j] >= 1`.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::CostMatrix;
/// use tsp_exact::formulation::cut_set_model;
/// use tsp_exact::SolverConfig;
///
/// let costs = CostMatrix::uniform(5, 1.0).expect("valid");
/// let tsp = cut_set_model(&costs, &SolverConfig::default()).expect("small enough");
/// // 10 degree constraints + 10 subsets of {1,2,3,4} with 2 or 3 members
/// assert_eq!(tsp.model.num_constraints(), 20);
/// ```
pub fn cut_set_model(costs: &CostMatrix, config: &SolverConfig) -> Result<TspModel> {
    check_size("cut-set", costs.size(), config)?;
    let n = costs.size();
    let mut tsp = assignment_model(costs);

    for subset in subsets(n) {
        let mut expr = LinearExpr::new();
        for i in (0..n).filter(|&i| subset[i]) {
            for j in (0..n).filter(|&j| !subset[j]) {
                if let Some(var) = tsp.arcs.get(i, j) {
                    expr.add(var, 1.0);
                }
            }
        }
        tsp.model.add_constraint(expr, Comparison::Ge, 1.0);
    }

    Ok(tsp)
}

/// Builds the packing model: for each subset `S`, `Σ_{i,j∈S} x[i,j] <= |S| - 1`.
pub fn subtour_elimination_model(costs: &CostMatrix, config: &SolverConfig) -> Result<TspModel> {
    check_size("subtour-elimination", costs.size(), config)?;
    let n = costs.size();
    let mut tsp = assignment_model(costs);

    for subset in subsets(n) {
        let members: Vec<usize> = (0..n).filter(|&i| subset[i]).collect();
        let expr: LinearExpr = members
            .iter()
            .flat_map(|&i| members.iter().map(move |&j| (i, j)))
            .filter_map(|(i, j)| tsp.arcs.get(i, j))
            .map(|v| (v, 1.0))
            .collect();
        tsp.model
            .add_constraint(expr, Comparison::Le, members.len() as f64 - 1.0);
    }

    Ok(tsp)
}

/// Subsets are enumerated as `u64` masks over the `n - 1` non-root nodes.
const MAX_SUBSET_NODES: usize = 64;

fn check_size(formulation: &'static str, nodes: usize, config: &SolverConfig) -> Result<()> {
    let limit = config.max_cut_set_nodes.min(MAX_SUBSET_NODES);
    if nodes > limit {
        return Err(Error::ModelTooLarge {
            formulation,
            nodes,
            limit,
        });
    }
    Ok(())
}

/// Membership masks of every `S ⊆ {1..n-1}` with `2 <= |S| <= n - 2`.
fn subsets(n: usize) -> impl Iterator<Item = Vec<bool>> {
    let others = n - 1;
    (1u64..(1u64 << others))
        .filter(move |mask| {
            let size = mask.count_ones() as usize;
            size >= 2 && size + 2 <= n
        })
        .map(move |mask| {
            let mut subset = vec![false; n];
            for (bit, member) in subset.iter_mut().skip(1).enumerate() {
                *member = mask & (1 << bit) != 0;
            }
            subset
        })
}
