//! Branch-and-bound over the assignment relaxation.
//!
//! Each tree node is the assignment relaxation with some arcs excluded
//! (`x = 0`) and some included (`x = 1`). Its optimum is a lower bound for
//! every tour in the subtree. When the optimum is a single cycle it becomes
//! the incumbent; otherwise the node is split on the shortest sub-tour,
//! since every tour must drop at least one of its arcs.
//!
//! - [`BranchAndBoundType::Binary`] — one free arc `a` of the sub-tour:
//!   children `x[a] = 0` and `x[a] = 1`.
//! - [`BranchAndBoundType::Total`] — free arcs `a_1..a_k`: child `r`
//!   excludes `a_r` and includes `a_1..a_{r-1}`, so the children partition
//!   the node (Carpaneto & Toth, 1980).
//!
//! The tree is explored depth-first and nodes whose bound is not below the
//! incumbent are pruned.
//!
//! # Reference
//!
//! Carpaneto, G., Toth, P. (1980). "Some New Branching and Bounding Criteria
//! for the Asymmetric Travelling Salesman Problem", *Management Science*
//! 26(7), 736-743.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::SolverConfig;
use crate::distance::CostMatrix;
use crate::error::{Error, Result};
use crate::formulation::assignment_model;
use crate::models::{cycles, BranchAndBoundType, Tour};

const BOUND_EPS: f64 = 1e-9;

/// Result of [`solve_with_branch_and_bound`].
#[derive(Debug, Clone)]
pub struct BranchAndBoundOutcome {
    pub tour: Tour,
    /// Nodes added to the search tree, root included.
    pub nodes_added: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default)]
struct TreeNode {
    excluded: Vec<(usize, usize)>,
    included: Vec<(usize, usize)>,
}

impl TreeNode {
    fn child(&self, exclude: Option<(usize, usize)>, include: &[(usize, usize)]) -> Self {
        let mut child = self.clone();
        child.excluded.extend(exclude);
        child.included.extend_from_slice(include);
        child
    }
}

/// Solves the TSP by branch-and-bound with the given branching rule.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::CostMatrix;
/// use tsp_exact::models::BranchAndBoundType;
/// use tsp_exact::solvers::solve_with_branch_and_bound;
/// use tsp_exact::SolverConfig;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 9.0, 9.0],
///     vec![1.0, 0.0, 9.0, 9.0],
///     vec![9.0, 9.0, 0.0, 1.0],
///     vec![9.0, 9.0, 1.0, 0.0],
/// ])
/// .expect("square");
///
/// let config = SolverConfig::default();
/// let outcome = solve_with_branch_and_bound(&costs, BranchAndBoundType::Total, &config)
///     .expect("solved");
/// assert_eq!(outcome.tour.cost(), 20.0);
/// assert!(outcome.nodes_added > 1);
/// ```
pub fn solve_with_branch_and_bound(
    costs: &CostMatrix,
    bb_type: BranchAndBoundType,
    config: &SolverConfig,
) -> Result<BranchAndBoundOutcome> {
    config.validate()?;
    let start = Instant::now();
    let n = costs.size();
    let base = assignment_model(costs);

    let mut best: Option<Tour> = None;
    let mut stack = vec![TreeNode::default()];
    let mut nodes_added = 1;

    while let Some(node) = stack.pop() {
        let mut tsp = base.clone();
        for &(i, j) in &node.excluded {
            tsp.fix_arc(i, j, 0.0);
        }
        for &(i, j) in &node.included {
            tsp.fix_arc(i, j, 1.0);
        }

        let solution = match tsp.model.solve(config) {
            Ok(solution) => solution,
            Err(Error::Infeasible) => continue,
            Err(err) => return Err(err),
        };
        let bound = solution.objective();
        if best.as_ref().is_some_and(|t| bound >= t.cost() - BOUND_EPS) {
            continue;
        }

        let arcs = tsp.arcs.selected_arcs(&solution, config.selection_threshold);
        let subtours = cycles(n, &arcs)?;
        if subtours.len() == 1 {
            debug!("incumbent {bound} after {nodes_added} nodes");
            best = Some(Tour::from_arcs(&arcs, costs)?);
            continue;
        }

        let Some(shortest) = subtours.iter().min_by_key(|c| c.len()) else {
            continue;
        };
        let free: Vec<(usize, usize)> = shortest
            .iter()
            .zip(shortest.iter().cycle().skip(1))
            .map(|(&a, &b)| (a, b))
            .filter(|arc| !node.included.contains(arc))
            .collect();
        // included arcs alone close this sub-tour
        if free.is_empty() {
            continue;
        }

        let children: Vec<TreeNode> = match bb_type {
            BranchAndBoundType::Binary => vec![
                node.child(Some(free[0]), &[]),
                node.child(None, &free[..1]),
            ],
            BranchAndBoundType::Total => (0..free.len())
                .map(|r| node.child(Some(free[r]), &free[..r]))
                .collect(),
        };

        nodes_added += children.len();
        if let Some(limit) = config.max_bb_nodes {
            if nodes_added > limit {
                return Err(Error::NodeLimit { nodes: nodes_added });
            }
        }
        stack.extend(children.into_iter().rev());
    }

    let tour = best.ok_or(Error::Infeasible)?;
    info!(
        "branch and bound ({bb_type:?}) finished: cost {}, {nodes_added} nodes",
        tour.cost()
    );
    Ok(BranchAndBoundOutcome {
        tour,
        nodes_added,
        elapsed: start.elapsed(),
    })
}
