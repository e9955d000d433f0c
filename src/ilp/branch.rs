//! Depth-first LP branch-and-bound over binary variables.
//!
//! # Algorithm
//!
//! Starting from the root LP optimum, pick the binary variable farthest
//! from integrality and split on it by fixing it to 0 and to 1. Children are
//! warm-started from the parent's simplex tableau. The child matching the
//! nearer rounding of the fractional value is explored first. A node is
//! pruned when its LP bound cannot beat the incumbent.

use log::trace;

use crate::config::SolverConfig;
use crate::error::{Error, Result};

const BOUND_EPS: f64 = 1e-9;

/// Searches for an integral optimum below `root`.
///
/// Returns the optimal variable values and the number of LP nodes explored.
pub(super) fn search(
    root: minilp::Solution,
    lp_vars: &[minilp::Variable],
    binaries: &[usize],
    config: &SolverConfig,
) -> Result<(Vec<f64>, usize)> {
    let mut incumbent: Option<(f64, Vec<f64>)> = None;
    let mut stack = vec![root];
    let mut explored = 0;

    while let Some(node) = stack.pop() {
        explored += 1;
        if let Some(limit) = config.max_ilp_nodes {
            if explored > limit {
                return Err(Error::NodeLimit { nodes: limit });
            }
        }

        let bound = node.objective();
        if let Some((best, _)) = &incumbent {
            if bound >= best - BOUND_EPS {
                continue;
            }
        }

        let Some(idx) = most_fractional(&node, lp_vars, binaries, config.integrality_tolerance)
        else {
            trace!("integral LP node {explored} with objective {bound}");
            let values = lp_vars.iter().map(|&v| node[v]).collect();
            incumbent = Some((bound, values));
            continue;
        };

        let var = lp_vars[idx];
        let value = node[var];
        let (near, far) = if value >= 0.5 { (1.0, 0.0) } else { (0.0, 1.0) };

        for fixed in [far, near] {
            match node.clone().fix_var(var, fixed) {
                Ok(child) => stack.push(child),
                Err(minilp::Error::Infeasible) => {}
                Err(err) => return Err(err.into()),
            }
        }
    }

    incumbent
        .map(|(_, values)| (values, explored))
        .ok_or(Error::Infeasible)
}

/// Index of the binary variable whose LP value is farthest from an integer.
fn most_fractional(
    node: &minilp::Solution,
    lp_vars: &[minilp::Variable],
    binaries: &[usize],
    tol: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &i in binaries {
        let value = node[lp_vars[i]];
        let dist = (value - value.round()).abs();
        if dist <= tol {
            continue;
        }
        if best.is_none_or(|(_, d)| dist > d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}
