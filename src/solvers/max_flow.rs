//! Assignment relaxation with lazy max-flow subtour cuts.
//!
//! # Algorithm
//!
//! 1. Solve the assignment relaxation (degree constraints only).
//! 2. Scan: build the support graph of the current solution and, for every
//!    probe node `p = 1..n-1` in order, compute the max-flow from node 0 to
//!    `p`. A zero flow means `p` sits in a different sub-tour; the minimum
//!    cut `(S, T)` yields the violated inequality `Σ_{i∈S, j∈T} x[i,j] >= 1`,
//!    which is added to the model immediately. The solution is not touched
//!    during the scan, so all cuts of one pass are batched.
//! 3. If the scan added cuts, re-solve and scan again; otherwise every node
//!    is reachable from the root and the selected arcs form one tour.
//!
//! Every cut is violated by the solution it was found on and satisfied by
//! every Hamiltonian tour, so each round excludes the current solution and
//! the loop terminates after finitely many rounds.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::SolverConfig;
use crate::distance::CostMatrix;
use crate::error::{Error, Result};
use crate::formulation::{assignment_model, ArcVars, TspModel};
use crate::ilp::IlpSolution;
use crate::models::Tour;
use crate::separation::{inject_cut, CutOracle, CutPartition, SupportGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Solving,
    Scanning,
    Converged,
}

/// Result of [`solve_with_max_flow`].
#[derive(Debug, Clone)]
pub struct LazyCutOutcome {
    /// Converged solution; its selected arcs form `tour`.
    pub solution: IlpSolution,
    pub tour: Tour,
    /// Arc variables of the model the cuts were injected into.
    pub arcs: ArcVars,
    /// Objective of the first, cut-free relaxation.
    pub initial_objective: f64,
    /// Re-solves after the initial solve.
    pub rounds: usize,
    /// Every injected partition, in injection order.
    pub cuts: Vec<CutPartition>,
    /// Time from the first solve to convergence.
    pub elapsed: Duration,
}

/// Solves the TSP exactly by lazily separating subtour cuts with max-flow.
///
/// # Errors
///
/// - [`Error::Infeasible`] if any solve of the growing model is infeasible
/// - [`Error::InvalidInput`] if `config` fails [`SolverConfig::validate`]
/// - [`Error::RoundLimit`] / [`Error::TimeLimit`] when the configured limits are hit
/// - [`Error::Stalled`] if a scan finds a cut injected in an earlier round
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::CostMatrix;
/// use tsp_exact::solvers::solve_with_max_flow;
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
/// let outcome = solve_with_max_flow(&costs, &SolverConfig::default()).expect("solved");
/// assert_eq!(outcome.initial_objective, 4.0);
/// assert_eq!(outcome.tour.cost(), 20.0);
/// assert_eq!(outcome.tour.len(), 4);
/// ```
pub fn solve_with_max_flow(costs: &CostMatrix, config: &SolverConfig) -> Result<LazyCutOutcome> {
    config.validate()?;
    let TspModel { mut model, arcs } = assignment_model(costs);
    let oracle = CutOracle::new();

    let start = Instant::now();
    let mut solution = model.solve(config)?;
    let initial_objective = solution.objective();
    info!("initial relaxation objective {initial_objective}");

    let mut rounds = 0;
    let mut cuts: Vec<CutPartition> = Vec::new();
    let mut state = LoopState::Scanning;

    while state != LoopState::Converged {
        match state {
            LoopState::Scanning => {
                let graph = SupportGraph::build(&arcs, &solution, config.selection_threshold);
                let found = scan(&graph, &oracle, &cuts, rounds)?;
                for partition in &found {
                    inject_cut(&mut model, &arcs, partition);
                }

                if found.is_empty() {
                    state = LoopState::Converged;
                } else {
                    info!(
                        "round {}: {} cuts added to objective {}",
                        rounds + 1,
                        found.len(),
                        solution.objective()
                    );
                    cuts.extend(found);
                    state = LoopState::Solving;
                }
            }
            LoopState::Solving => {
                if let Some(limit) = config.max_rounds {
                    if rounds >= limit {
                        return Err(Error::RoundLimit { rounds });
                    }
                }
                if let Some(limit) = config.time_limit {
                    let elapsed = start.elapsed();
                    if elapsed > limit {
                        return Err(Error::TimeLimit { elapsed });
                    }
                }
                solution = model.solve(config)?;
                rounds += 1;
                state = LoopState::Scanning;
            }
            LoopState::Converged => {}
        }
    }

    let elapsed = start.elapsed();
    let tour = Tour::from_arcs(
        &arcs.selected_arcs(&solution, config.selection_threshold),
        costs,
    )?;
    info!(
        "converged after {rounds} rounds and {} cuts, objective {}",
        cuts.len(),
        solution.objective()
    );

    Ok(LazyCutOutcome {
        solution,
        tour,
        arcs,
        initial_objective,
        rounds,
        cuts,
        elapsed,
    })
}

/// Distinct violated cuts of one support graph, in probe order.
///
/// A partition already in `injected` means the last re-solve did not move
/// past its own cuts, so the scan fails instead of adding it again.
fn scan(
    graph: &SupportGraph,
    oracle: &CutOracle,
    injected: &[CutPartition],
    rounds: usize,
) -> Result<Vec<CutPartition>> {
    let mut found: Vec<CutPartition> = Vec::new();
    for probe in 1..graph.node_count() {
        let Some(partition) = oracle.find_violated_cut(graph, probe) else {
            continue;
        };
        if found.contains(&partition) {
            continue;
        }
        if injected.contains(&partition) {
            return Err(Error::Stalled { rounds });
        }
        debug!(
            "probe {probe} unreachable from root, cut {:?} | {:?}",
            partition.source_side(),
            partition.sink_side()
        );
        found.push(partition);
    }
    Ok(found)
}
