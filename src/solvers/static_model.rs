//! One-shot solves of the complete static formulations.

use std::time::{Duration, Instant};

use log::info;

use crate::config::SolverConfig;
use crate::distance::CostMatrix;
use crate::error::Result;
use crate::formulation::{cut_set_model, mtz_model, subtour_elimination_model, TspModel};
use crate::ilp::IlpSolution;
use crate::models::Tour;

/// Result of a static-formulation solve.
#[derive(Debug, Clone)]
pub struct StaticOutcome {
    pub solution: IlpSolution,
    pub tour: Tour,
    /// Solve time, model construction excluded.
    pub elapsed: Duration,
}

/// Solves the cut-set formulation.
pub fn solve_with_cut_set(costs: &CostMatrix, config: &SolverConfig) -> Result<StaticOutcome> {
    solve_static("cut-set", cut_set_model(costs, config)?, costs, config)
}

/// Solves the subtour packing formulation.
pub fn solve_with_subtour_elimination(
    costs: &CostMatrix,
    config: &SolverConfig,
) -> Result<StaticOutcome> {
    solve_static(
        "subtour-elimination",
        subtour_elimination_model(costs, config)?,
        costs,
        config,
    )
}

/// Solves the Miller–Tucker–Zemlin formulation.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::CostMatrix;
/// use tsp_exact::solvers::solve_with_mtz;
/// use tsp_exact::SolverConfig;
///
/// let costs = CostMatrix::uniform(4, 2.0).expect("valid");
/// let outcome = solve_with_mtz(&costs, &SolverConfig::default()).expect("solved");
/// assert_eq!(outcome.tour.len(), 4);
/// assert!((outcome.tour.cost() - 8.0).abs() < 1e-9);
/// ```
pub fn solve_with_mtz(costs: &CostMatrix, config: &SolverConfig) -> Result<StaticOutcome> {
    solve_static("MTZ", mtz_model(costs), costs, config)
}

fn solve_static(
    name: &str,
    tsp: TspModel,
    costs: &CostMatrix,
    config: &SolverConfig,
) -> Result<StaticOutcome> {
    config.validate()?;
    info!(
        "{name} model: {} variables, {} constraints",
        tsp.model.num_vars(),
        tsp.model.num_constraints()
    );
    let start = Instant::now();
    let solution = tsp.model.solve(config)?;
    let elapsed = start.elapsed();

    let tour = Tour::from_arcs(
        &tsp.arcs.selected_arcs(&solution, config.selection_threshold),
        costs,
    )?;
    info!(
        "{name} solved in {} LP nodes, objective {}",
        solution.lp_nodes(),
        solution.objective()
    );
    Ok(StaticOutcome {
        solution,
        tour,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn two_pairs() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 9.0, 9.0],
            vec![1.0, 0.0, 9.0, 9.0],
            vec![9.0, 9.0, 0.0, 1.0],
            vec![9.0, 9.0, 1.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_cut_set_two_pairs() {
        let outcome = solve_with_cut_set(&two_pairs(), &SolverConfig::default()).expect("solved");
        assert_eq!(outcome.tour.cost(), 20.0);
        assert_eq!(outcome.solution.objective(), 20.0);
    }

    #[test]
    fn test_subtour_elimination_two_pairs() {
        let outcome =
            solve_with_subtour_elimination(&two_pairs(), &SolverConfig::default()).expect("solved");
        assert_eq!(outcome.tour.cost(), 20.0);
    }

    #[test]
    fn test_mtz_two_pairs() {
        let outcome = solve_with_mtz(&two_pairs(), &SolverConfig::default()).expect("solved");
        assert_eq!(outcome.tour.cost(), 20.0);
    }

    #[test]
    fn test_mtz_asymmetric() {
        // cheapest direction 0→1→2→0 costs 3, reverse costs 30
        let costs = CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 10.0],
            vec![10.0, 0.0, 1.0],
            vec![1.0, 10.0, 0.0],
        ])
        .expect("valid");
        let outcome = solve_with_mtz(&costs, &SolverConfig::default()).expect("solved");
        assert_eq!(outcome.tour.nodes(), &[0, 1, 2]);
        assert_eq!(outcome.tour.cost(), 3.0);
    }

    #[test]
    fn test_cut_set_too_large() {
        let costs = CostMatrix::uniform(5, 1.0).expect("valid");
        let config = SolverConfig::default().with_max_cut_set_nodes(4);
        assert!(matches!(
            solve_with_cut_set(&costs, &config),
            Err(Error::ModelTooLarge { .. })
        ));
    }
}
