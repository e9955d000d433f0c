//! Runs solve methods on an instance and reports each result.

use log::info;

use crate::config::SolverConfig;
use crate::distance::CostMatrix;
use crate::error::Result;
use crate::models::{Method, SolveReport};
use crate::report::Reporter;
use crate::solvers::{
    solve_with_branch_and_bound, solve_with_cut_set, solve_with_max_flow, solve_with_mtz,
    solve_with_subtour_elimination,
};

/// Benchmark harness: one configuration, one reporter, any number of runs.
///
/// # Examples
///
/// ```
/// use tsp_exact::benchmark::Benchmark;
/// use tsp_exact::distance::CostMatrix;
/// use tsp_exact::models::{Method, SolveReport};
/// use tsp_exact::SolverConfig;
///
/// let costs = CostMatrix::uniform(4, 3.0).expect("valid");
/// let mut collected: Vec<SolveReport> = Vec::new();
/// let mut bench = Benchmark::new(SolverConfig::default(), &mut collected);
/// bench.run_all(&Method::ALL, &costs).expect("all methods solve");
///
/// assert_eq!(collected.len(), 6);
/// assert!(collected.iter().all(|r| (r.cost - 12.0).abs() < 1e-9));
/// ```
pub struct Benchmark<R: Reporter> {
    config: SolverConfig,
    reporter: R,
}

impl<R: Reporter> Benchmark<R> {
    pub fn new(config: SolverConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Solves `costs` with `method` and passes the report to the reporter.
    pub fn run(&mut self, method: Method, costs: &CostMatrix) -> Result<SolveReport> {
        info!("running {method} on {} nodes", costs.size());
        let report = match method {
            Method::MaxFlow => {
                let outcome = solve_with_max_flow(costs, &self.config)?;
                let mut report =
                    SolveReport::new(method, outcome.elapsed.as_secs_f64(), outcome.tour);
                report.cost = outcome.solution.objective();
                report.rounds = Some(outcome.rounds);
                report.cuts_added = Some(outcome.cuts.len());
                report
            }
            Method::CutSet | Method::SubtourElimination | Method::Mtz => {
                let outcome = match method {
                    Method::CutSet => solve_with_cut_set(costs, &self.config)?,
                    Method::SubtourElimination => {
                        solve_with_subtour_elimination(costs, &self.config)?
                    }
                    _ => solve_with_mtz(costs, &self.config)?,
                };
                let mut report =
                    SolveReport::new(method, outcome.elapsed.as_secs_f64(), outcome.tour);
                report.cost = outcome.solution.objective();
                report
            }
            Method::BranchAndBound(bb_type) => {
                let outcome = solve_with_branch_and_bound(costs, bb_type, &self.config)?;
                let mut report =
                    SolveReport::new(method, outcome.elapsed.as_secs_f64(), outcome.tour);
                report.nodes_added = Some(outcome.nodes_added);
                report
            }
        };
        self.reporter.report(&report)?;
        Ok(report)
    }

    /// Runs every method in order, stopping at the first error.
    pub fn run_all(&mut self, methods: &[Method], costs: &CostMatrix) -> Result<Vec<SolveReport>> {
        methods.iter().map(|&m| self.run(m, costs)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BranchAndBoundType;

    #[test]
    fn test_run_fills_method_counters() {
        let costs = CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 9.0, 9.0],
            vec![1.0, 0.0, 9.0, 9.0],
            vec![9.0, 9.0, 0.0, 1.0],
            vec![9.0, 9.0, 1.0, 0.0],
        ])
        .expect("valid");
        let mut bench = Benchmark::new(SolverConfig::default(), Vec::new());

        let flow = bench.run(Method::MaxFlow, &costs).expect("solved");
        assert_eq!(flow.rounds, Some(1));
        assert_eq!(flow.cuts_added, Some(1));
        assert_eq!(flow.nodes_added, None);

        let bb = bench
            .run(Method::BranchAndBound(BranchAndBoundType::Total), &costs)
            .expect("solved");
        assert!(bb.nodes_added.is_some());
        assert_eq!(bb.rounds, None);

        let reports = bench.into_reporter();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.cost == 20.0));
    }

    #[test]
    fn test_run_all_stops_on_error() {
        let costs = CostMatrix::uniform(5, 1.0).expect("valid");
        let config = SolverConfig::default().with_max_cut_set_nodes(4);
        let mut bench = Benchmark::new(config, Vec::new());
        let result = bench.run_all(&[Method::Mtz, Method::CutSet, Method::MaxFlow], &costs);
        assert!(result.is_err());
        assert_eq!(bench.into_reporter().len(), 1);
    }
}
