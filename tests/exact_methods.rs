use proptest::prelude::*;

use tsp_exact::benchmark::Benchmark;
use tsp_exact::distance::CostMatrix;
use tsp_exact::instance::random_matrix;
use tsp_exact::models::{cycles, Method, SolveReport};
use tsp_exact::separation::crossing_expr;
use tsp_exact::solvers::solve_with_max_flow;
use tsp_exact::SolverConfig;

/// Cheapest tour by enumerating every permutation of `1..n` after node 0.
fn brute_force(costs: &CostMatrix) -> f64 {
    fn extend(costs: &CostMatrix, last: usize, used: &mut [bool], acc: f64, best: &mut f64) {
        let n = costs.size();
        if used.iter().all(|&u| u) {
            *best = best.min(acc + costs.get(last, 0));
            return;
        }
        for next in 1..n {
            if !used[next] {
                used[next] = true;
                extend(costs, next, used, acc + costs.get(last, next), best);
                used[next] = false;
            }
        }
    }

    let mut used = vec![false; costs.size()];
    used[0] = true;
    let mut best = f64::INFINITY;
    extend(costs, 0, &mut used, 0.0, &mut best);
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn max_flow_converges_to_optimal_tour(
        n in 2usize..=6,
        seed in any::<u64>(),
        symmetric in any::<bool>(),
    ) {
        let costs = random_matrix(n, 50, symmetric, seed).expect("valid");
        let outcome = solve_with_max_flow(&costs, &SolverConfig::default()).expect("solved");

        // one cycle through every node, in/out degree 1
        let arcs = outcome.arcs.selected_arcs(&outcome.solution, 0.5);
        prop_assert_eq!(arcs.len(), n);
        let tours = cycles(n, &arcs).expect("permutation");
        prop_assert_eq!(tours.len(), 1);
        prop_assert_eq!(outcome.tour.len(), n);

        prop_assert!(outcome.solution.objective() >= outcome.initial_objective - 1e-9);
        for cut in &outcome.cuts {
            let lhs = crossing_expr(&outcome.arcs, cut).evaluate(outcome.solution.values());
            prop_assert!(lhs >= 1.0 - 1e-9);
            prop_assert!(cut.source_side().contains(&0));
        }

        // at most one sub-tour split per cut set
        prop_assert!(outcome.rounds < 1 << n);
        prop_assert!((outcome.tour.cost() - brute_force(&costs)).abs() < 1e-6);
    }

    #[test]
    fn all_methods_agree(n in 3usize..=5, seed in any::<u64>()) {
        let costs = random_matrix(n, 30, false, seed).expect("valid");
        let optimum = brute_force(&costs);

        let mut bench = Benchmark::new(SolverConfig::default(), Vec::<SolveReport>::new());
        let reports = bench.run_all(&Method::ALL, &costs).expect("solved");
        for report in reports {
            prop_assert!(
                (report.cost - optimum).abs() < 1e-6,
                "{} found {} instead of {}",
                report.method,
                report.cost,
                optimum
            );
            prop_assert!((report.tour.cost() - optimum).abs() < 1e-6);
        }
    }
}

#[test]
fn uniform_costs_give_n_times_cost() {
    for n in 2..=7 {
        let costs = CostMatrix::uniform(n, 4.0).expect("valid");
        let outcome = solve_with_max_flow(&costs, &SolverConfig::default()).expect("solved");
        assert_eq!(outcome.tour.len(), n);
        assert!((outcome.tour.cost() - 4.0 * n as f64).abs() < 1e-9);
    }
}

#[test]
fn two_pair_scenario_cuts_between_pairs() {
    let costs = CostMatrix::from_rows(vec![
        vec![0.0, 1.0, 9.0, 9.0],
        vec![1.0, 0.0, 9.0, 9.0],
        vec![9.0, 9.0, 0.0, 1.0],
        vec![9.0, 9.0, 1.0, 0.0],
    ])
    .expect("valid");
    let outcome = solve_with_max_flow(&costs, &SolverConfig::default()).expect("solved");

    assert_eq!(outcome.initial_objective, 4.0);
    assert_eq!(outcome.cuts[0].source_side(), &[0, 1]);
    assert_eq!(outcome.tour.cost(), brute_force(&costs));
    assert_eq!(outcome.tour.cost(), 20.0);
}
