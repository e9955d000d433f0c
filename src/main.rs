//! # tsp-exact CLI
//!
//! Generates a seeded random instance and compares the exact methods on it.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::error;

use tsp_exact::benchmark::Benchmark;
use tsp_exact::instance::random_matrix;
use tsp_exact::logging::{init_logger, LogFormat, LogLevel};
use tsp_exact::models::{BranchAndBoundType, Method, SolveReport};
use tsp_exact::report::{ConsoleReporter, JsonReporter, Reporter};
use tsp_exact::{Result, SolverConfig};

#[derive(Parser)]
#[command(name = "tsp-exact")]
#[command(about = "Compare exact TSP formulations on a random instance")]
#[command(version)]
struct Cli {
    /// Number of nodes
    #[arg(short = 'n', long, default_value_t = 8)]
    size: usize,

    /// Seed of the instance generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Largest arc cost; costs are drawn from 1..=max-cost
    #[arg(long, default_value_t = 100)]
    max_cost: u32,

    /// Mirror costs so that c[i][j] == c[j][i]
    #[arg(long)]
    symmetric: bool,

    /// Methods to run, in order (default: all)
    #[arg(short, long = "method", value_enum)]
    methods: Vec<MethodArg>,

    /// Maximum re-solves of the lazy cut loop
    #[arg(long)]
    max_rounds: Option<usize>,

    /// Wall-clock limit of the lazy cut loop, in seconds
    #[arg(long)]
    time_limit_secs: Option<f64>,

    /// Maximum nodes in the branch-and-bound tree
    #[arg(long)]
    max_bb_nodes: Option<usize>,

    /// Largest instance accepted by the cut-set and subtour-elimination models
    #[arg(long, default_value_t = 12)]
    max_cut_set_nodes: usize,

    /// Do not print tours
    #[arg(long)]
    no_visualize: bool,

    /// Do not print solve times
    #[arg(long)]
    no_time: bool,

    /// Print one JSON object per method instead of text
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodArg {
    MaxFlow,
    CutSet,
    SubtourElimination,
    Mtz,
    BbBinary,
    BbTotal,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::MaxFlow => Method::MaxFlow,
            MethodArg::CutSet => Method::CutSet,
            MethodArg::SubtourElimination => Method::SubtourElimination,
            MethodArg::Mtz => Method::Mtz,
            MethodArg::BbBinary => Method::BranchAndBound(BranchAndBoundType::Binary),
            MethodArg::BbTotal => Method::BranchAndBound(BranchAndBoundType::Total),
        }
    }
}

impl Cli {
    fn config(&self) -> SolverConfig {
        let mut config = SolverConfig::default().with_max_cut_set_nodes(self.max_cut_set_nodes);
        if let Some(rounds) = self.max_rounds {
            config = config.with_max_rounds(rounds);
        }
        if let Some(secs) = self.time_limit_secs {
            config = config.with_time_limit(Duration::from_secs_f64(secs.max(0.0)));
        }
        if let Some(nodes) = self.max_bb_nodes {
            config = config.with_max_bb_nodes(nodes);
        }
        config
    }

    fn methods(&self) -> Vec<Method> {
        if self.methods.is_empty() {
            Method::ALL.to_vec()
        } else {
            self.methods.iter().map(|&m| m.into()).collect()
        }
    }
}

fn main() {
    if let Err(e) = run() {
        error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level, cli.log_format, false)?;

    let costs = random_matrix(cli.size, cli.max_cost, cli.symmetric, cli.seed)?;
    let methods = cli.methods();

    if cli.json {
        solve_all(&cli, &methods, &costs, JsonReporter::new(std::io::stdout()))?;
    } else {
        let reporter = ConsoleReporter::stdout()
            .with_time(!cli.no_time)
            .with_visualize(!cli.no_visualize);
        let reports = solve_all(&cli, &methods, &costs, reporter)?;
        print_summary(&reports);
    }
    Ok(())
}

fn solve_all<R: Reporter>(
    cli: &Cli,
    methods: &[Method],
    costs: &tsp_exact::distance::CostMatrix,
    reporter: R,
) -> Result<Vec<SolveReport>> {
    let mut bench = Benchmark::new(cli.config(), reporter);
    bench.run_all(methods, costs)
}

fn print_summary(reports: &[SolveReport]) {
    println!();
    println!("{:<28} {:>8} {:>8} {:>10}", "Method", "Secs", "Nodes", "Cost");
    for report in reports {
        let (secs, nodes, cost) = report.summary_row();
        let nodes = nodes.map_or_else(|| "-".to_string(), |n| n.to_string());
        println!(
            "{:<28} {:>8.2} {:>8} {:>10}",
            report.method.to_string(),
            secs,
            nodes,
            cost
        );
    }
}
