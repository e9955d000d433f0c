//! Plain-text reporter.

use std::io::{self, Stdout, Write};

use crate::error::Result;
use crate::models::SolveReport;

use super::Reporter;

/// Writes a human-readable block per method:
///
/// ```text
/// Max Flow
///     Time: 0.0042
///     Tour: 0 -> 1 -> 2 -> 3 -> 0
///     Total Cost:    20
///     Cut rounds: 1 (1 cuts)
/// ```
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    print_time: bool,
    visualize: bool,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            print_time: true,
            visualize: true,
        }
    }

    /// Toggles the `Time:` line.
    pub fn with_time(mut self, print_time: bool) -> Self {
        self.print_time = print_time;
        self
    }

    /// Toggles the rendered tour.
    pub fn with_visualize(mut self, visualize: bool) -> Self {
        self.visualize = visualize;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, report: &SolveReport) -> Result<()> {
        writeln!(self.out, "{}", report.method)?;
        if self.print_time {
            writeln!(self.out, "\tTime: {:.4}", report.elapsed_secs)?;
        }
        if self.visualize {
            writeln!(self.out, "\tTour: {}", report.tour.render())?;
        }
        writeln!(self.out, "\tTotal Cost:    {}", report.cost)?;
        if let Some(nodes) = report.nodes_added {
            writeln!(self.out, "\tNodes added: {nodes}")?;
        }
        if let (Some(rounds), Some(cuts)) = (report.rounds, report.cuts_added) {
            writeln!(self.out, "\tCut rounds: {rounds} ({cuts} cuts)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::CostMatrix;
    use crate::models::{BranchAndBoundType, Method, Tour};

    fn sample(method: Method) -> SolveReport {
        let costs = CostMatrix::uniform(3, 2.0).expect("valid");
        let tour = Tour::from_sequence(vec![0, 2, 1], &costs).expect("valid");
        SolveReport::new(method, 0.25, tour)
    }

    #[test]
    fn test_full_block() {
        let mut report = sample(Method::BranchAndBound(BranchAndBoundType::Binary));
        report.nodes_added = Some(5);
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.report(&report).expect("write");
        let text = String::from_utf8(reporter.into_inner()).expect("utf8");
        assert_eq!(
            text,
            concat!(
                "Branch and Bound Binary\n",
                "\tTime: 0.2500\n",
                "\tTour: 0 -> 2 -> 1 -> 0\n",
                "\tTotal Cost:    6\n",
                "\tNodes added: 5\n",
            )
        );
    }

    #[test]
    fn test_quiet_block() {
        let mut report = sample(Method::MaxFlow);
        report.rounds = Some(2);
        report.cuts_added = Some(3);
        let mut reporter = ConsoleReporter::new(Vec::new())
            .with_time(false)
            .with_visualize(false);
        reporter.report(&report).expect("write");
        let text = String::from_utf8(reporter.into_inner()).expect("utf8");
        assert_eq!(text, "Max Flow\n\tTotal Cost:    6\n\tCut rounds: 2 (3 cuts)\n");
    }
}
