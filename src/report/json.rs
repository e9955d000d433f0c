//! JSON-lines reporter.

use std::io::Write;

use crate::error::Result;
use crate::models::SolveReport;

use super::Reporter;

/// Writes each report as one JSON object per line.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, report: &SolveReport) -> Result<()> {
        serde_json::to_writer(&mut self.out, report)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::CostMatrix;
    use crate::models::{Method, Tour};

    #[test]
    fn test_one_line_per_report() {
        let costs = CostMatrix::uniform(2, 1.5).expect("valid");
        let tour = Tour::from_sequence(vec![0, 1], &costs).expect("valid");
        let report = SolveReport::new(Method::Mtz, 0.5, tour);

        let mut reporter = JsonReporter::new(Vec::new());
        reporter.report(&report).expect("write");
        reporter.report(&report).expect("write");
        let text = String::from_utf8(reporter.into_inner()).expect("utf8");

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).expect("json");
        assert_eq!(value["method"], "Mtz");
        assert_eq!(value["cost"], 3.0);
    }
}
