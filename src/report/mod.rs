//! Reporting of solve results.
//!
//! A [`Reporter`] is handed to the benchmark harness and receives one
//! [`SolveReport`] per finished method.

mod console;
mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

use crate::error::Result;
use crate::models::SolveReport;

/// Consumer of finished solve reports.
pub trait Reporter {
    fn report(&mut self, report: &SolveReport) -> Result<()>;
}

/// Collects reports in memory.
impl Reporter for Vec<SolveReport> {
    fn report(&mut self, report: &SolveReport) -> Result<()> {
        self.push(report.clone());
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, report: &SolveReport) -> Result<()> {
        (**self).report(report)
    }
}
