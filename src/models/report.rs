//! Per-method solve report.

use serde::Serialize;

use super::{Method, Tour};

/// Outcome of running one method on one instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub method: Method,
    /// Wall-clock seconds spent solving, model construction excluded for static methods.
    pub elapsed_secs: f64,
    /// Objective value reported by the method.
    pub cost: f64,
    pub tour: Tour,
    /// Nodes added to the branch-and-bound tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_added: Option<usize>,
    /// Re-solves performed by the lazy cut loop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<usize>,
    /// Cuts injected by the lazy cut loop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuts_added: Option<usize>,
}

impl SolveReport {
    pub fn new(method: Method, elapsed_secs: f64, tour: Tour) -> Self {
        Self {
            method,
            elapsed_secs,
            cost: tour.cost(),
            tour,
            nodes_added: None,
            rounds: None,
            cuts_added: None,
        }
    }

    /// The `(seconds rounded to 2 places, nodes, integral cost)` row the
    /// benchmark tables are built from.
    pub fn summary_row(&self) -> (f64, Option<usize>, i64) {
        (
            (self.elapsed_secs * 100.0).round() / 100.0,
            self.nodes_added,
            self.cost.round() as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::CostMatrix;

    #[test]
    fn test_summary_row() {
        let costs = CostMatrix::uniform(3, 2.5).expect("valid");
        let tour = Tour::from_sequence(vec![0, 1, 2], &costs).expect("valid");
        let mut report = SolveReport::new(Method::Mtz, 0.1234, tour);
        report.nodes_added = Some(7);
        assert_eq!(report.summary_row(), (0.12, Some(7), 8));
    }

    #[test]
    fn test_serialize_skips_missing_counters() {
        let costs = CostMatrix::uniform(2, 1.0).expect("valid");
        let tour = Tour::from_sequence(vec![0, 1], &costs).expect("valid");
        let report = SolveReport::new(Method::CutSet, 0.5, tour);
        let json = serde_json::to_value(&report).expect("serializable");
        assert_eq!(json["method"], "CutSet");
        assert_eq!(json["cost"], 2.0);
        assert!(json.get("nodes_added").is_none());
        assert_eq!(json["tour"]["nodes"], serde_json::json!([0, 1]));
    }
}
