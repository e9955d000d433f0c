//! Solve method tags.

use std::fmt;

use serde::Serialize;

/// Branching rule of the TSP branch-and-bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BranchAndBoundType {
    /// Two children per node: one arc of the shortest sub-tour excluded or included.
    Binary,
    /// One child per free arc of the shortest sub-tour, partitioning the node.
    Total,
}

/// An exact TSP method compared by the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Method {
    /// Assignment relaxation + lazy max-flow cuts.
    MaxFlow,
    /// Static cut-set formulation.
    CutSet,
    /// Static subtour packing formulation.
    SubtourElimination,
    /// Miller–Tucker–Zemlin formulation.
    Mtz,
    /// Branch-and-bound over the assignment relaxation.
    BranchAndBound(BranchAndBoundType),
}

impl Method {
    /// Every method, in report order.
    pub const ALL: [Method; 6] = [
        Method::MaxFlow,
        Method::CutSet,
        Method::SubtourElimination,
        Method::Mtz,
        Method::BranchAndBound(BranchAndBoundType::Binary),
        Method::BranchAndBound(BranchAndBoundType::Total),
    ];

    /// Human-readable name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Method::MaxFlow => "Max Flow",
            Method::CutSet => "Cut Set",
            Method::SubtourElimination => "Subtour Elimination",
            Method::Mtz => "Miller–Tucker–Zemlin",
            Method::BranchAndBound(BranchAndBoundType::Binary) => "Branch and Bound Binary",
            Method::BranchAndBound(BranchAndBoundType::Total) => "Branch and Bound Total",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_distinct() {
        let mut names: Vec<_> = Method::ALL.iter().map(|m| m.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Method::ALL.len());
    }

    #[test]
    fn test_display() {
        assert_eq!(Method::MaxFlow.to_string(), "Max Flow");
        assert_eq!(
            Method::BranchAndBound(BranchAndBoundType::Total).to_string(),
            "Branch and Bound Total"
        );
    }
}
