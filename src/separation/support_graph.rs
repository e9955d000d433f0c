//! Support graph of a relaxed solution.

use petgraph::graph::{DiGraph, NodeIndex};

use crate::formulation::ArcVars;
use crate::ilp::IlpSolution;

/// Directed graph on `0..n` holding the arcs a solution selects, each with capacity 1.
///
/// Always derived from exactly one solution; a new solution means a new graph.
#[derive(Debug, Clone)]
pub struct SupportGraph {
    graph: DiGraph<(), u32>,
}

impl SupportGraph {
    /// Builds the graph from the arcs whose value exceeds `threshold`.
    pub fn build(arcs: &ArcVars, solution: &IlpSolution, threshold: f64) -> Self {
        Self::from_arcs(arcs.size(), &arcs.selected_arcs(solution, threshold))
    }

    /// Builds the graph from an explicit arc list; self-loops are dropped.
    pub fn from_arcs(n: usize, arcs: &[(usize, usize)]) -> Self {
        let mut graph = DiGraph::with_capacity(n, arcs.len());
        for _ in 0..n {
            graph.add_node(());
        }
        for &(from, to) in arcs {
            if from != to {
                graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), 1);
            }
        }
        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.graph
            .find_edge(NodeIndex::new(from), NodeIndex::new(to))
            .is_some()
    }

    pub(crate) fn graph(&self) -> &DiGraph<(), u32> {
        &self.graph
    }
}
