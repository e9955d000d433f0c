//! Max-flow / min-cut certificate of a disconnected probe node.
//!
//! With unit capacities the root → probe max-flow equals the number of
//! arc-disjoint paths. A value of zero proves the probe lies outside the
//! root's sub-tour, and the residual-reachable set of the root gives a
//! minimum cut separating them.

use std::collections::VecDeque;

use petgraph::algo::ford_fulkerson;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction::{Incoming, Outgoing};

use super::SupportGraph;

/// Node every cut is rooted at.
pub const ROOT: usize = 0;

/// A partition of the nodes into a root side and a probe side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CutPartition {
    source_side: Vec<usize>,
    sink_side: Vec<usize>,
}

impl CutPartition {
    /// Builds a partition from a membership mask (`true` = source side).
    pub fn from_mask(source_mask: &[bool]) -> Self {
        let (source_side, sink_side): (Vec<usize>, Vec<usize>) =
            (0..source_mask.len()).partition(|&v| source_mask[v]);
        Self {
            source_side,
            sink_side,
        }
    }

    /// Nodes on the root side, ascending.
    pub fn source_side(&self) -> &[usize] {
        &self.source_side
    }

    /// Nodes on the probe side, ascending.
    pub fn sink_side(&self) -> &[usize] {
        &self.sink_side
    }

    /// Ordered pairs `(i, j)` with `i` on the source side and `j` on the sink side.
    pub fn crossing_arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.source_side
            .iter()
            .flat_map(|&i| self.sink_side.iter().map(move |&j| (i, j)))
    }
}

/// Answers root → probe reachability on a unit-capacity support graph.
#[derive(Debug, Clone, Copy)]
pub struct CutOracle {
    root: usize,
}

impl Default for CutOracle {
    fn default() -> Self {
        Self { root: ROOT }
    }
}

impl CutOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum flow from the root to `probe`.
    pub fn max_flow_value(&self, graph: &SupportGraph, probe: usize) -> u32 {
        let (value, _) = ford_fulkerson(
            graph.graph(),
            NodeIndex::new(self.root),
            NodeIndex::new(probe),
        );
        value
    }

    /// Minimum root → `probe` cut: its capacity and the partition.
    ///
    /// The source side is the set of nodes reachable from the root in the
    /// residual network of a maximum flow.
    pub fn min_cut(&self, graph: &SupportGraph, probe: usize) -> (u32, CutPartition) {
        let g = graph.graph();
        let (value, flows) = ford_fulkerson(g, NodeIndex::new(self.root), NodeIndex::new(probe));

        let mut reached = vec![false; g.node_count()];
        reached[self.root] = true;
        let mut queue = VecDeque::from([NodeIndex::new(self.root)]);
        while let Some(u) = queue.pop_front() {
            for edge in g.edges_directed(u, Outgoing) {
                let v = edge.target();
                if !reached[v.index()] && flows[edge.id().index()] < *edge.weight() {
                    reached[v.index()] = true;
                    queue.push_back(v);
                }
            }
            for edge in g.edges_directed(u, Incoming) {
                let v = edge.source();
                if !reached[v.index()] && flows[edge.id().index()] > 0 {
                    reached[v.index()] = true;
                    queue.push_back(v);
                }
            }
        }

        (value, CutPartition::from_mask(&reached))
    }

    /// Returns a violated cut when `probe` receives less than one unit of flow.
    pub fn find_violated_cut(&self, graph: &SupportGraph, probe: usize) -> Option<CutPartition> {
        if self.max_flow_value(graph, probe) >= 1 {
            return None;
        }
        let (_, partition) = self.min_cut(graph, probe);
        Some(partition)
    }
}
