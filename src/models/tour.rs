//! Hamiltonian tour and cycle decomposition.

use serde::Serialize;

use crate::distance::CostMatrix;
use crate::error::{Error, Result};

/// A closed tour visiting every node exactly once, starting at node 0.
///
/// The closing arc back to node 0 is implied and included in the cost.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::CostMatrix;
/// use tsp_exact::models::Tour;
///
/// let costs = CostMatrix::uniform(3, 2.0).expect("valid");
/// let tour = Tour::from_arcs(&[(0, 2), (2, 1), (1, 0)], &costs).expect("one cycle");
/// assert_eq!(tour.nodes(), &[0, 2, 1]);
/// assert_eq!(tour.cost(), 6.0);
/// assert_eq!(tour.render(), "0 -> 2 -> 1 -> 0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    nodes: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Builds a tour from its selected arcs.
    ///
    /// Fails unless the arcs form exactly one cycle through all nodes.
    pub fn from_arcs(arcs: &[(usize, usize)], costs: &CostMatrix) -> Result<Self> {
        let cycles = cycles(costs.size(), arcs)?;
        if cycles.len() != 1 {
            return Err(Error::invalid_tour(format!(
                "arcs form {} disjoint cycles",
                cycles.len()
            )));
        }
        let nodes = cycles.into_iter().next().unwrap_or_default();
        Self::from_sequence(nodes, costs)
    }

    /// Builds a tour from a node sequence, rotated to start at node 0.
    pub fn from_sequence(mut nodes: Vec<usize>, costs: &CostMatrix) -> Result<Self> {
        let n = costs.size();
        let mut seen = vec![false; n];
        for &v in &nodes {
            if v >= n || seen[v] {
                return Err(Error::invalid_tour(format!(
                    "node {v} is out of range or repeated"
                )));
            }
            seen[v] = true;
        }
        if nodes.len() != n {
            return Err(Error::invalid_tour(format!(
                "visits {} of {n} nodes",
                nodes.len()
            )));
        }

        if let Some(start) = nodes.iter().position(|&v| v == 0) {
            nodes.rotate_left(start);
        }
        let cost = nodes
            .iter()
            .zip(nodes.iter().cycle().skip(1))
            .map(|(&a, &b)| costs.get(a, b))
            .sum();
        Ok(Self { nodes, cost })
    }

    /// Visit order, starting at node 0.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total arc cost including the closing arc.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Arcs of the tour in visit order, including the closing arc.
    pub fn arcs(&self) -> Vec<(usize, usize)> {
        self.nodes
            .iter()
            .zip(self.nodes.iter().cycle().skip(1))
            .map(|(&a, &b)| (a, b))
            .collect()
    }

    /// Renders the tour as `0 -> a -> b -> 0`.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = self.nodes.iter().map(|v| v.to_string()).collect();
        if let Some(first) = self.nodes.first() {
            parts.push(first.to_string());
        }
        parts.join(" -> ")
    }
}

/// Decomposes a set of arcs into cycles.
///
/// Every node in `0..n` must have exactly one outgoing and one incoming arc.
/// Cycles are returned in order of their smallest node, each starting there.
pub fn cycles(n: usize, arcs: &[(usize, usize)]) -> Result<Vec<Vec<usize>>> {
    let mut successor = vec![None; n];
    let mut in_degree = vec![0usize; n];
    for &(from, to) in arcs {
        if from >= n || to >= n || from == to {
            return Err(Error::invalid_tour(format!("arc ({from}, {to}) is not valid")));
        }
        if successor[from].replace(to).is_some() {
            return Err(Error::invalid_tour(format!(
                "node {from} has out-degree above 1"
            )));
        }
        in_degree[to] += 1;
    }
    if let Some(v) = (0..n).find(|&v| successor[v].is_none() || in_degree[v] != 1) {
        return Err(Error::invalid_tour(format!(
            "node {v} does not have in-degree and out-degree 1"
        )));
    }

    let mut visited = vec![false; n];
    let mut result = Vec::new();
    for start in 0..n {
        if visited[start] {
            continue;
        }
        let mut cycle = Vec::new();
        let mut v = start;
        while !visited[v] {
            visited[v] = true;
            cycle.push(v);
            v = successor[v].unwrap_or(start);
        }
        result.push(cycle);
    }
    Ok(result)
}
