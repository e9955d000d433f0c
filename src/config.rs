//! Solver configuration.

use std::time::Duration;

use crate::error::{Error, Result};

/// Limits and tolerances shared by every solve method.
///
/// All limits default to unlimited except the size cap on the static
/// subset formulations, whose constraint count grows as `2^n`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use tsp_exact::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_max_rounds(50)
///     .with_time_limit(Duration::from_secs(10));
/// assert_eq!(config.max_rounds, Some(50));
/// assert_eq!(config.selection_threshold, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// An arc is selected when its variable value exceeds this threshold.
    pub selection_threshold: f64,
    /// Distance from an integer below which a binary variable counts as integral.
    pub integrality_tolerance: f64,
    /// Maximum number of re-solves in the lazy cut loop.
    pub max_rounds: Option<usize>,
    /// Wall-clock limit for the lazy cut loop, checked between rounds.
    pub time_limit: Option<Duration>,
    /// Maximum number of LP nodes per ILP solve.
    pub max_ilp_nodes: Option<usize>,
    /// Maximum number of nodes added to the TSP branch-and-bound tree.
    pub max_bb_nodes: Option<usize>,
    /// Largest instance accepted by the cut-set and subtour-elimination models.
    pub max_cut_set_nodes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            selection_threshold: 0.5,
            integrality_tolerance: 1e-6,
            max_rounds: None,
            time_limit: None,
            max_ilp_nodes: None,
            max_bb_nodes: None,
            max_cut_set_nodes: 12,
        }
    }
}

impl SolverConfig {
    /// Rejects settings no solve can make progress with.
    ///
    /// The selection threshold must lie strictly between 0 and 1: at 1 or
    /// above no arc is ever selected, at 0 or below every arc is.
    pub fn validate(&self) -> Result<()> {
        let t = self.selection_threshold;
        if !(t > 0.0 && t < 1.0) {
            return Err(Error::invalid_input(format!(
                "selection threshold {t} must lie in (0, 1)"
            )));
        }
        if !(self.integrality_tolerance >= 0.0 && self.integrality_tolerance < 0.5) {
            return Err(Error::invalid_input(format!(
                "integrality tolerance {} must lie in [0, 0.5)",
                self.integrality_tolerance
            )));
        }
        Ok(())
    }

    pub fn with_selection_threshold(mut self, threshold: f64) -> Self {
        self.selection_threshold = threshold;
        self
    }

    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_max_ilp_nodes(mut self, nodes: usize) -> Self {
        self.max_ilp_nodes = Some(nodes);
        self
    }

    pub fn with_max_bb_nodes(mut self, nodes: usize) -> Self {
        self.max_bb_nodes = Some(nodes);
        self
    }

    pub fn with_max_cut_set_nodes(mut self, nodes: usize) -> Self {
        self.max_cut_set_nodes = nodes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unlimited() {
        let config = SolverConfig::default();
        assert_eq!(config.max_rounds, None);
        assert_eq!(config.time_limit, None);
        assert_eq!(config.max_bb_nodes, None);
        assert_eq!(config.max_cut_set_nodes, 12);
    }

    #[test]
    fn test_builder_chain() {
        let config = SolverConfig::default()
            .with_selection_threshold(0.9)
            .with_max_ilp_nodes(100)
            .with_max_bb_nodes(10)
            .with_max_cut_set_nodes(8);
        assert_eq!(config.selection_threshold, 0.9);
        assert_eq!(config.max_ilp_nodes, Some(100));
        assert_eq!(config.max_bb_nodes, Some(10));
        assert_eq!(config.max_cut_set_nodes, 8);
    }

    #[test]
    fn test_validate_threshold() {
        assert!(SolverConfig::default().validate().is_ok());
        assert!(SolverConfig::default()
            .with_selection_threshold(0.99)
            .validate()
            .is_ok());
        for bad in [0.0, -0.5, 1.0, 1.5, f64::NAN] {
            let err = SolverConfig::default()
                .with_selection_threshold(bad)
                .validate()
                .unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{bad} accepted");
        }
    }

    #[test]
    fn test_validate_tolerance() {
        let config = SolverConfig {
            integrality_tolerance: 0.5,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
