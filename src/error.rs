//! Error type shared by every solver entry point.

use std::time::Duration;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("model is infeasible")]
    Infeasible,
    #[error("model is unbounded")]
    Unbounded,
    #[error("subtours still present after {rounds} cut rounds")]
    RoundLimit { rounds: usize },
    #[error("cut loop stalled in round {rounds}: a cut already added is violated again")]
    Stalled { rounds: usize },
    #[error("time limit exceeded after {elapsed:?}")]
    TimeLimit { elapsed: Duration },
    #[error("search stopped after {nodes} nodes")]
    NodeLimit { nodes: usize },
    #[error("{formulation} model over {nodes} nodes exceeds the limit of {limit}")]
    ModelTooLarge {
        formulation: &'static str,
        nodes: usize,
        limit: usize,
    },
    #[error("invalid tour: {0}")]
    InvalidTour(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<minilp::Error> for Error {
    fn from(err: minilp::Error) -> Self {
        match err {
            minilp::Error::Infeasible => Self::Infeasible,
            minilp::Error::Unbounded => Self::Unbounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lp_errors_map_to_variants() {
        assert!(matches!(
            Error::from(minilp::Error::Infeasible),
            Error::Infeasible
        ));
        assert!(matches!(
            Error::from(minilp::Error::Unbounded),
            Error::Unbounded
        ));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::invalid_input("matrix is empty").to_string(),
            "invalid input: matrix is empty"
        );
        assert_eq!(
            Error::RoundLimit { rounds: 3 }.to_string(),
            "subtours still present after 3 cut rounds"
        );
    }
}
