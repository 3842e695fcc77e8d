use thiserror::Error;

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, DescentError>;

/// Everything that can stop a descent run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DescentError {
    #[error("dataset has no rows")]
    EmptyDataset,
    #[error("dataset has no target column")]
    MissingTarget,
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("size mismatch between {a} and {b}: got {got}, expected {expected}")]
    ShapeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    #[error("invalid hyperparameter {name}: {reason}")]
    InvalidHyperparameter {
        name: &'static str,
        reason: String,
    },
    #[error("parameters became non-finite at iteration {iteration}")]
    Diverged { iteration: usize },
    #[error("no convergence after {iterations} iterations (last change {last_change:e})")]
    NotConverged { iterations: usize, last_change: f64 },
}

impl DescentError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        DescentError::InvalidHyperparameter {
            name,
            reason: reason.into(),
        }
    }
}
