use serde::Deserialize;

use crate::error::{DescentError, Result};

/// Hyperparameters for a gradient descent run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DescentHyperparameters {
    /// Step size multiplier applied to the averaged gradient
    pub descent_rate: f64,

    /// The run has converged once the summed absolute parameter change of
    /// one iteration drops below this value
    pub epsilon: f64,

    /// Upper bound on iterations; `None` iterates until convergence
    pub max_iterations: Option<usize>,

    /// Fail with [`DescentError::Diverged`] as soon as a parameter becomes
    /// infinite or NaN
    pub detect_divergence: bool,
}

impl Default for DescentHyperparameters {
    fn default() -> Self {
        DescentHyperparameters {
            descent_rate: 0.01,
            epsilon: 1e-12,
            max_iterations: None,
            detect_divergence: true,
        }
    }
}

impl DescentHyperparameters {
    pub fn new(descent_rate: f64, epsilon: f64) -> Self {
        DescentHyperparameters {
            descent_rate,
            epsilon,
            ..Default::default()
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_divergence_detection(mut self, enabled: bool) -> Self {
        self.detect_divergence = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.descent_rate.is_finite() || self.descent_rate <= 0.0 {
            return Err(DescentError::invalid(
                "descent_rate",
                format!("must be positive and finite, got {}", self.descent_rate),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(DescentError::invalid(
                "epsilon",
                format!("must be positive and finite, got {}", self.epsilon),
            ));
        }
        if self.max_iterations == Some(0) {
            return Err(DescentError::invalid("max_iterations", "must be at least 1"));
        }

        Ok(())
    }
}
