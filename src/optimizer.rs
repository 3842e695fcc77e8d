use log::{debug, info, trace, warn};
use ndarray::Array1;

use crate::dataset::Dataset;
use crate::error::{DescentError, Result};
use crate::hyperparameters::DescentHyperparameters;
use crate::hypothesis::Hypothesis;

/// Outcome of a single pass over the dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Sum of the absolute changes applied to every parameter.
    pub total_change: f64,
    pub converged: bool,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    Converged,
    IterationLimit,
}

/// Result of a full descent run.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    pub theta: Array1<f64>,
    pub iterations: usize,
    pub last_change: f64,
    pub status: Convergence,
}

impl Fit {
    pub fn converged(&self) -> bool {
        self.status == Convergence::Converged
    }

    /// Returns the parameters, treating an exhausted iteration budget as an
    /// error.
    pub fn into_converged(self) -> Result<Array1<f64>> {
        match self.status {
            Convergence::Converged => Ok(self.theta),
            Convergence::IterationLimit => Err(DescentError::NotConverged {
                iterations: self.iterations,
                last_change: self.last_change,
            }),
        }
    }
}

/// Batch gradient descent over a caller supplied hypothesis.
#[derive(Debug, Clone)]
pub struct GradientDescent<H> {
    hyperparameters: DescentHyperparameters,
    hypothesis: H,
}

impl<H: Hypothesis> GradientDescent<H> {
    pub fn new(hyperparameters: DescentHyperparameters, hypothesis: H) -> Result<Self> {
        hyperparameters.validate()?;

        Ok(Self {
            hyperparameters,
            hypothesis,
        })
    }

    pub fn hyperparameters(&self) -> &DescentHyperparameters {
        &self.hyperparameters
    }

    /// Runs one iteration, updating `theta` in place.
    pub fn step(&self, dataset: &Dataset, theta: &mut Array1<f64>) -> Result<Step> {
        update_step(
            dataset,
            theta,
            self.hyperparameters.descent_rate,
            &self.hypothesis,
            self.hyperparameters.epsilon,
        )
    }

    /// Iterates from `initial_theta` (zeros when `None`) until the update
    /// step converges or the iteration bound is reached.
    pub fn fit(&self, dataset: &Dataset, initial_theta: Option<&Array1<f64>>) -> Result<Fit> {
        let mut theta = initial_parameters(dataset, initial_theta)?;
        let hp = &self.hyperparameters;

        debug!(
            "starting descent: rows={} features={} descent_rate={} epsilon={:e} max_iterations={:?}",
            dataset.n_rows(),
            dataset.n_features(),
            hp.descent_rate,
            hp.epsilon,
            hp.max_iterations,
        );

        let mut iterations = 0;
        loop {
            let step = self.step(dataset, &mut theta)?;
            iterations += 1;
            trace!("iteration {iterations}: total change {:e}", step.total_change);

            if hp.detect_divergence
                && (!step.total_change.is_finite() || theta.iter().any(|t| !t.is_finite()))
            {
                warn!("parameters diverged at iteration {iterations}");
                return Err(DescentError::Diverged {
                    iteration: iterations,
                });
            }

            let status = if step.converged {
                info!("converged after {iterations} iterations");
                Convergence::Converged
            } else if hp.max_iterations.is_some_and(|max| iterations >= max) {
                warn!(
                    "stopped after {iterations} iterations without converging (last change {:e})",
                    step.total_change
                );
                Convergence::IterationLimit
            } else {
                continue;
            };

            return Ok(Fit {
                theta,
                iterations,
                last_change: step.total_change,
                status,
            });
        }
    }
}

/// One batch gradient descent iteration.
///
/// Evaluates `hypothesis` once per row, in row order, accumulates
/// `(h - y) * x` over the augmented feature vectors, then moves every
/// parameter by `descent_rate / N` times its accumulated gradient. The step
/// has converged when the summed absolute change is below `epsilon`.
pub fn update_step<H: Hypothesis + ?Sized>(
    dataset: &Dataset,
    theta: &mut Array1<f64>,
    descent_rate: f64,
    hypothesis: &H,
    epsilon: f64,
) -> Result<Step> {
    check_theta_len(dataset, theta.len(), "theta")?;

    let mut accumulator = Array1::<f64>::zeros(dataset.n_params());
    for (row, &y) in dataset.targets().iter().enumerate() {
        let x = dataset.augmented(row);
        let h = hypothesis.evaluate(theta, &x);
        accumulator.scaled_add(h - y, &x);
    }

    let multiplier = descent_rate / dataset.n_rows() as f64;
    let mut total_change = 0.0;
    for (t, acc) in theta.iter_mut().zip(accumulator.iter()) {
        let change = multiplier * acc;
        *t -= change;
        total_change += change.abs();
    }

    Ok(Step {
        total_change,
        converged: total_change < epsilon,
    })
}

/// Fits `dataset` and returns the final parameters: bias first, then one
/// weight per feature.
///
/// There is no iteration bound, so a run that neither converges nor
/// overflows does not return. Runs whose parameters become non-finite fail
/// with [`DescentError::Diverged`].
pub fn gradient_descent<H: Hypothesis>(
    dataset: &Dataset,
    descent_rate: f64,
    hypothesis: H,
    epsilon: f64,
    initial_theta: Option<&Array1<f64>>,
) -> Result<Array1<f64>> {
    let optimizer = GradientDescent::new(
        DescentHyperparameters::new(descent_rate, epsilon),
        hypothesis,
    )?;

    optimizer.fit(dataset, initial_theta)?.into_converged()
}

fn initial_parameters(dataset: &Dataset, initial_theta: Option<&Array1<f64>>) -> Result<Array1<f64>> {
    match initial_theta {
        Some(theta) => {
            check_theta_len(dataset, theta.len(), "initial theta")?;
            Ok(theta.clone())
        }
        None => Ok(Array1::zeros(dataset.n_params())),
    }
}

fn check_theta_len(dataset: &Dataset, got: usize, what: &'static str) -> Result<()> {
    if got != dataset.n_params() {
        return Err(DescentError::ShapeMismatch {
            a: what,
            b: "dataset parameters",
            got,
            expected: dataset.n_params(),
        });
    }

    Ok(())
}
