mod dataset;
mod error;
mod hyperparameters;
mod hypothesis;
mod optimizer;

pub use dataset::Dataset;
pub use error::{DescentError, Result};
pub use hyperparameters::DescentHyperparameters;
pub use hypothesis::{Hypothesis, LinearRegression};
pub use optimizer::{gradient_descent, update_step, Convergence, Fit, GradientDescent, Step};
