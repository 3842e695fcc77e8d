use ndarray::Array1;

/// Prediction function fitted by gradient descent.
///
/// `theta` and `x` have the same length: `x[0]` is the constant bias input
/// and the remaining entries are one row's features. Implementations must be
/// pure; the optimizer may call them any number of times per iteration.
pub trait Hypothesis {
    fn evaluate(&self, theta: &Array1<f64>, x: &Array1<f64>) -> f64;
}

impl<F> Hypothesis for F
where
    F: Fn(&Array1<f64>, &Array1<f64>) -> f64,
{
    fn evaluate(&self, theta: &Array1<f64>, x: &Array1<f64>) -> f64 {
        self(theta, x)
    }
}

/// `theta · x`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearRegression;

impl Hypothesis for LinearRegression {
    fn evaluate(&self, theta: &Array1<f64>, x: &Array1<f64>) -> f64 {
        theta.dot(x)
    }
}
