use crate::equation::Evaluation;

/// Indicates why the solver returned a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The squared magnitude at `x` is within tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an orthant search.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The reported root estimate.
    pub x: Vec<f64>,

    /// Function output at `x`.
    pub residuals: Vec<f64>,

    /// Squared magnitude of `residuals`.
    pub magnitude: f64,

    /// Number of steps taken.
    pub iters: usize,
}

impl Solution {
    pub(super) fn from_eval(eval: Evaluation, magnitude: f64, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x,
            residuals: eval.residuals,
            magnitude,
            iters,
        }
    }
}
