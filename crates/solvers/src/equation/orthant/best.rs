use crate::equation::Evaluation;

use super::{Solution, Status};

/// Tracks the lowest-magnitude evaluation encountered so far.
pub(super) struct Best {
    eval: Evaluation,
    magnitude: f64,
}

impl Best {
    /// Starts tracking from an initial evaluation.
    pub(super) fn new(eval: Evaluation, magnitude: f64) -> Self {
        Self { eval, magnitude }
    }

    /// Replaces the best evaluation if `magnitude` is strictly smaller.
    pub(super) fn update(&mut self, eval: &Evaluation, magnitude: f64) {
        if magnitude < self.magnitude {
            self.eval = eval.clone();
            self.magnitude = magnitude;
        }
    }

    /// Finishes the run using the best evaluation.
    pub(super) fn finish(self, status: Status, iters: usize) -> Solution {
        Solution::from_eval(self.eval, self.magnitude, status, iters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(x: f64, residual: f64) -> Evaluation {
        Evaluation {
            x: vec![x],
            residuals: vec![residual],
        }
    }

    #[test]
    fn update_keeps_lowest_magnitude() {
        let mut best = Best::new(eval(0.0, 3.0), 9.0);
        best.update(&eval(1.0, 2.0), 4.0);
        best.update(&eval(2.0, -1.0), 1.0);
        best.update(&eval(3.0, 1.5), 2.25);

        let solution = best.finish(Status::StoppedByObserver, 3);

        assert_eq!(solution.x, vec![2.0]);
        assert_eq!(solution.residuals, vec![-1.0]);
        assert_relative_eq!(solution.magnitude, 1.0);
    }

    #[test]
    fn ties_keep_the_earlier_evaluation() {
        let mut best = Best::new(eval(0.0, 1.0), 1.0);
        best.update(&eval(5.0, -1.0), 1.0);

        let solution = best.finish(Status::StoppedByObserver, 1);

        assert_eq!(solution.x, vec![0.0]);
    }

    #[test]
    fn finish_builds_solution() {
        let best = Best::new(eval(2.0, -0.5), 0.25);

        let solution = best.finish(Status::Converged, 4);

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 4);
        assert_eq!(solution.x, vec![2.0]);
        assert_relative_eq!(solution.magnitude, 0.25);
    }
}
