use orthant_core::VectorFunction;

use crate::equation::{Evaluation, evaluate};

use super::{Error, Signature, Table, squared_magnitude};

/// What the solver should do after a step.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Next {
    /// The evaluated point is within tolerance.
    Converged,

    /// Move to the midpoint between the evaluated point and a table entry.
    Midpoint {
        /// Signature of the table entry used as the other end.
        partner: Signature,

        /// The next point to evaluate.
        x: Vec<f64>,
    },
}

/// Result of evaluating one point and choosing the next.
#[derive(Debug, Clone)]
pub(super) struct Step {
    pub(super) eval: Evaluation,
    pub(super) magnitude: f64,
    pub(super) signature: Signature,
    pub(super) next: Next,
}

/// Evaluates `x`, records it in `table`, and proposes the next point.
///
/// The partner for the midpoint is the entry stored under the complementary
/// signature of `f(x)`. When that orthant has not been seen yet, the entry
/// whose signature is nearest to the complement is used instead.
pub(super) fn step<F>(
    function: &F,
    x: &[f64],
    table: &mut Table,
    tolerance: f64,
) -> Result<Step, Error>
where
    F: VectorFunction + ?Sized,
{
    let eval = evaluate(function, x)?;
    let signature = Signature::of(&eval.residuals);
    let magnitude = squared_magnitude(&eval.residuals);

    table.insert(eval.x.clone(), signature, magnitude);

    if magnitude <= tolerance {
        return Ok(Step {
            eval,
            magnitude,
            signature,
            next: Next::Converged,
        });
    }

    let complement = Signature::complement_of(&eval.residuals);
    let (partner, call) = match table.get(complement) {
        Some(call) => (complement, call),
        None => table.nearest(complement)?,
    };

    let next = x
        .iter()
        .zip(&call.point)
        .map(|(a, b)| 0.5 * (a + b))
        .collect();

    Ok(Step {
        eval,
        magnitude,
        signature,
        next: Next::Midpoint { partner, x: next },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use thiserror::Error;

    fn shifted_square(x: &[f64]) -> Result<Vec<f64>, Infallible> {
        Ok(vec![x[0] * x[0] - 4.0])
    }

    fn sig(bits: u64) -> Signature {
        Signature::from_bits(bits)
    }

    fn midpoint(step: &Step) -> (Signature, &[f64]) {
        match &step.next {
            Next::Midpoint { partner, x } => (*partner, x),
            Next::Converged => panic!("expected a midpoint"),
        }
    }

    #[test]
    fn moves_toward_complementary_orthant() {
        let mut table = Table::new();
        table.insert(vec![-1.5], sig(0), 1.75 * 1.75);
        table.insert(vec![10.0], sig(1), 96.0 * 96.0);

        let step = step(&shifted_square, &[1.0], &mut table, 1e-16).expect("should step");

        assert_relative_eq!(step.magnitude, 9.0);
        assert_eq!(step.signature, sig(0));
        assert_eq!(step.eval.residuals, vec![-3.0]);
        let (partner, next) = midpoint(&step);
        assert_eq!(partner, sig(1));
        assert_eq!(next, &[5.5]);

        // x = 1 is worse than the seeded negative entry, so it is not stored.
        assert_eq!(table.get(sig(0)).expect("entry").point, vec![-1.5]);
    }

    #[test]
    fn records_better_points() {
        let mut table = Table::new();
        table.insert(vec![-1.5], sig(0), 1.75 * 1.75);
        table.insert(vec![10.0], sig(1), 96.0 * 96.0);

        step(&shifted_square, &[5.5], &mut table, 1e-16).expect("should step");

        let entry = table.get(sig(1)).expect("entry");
        assert_eq!(entry.point, vec![5.5]);
        assert_relative_eq!(entry.magnitude, 26.25 * 26.25);
    }

    #[test]
    fn reports_convergence_without_moving() {
        let mut table = Table::new();
        table.insert(vec![10.0], sig(1), 96.0 * 96.0);

        let step = step(&shifted_square, &[2.0], &mut table, 1e-16).expect("should step");

        assert_eq!(step.next, Next::Converged);
        assert_relative_eq!(step.magnitude, 0.0);
        assert_eq!(step.eval.x, vec![2.0]);
        assert_eq!(table.get(sig(0)).expect("root recorded").point, vec![2.0]);
    }

    #[test]
    fn magnitude_equal_to_tolerance_counts_as_converged() {
        let mut table = Table::new();

        let step = step(&shifted_square, &[1.0], &mut table, 9.0).expect("should step");

        assert_eq!(step.next, Next::Converged);
    }

    #[test]
    fn falls_back_to_nearest_signature_of_the_complement() {
        // f(x) = x, so the signature of f(x) is the sign pattern of x.
        let identity = |x: &[f64]| -> Result<Vec<f64>, Infallible> { Ok(x.to_vec()) };
        let mut table = Table::new();
        table.insert(vec![1.0, -1.0], sig(0b01), 2.0);

        let step = step(&identity, &[-2.0, -2.0], &mut table, 1e-16).expect("should step");

        // The complement 0b11 is missing. 0b01 is one bit away; the point's own
        // orthant 0b00 is two bits away.
        let (partner, next) = midpoint(&step);
        assert_eq!(partner, sig(0b01));
        assert_eq!(next, &[-0.5, -1.5]);
    }

    #[test]
    fn falls_back_to_own_orthant_when_it_is_all_there_is() {
        let identity = |x: &[f64]| -> Result<Vec<f64>, Infallible> { Ok(x.to_vec()) };
        let mut table = Table::new();
        table.insert(vec![-0.5, -0.5], sig(0b00), 0.5);

        let step = step(&identity, &[-2.0, -4.0], &mut table, 1e-16).expect("should step");

        let (partner, next) = midpoint(&step);
        assert_eq!(partner, sig(0b00));
        assert_eq!(next, &[-1.25, -2.25]);
    }

    #[derive(Debug, Error)]
    #[error("not defined here")]
    struct NotDefined;

    #[test]
    fn propagates_function_failure() {
        let failing = |_: &[f64]| -> Result<Vec<f64>, NotDefined> { Err(NotDefined) };
        let mut table = Table::new();
        table.insert(vec![0.0], sig(0), 1.0);

        let result = step(&failing, &[3.0], &mut table, 1e-16);

        assert!(matches!(result, Err(Error::Function(_))));
        assert_eq!(table.len(), 1);
    }
}
