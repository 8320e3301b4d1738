use thiserror::Error;

use orthant_core::VectorFunction;

/// The result of evaluating a function at a given `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub x: Vec<f64>,
    pub residuals: Vec<f64>,
}

/// Errors that can occur when evaluating a function.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The function call failed.
    #[error("function call failed")]
    Function(#[source] E),

    /// The function returned the wrong number of components.
    #[error("function returned {found} components, expected {expected}")]
    OutputDimension { expected: usize, found: usize },

    /// The function returned a NaN or infinite component.
    #[error("function returned a non-finite component at x = {x:?}")]
    NonFiniteOutput { x: Vec<f64> },
}

/// Evaluates the function at `x` and checks the shape of its output.
///
/// # Errors
///
/// Returns an error if the function call fails, or if the output does not
/// have one finite component per input component.
pub fn evaluate<F>(function: &F, x: &[f64]) -> Result<Evaluation, EvalError<F::Error>>
where
    F: VectorFunction + ?Sized,
{
    let residuals = function.call(x).map_err(EvalError::Function)?;

    if residuals.len() != x.len() {
        return Err(EvalError::OutputDimension {
            expected: x.len(),
            found: residuals.len(),
        });
    }
    if residuals.iter().any(|r| !r.is_finite()) {
        return Err(EvalError::NonFiniteOutput { x: x.to_vec() });
    }

    Ok(Evaluation {
        x: x.to_vec(),
        residuals,
    })
}
