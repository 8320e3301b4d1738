use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::bounds::BoundsError;

/// Errors that can occur during an orthant search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bounds: {0}")]
    InvalidBounds(#[from] BoundsError),

    #[error("function call failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("function returned {found} components, expected {expected}")]
    OutputDimension { expected: usize, found: usize },

    #[error("function returned a non-finite component at x = {x:?}")]
    NonFiniteOutput { x: Vec<f64> },

    #[error("solution table is empty; seeding must record at least one evaluation")]
    EmptyTable,

    #[error("tolerance not reached after {iters} iterations (squared magnitude {magnitude})")]
    NotConverged { iters: usize, magnitude: f64 },
}

impl<E> From<EvalError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<E>) -> Self {
        match err {
            EvalError::Function(e) => Self::Function(Box::new(e)),
            EvalError::OutputDimension { expected, found } => {
                Self::OutputDimension { expected, found }
            }
            EvalError::NonFiniteOutput { x } => Self::NonFiniteOutput { x },
        }
    }
}
