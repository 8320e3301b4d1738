//! Observer that reports solver progress through `tracing`.

use orthant_core::Observer;
use tracing::{debug, trace};

use crate::traits::{HasIteration, HasMagnitude};

/// The `tracing` level used by a [`LogObserver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log with `tracing::trace!`.
    #[default]
    Trace,

    /// Log with `tracing::debug!`.
    Debug,
}

/// An observer that emits one `tracing` event per solver event.
///
/// Events carry the iteration and magnitude as structured fields. The
/// observer never returns an action, and does nothing unless a subscriber is
/// installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver {
    level: LogLevel,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the level this observer logs at.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIteration + HasMagnitude,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let iter = event.iteration();
        let magnitude = event.magnitude();
        match self.level {
            LogLevel::Trace => trace!(iter, magnitude, "solver event"),
            LogLevel::Debug => debug!(iter, magnitude, "solver event"),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use orthant_solvers::equation::orthant::{self, Config};

    #[test]
    fn defaults_to_trace() {
        assert_eq!(LogObserver::default().level(), LogLevel::Trace);
    }

    #[test]
    fn does_not_alter_the_solve() {
        let f = |x: &[f64]| -> Result<Vec<f64>, Infallible> { Ok(vec![x[0] * x[0] - 4.0]) };

        let solution = orthant::solve(
            &f,
            &[1.0],
            &[[-5.0, 1.5]],
            &Config::default(),
            LogObserver::new(LogLevel::Debug),
        )
        .expect("should converge");

        assert_eq!(solution.status, orthant::Status::Converged);
        assert_relative_eq!(solution.x[0], -2.0);
    }
}
