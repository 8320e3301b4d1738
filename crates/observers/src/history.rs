//! Observer that records a convergence history.

use orthant_core::Observer;

use crate::traits::{HasIteration, HasMagnitude};

/// An observer that records `(iteration, magnitude)` for every event.
///
/// Pass `&mut HistoryObserver` as the solver observer to keep the history
/// after the solve completes.
///
/// # Example
///
/// ```rust
/// use orthant_observers::HistoryObserver;
/// use orthant_solvers::equation::orthant::{self, Config};
///
/// let f = |x: &[f64]| -> Result<Vec<f64>, std::convert::Infallible> {
///     Ok(vec![x[0] * x[0] - 4.0])
/// };
///
/// let mut history = HistoryObserver::new();
/// let solution = orthant::solve(&f, &[1.0], &[[-1.5, 10.0]], &Config::default(), &mut history)
///     .unwrap();
///
/// assert_eq!(history.len(), solution.iters);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HistoryObserver {
    points: Vec<(usize, f64)>,
}

impl HistoryObserver {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single point.
    pub fn record(&mut self, iteration: usize, magnitude: f64) {
        self.points.push((iteration, magnitude));
    }

    /// Returns the recorded `(iteration, magnitude)` pairs in order.
    #[must_use]
    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    /// Returns the number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the smallest magnitude recorded, if any.
    #[must_use]
    pub fn best(&self) -> Option<(usize, f64)> {
        self.points
            .iter()
            .copied()
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl<E, A> Observer<E, A> for HistoryObserver
where
    E: HasIteration + HasMagnitude,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.iteration(), event.magnitude());
        None
    }
}

/// Allows `&mut HistoryObserver` to be passed to solvers that take an observer
/// by value, so the history can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut HistoryObserver
where
    E: HasIteration + HasMagnitude,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
