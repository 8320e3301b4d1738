//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events numbered by iteration
//! - [`HasMagnitude`] — events that carry a convergence magnitude
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use orthant_core::Observer;
//! use orthant_observers::traits::{CanStopEarly, HasIteration, HasMagnitude};
//!
//! struct GoodEnough {
//!     magnitude: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasIteration + HasMagnitude, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.iteration() >= self.min_iters && event.magnitude() < self.magnitude {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use orthant_solvers::equation::orthant;

/// An event numbered by the solver iteration that produced it.
pub trait HasIteration {
    /// Returns the iteration number for this event.
    fn iteration(&self) -> usize;
}

/// An event that carries a convergence magnitude.
pub trait HasMagnitude {
    /// Returns the magnitude for this event.
    ///
    /// Smaller is better; the solver converges once it falls within tolerance.
    fn magnitude(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- orthant::Event ---

impl HasIteration for orthant::Event<'_> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasMagnitude for orthant::Event<'_> {
    fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for orthant::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
