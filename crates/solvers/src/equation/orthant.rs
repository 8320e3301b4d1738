//! Sign-pattern root finding for vector-valued functions on a bounding box.
//!
//! # Algorithm
//!
//! Every output of `f: R^n → R^n` lies in one of the `2^n` orthants, named by
//! its [`Signature`] (bit `i` set when component `i` is positive). The solver
//! keeps a [`Table`] holding the best point seen for each orthant and walks
//! toward a root by repeated midpoints:
//!
//! 1. Evaluate `f` at the initial point.
//! 2. Seed the table by evaluating `2n` corners of the bounding box. For each
//!    dimension one corner pins that coordinate to its lower bound and another
//!    to its upper bound; the remaining coordinates are chosen at random.
//! 3. Repeatedly evaluate the current point, record it, and move to the
//!    midpoint between it and the table entry for the *complementary*
//!    orthant (every sign flipped). If that orthant has not been seen, the
//!    entry whose signature is nearest to the complement is used instead.
//! 4. Stop when the squared magnitude of `f` is within tolerance, or fail once
//!    the iteration budget is spent.
//!
//! # When to Use
//!
//! - Derivatives of `f` are unavailable or unreliable
//! - A box known to contain a root is available
//! - Each component of `f` changes sign across the box
//!
//! # Limitations
//!
//! - **No convergence guarantee**: the search can stall between two orthants
//!   and exhaust its budget, especially when components are coupled
//! - **Randomized**: [`solve`] samples corners at random, so two runs may take
//!   different paths or reach different roots. Use [`solve_with_picker`] with
//!   a seeded generator or a scripted [`CornerPicker`] for repeatable runs
//! - **At most 64 dimensions**: signatures are stored in a `u64`
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per step, after the step's evaluation has
//! been recorded. Observers can return [`Action::StopEarly`] to halt and
//! receive the lowest-magnitude evaluation seen so far.

mod action;
mod best;
mod bounds;
mod config;
mod error;
mod event;
mod magnitude;
mod sample;
mod signature;
mod solution;
mod step;
mod table;


pub use action::Action;
pub use bounds::{Bounds, BoundsError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use magnitude::squared_magnitude;
pub use sample::{CornerPicker, RandomCorners};
pub use signature::{MAX_DIMENSIONS, Signature};
pub use solution::{Solution, Status};
pub use table::{FunctionCall, Table};

use orthant_core::{Observer, VectorFunction};
use tracing::{debug, trace};

use crate::equation::evaluate;

use best::Best;
use step::{Next, step};

/// Finds a root of `function` inside `bounds`, starting from `x0`.
///
/// Corners are sampled with the thread-local random generator.
/// The observer receives an [`Event`] after every step.
/// See the [module docs](self) for details.
///
/// `bounds` holds one `[lower, upper]` row per dimension of `x0`.
///
/// # Errors
///
/// Returns an error if the bounds are invalid, if `function` fails anywhere
/// during the search, or if the tolerance is not reached within the
/// iteration budget.
pub fn solve<F, B, Obs>(
    function: &F,
    x0: &[f64],
    bounds: &[B],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorFunction + ?Sized,
    B: AsRef<[f64]>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut picker = RandomCorners::new(rand::thread_rng());
    solve_with_picker(function, x0, bounds, config, &mut picker, observer)
}

/// Finds a root of `function` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bounds are invalid, if `function` fails anywhere
/// during the search, or if the tolerance is not reached within the
/// iteration budget.
pub fn solve_unobserved<F, B>(
    function: &F,
    x0: &[f64],
    bounds: &[B],
    config: &Config,
) -> Result<Solution, Error>
where
    F: VectorFunction + ?Sized,
    B: AsRef<[f64]>,
{
    solve(function, x0, bounds, config, ())
}

/// Finds a root of `function` using `picker` to choose sampled corners.
///
/// This is the entry point behind [`solve`]. Passing a seeded generator
/// wrapped in [`RandomCorners`], or any other [`CornerPicker`], makes the
/// search repeatable.
///
/// # Errors
///
/// Returns an error if the bounds are invalid, if `function` fails anywhere
/// during the search, or if the tolerance is not reached within the
/// iteration budget.
pub fn solve_with_picker<F, B, C, Obs>(
    function: &F,
    x0: &[f64],
    bounds: &[B],
    config: &Config,
    picker: &mut C,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorFunction + ?Sized,
    B: AsRef<[f64]>,
    C: CornerPicker + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let bounds = Bounds::new(bounds, x0.len())?;

    let initial = evaluate(function, x0)?;
    let mut magnitude = squared_magnitude(&initial.residuals);

    let mut table = sample::seed(function, &bounds, picker)?;

    let mut best = Best::new(initial.clone(), magnitude);
    let mut last = initial;
    let mut current = x0.to_vec();
    let mut iters = 0;

    while iters < config.max_iters() && magnitude > config.tolerance() {
        let step = step(function, &current, &mut table, config.tolerance())?;
        iters += 1;
        magnitude = step.magnitude;

        let (partner, next) = match &step.next {
            Next::Converged => (None, None),
            Next::Midpoint { partner, x } => (Some(*partner), Some(x.as_slice())),
        };
        trace!(
            iter = iters,
            magnitude,
            signature = %step.signature,
            partner = ?partner.map(|p| p.bits()),
            "orthant step"
        );

        let event = Event {
            iter: iters,
            x: &step.eval.x,
            residuals: &step.eval.residuals,
            magnitude,
            signature: step.signature,
            partner,
            next,
        };
        let action = observer.observe(&event);

        best.update(&step.eval, magnitude);

        if let Some(Action::StopEarly) = action {
            debug!(iters, "orthant search stopped by observer");
            return Ok(best.finish(Status::StoppedByObserver, iters));
        }

        match step.next {
            Next::Converged => last = step.eval,
            Next::Midpoint { x, .. } => current = x,
        }
    }

    if magnitude > config.tolerance() {
        debug!(iters, magnitude, "orthant search exhausted its budget");
        return Err(Error::NotConverged { iters, magnitude });
    }

    debug!(iters, magnitude, orthants = table.len(), "orthant search converged");
    Ok(Solution::from_eval(last, magnitude, Status::Converged, iters))
}
