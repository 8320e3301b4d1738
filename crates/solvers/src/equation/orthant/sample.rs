use orthant_core::VectorFunction;
use rand::Rng;
use tracing::debug;

use crate::equation::evaluate;

use super::{Bounds, Error, Signature, Table, squared_magnitude};

/// Chooses which bound each free coordinate of a sampled corner takes.
///
/// The solver asks for one choice per free coordinate per corner. Returning
/// `true` selects the upper bound and `false` the lower bound.
pub trait CornerPicker {
    /// Returns `true` to use the upper bound for the next coordinate.
    fn pick_upper(&mut self) -> bool;
}

/// Picks corners with a fair coin drawn from a [`rand`] generator.
#[derive(Debug, Clone)]
pub struct RandomCorners<R> {
    rng: R,
}

impl<R: Rng> RandomCorners<R> {
    /// Wraps a random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CornerPicker for RandomCorners<R> {
    fn pick_upper(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Seeds a table by evaluating `2n` corners of the bounding box.
///
/// For each dimension `i`, one corner has coordinate `i` pinned to its lower
/// bound and another has it pinned to its upper bound. Every other coordinate
/// `j` of each corner takes its lower or upper bound as chosen by `picker`,
/// asking for the lower corner's choice before the upper corner's.
///
/// # Errors
///
/// Returns an error as soon as any corner evaluation fails.
pub(super) fn seed<F, C>(function: &F, bounds: &Bounds, picker: &mut C) -> Result<Table, Error>
where
    F: VectorFunction + ?Sized,
    C: CornerPicker + ?Sized,
{
    let n = bounds.len();
    let mut table = Table::new();

    for i in 0..n {
        let mut lower = bounds.lower_corner();
        let mut upper = bounds.upper_corner();

        for j in (0..n).filter(|&j| j != i) {
            lower[j] = pick(bounds, j, picker);
            upper[j] = pick(bounds, j, picker);
        }

        for corner in [lower, upper] {
            let eval = evaluate(function, &corner)?;
            let magnitude = squared_magnitude(&eval.residuals);
            table.insert(eval.x, Signature::of(&eval.residuals), magnitude);
        }
    }

    debug!(corners = 2 * n, orthants = table.len(), "seeded solution table");
    Ok(table)
}

fn pick<C: CornerPicker + ?Sized>(bounds: &Bounds, j: usize, picker: &mut C) -> f64 {
    if picker.pick_upper() {
        bounds.upper(j)
    } else {
        bounds.lower(j)
    }
}
