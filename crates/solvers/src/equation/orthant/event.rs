use super::Signature;

/// Event emitted by the orthant solver after each step.
///
/// A step evaluates the current point, records it in the solution table and,
/// unless the point is within tolerance, picks a partner entry and moves to
/// the midpoint between the two.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The point evaluated in this step.
    pub x: &'a [f64],

    /// Function output at `x`.
    pub residuals: &'a [f64],

    /// Squared magnitude of `residuals`.
    pub magnitude: f64,

    /// Orthant of `residuals`.
    pub signature: Signature,

    /// Signature of the table entry used as the other end of the midpoint,
    /// or `None` if `x` is within tolerance.
    pub partner: Option<Signature>,

    /// The next point the solver will evaluate, or `None` if `x` is within
    /// tolerance.
    pub next: Option<&'a [f64]>,
}

impl Event<'_> {
    /// Returns true if the evaluated point is within tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.next.is_none()
    }
}
