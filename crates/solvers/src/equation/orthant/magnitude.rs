/// Returns the sum of the squares of the components of `v`.
///
/// This is both the convergence measure and the ranking key for the
/// [`Table`](super::Table).
#[must_use]
pub fn squared_magnitude(v: &[f64]) -> f64 {
    v.iter().map(|component| component * component).sum()
}
