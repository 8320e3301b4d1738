/// A vector-valued function `f: R^n → R^n` whose roots a solver searches for.
///
/// The function is treated as opaque: solvers only call it and inspect the
/// returned components. A call may fail (for example when `x` lies outside
/// the function's domain), and that failure is reported through
/// [`Self::Error`] rather than by panicking.
///
/// Closures of the form `Fn(&[f64]) -> Result<Vec<f64>, E>` implement this
/// trait automatically.
pub trait VectorFunction {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function is undefined at `x`.
    fn call(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error>;
}

impl<F, E> VectorFunction for F
where
    F: Fn(&[f64]) -> Result<Vec<f64>, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: &[f64]) -> Result<Vec<f64>, E> {
        self(x)
    }
}
