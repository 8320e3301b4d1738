/// Control actions supported by the orthant solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best evaluation found so far.
    StopEarly,
}
