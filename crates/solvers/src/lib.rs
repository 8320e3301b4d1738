//! Numerical solvers built on [`orthant_core`].
//!
//! - [`equation`] — root finding for vector-valued functions

pub mod equation;
