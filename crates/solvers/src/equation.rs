//! Solvers for equation problems — finding roots of systems of equations.
//!
//! A [`VectorFunction`] maps `x: &[f64]` to residuals of the same length.
//! Solvers in this module drive those residuals toward zero.
//!
//! # Solvers
//!
//! - [`orthant`] — derivative-free sign-pattern search inside a bounding box
//!
//! [`VectorFunction`]: orthant_core::VectorFunction

mod evaluate;

pub use evaluate::{EvalError, Evaluation, evaluate};

pub mod orthant;
