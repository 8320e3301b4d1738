//! Core traits for the orthant root-finding workspace.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`VectorFunction`] — a callable that maps a point in `R^n` to a point in
//!   `R^n`, or fails
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::VectorFunction;
pub use observer::Observer;
