//! Reusable observers for orthant solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasMagnitude`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — Emits one `tracing` event per solver event.
//! - [`HistoryObserver`] — Records the magnitude at each iteration.
//!
//! [`Observer`]: orthant_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasMagnitude`]: traits::HasMagnitude
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod log;

pub use history::HistoryObserver;
pub use log::{LogLevel, LogObserver};
