use thiserror::Error;

/// Configuration for the orthant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating an orthant solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 10_000,
            tolerance: 1e-16,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// `tolerance` bounds the squared magnitude of the function output, so a
    /// tolerance of `1e-16` asks for residuals of roughly `1e-8`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or non-finite.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on the squared magnitude of the output.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
