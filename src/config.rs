//! Shared iteration-control configuration.
//!
//! Provides [`SolveCfg`] with the two knobs every iterative solver takes:
//! a convergence `tolerance` and an iteration cap `max_iter`. Both are
//! validated eagerly so no solver can be handed parameters that would
//! spin forever.

use thiserror::Error;

/// Invalid iteration-control parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got {got}")]
    InvalidMaxIter { got: usize },
}

/// Convergence controls shared by the root finders and the linear
/// relaxation solvers.
///
/// # Fields
/// - `tolerance` : method-specific stopping threshold (step size,
///   interval half-width, sweep delta, or residual). Finite and > 0.
/// - `max_iter`  : hard iteration/sweep cap, >= 1. Exhausting it is not
///   an error; the solver reports `IterationLimit` with its last estimate.
///
/// # Construction
/// - [`SolveCfg::default`] uses [`SolveCfg::DEFAULT_TOLERANCE`] and
///   [`SolveCfg::DEFAULT_MAX_ITER`].
/// - [`SolveCfg::new`] and the `with_*` setters validate immediately and
///   return [`ConfigError`] on bad values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolveCfg {
    tolerance: f64,
    max_iter: usize,
}

impl SolveCfg {
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;
    pub const DEFAULT_MAX_ITER: usize = 100;

    pub fn new(tolerance: f64, max_iter: usize) -> Result<Self, ConfigError> {
        Self::default()
            .with_tolerance(tolerance)?
            .with_max_iter(max_iter)
    }

    pub fn with_tolerance(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidTolerance { got: v });
        }
        self.tolerance = v;
        Ok(self)
    }

    pub fn with_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[inline]
    #[must_use]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iter: Self::DEFAULT_MAX_ITER,
        }
    }
}
