//! Root-finding error types.
//!
//! [`RootFindingError`] covers *misuse* of a solver: invalid iteration
//! controls, non-finite starting points, or a function that produced a
//! non-finite value mid-run. Numeric outcomes of a well-posed run
//! (convergence, iteration limit, degenerate aborts) are not errors;
//! they are tagged on [`super::report::RootReport::termination`].

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid initial guess: must be finite. got {got}")]
    InvalidGuess { got: f64 },

    #[error("invalid initial guesses: x0 and x1 must be finite and distinct. got ({x0}, {x1})")]
    InvalidGuessPair { x0: f64, x1: f64 },
}
