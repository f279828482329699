//! Linear-solver error types.
//!
//! A singular pivot is a hard failure, not a silent return: every abort
//! is an explicit [`LinearSolveError`] and `x` is only mutated by
//! committed sweeps, so a returned `x` is never half-updated.

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinearSolveError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("dimension mismatch: matrix has {a_len} entries, expected {n}x{n}={expected} for b of length {n}")]
    MatrixShape { a_len: usize, n: usize, expected: usize },

    #[error("dimension mismatch: x has length {x_len}, expected {n}")]
    VectorLength { x_len: usize, n: usize },

    #[error("empty system: b must have at least one entry")]
    EmptySystem,

    #[error("singular system: zero pivot A[{row}][{row}]")]
    SingularPivot { row: usize },
}
