//! Shared validation for the dense row-major system `A x = b`.

use super::errors::LinearSolveError;

/// Checks shapes and diagonal pivots before any sweep runs.
///
/// - `a` must hold `n * n` entries, row major, where `n = b.len()`
/// - `x` must hold `n` entries
/// - every diagonal entry must be nonzero
///
/// `A` never changes across sweeps, so a pivot that would divide by zero
/// mid-sweep is already zero here; rejecting it up front means a failed
/// solve leaves the caller's `x` exactly as it was passed in, for both
/// solvers.
pub(crate) fn validate_system(
    a: &[f64],
    b: &[f64],
    x: &[f64],
) -> Result<usize, LinearSolveError> {
    let n = b.len();
    if n == 0 {
        return Err(LinearSolveError::EmptySystem);
    }
    if a.len() != n * n {
        return Err(LinearSolveError::MatrixShape {
            a_len: a.len(),
            n,
            expected: n * n,
        });
    }
    if x.len() != n {
        return Err(LinearSolveError::VectorLength { x_len: x.len(), n });
    }

    for j in 0..n {
        if a[j * n + j] == 0.0 {
            return Err(LinearSolveError::SingularPivot { row: j });
        }
    }

    Ok(n)
}
