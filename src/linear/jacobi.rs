use super::errors::LinearSolveError;
use super::report::{SweepReport, SweepTermination};
use super::system::validate_system;
use crate::config::SolveCfg;

/// Solves `A x = b` by the
/// [Jacobi method](https://en.wikipedia.org/wiki/Jacobi_method):
/// synchronous relaxation sweeps computed entirely from the previous
/// iterate.
///
/// # Arguments
/// - `a`   : dense square matrix, row major, `n * n` entries
/// - `b`   : right-hand side, length `n`
/// - `x`   : initial guess on entry, solution estimate on exit, length `n`
/// - `cfg` : [`SolveCfg`] tolerance on the sweep delta, plus sweep cap
///
/// # Returns
/// [`SweepReport`] whose `error` is the last committed sweep's delta
/// `Σ|x_new[j] - x[j]|`, terminating with
/// [`SweepTermination::ToleranceReached`] or
/// [`SweepTermination::IterationLimit`] (caller judges the estimate via
/// `error` or an independent residual).
///
/// # Errors
/// - [`LinearSolveError::EmptySystem`] / [`LinearSolveError::MatrixShape`]
///   / [`LinearSolveError::VectorLength`] : shape mismatches
/// - [`LinearSolveError::SingularPivot`]  : a zero diagonal entry. Checked
///   before the first sweep, so `x` is left untouched
///
/// # Behavior
/// Each sweep buffers `x_new[j] = (b[j] - Σ_{k≠j} A[j][k] x[k]) / A[j][j]`
/// into scratch storage and commits only whole sweeps to `x`. Converges
/// for strictly diagonally dominant systems; [`gauss_seidel`] usually
/// needs fewer sweeps when both apply.
///
/// [`gauss_seidel`]: super::gauss_seidel::gauss_seidel
pub fn jacobi(
    a: &[f64],
    b: &[f64],
    x: &mut [f64],
    cfg: SolveCfg,
) -> Result<SweepReport, LinearSolveError> {
    let n = validate_system(a, b, x)?;

    let tol = cfg.tolerance();
    let max_iter = cfg.max_iter();

    // scratch for the synchronous next iterate
    let mut x_new = vec![0.0; n];

    let mut delta = f64::INFINITY; // gets overwritten
    for sweep in 1..=max_iter {
        for j in 0..n {
            let mut s = b[j];
            for k in 0..n {
                if k != j {
                    s -= a[j * n + k] * x[k];
                }
            }
            x_new[j] = s / a[j * n + j];
        }

        // commit the full sweep, accumulating the step size
        delta = 0.0;
        for j in 0..n {
            delta += (x_new[j] - x[j]).abs();
            x[j] = x_new[j];
        }

        if delta < tol {
            return Ok(SweepReport {
                sweeps: sweep,
                error: delta,
                termination: SweepTermination::ToleranceReached,
            });
        }
    }

    Ok(SweepReport {
        sweeps: max_iter,
        error: delta,
        termination: SweepTermination::IterationLimit,
    })
}
