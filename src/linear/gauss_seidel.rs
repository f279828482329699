use super::errors::LinearSolveError;
use super::report::{SweepReport, SweepTermination};
use super::system::validate_system;
use crate::config::SolveCfg;

/// Solves `A x = b` by the
/// [Gauss-Seidel method](https://en.wikipedia.org/wiki/Gauss%E2%80%93Seidel_method):
/// sequential relaxation sweeps updating `x` in place, so each row
/// immediately sees the rows already updated in the same sweep.
///
/// That sequential update is the defining difference from [`jacobi`] and
/// is why it usually converges in fewer sweeps when both apply.
///
/// # Arguments
/// - `a`   : dense square matrix, row major, `n * n` entries
/// - `b`   : right-hand side, length `n`
/// - `x`   : initial guess on entry, solution estimate on exit, length `n`
/// - `cfg` : [`SolveCfg`] tolerance on the row residual, plus sweep cap
///
/// # Returns
/// [`SweepReport`] whose `error` is the residual
/// `Σ|(A x)[j] - b[j]|` after the last sweep, terminating with
/// [`SweepTermination::ToleranceReached`] or
/// [`SweepTermination::IterationLimit`].
///
/// # Errors
/// - [`LinearSolveError::EmptySystem`] / [`LinearSolveError::MatrixShape`]
///   / [`LinearSolveError::VectorLength`] : shape mismatches
/// - [`LinearSolveError::SingularPivot`]  : a zero diagonal entry. Checked
///   before the first sweep, so `x` is left untouched
///
/// [`jacobi`]: super::jacobi::jacobi
pub fn gauss_seidel(
    a: &[f64],
    b: &[f64],
    x: &mut [f64],
    cfg: SolveCfg,
) -> Result<SweepReport, LinearSolveError> {
    let n = validate_system(a, b, x)?;

    let tol = cfg.tolerance();
    let max_iter = cfg.max_iter();

    let mut residual = f64::INFINITY; // gets overwritten
    for sweep in 1..=max_iter {
        for j in 0..n {
            let mut s = b[j];
            for k in 0..n {
                if k != j {
                    s -= a[j * n + k] * x[k];
                }
            }
            x[j] = s / a[j * n + j];
        }

        residual = 0.0;
        for j in 0..n {
            let mut r = -b[j];
            for k in 0..n {
                r += a[j * n + k] * x[k];
            }
            residual += r.abs();
        }

        if residual < tol {
            return Ok(SweepReport {
                sweeps: sweep,
                error: residual,
                termination: SweepTermination::ToleranceReached,
            });
        }
    }

    Ok(SweepReport {
        sweeps: max_iter,
        error: residual,
        termination: SweepTermination::IterationLimit,
    })
}
