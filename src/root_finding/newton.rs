//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily};
use super::errors::RootFindingError;
use super::report::{RootReport, Termination, DERIVATIVE_FLOOR};
use crate::config::SolveCfg;

const ALGORITHM: &str = Algorithm::Open(OpenFamily::Newton).algorithm_name();

#[inline]
fn eval_checked<F>(f: &mut F, x: f64, evals: &mut usize) -> Result<f64, RootFindingError>
where
    F: FnMut(f64) -> f64,
{
    let fx = {
        *evals += 1;
        f(x)
    };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}

/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method)
/// with a caller-supplied analytic derivative.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its first derivative
/// - `x0`    : finite initial guess
/// - `cfg`   : [`SolveCfg`] tolerance on the Newton step, plus iteration cap
///
/// # Returns
/// [`RootReport`] terminating with
/// - [`Termination::Converged`] when `|f(x)/f'(x)| < tolerance`
/// - [`Termination::DegenerateDerivative`] when `|f'(x)|` drops below
///   [`DERIVATIVE_FLOOR`]; `root` is the iterate at the abort and is not
///   a verified root. Re-evaluate `f` there before trusting it
/// - [`Termination::IterationLimit`] when the cap is exhausted
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`]        : `x0` NaN/inf
/// - [`RootFindingError::NonFiniteEvaluation`] : `func` or `dfunc`
///   produced NaN/inf
///
/// # Notes
/// Quadratic convergence requires a good initial guess and smooth `f`.
/// Convergence is local only; poor guesses can diverge or cycle. For
/// guaranteed convergence prefer a bracketed method.
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: SolveCfg,
) -> Result<RootReport, RootFindingError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(RootFindingError::InvalidGuess { got: x0 });
    }

    let tol = cfg.tolerance();
    let max_iter = cfg.max_iter();
    let mut evals: usize = 0;

    let mut x = x0;
    for iter in 1..=max_iter {
        let fx = eval_checked(&mut func, x, &mut evals)?;
        let dfx = eval_checked(&mut dfunc, x, &mut evals)?;

        // flat derivative: the step is no longer trustworthy
        if dfx.abs() < DERIVATIVE_FLOOR {
            return Ok(RootReport {
                root: x,
                f_root: fx,
                iterations: iter - 1,
                evaluations: evals,
                termination: Termination::DegenerateDerivative,
                algorithm: ALGORITHM,
            });
        }

        let dx = fx / dfx;
        x -= dx;

        if dx.abs() < tol {
            let f_root = eval_checked(&mut func, x, &mut evals)?;
            return Ok(RootReport {
                root: x,
                f_root,
                iterations: iter,
                evaluations: evals,
                termination: Termination::Converged,
                algorithm: ALGORITHM,
            });
        }
    }

    let f_root = eval_checked(&mut func, x, &mut evals)?;
    Ok(RootReport {
        root: x,
        f_root,
        iterations: max_iter,
        evaluations: evals,
        termination: Termination::IterationLimit,
        algorithm: ALGORITHM,
    })
}
