use super::algorithms::{Algorithm, OpenFamily};
use super::errors::RootFindingError;
use super::report::{RootReport, Termination};
use crate::config::SolveCfg;

const ALGORITHM: &str = Algorithm::Open(OpenFamily::Secant).algorithm_name();

/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : first initial guess. Must be finite and not equal to `x1`
/// - `x1`   : second initial guess. Must be finite and not equal to `x0`
/// - `cfg`  : [`SolveCfg`] tolerance on the step size, plus iteration cap
///
/// # Returns
/// [`RootReport`] terminating with
/// - [`Termination::Converged`] when the secant step `|dx|` drops below
///   tolerance
/// - [`Termination::CoincidentValues`] when `f(x) == f(x_prev)`, making
///   the step denominator exactly zero; `root` is the current iterate
/// - [`Termination::IterationLimit`] when the cap is exhausted
///
/// # Errors
/// - [`RootFindingError::InvalidGuessPair`]    : `x0`/`x1` NaN/inf or equal
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
///
/// # Behavior
/// Update: `dx = f(x) * (x - x_prev) / (f(x) - f(x_prev))`, then
/// `x_prev <- x`, `x <- x - dx`. Convergence is superlinear (~1.618) near
/// simple roots but requires two distinct starting guesses; poor guesses
/// can diverge. For guaranteed convergence use a bracketed method.
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SolveCfg,
) -> Result<RootReport, RootFindingError>
where
    F: FnMut(f64) -> f64,
{
    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(RootFindingError::InvalidGuessPair { x0, x1 });
    }

    let tol = cfg.tolerance();
    let max_iter = cfg.max_iter();

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, RootFindingError> {
        let fx = {
            evals += 1;
            func(x)
        };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx })
        } else {
            Ok(fx)
        }
    };

    let mut x_prev = x0;
    let mut x = x1;
    let mut f_prev = eval(x_prev)?;
    let mut fx = eval(x)?;

    for iter in 1..=max_iter {
        // coincident function values make the step denominator zero
        if fx - f_prev == 0.0 {
            return Ok(RootReport {
                root: x,
                f_root: fx,
                iterations: iter - 1,
                evaluations: evals,
                termination: Termination::CoincidentValues,
                algorithm: ALGORITHM,
            });
        }

        let dx = fx * (x - x_prev) / (fx - f_prev);
        x_prev = x;
        f_prev = fx;
        x -= dx;

        if dx.abs() < tol {
            let f_root = eval(x)?;
            return Ok(RootReport {
                root: x,
                f_root,
                iterations: iter,
                evaluations: evals,
                termination: Termination::Converged,
                algorithm: ALGORITHM,
            });
        }

        fx = eval(x)?;
    }

    Ok(RootReport {
        root: x,
        f_root: fx,
        iterations: max_iter,
        evaluations: evals,
        termination: Termination::IterationLimit,
        algorithm: ALGORITHM,
    })
}
