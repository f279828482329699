//! Halley's method

use super::algorithms::{Algorithm, OpenFamily};
use super::errors::RootFindingError;
use super::report::{RootReport, Termination, DERIVATIVE_FLOOR};
use crate::config::SolveCfg;

const ALGORITHM: &str = Algorithm::Open(OpenFamily::Halley).algorithm_name();

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

/// Finds a root of `func` using
/// [Halley's method](https://en.wikipedia.org/wiki/Halley%27s_method),
/// the cubic-order refinement of Newton-Raphson that also uses the
/// second derivative.
///
/// # Arguments
/// - `func`   : function whose root is sought
/// - `dfunc`  : its first derivative
/// - `ddfunc` : its second derivative
/// - `x0`     : finite initial guess
/// - `cfg`    : [`SolveCfg`] tolerance on the step, plus iteration cap
///
/// # Returns
/// [`RootReport`] terminating with
/// - [`Termination::Converged`] when the step
///   `|2 f f' / (2 f'^2 - f f'')| < tolerance`
/// - [`Termination::DegenerateDerivative`] when `|f'(x)|` drops below
///   [`DERIVATIVE_FLOOR`], exactly as in [`newton`]
/// - [`Termination::IterationLimit`] when the cap is exhausted
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`]        : `x0` NaN/inf
/// - [`RootFindingError::NonFiniteEvaluation`] : any of the three
///   callables produced NaN/inf, or a zero step denominator
///   `2 f'^2 == f f''` pushed the iterate to infinity
///
/// [`newton`]: super::newton::newton
pub fn halley<F, G, H>(
    mut func: F,
    mut dfunc: G,
    mut ddfunc: H,
    x0: f64,
    cfg: SolveCfg,
) -> Result<RootReport, RootFindingError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    H: FnMut(f64) -> f64,
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
        let ddfx = eval_checked(&mut ddfunc, x, &mut evals)?;

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

        let dx = 2.0 * fx * dfx / (2.0 * dfx * dfx - fx * ddfx);
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
