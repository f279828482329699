use super::algorithms::{Algorithm, OpenFamily};
use super::errors::RootFindingError;
use super::report::{RootReport, Termination};
use crate::config::SolveCfg;

const ALGORITHM: &str = Algorithm::Open(OpenFamily::FixedPoint).algorithm_name();

/// Finds a fixed point `x = g(x)` by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration).
///
/// To find a root of `f`, the caller rewrites `f(x) = 0` as `x = g(x)`;
/// whether the iteration contracts (|g'| < 1 near the fixed point) is
/// entirely a property of the chosen `g`. No convergence guarantee is
/// enforced: a diverging iteration simply exhausts the cap, unless an
/// iterate overflows to a non-finite value first.
///
/// # Arguments
/// - `g`   : iteration function
/// - `x0`  : finite initial guess
/// - `cfg` : [`SolveCfg`] tolerance on the displacement `|g(x) - x|`,
///   plus iteration cap
///
/// # Returns
/// [`RootReport`] where `f_root` holds the final displacement
/// `g(x) - x` (the natural residual of a fixed-point run), terminating
/// with [`Termination::Converged`] or [`Termination::IterationLimit`].
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`]        : `x0` NaN/inf
/// - [`RootFindingError::NonFiniteEvaluation`] : `g(x)` produced NaN/inf
pub fn fixed_point<F>(mut g: F, x0: f64, cfg: SolveCfg) -> Result<RootReport, RootFindingError>
where
    F: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(RootFindingError::InvalidGuess { got: x0 });
    }

    let tol = cfg.tolerance();
    let max_iter = cfg.max_iter();

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, RootFindingError> {
        let gx = {
            evals += 1;
            g(x)
        };
        if !gx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx: gx })
        } else {
            Ok(gx)
        }
    };

    let mut x = x0;
    let mut dx = f64::INFINITY; // gets overwritten
    for iter in 1..=max_iter {
        let gx = eval(x)?;
        dx = gx - x;
        x = gx;

        if dx.abs() < tol {
            return Ok(RootReport {
                root: x,
                f_root: dx,
                iterations: iter,
                evaluations: evals,
                termination: Termination::Converged,
                algorithm: ALGORITHM,
            });
        }
    }

    Ok(RootReport {
        root: x,
        f_root: dx,
        iterations: max_iter,
        evaluations: evals,
        termination: Termination::IterationLimit,
        algorithm: ALGORITHM,
    })
}
