use super::algorithms::{Algorithm, BracketFamily};
use super::errors::RootFindingError;
use super::report::{RootReport, Termination};
use super::signs::same_sign;
use crate::config::SolveCfg;

const ALGORITHM: &str = Algorithm::Bracket(BracketFamily::RegulaFalsi).algorithm_name();

/// Root of the secant line through `(a, fa)` and `(b, fb)`.
#[inline]
fn secant_intercept(a: f64, fa: f64, b: f64, fb: f64) -> f64 {
    (a * fb - b * fa) / (fb - fa)
}

/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi)
/// (false position).
///
/// Same bracket structure as [`bisection`], but each iterate is the root
/// of the secant line through the endpoints instead of the midpoint. The
/// sign-change precondition is the caller's to establish and is not
/// verified.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : lower bound. Must be finite and less than `b`
/// - `b`    : upper bound. Must be finite and greater than `a`
/// - `cfg`  : [`SolveCfg`] tolerance on the interval half-width, plus
///   iteration cap
///
/// # Returns
/// [`RootReport`] terminating with
/// - [`Termination::Converged`] when `f(p) == 0` exactly or the bracket's
///   pre-narrowing half-width drops below tolerance
/// - [`Termination::CoincidentValues`] when `f(a) == f(b)`, which would
///   make the secant line horizontal; `root` is the endpoint with the
///   smaller `|f|`
/// - [`Termination::IterationLimit`] when the cap is exhausted
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a` or `b` NaN/inf, or `a >= b`
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
///
/// # Notes
/// One bracket endpoint typically stagnates on convex or concave
/// functions, so the width-based halt may never trigger even as the
/// moving endpoint converges. Expect [`Termination::IterationLimit`] with
/// an accurate `root` in that regime; judge quality by `f_root`.
///
/// [`bisection`]: super::bisection::bisection
pub fn regula_falsi<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: SolveCfg,
) -> Result<RootReport, RootFindingError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(RootFindingError::InvalidBounds { a, b });
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

    let mut fa = eval(a)?;
    let mut fb = eval(b)?;

    let mut p = a; // gets overwritten
    let mut fp = fa; // gets overwritten
    for iter in 1..=max_iter {
        // horizontal secant line; pick the better endpoint and stop
        if fb - fa == 0.0 {
            let (root, f_root) = if fa.abs() <= fb.abs() { (a, fa) } else { (b, fb) };
            return Ok(RootReport {
                root,
                f_root,
                iterations: iter - 1,
                evaluations: evals,
                termination: Termination::CoincidentValues,
                algorithm: ALGORITHM,
            });
        }

        p = secant_intercept(a, fa, b, fb);
        fp = eval(p)?;

        // same lagged half-width rule as bisection
        if fp == 0.0 || (b - a) * 0.5 < tol {
            return Ok(RootReport {
                root: p,
                f_root: fp,
                iterations: iter,
                evaluations: evals,
                termination: Termination::Converged,
                algorithm: ALGORITHM,
            });
        }

        if same_sign(fa, fp) {
            a = p;
            fa = fp;
        } else {
            b = p;
            fb = fp;
        }
    }

    Ok(RootReport {
        root: p,
        f_root: fp,
        iterations: max_iter,
        evaluations: evals,
        termination: Termination::IterationLimit,
        algorithm: ALGORITHM,
    })
}
