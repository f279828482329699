use super::algorithms::{Algorithm, BracketFamily};
use super::errors::RootFindingError;
use super::report::{RootReport, Termination};
use super::signs::same_sign;
use crate::config::SolveCfg;

const ALGORITHM: &str = Algorithm::Bracket(BracketFamily::Bisection).algorithm_name();

/// Midpoint of `[a, b]`, computed to avoid overflow for large bounds.
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `func` is continuous on `[a, b]` with `func(a)` and `func(b)`
/// of opposite sign. The sign-change precondition is the caller's to
/// establish; it is deliberately not verified here, so a same-sign
/// bracket simply collapses onto one endpoint and exits on the iteration
/// limit.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : lower bound. Must be finite and less than `b`
/// - `b`    : upper bound. Must be finite and greater than `a`
/// - `cfg`  : [`SolveCfg`] tolerance on the interval half-width, plus
///   iteration cap
///
/// # Returns
/// [`RootReport`] with `root` the last midpoint, terminating with
/// - [`Termination::Converged`] when `f(p) == 0` exactly or the
///   half-width of the interval `p` bisects drops below tolerance
/// - [`Termination::IterationLimit`] when the cap is exhausted
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a` or `b` NaN/inf, or `a >= b`
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
///
/// # Behavior
/// The halt condition is checked against the *pre-narrowing* interval:
/// the reported midpoint is the one whose own bracket half-width just met
/// tolerance, so the estimate is guaranteed within `tolerance` of a root
/// of a valid bracket. The sign test `f(a) * f(p) > 0` moves `a` to `p`,
/// otherwise `b` moves.
pub fn bisection<F>(
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

    // number of function evaluations
    let mut evals = 0;

    // closure function, checks finiteness
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

    // algorithm
    let mut p = a; // gets overwritten
    let mut fp = fa; // gets overwritten
    for iter in 1..=max_iter {
        p = midpoint(a, b);
        fp = eval(p)?;

        // exact zero, or half-width of the interval p bisects below
        // tolerance; measured before the bracket narrows
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

        // shrink interval
        if same_sign(fa, fp) {
            a = p;
            fa = fp;
        } else {
            b = p;
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
