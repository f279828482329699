//! Finite-difference derivative stencils.
//!
//! Pure stateless helpers sharing the solver family's scalar-function
//! abstraction. They are not called by the solvers themselves; they exist
//! so callers can cross-check analytic derivatives handed to
//! [`newton`]/[`halley`] or judge a returned estimate independently.
//!
//! Every stencil returns [`f64::NAN`] when `|h|` is below [`MIN_STEP`],
//! where the quotient is numerically meaningless.
//!
//! [`newton`]: crate::root_finding::newton::newton
//! [`halley`]: crate::root_finding::halley::halley

/// Step sizes below this floor make the difference quotient meaningless;
/// the stencils return NaN rather than divide by a vanishing `h`.
pub const MIN_STEP: f64 = 1e-10;

/// Two-point forward difference: `(f(x + h) - f(x)) / h`. First order.
pub fn forward_diff<F>(mut f: F, x: f64, h: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    if h.abs() < MIN_STEP {
        return f64::NAN;
    }
    (f(x + h) - f(x)) / h
}

/// Two-point backward difference: `(f(x) - f(x - h)) / h`. First order.
pub fn backward_diff<F>(mut f: F, x: f64, h: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    if h.abs() < MIN_STEP {
        return f64::NAN;
    }
    (f(x) - f(x - h)) / h
}

/// Three-point forward difference:
/// `(-3 f(x) + 4 f(x + h) - f(x + 2h)) / (2h)`. Second order.
pub fn forward_diff3<F>(mut f: F, x: f64, h: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    if h.abs() < MIN_STEP {
        return f64::NAN;
    }
    (-3.0 * f(x) + 4.0 * f(x + h) - f(x + 2.0 * h)) / (2.0 * h)
}

/// Three-point backward difference:
/// `(3 f(x) - 4 f(x - h) + f(x - 2h)) / (2h)`. Second order.
pub fn backward_diff3<F>(mut f: F, x: f64, h: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    if h.abs() < MIN_STEP {
        return f64::NAN;
    }
    (3.0 * f(x) - 4.0 * f(x - h) + f(x - 2.0 * h)) / (2.0 * h)
}

/// Three-point central difference: `(f(x + h) - f(x - h)) / (2h)`.
/// Second order, and the usual first choice.
pub fn central_diff<F>(mut f: F, x: f64, h: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    if h.abs() < MIN_STEP {
        return f64::NAN;
    }
    (f(x + h) - f(x - h)) / (2.0 * h)
}
