//! Sign utilities for the bracketing algorithms.

/// Returns `true` when `u * v > 0`, i.e. both values are strictly
/// positive or strictly negative.
///
/// The product form is the bracket-update test: a zero function value at
/// an endpoint counts as a sign change, so the bracket keeps the root.
/// Underflow of the product to `0.0` resolves to "not same sign", which
/// only widens the kept bracket.
#[inline]
pub(crate) fn same_sign(u: f64, v: f64) -> bool {
    u * v > 0.0
}
