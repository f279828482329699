//! Defines the [`RootReport`] struct returned by all root-finding
//! algorithms, and the [`Termination`] tag distinguishing every way a
//! run can stop.

/// Reasons a root-finding algorithm may terminate.
///
/// - [`Termination::Converged`]
///     - All methods
///     - method-specific measure (step size, interval half-width, or an
///       exact zero of `f`) fell below tolerance
/// - [`Termination::IterationLimit`]
///     - All methods
///     - budget exhausted; `root` is the last estimate and its quality is
///       the caller's to judge
/// - [`Termination::DegenerateDerivative`]
///     - Newton, Halley
///     - `|f'(x)|` fell below [`DERIVATIVE_FLOOR`]; `root` is the estimate
///       at the point of the abort, *not* a verified root
/// - [`Termination::CoincidentValues`]
///     - Secant, regula falsi
///     - the two function values forming the secant denominator were
///       identical; continuing would divide by zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Converged,
    IterationLimit,
    DegenerateDerivative,
    CoincidentValues,
}

/// Absolute floor below which a derivative magnitude is treated as flat
/// and Newton/Halley steps are no longer trustworthy.
pub const DERIVATIVE_FLOOR: f64 = 1e-14;

/// Final report returned by all root-finding algorithms.
///
/// # Fields
/// - `root`        : best root estimate
/// - `f_root`      : function value at `root` (for [`fixed_point`] the
///   displacement `g(x) - x`)
/// - `iterations`  : completed update steps
/// - `evaluations` : total function/derivative evaluations
/// - `termination` : why the solver stopped ([`Termination`])
/// - `algorithm`   : algorithm name (e.g. `"bisection"`)
///
/// [`fixed_point`]: super::fixed_point::fixed_point
#[derive(Debug, Clone, Copy)]
pub struct RootReport {
    pub root: f64,
    pub f_root: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub termination: Termination,
    pub algorithm: &'static str,
}

impl RootReport {
    /// `true` only for [`Termination::Converged`]. Degenerate aborts and
    /// iteration-limit exits still carry a usable estimate but are the
    /// caller's to re-check.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}
