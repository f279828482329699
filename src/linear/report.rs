//! Defines the [`SweepReport`] struct returned by both relaxation solvers.

/// Reasons a relaxation solver may stop sweeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepTermination {
    ToleranceReached,
    IterationLimit,
}

/// Final report returned by [`jacobi`] and [`gauss_seidel`].
///
/// # Fields
/// - `sweeps`      : full sweeps committed to `x`
/// - `error`       : final convergence measure. Jacobi reports the sweep
///   delta `Σ|x_new[j] - x[j]|`; Gauss-Seidel reports the row residual
///   `Σ|(A x)[j] - b[j]|`
/// - `termination` : why the solver stopped
///
/// [`jacobi`]: super::jacobi::jacobi
/// [`gauss_seidel`]: super::gauss_seidel::gauss_seidel
#[derive(Debug, Clone, Copy)]
pub struct SweepReport {
    pub sweeps: usize,
    pub error: f64,
    pub termination: SweepTermination,
}

impl SweepReport {
    #[must_use]
    pub fn converged(&self) -> bool {
        self.termination == SweepTermination::ToleranceReached
    }
}
