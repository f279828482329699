//! Fixed-step integrators for the scalar initial value problem
//! `y' = f(x, y)`, `y(x0) = y0`.
//!
//! Every method advances exactly `n` steps of fixed size `h` and records
//! the full trajectory; there is no error estimate, no step-size
//! adaptation, and no convergence loop. Each method comes in two
//! equivalent forms:
//!
//! - `*_into` fills two caller-owned buffers of length at least `n + 1`
//!   (index `i` holds `x0 + i*h` and the matching `y`), failing with
//!   [`OdeError::BufferTooShort`] instead of touching either buffer
//! - the plain form allocates and returns a [`Trajectory`]
//!
//! Accuracy order: [`euler`] is first order; [`modified_euler`] / [`rk2`]
//! are second; [`rk3`] third; [`rk4`] fourth.
//!
//! [`euler`]: euler::euler
//! [`modified_euler`]: runge_kutta::modified_euler
//! [`rk2`]: runge_kutta::rk2
//! [`rk3`]: runge_kutta::rk3
//! [`rk4`]: runge_kutta::rk4

pub mod errors;
pub mod euler;
pub mod runge_kutta;

pub use errors::OdeError;

/// Sampled solution of an integration run: `x[i]` and `y[i]` for
/// `i in 0..=n`, with `x[0] = x0` and `y[0] = y0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Trajectory {
    pub(crate) fn with_steps(n: usize) -> Self {
        Self {
            x: vec![0.0; n + 1],
            y: vec![0.0; n + 1],
        }
    }

    /// Final `(x, y)` sample.
    #[must_use]
    pub fn end(&self) -> (f64, f64) {
        // both vectors always hold at least the initial sample
        (self.x[self.x.len() - 1], self.y[self.y.len() - 1])
    }
}
