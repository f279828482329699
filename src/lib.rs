//! # creek
//!
//! Classical iterative numerical solvers with explicit convergence
//! reporting.
//!
//! ## Modules
//!
//! - [`root_finding`] — scalar root finders: bisection, regula falsi,
//!   secant, fixed-point iteration, Newton-Raphson, Halley. Every solver
//!   returns a [`root_finding::report::RootReport`] tagging *why* it
//!   stopped (converged, iteration limit, degenerate derivative,
//!   coincident function values) instead of a bare number.
//!
//! - [`linear`] — relaxation solvers for dense square systems `A x = b`:
//!   Jacobi (synchronous sweeps through a scratch vector) and Gauss-Seidel
//!   (in-place sweeps). A zero diagonal pivot is a hard
//!   [`linear::errors::LinearSolveError::SingularPivot`] error with the
//!   caller's `x` left untouched.
//!
//! - [`ode`] — fixed-step integrators for `y' = f(x, y)`: Euler, modified
//!   Euler / RK2 (Heun), RK3, RK4. Each offers a buffer-filling `_into`
//!   form and an owned [`ode::Trajectory`] form.
//!
//! - [`differentiation`] — finite-difference derivative stencils used to
//!   sanity-check solver inputs and results. NaN sentinel below a fixed
//!   step floor.
//!
//! - [`config`] — the shared [`SolveCfg`] carrying `tolerance` and
//!   `max_iter` for all iterative solvers.
//!
//! ## Quick start
//!
//! ```
//! use creek::config::SolveCfg;
//! use creek::root_finding::newton::newton;
//!
//! let cfg = SolveCfg::new(1e-10, 50).unwrap();
//! let res = newton(|x| x * x - 2.0, |x| 2.0 * x, 1.0, cfg).unwrap();
//! assert!(res.converged());
//! assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-10);
//! ```

pub mod config;
pub mod differentiation;
pub mod linear;
pub mod ode;
pub mod root_finding;

pub use config::SolveCfg;
