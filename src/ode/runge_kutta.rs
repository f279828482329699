//! Runge-Kutta family: Heun (modified Euler / RK2), RK3, and the
//! classical RK4.
//!
//! The k-stage values carry the step factor `h`, matching the textbook
//! presentation of these schemes.

use super::errors::{check_buffers, OdeError};
use super::Trajectory;

/// Heun predictor-corrector sweep: one full-step predictor, one
/// trapezoidal corrector stage. This is both "modified Euler" and the
/// two-stage RK2 scheme; the two public names share this core.
fn fill_heun<F>(mut f: F, x0: f64, y0: f64, h: f64, n: usize, xs: &mut [f64], ys: &mut [f64])
where
    F: FnMut(f64, f64) -> f64,
{
    xs[0] = x0;
    ys[0] = y0;
    for i in 1..=n {
        xs[i] = xs[i - 1] + h;
        let k1 = h * f(xs[i - 1], ys[i - 1]);
        let k2 = h * f(xs[i], ys[i - 1] + k1);
        ys[i] = ys[i - 1] + 0.5 * (k1 + k2);
    }
}

fn fill_rk3<F>(mut f: F, x0: f64, y0: f64, h: f64, n: usize, xs: &mut [f64], ys: &mut [f64])
where
    F: FnMut(f64, f64) -> f64,
{
    xs[0] = x0;
    ys[0] = y0;
    for i in 1..=n {
        xs[i] = xs[i - 1] + h;
        let k1 = h * f(xs[i - 1], ys[i - 1]);
        let k2 = h * f(xs[i - 1] + h * 0.5, ys[i - 1] + k1 * 0.5);
        let k3 = h * f(xs[i], ys[i - 1] - k1 + 2.0 * k2);
        ys[i] = ys[i - 1] + (k1 + 4.0 * k2 + k3) / 6.0;
    }
}

fn fill_rk4<F>(mut f: F, x0: f64, y0: f64, h: f64, n: usize, xs: &mut [f64], ys: &mut [f64])
where
    F: FnMut(f64, f64) -> f64,
{
    xs[0] = x0;
    ys[0] = y0;
    for i in 1..=n {
        xs[i] = xs[i - 1] + h;
        let k1 = h * f(xs[i - 1], ys[i - 1]);
        let k2 = h * f(xs[i - 1] + h * 0.5, ys[i - 1] + k1 * 0.5);
        let k3 = h * f(xs[i - 1] + h * 0.5, ys[i - 1] + k2 * 0.5);
        let k4 = h * f(xs[i], ys[i - 1] + k3);
        ys[i] = ys[i - 1] + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0;
    }
}

/// Integrates with the
/// [modified Euler method](https://en.wikipedia.org/wiki/Heun%27s_method)
/// (Heun's predictor-corrector), writing into caller-owned buffers.
///
/// Identical to [`rk2_into`]; both names are kept for callers who know
/// the scheme under one tradition or the other.
///
/// # Errors
/// - [`OdeError::BufferTooShort`] : either buffer holds fewer than
///   `n + 1` entries; nothing is written
pub fn modified_euler_into<F>(
    f: F,
    x0: f64,
    y0: f64,
    h: f64,
    n: usize,
    xs: &mut [f64],
    ys: &mut [f64],
) -> Result<(), OdeError>
where
    F: FnMut(f64, f64) -> f64,
{
    check_buffers(n, xs, ys)?;
    fill_heun(f, x0, y0, h, n, xs, ys);
    Ok(())
}

/// Owned-return form of [`modified_euler_into`].
pub fn modified_euler<F>(f: F, x0: f64, y0: f64, h: f64, n: usize) -> Trajectory
where
    F: FnMut(f64, f64) -> f64,
{
    let mut t = Trajectory::with_steps(n);
    fill_heun(f, x0, y0, h, n, &mut t.x, &mut t.y);
    t
}

/// Second-order Runge-Kutta. Same scheme as [`modified_euler_into`].
///
/// # Errors
/// - [`OdeError::BufferTooShort`] : either buffer holds fewer than
///   `n + 1` entries; nothing is written
pub fn rk2_into<F>(
    f: F,
    x0: f64,
    y0: f64,
    h: f64,
    n: usize,
    xs: &mut [f64],
    ys: &mut [f64],
) -> Result<(), OdeError>
where
    F: FnMut(f64, f64) -> f64,
{
    modified_euler_into(f, x0, y0, h, n, xs, ys)
}

/// Owned-return form of [`rk2_into`].
pub fn rk2<F>(f: F, x0: f64, y0: f64, h: f64, n: usize) -> Trajectory
where
    F: FnMut(f64, f64) -> f64,
{
    modified_euler(f, x0, y0, h, n)
}

/// Third-order Runge-Kutta (Kutta's three-stage scheme), writing into
/// caller-owned buffers.
///
/// # Errors
/// - [`OdeError::BufferTooShort`] : either buffer holds fewer than
///   `n + 1` entries; nothing is written
pub fn rk3_into<F>(
    f: F,
    x0: f64,
    y0: f64,
    h: f64,
    n: usize,
    xs: &mut [f64],
    ys: &mut [f64],
) -> Result<(), OdeError>
where
    F: FnMut(f64, f64) -> f64,
{
    check_buffers(n, xs, ys)?;
    fill_rk3(f, x0, y0, h, n, xs, ys);
    Ok(())
}

/// Owned-return form of [`rk3_into`].
pub fn rk3<F>(f: F, x0: f64, y0: f64, h: f64, n: usize) -> Trajectory
where
    F: FnMut(f64, f64) -> f64,
{
    let mut t = Trajectory::with_steps(n);
    fill_rk3(f, x0, y0, h, n, &mut t.x, &mut t.y);
    t
}

/// Classical fourth-order
/// [Runge-Kutta method](https://en.wikipedia.org/wiki/Runge%E2%80%93Kutta_methods),
/// writing into caller-owned buffers.
///
/// # Errors
/// - [`OdeError::BufferTooShort`] : either buffer holds fewer than
///   `n + 1` entries; nothing is written
pub fn rk4_into<F>(
    f: F,
    x0: f64,
    y0: f64,
    h: f64,
    n: usize,
    xs: &mut [f64],
    ys: &mut [f64],
) -> Result<(), OdeError>
where
    F: FnMut(f64, f64) -> f64,
{
    check_buffers(n, xs, ys)?;
    fill_rk4(f, x0, y0, h, n, xs, ys);
    Ok(())
}

/// Owned-return form of [`rk4_into`].
pub fn rk4<F>(f: F, x0: f64, y0: f64, h: f64, n: usize) -> Trajectory
where
    F: FnMut(f64, f64) -> f64,
{
    let mut t = Trajectory::with_steps(n);
    fill_rk4(f, x0, y0, h, n, &mut t.x, &mut t.y);
    t
}
