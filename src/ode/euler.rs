use super::errors::{check_buffers, OdeError};
use super::Trajectory;

/// Core Euler sweep. Callers guarantee `xs` and `ys` hold `n + 1` entries.
fn fill<F>(mut f: F, x0: f64, y0: f64, h: f64, n: usize, xs: &mut [f64], ys: &mut [f64])
where
    F: FnMut(f64, f64) -> f64,
{
    xs[0] = x0;
    ys[0] = y0;
    for i in 1..=n {
        xs[i] = xs[i - 1] + h;
        ys[i] = ys[i - 1] + h * f(xs[i - 1], ys[i - 1]);
    }
}

/// Integrates `y' = f(x, y)` with the explicit
/// [Euler method](https://en.wikipedia.org/wiki/Euler_method), writing
/// the trajectory into caller-owned buffers.
///
/// # Arguments
/// - `f`        : right-hand side `f(x, y)`
/// - `x0`, `y0` : initial condition
/// - `h`        : fixed step size (sign sets the direction of travel)
/// - `n`        : number of steps; samples `0..=n` are written
/// - `xs`, `ys` : output buffers, length at least `n + 1`
///
/// # Errors
/// - [`OdeError::BufferTooShort`] : either buffer holds fewer than
///   `n + 1` entries; nothing is written
pub fn euler_into<F>(
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
    fill(f, x0, y0, h, n, xs, ys);
    Ok(())
}

/// Owned-return form of [`euler_into`]: allocates and returns the
/// [`Trajectory`] instead of filling caller buffers.
pub fn euler<F>(f: F, x0: f64, y0: f64, h: f64, n: usize) -> Trajectory
where
    F: FnMut(f64, f64) -> f64,
{
    let mut t = Trajectory::with_steps(n);
    fill(f, x0, y0, h, n, &mut t.x, &mut t.y);
    t
}
