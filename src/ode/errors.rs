//! ODE integrator error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OdeError {
    #[error("output buffers too short: need {need}, got xs={xs_len}, ys={ys_len}")]
    BufferTooShort {
        need: usize,
        xs_len: usize,
        ys_len: usize,
    },
}

/// Both output slices must hold at least `n + 1` samples.
pub(crate) fn check_buffers(n: usize, xs: &[f64], ys: &[f64]) -> Result<(), OdeError> {
    let need = n + 1;
    if xs.len() < need || ys.len() < need {
        return Err(OdeError::BufferTooShort {
            need,
            xs_len: xs.len(),
            ys_len: ys.len(),
        });
    }
    Ok(())
}
