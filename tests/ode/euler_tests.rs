use approx::assert_relative_eq;
use creek::ode::errors::OdeError;
use creek::ode::euler::{euler, euler_into};

#[test]
fn constant_slope_is_integrated_exactly() {
    // y' = 2 has no curvature, so first order is already exact
    let t = euler(|_x, _y| 2.0, 0.0, 0.0, 0.1, 10);

    let (x_end, y_end) = t.end();
    assert_relative_eq!(x_end, 1.0, epsilon = 1e-12);
    assert_relative_eq!(y_end, 2.0, epsilon = 1e-12);
    assert_eq!(t.x.len(), 11);
    assert_eq!(t.y.len(), 11);
}

#[test]
fn exponential_growth_undershoots() {
    // Euler on y' = y gives (1 + h)^n, strictly below e^1
    let t = euler(|_x, y| y, 0.0, 1.0, 0.1, 10);

    let (_, y_end) = t.end();
    assert!(y_end < std::f64::consts::E);
    assert_relative_eq!(y_end, 1.1_f64.powi(10), epsilon = 1e-12);
}

#[test]
fn into_form_fills_caller_buffers() -> Result<(), OdeError> {
    let mut xs = [0.0; 11];
    let mut ys = [0.0; 11];

    euler_into(|_x, y| y, 0.0, 1.0, 0.1, 10, &mut xs, &mut ys)?;

    assert_eq!(xs[0], 0.0);
    assert_eq!(ys[0], 1.0);
    assert_relative_eq!(xs[10], 1.0, epsilon = 1e-12);
    assert!(ys[10] > 1.0);
    Ok(())
}

#[test]
fn into_form_matches_owned_form() -> Result<(), OdeError> {
    let mut xs = [0.0; 6];
    let mut ys = [0.0; 6];
    euler_into(|x, y| x - y, 0.0, 1.0, 0.2, 5, &mut xs, &mut ys)?;

    let t = euler(|x, y| x - y, 0.0, 1.0, 0.2, 5);
    assert_eq!(&t.x[..], &xs[..]);
    assert_eq!(&t.y[..], &ys[..]);
    Ok(())
}

#[test]
fn short_buffers_are_rejected_untouched() {
    let mut xs = [0.0; 5];
    let mut ys = [0.0; 11];

    let err = euler_into(|_x, y| y, 0.0, 1.0, 0.1, 10, &mut xs, &mut ys).unwrap_err();

    assert!(matches!(err, OdeError::BufferTooShort { need: 11, .. }));
    assert_eq!(xs, [0.0; 5]);
    assert_eq!(ys, [0.0; 11]);
}

#[test]
fn negative_step_integrates_backward() {
    let t = euler(|_x, _y| 1.0, 1.0, 0.0, -0.1, 10);

    let (x_end, y_end) = t.end();
    assert_relative_eq!(x_end, 0.0, epsilon = 1e-12);
    assert_relative_eq!(y_end, -1.0, epsilon = 1e-12);
}
