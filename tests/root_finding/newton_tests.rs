use creek::config::SolveCfg;
use creek::root_finding::newton::newton;
use creek::root_finding::errors::RootFindingError;
use creek::root_finding::report::Termination;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2_in_under_ten_iterations() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;
    let tol = 1e-10;

    let cfg = SolveCfg::new(tol, 50).unwrap();
    let res = newton(f, df, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::Converged);
    assert!((res.root - 2.0_f64.sqrt()).abs() < tol);
    assert!(res.iterations < 10);
    assert_eq!(res.algorithm, "newton");
    Ok(())
}

#[test]
fn linear_function_finishes_exactly() -> TestResult {
    let f = |x: f64| 2.0 * x - 6.0;
    let df = |_x: f64| 2.0;

    let cfg = SolveCfg::new(1e-12, 20).unwrap();
    let res = newton(f, df, 10.0, cfg)?;

    assert_eq!(res.termination, Termination::Converged);
    assert_eq!(res.root, 3.0);
    assert_eq!(res.f_root, 0.0);
    Ok(())
}

#[test]
fn flat_derivative_at_start_aborts_untouched() -> TestResult {
    // stationary point of f right at the guess
    let f = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let cfg = SolveCfg::new(1e-10, 50).unwrap();
    let res = newton(f, df, 0.0, cfg)?;

    assert_eq!(res.termination, Termination::DegenerateDerivative);
    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 0);
    Ok(())
}

#[test]
fn flat_derivative_mid_run_aborts_with_estimate() -> TestResult {
    // triple root: f' vanishes as the iterates close in, tripping the
    // derivative floor before the step tolerance can
    let f = |x: f64| (x - 1.0).powi(3);
    let df = |x: f64| 3.0 * (x - 1.0).powi(2);

    let cfg = SolveCfg::new(1e-9, 200).unwrap();
    let res = newton(f, df, 2.0, cfg)?;

    assert_eq!(res.termination, Termination::DegenerateDerivative);
    assert!((res.root - 1.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn iteration_limit_returns_last_estimate() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let cfg = SolveCfg::new(1e-300, 2).unwrap();
    let res = newton(f, df, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::IterationLimit);
    assert_eq!(res.iterations, 2);
    assert!((res.root - 2.0_f64.sqrt()).abs() < 0.1);
    Ok(())
}

#[test]
fn rejects_non_finite_guess() {
    let f = |x: f64| x;
    let df = |_x: f64| 1.0;

    assert!(matches!(
        newton(f, df, f64::NAN, SolveCfg::default()),
        Err(RootFindingError::InvalidGuess { .. })
    ));
}

#[test]
fn non_finite_derivative_is_an_error() {
    let f = |x: f64| x;
    let df = |_x: f64| f64::NAN;

    assert!(matches!(
        newton(f, df, 1.0, SolveCfg::default()),
        Err(RootFindingError::NonFiniteEvaluation { .. })
    ));
}

#[test]
fn identical_calls_are_bit_identical() -> TestResult {
    let f = |x: f64| x * x * x - 2.0 * x - 5.0;
    let df = |x: f64| 3.0 * x * x - 2.0;
    let cfg = SolveCfg::new(1e-12, 50).unwrap();

    let first = newton(f, df, 2.0, cfg)?;
    let second = newton(f, df, 2.0, cfg)?;

    assert_eq!(first.root.to_bits(), second.root.to_bits());
    assert_eq!(first.iterations, second.iterations);
    Ok(())
}
