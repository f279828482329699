use creek::config::SolveCfg;
use creek::root_finding::regula_falsi::regula_falsi;
use creek::root_finding::errors::RootFindingError;
use creek::root_finding::report::Termination;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2_within_tolerance() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let tol = 1e-6;

    let cfg = SolveCfg::new(tol, 100).unwrap();
    let res = regula_falsi(f, 0.0, 2.0, cfg)?;

    // on convex f the right endpoint stagnates, so the width-based halt
    // never fires; the moving endpoint still reaches the root
    assert!((res.root - 2.0_f64.sqrt()).abs() < tol);
    assert!(res.f_root.abs() < tol);
    assert_eq!(res.algorithm, "regula_falsi");
    Ok(())
}

#[test]
fn linear_function_lands_exactly_in_one_iteration() -> TestResult {
    // the secant line through a linear function is the function itself
    let f = |x: f64| 2.0 * x - 6.0;

    let cfg = SolveCfg::new(1e-12, 50).unwrap();
    let res = regula_falsi(f, 0.0, 5.0, cfg)?;

    assert_eq!(res.termination, Termination::Converged);
    assert_eq!(res.root, 3.0);
    assert_eq!(res.f_root, 0.0);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn coincident_endpoint_values_are_reported() -> TestResult {
    // f(-1) == f(1): the secant line is horizontal before any iterate
    let f = |x: f64| x * x;

    let cfg = SolveCfg::new(1e-9, 50).unwrap();
    let res = regula_falsi(f, -1.0, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::CoincidentValues);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.f_root, 1.0);
    Ok(())
}

#[test]
fn stagnant_bracket_hits_iteration_limit() -> TestResult {
    let f = |x: f64| x * x - 2.0;

    let cfg = SolveCfg::new(1e-6, 5).unwrap();
    let res = regula_falsi(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.termination, Termination::IterationLimit);
    assert_eq!(res.iterations, 5);
    Ok(())
}

#[test]
fn rejects_invalid_bounds() {
    let f = |x: f64| x;
    let cfg = SolveCfg::default();

    assert!(matches!(
        regula_falsi(f, 1.0, 1.0, cfg),
        Err(RootFindingError::InvalidBounds { .. })
    ));
    assert!(matches!(
        regula_falsi(f, 0.0, f64::NAN, cfg),
        Err(RootFindingError::InvalidBounds { .. })
    ));
}

#[test]
fn agrees_with_bisection_on_well_behaved_bracket() -> TestResult {
    let f = |x: f64| x.exp() - 2.0;
    let cfg = SolveCfg::new(1e-9, 200).unwrap();

    let rf = regula_falsi(f, 0.0, 1.0, cfg)?;
    let bi = creek::root_finding::bisection::bisection(f, 0.0, 1.0, cfg)?;

    assert!((rf.root - bi.root).abs() < 1e-8);
    assert!((rf.root - std::f64::consts::LN_2).abs() < 1e-8);
    Ok(())
}
