use creek::config::SolveCfg;
use creek::root_finding::fixed_point::fixed_point;
use creek::root_finding::errors::RootFindingError;
use creek::root_finding::report::Termination;

type TestResult = Result<(), RootFindingError>;

#[test]
fn converges_to_cosine_fixed_point() -> TestResult {
    // contraction: |g'| = |sin| < 1 near the fixed point
    let g = |x: f64| x.cos();

    let cfg = SolveCfg::new(1e-10, 200).unwrap();
    let res = fixed_point(g, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::Converged);
    assert!((res.root - 0.7390851332151607).abs() < 1e-9);
    assert_eq!(res.algorithm, "fixed_point");
    Ok(())
}

#[test]
fn identity_map_converges_immediately() -> TestResult {
    let g = |x: f64| x;

    let cfg = SolveCfg::new(1e-12, 10).unwrap();
    let res = fixed_point(g, 4.2, cfg)?;

    assert_eq!(res.termination, Termination::Converged);
    assert_eq!(res.root, 4.2);
    assert_eq!(res.f_root, 0.0);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn divergent_map_exhausts_iterations() -> TestResult {
    // |g'| = 2 > 1 everywhere: iterates run away from the fixed point
    let g = |x: f64| 2.0 * x;

    let cfg = SolveCfg::new(1e-6, 100).unwrap();
    let res = fixed_point(g, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::IterationLimit);
    assert_eq!(res.iterations, 100);
    Ok(())
}

#[test]
fn overflowing_iterate_is_an_error() {
    let g = |x: f64| x * x;

    let cfg = SolveCfg::new(1e-6, 100).unwrap();
    assert!(matches!(
        fixed_point(g, 1e200, cfg),
        Err(RootFindingError::NonFiniteEvaluation { .. })
    ));
}

#[test]
fn rejects_non_finite_guess() {
    let g = |x: f64| x;

    assert!(matches!(
        fixed_point(g, f64::NAN, SolveCfg::default()),
        Err(RootFindingError::InvalidGuess { .. })
    ));
}

#[test]
fn sqrt_2_via_babylonian_map() -> TestResult {
    // g(x) = (x + 2/x) / 2 is Newton's map for x^2 - 2
    let g = |x: f64| 0.5 * (x + 2.0 / x);

    let cfg = SolveCfg::new(1e-12, 50).unwrap();
    let res = fixed_point(g, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::Converged);
    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-12);
    Ok(())
}
