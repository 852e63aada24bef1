//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that solvers are accessible via absolute path.
#[test]
fn test_solver_module_exports() {
    use pricer_core::math::solvers::BrentSolver;
    use pricer_core::math::solvers::NewtonRaphsonSolver;
    use pricer_core::math::solvers::SolverConfig;

    let config: SolverConfig<f64> = SolverConfig::default();
    let brent = BrentSolver::new(config);
    let newton = NewtonRaphsonSolver::new(config);

    let a = brent.find_root(|x| x - 0.25, 0.0, 1.0).unwrap();
    let b = newton.find_root(|x| x - 0.25, |_| 1.0, 0.0).unwrap();
    assert!((a - b).abs() < 1e-9);
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::error::SolverError;

    let err: PricingError = SolverError::NoBracket { a: 0.0, b: 1.0 }.into();
    assert!(matches!(err, PricingError::NumericalInstability(_)));
}

/// Test that the re-exports resolve to the same types.
#[test]
fn test_reexports() {
    let err = pricer_core::types::SolverError::MaxIterationsExceeded { iterations: 1 };
    let same: pricer_core::types::error::SolverError = err.clone();
    assert_eq!(err, same);
}
