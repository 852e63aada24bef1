//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Combines bisection, secant, and inverse quadratic interpolation for
/// robust root finding without requiring derivatives. Guaranteed to
/// converge for continuous functions with a valid bracket.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Algorithm
///
/// Brent's method switches between:
/// - **Bisection**: Guaranteed progress, slower convergence
/// - **Secant method**: Faster convergence using linear approximation
/// - **Inverse quadratic interpolation**: Even faster when applicable
///
/// An interpolated step is only accepted while it stays inside the bracket
/// and shrinks faster than bisection would; otherwise the method bisects.
///
/// # Convergence
///
/// Terminates when the bracket half-width drops below
/// `2·ε·|b| + tolerance/2`, where `ε` is machine epsilon, or when `f(b)`
/// is exactly zero. The tolerance therefore bounds the error in `x`, not in
/// `f(x)`, which keeps accuracy independent of how flat `f` is near the root.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!((f(root)).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket [a, b].
    ///
    /// Requires that `f(a)` and `f(b)` have opposite signs (a valid bracket).
    /// The endpoints may be given in either order.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root located to within the configured tolerance
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have same sign
    /// * `Err(SolverError::NumericalInstability)` - `f` returned a non-finite value
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let solver = BrentSolver::new(SolverConfig::default());
    ///
    /// // Solve x² - 2 = 0 in bracket [0, 2]
    /// let f = |x: f64| x * x - 2.0;
    ///
    /// let root = solver.find_root(f, 0.0, 2.0).unwrap();
    /// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    /// ```
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let zero = T::zero();
        let one = T::one();
        let half = T::from(0.5).unwrap();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();

        let mut a = a;
        let mut b = b;
        let mut fa = f(a);
        let mut fb = f(b);

        if !fa.is_finite() || !fb.is_finite() {
            return Err(SolverError::NumericalInstability(
                "non-finite function value at bracket endpoint".to_string(),
            ));
        }

        if same_sign(fa, fb) {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        if fa == zero {
            return Ok(a);
        }
        if fb == zero {
            return Ok(b);
        }

        // c is the contrapoint: f(b) and f(c) always straddle zero
        let mut c = b;
        let mut fc = fb;
        let mut d = b - a;
        let mut e = d;

        for _iteration in 0..self.config.max_iterations {
            if same_sign(fb, fc) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            // Keep b as the best estimate
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol = two * T::epsilon() * b.abs() + half * self.config.tolerance;
            let m = half * (c - b);

            if m.abs() <= tol || fb == zero {
                return Ok(b);
            }

            if e.abs() >= tol && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q) = if a == c {
                    // Secant step
                    (two * m * s, one - s)
                } else {
                    // Inverse quadratic interpolation
                    let q = fa / fc;
                    let r = fb / fc;
                    (
                        s * (two * m * q * (q - r) - (b - a) * (r - one)),
                        (q - one) * (r - one) * (s - one),
                    )
                };

                if p > zero {
                    q = -q;
                }
                p = p.abs();

                let min1 = three * m * q - (tol * q).abs();
                let min2 = (e * q).abs();

                if two * p < min1.min(min2) {
                    e = d;
                    d = p / q;
                } else {
                    d = m;
                    e = d;
                }
            } else {
                d = m;
                e = d;
            }

            a = b;
            fa = fb;

            if d.abs() > tol {
                b = b + d;
            } else {
                b = b + if m >= zero { tol } else { -tol };
            }

            fb = f(b);
            if !fb.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "non-finite function value at x = {}",
                    b.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[inline]
fn same_sign<T: Float>(x: T, y: T) -> bool {
    let zero = T::zero();
    (x > zero && y > zero) || (x < zero && y < zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ========================================
    // Basic Functionality Tests
    // ========================================

    #[test]
    fn test_find_sqrt_2() {
        let solver = BrentSolver::new(SolverConfig::default());

        let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
        assert!(
            (root - std::f64::consts::SQRT_2).abs() < 1e-9,
            "Expected √2 ≈ {}, got {}",
            std::f64::consts::SQRT_2,
            root
        );
    }

    #[test]
    fn test_find_cubic_root() {
        let solver = BrentSolver::new(SolverConfig::default());

        let f = |x: f64| x * x * x - x - 2.0;
        let root = solver.find_root(f, 1.0, 2.0).unwrap();
        assert!(f(root).abs() < 1e-8, "f({}) = {}", root, f(root));
    }

    #[test]
    fn test_find_sin_root() {
        let solver = BrentSolver::new(SolverConfig::default());

        let root = solver.find_root(|x: f64| x.sin(), 3.0, 4.0).unwrap();
        assert!((root - std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_find_exp_root() {
        let solver = BrentSolver::new(SolverConfig::default());

        // e^x = 2 → x = ln 2
        let root = solver.find_root(|x: f64| x.exp() - 2.0, 0.0, 1.0).unwrap();
        assert!((root - std::f64::consts::LN_2).abs() < 1e-9);
    }

    #[test]
    fn test_bracket_reversed() {
        let solver = BrentSolver::new(SolverConfig::default());

        let root = solver.find_root(|x: f64| x * x - 2.0, 2.0, 0.0).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    // ========================================
    // Error Handling Tests
    // ========================================

    #[test]
    fn test_no_bracket_same_sign_positive() {
        let solver = BrentSolver::new(SolverConfig::default());

        let result = solver.find_root(|x: f64| x * x + 1.0, -1.0, 1.0);
        match result {
            Err(SolverError::NoBracket { a, b }) => {
                assert_eq!(a, -1.0);
                assert_eq!(b, 1.0);
            }
            other => panic!("Expected NoBracket, got {:?}", other),
        }
    }

    #[test]
    fn test_no_bracket_same_sign_negative() {
        let solver = BrentSolver::new(SolverConfig::default());

        let result = solver.find_root(|x: f64| -x * x - 1.0, -1.0, 1.0);
        assert!(matches!(result, Err(SolverError::NoBracket { .. })));
    }

    #[test]
    fn test_nan_endpoint_is_instability() {
        let solver = BrentSolver::new(SolverConfig::default());

        let result = solver.find_root(|x: f64| x.ln(), -1.0, 2.0);
        assert!(matches!(result, Err(SolverError::NumericalInstability(_))));
    }

    #[test]
    fn test_root_at_bracket_endpoint() {
        let solver = BrentSolver::new(SolverConfig::default());

        let root = solver.find_root(|x: f64| x - 1.0, 1.0, 3.0).unwrap();
        assert_eq!(root, 1.0);

        let root = solver.find_root(|x: f64| x - 3.0, 1.0, 3.0).unwrap();
        assert_eq!(root, 3.0);
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let config = SolverConfig {
            tolerance: 1e-14,
            max_iterations: 2,
        };
        let solver = BrentSolver::new(config);

        let result = solver.find_root(|x: f64| x * x * x - 2.0, 0.0, 10.0);
        match result {
            Err(SolverError::MaxIterationsExceeded { iterations }) => {
                assert_eq!(iterations, 2);
            }
            other => panic!("Expected MaxIterationsExceeded, got {:?}", other),
        }
    }

    // ========================================
    // Precision Tests
    // ========================================

    #[test]
    fn test_flat_function_keeps_x_accuracy() {
        // f is tiny everywhere near the root; an |f| criterion would stop early
        let solver = BrentSolver::new(SolverConfig::new(1e-10, 200));

        let f = |x: f64| 1e-12 * (x - 0.3);
        let root = solver.find_root(f, 0.0, 1.0).unwrap();
        assert!((root - 0.3).abs() < 1e-9, "root = {}", root);
    }

    #[test]
    fn test_steep_function() {
        let solver = BrentSolver::new(SolverConfig::default());

        let f = |x: f64| (20.0 * (x - 0.5)).tanh();
        let root = solver.find_root(f, -3.0, 4.0).unwrap();
        assert!((root - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_with_defaults() {
        let solver: BrentSolver<f64> = BrentSolver::with_defaults();
        assert_eq!(solver.config().max_iterations, 100);
    }

    #[test]
    fn test_with_f32() {
        let solver = BrentSolver::new(SolverConfig {
            tolerance: 1e-5_f32,
            max_iterations: 100,
        });

        let root = solver.find_root(|x: f32| x * x - 2.0, 0.0, 2.0).unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn test_linear_root_found(root in -50.0_f64..50.0, left in 0.1_f64..20.0, right in 0.1_f64..20.0) {
            let solver = BrentSolver::new(SolverConfig::default());
            let found = solver.find_root(|x: f64| 3.0 * (x - root), root - left, root + right).unwrap();
            prop_assert!((found - root).abs() < 1e-9);
        }

        #[test]
        fn test_cubic_root_inside_bracket(root in -5.0_f64..5.0) {
            let solver = BrentSolver::new(SolverConfig::default());
            let f = |x: f64| (x - root).powi(3) + (x - root);
            let found = solver.find_root(f, root - 7.0, root + 3.0).unwrap();
            prop_assert!(found >= root - 7.0 && found <= root + 3.0);
            prop_assert!((found - root).abs() < 1e-9);
        }
    }
}
