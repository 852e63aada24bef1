//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root, meaning the number
/// of correct digits approximately doubles each iteration. However, it may
/// fail if:
/// - The derivative is near zero
/// - The initial guess is far from the root
/// - The iterate escapes the domain where `f` is meaningful
///
/// The first two are detected through the derivative floor, the last
/// through [`find_root_bounded`](Self::find_root_bounded).
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
    /// Smallest usable |f'(x)|
    derivative_floor: T,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    ///
    /// The derivative floor defaults to `1e-30`.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            config,
            derivative_floor: T::from(1e-30).unwrap(),
        }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Sets the smallest derivative magnitude the solver will divide by.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default())
    ///     .with_derivative_floor(1e-12);
    /// assert_eq!(solver.derivative_floor(), 1e-12);
    /// ```
    pub fn with_derivative_floor(mut self, floor: T) -> Self {
        self.derivative_floor = floor;
        self
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Non-finite iterate
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// let root = solver.find_root(f, f_prime, 1.5).unwrap();
    /// assert!((f(root)).abs() < 1e-10);
    /// ```
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.find_root_bounded(f, f_prime, x0, T::neg_infinity(), T::infinity())
    }

    /// Find a root of `f` while keeping every iterate inside `(lower, upper]`.
    ///
    /// The iteration is abandoned as soon as an update leaves the domain,
    /// rather than clamped back into it.
    ///
    /// # Returns
    ///
    /// As [`find_root`](Self::find_root), plus
    /// `Err(SolverError::OutOfDomain)` when an iterate leaves `(lower, upper]`.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // ln(x) = 1 only makes sense for x > 0
    /// let root = solver
    ///     .find_root_bounded(|x: f64| x.ln() - 1.0, |x: f64| 1.0 / x, 2.0, 0.0, 10.0)
    ///     .unwrap();
    /// assert!((root - std::f64::consts::E).abs() < 1e-9);
    /// ```
    pub fn find_root_bounded<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
        lower: T,
        upper: T,
    ) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;

        for _iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            if !f_val.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "non-finite function value at x = {}",
                    to_f64(x)
                )));
            }

            // Checked before the step: returns the iterate that met the
            // tolerance, not the one after it
            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            let f_prime_val = f_prime(x);

            // Also rejects a NaN derivative
            if !(f_prime_val.abs() >= self.derivative_floor) {
                return Err(SolverError::DerivativeNearZero { x: to_f64(x) });
            }

            x = x - f_val / f_prime_val;

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }

            if !(x > lower && x <= upper) {
                return Err(SolverError::OutOfDomain {
                    x: to_f64(x),
                    lower: to_f64(lower),
                    upper: to_f64(upper),
                });
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

    /// Returns the derivative floor.
    pub fn derivative_floor(&self) -> T {
        self.derivative_floor
    }
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
