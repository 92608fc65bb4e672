//! Root-finding algorithms.
//!
//! Bondcalc needs a single bracketing method: [`bisection`], used to solve
//! for the yield of a coupon bond where no closed-form inverse exists.
//!
//! # Choosing the Bracket
//!
//! Bisection only requires that `f(a)` and `f(b)` differ in sign. For yields
//! the calculator searches `[1e-6, 5.0]`, i.e. periodic yields between
//! 0.0001% and 500%.
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use bondcalc_math::solvers::{bisection, SolverConfig};
//!
//! // Bond: 50 coupon, 1000 face, 10 periods, price 950
//! let residual = |y: f64| {
//!     let discount = (1.0 + y).powf(-10.0);
//!     50.0 / y * (1.0 - discount) + 1000.0 * discount - 950.0
//! };
//!
//! let result = bisection(residual, 1e-6, 5.0, &SolverConfig::default()).unwrap();
//! assert!(result.converged);
//! assert!(result.root > 0.05); // YTM > coupon rate for discount bond
//! ```

mod bisection;

pub use bisection::{bisect, bisection};

use crate::error::{MathError, MathResult};

/// Default tolerance on `|f(x)|` for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum number of interval halvings.
///
/// 60 halvings shrink any realistic yield bracket far below `f64` resolution.
pub const DEFAULT_MAX_ITERATIONS: u32 = 60;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the configuration can drive a solver.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
    /// Whether `|residual|` dropped below the configured tolerance.
    ///
    /// `false` means the iteration budget ran out and `root` is the midpoint
    /// of the last bracket.
    pub converged: bool,
}
