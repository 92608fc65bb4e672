//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// A simple and reliable bracketing method that works by repeatedly
/// halving the interval and keeping the half whose endpoints still
/// straddle a sign change.
///
/// Requires: `f(a) * f(b) <= 0` (no shared sign at endpoints). A bracket
/// whose endpoints share a sign is rejected before any halving is done.
/// Infinite endpoint values take part in the sign test like any other value;
/// only NaN is rejected outright.
///
/// Each step evaluates the midpoint `m`. If `|f(m)|` is below
/// `config.tolerance` the midpoint is returned. Otherwise, when `f(lo)` and
/// `f(m)` differ in sign the root lies in `[lo, m]` and `hi` moves to `m`;
/// in every other case `lo` moves to `m`.
///
/// When the iteration budget runs out the midpoint of the final bracket is
/// returned with [`SolverResult::converged`] set to `false`.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - One end of the bracket
/// * `b` - The other end of the bracket (order does not matter)
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or an error if the bracket is invalid.
///
/// # Example
///
/// ```rust
/// use bondcalc_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    if !(a.is_finite() && b.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "bracket endpoints must be finite, got [{a}, {b}]"
        )));
    }

    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    for (x, value) in [(lo, f_lo), (hi, f_hi)] {
        if value.is_nan() {
            return Err(MathError::NonFiniteValue { x, value });
        }
    }

    // Check that root is bracketed
    if f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    // Handle case where endpoint is the root
    if f_lo.abs() < config.tolerance {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
            converged: true,
        });
    }
    if f_hi.abs() < config.tolerance {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
            converged: true,
        });
    }

    for iteration in 0..config.max_iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);

        if f_mid.abs() < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
                converged: true,
            });
        }

        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    let mid = 0.5 * (lo + hi);
    let residual = f(mid);
    log::debug!(
        "bisection budget of {} iterations exhausted on [{lo}, {hi}], residual {residual:.3e}",
        config.max_iterations
    );

    Ok(SolverResult {
        root: mid,
        iterations: config.max_iterations,
        residual,
        converged: false,
    })
}

/// Finds a root of `f` in `[a, b]` with the default configuration.
///
/// Plain entry point returning only the root. Use [`bisection`] to learn
/// whether the tolerance was actually reached.
///
/// ```rust
/// use bondcalc_math::solvers::bisect;
///
/// let root = bisect(|x| x - 3.0, 0.0, 10.0).unwrap();
/// assert!((root - 3.0).abs() < 1e-9);
///
/// // No sign change between 5 and 10
/// assert!(bisect(|x| x - 3.0, 5.0, 10.0).is_err());
/// ```
pub fn bisect<F>(f: F, a: f64, b: f64) -> MathResult<f64>
where
    F: Fn(f64) -> f64,
{
    bisection(f, a, b, &SolverConfig::default()).map(|result| result.root)
}
