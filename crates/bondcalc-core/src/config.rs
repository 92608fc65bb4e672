//! Evaluator configuration.
//!
//! The defaults reproduce the calculator's fixed constants: a yield bracket
//! of `[1e-6, 5.0]`, a convergence tolerance of `1e-10` on the residual, a
//! budget of 60 halvings and 8 significant digits for display.

use bondcalc_math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

// =============================================================================
// EVALUATOR CONFIGURATION
// =============================================================================

/// Configuration for bond formula evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Lowest periodic yield searched when solving for a coupon bond's yield.
    #[serde(default = "default_yield_lower_bound")]
    pub yield_lower_bound: f64,

    /// Highest periodic yield searched when solving for a coupon bond's yield.
    #[serde(default = "default_yield_upper_bound")]
    pub yield_upper_bound: f64,

    /// Residual tolerance for the yield solver.
    #[serde(default = "default_solver_tolerance")]
    pub solver_tolerance: f64,

    /// Maximum bisection steps for the yield solver.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Significant digits used when rendering results.
    #[serde(default = "default_display_digits")]
    pub display_digits: usize,
}

fn default_yield_lower_bound() -> f64 {
    1e-6
}

fn default_yield_upper_bound() -> f64 {
    5.0
}

fn default_solver_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_display_digits() -> usize {
    8
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            yield_lower_bound: default_yield_lower_bound(),
            yield_upper_bound: default_yield_upper_bound(),
            solver_tolerance: default_solver_tolerance(),
            max_iterations: default_max_iterations(),
            display_digits: default_display_digits(),
        }
    }
}

impl EvaluatorConfig {
    /// Sets the yield search bracket.
    #[must_use]
    pub fn with_yield_bracket(mut self, lower: f64, upper: f64) -> Self {
        self.yield_lower_bound = lower;
        self.yield_upper_bound = upper;
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_solver_tolerance(mut self, tolerance: f64) -> Self {
        self.solver_tolerance = tolerance;
        self
    }

    /// Sets the solver iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the number of significant digits for display.
    #[must_use]
    pub fn with_display_digits(mut self, digits: usize) -> Self {
        self.display_digits = digits;
        self
    }

    /// Returns the solver settings derived from this configuration.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.solver_tolerance, self.max_iterations)
    }

    /// Reads a configuration from JSON, filling absent fields with defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate_or_error()?;
        Ok(config)
    }
}

impl Validate for EvaluatorConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let lower = self.yield_lower_bound;
        let upper = self.yield_upper_bound;
        if !(lower.is_finite() && lower > 0.0) {
            // The coupon-bond price divides by y, so the bracket must exclude zero.
            errors.push(ValidationError::with_rule(
                "yield_lower_bound",
                format!("Lower yield bound {lower} must be a positive finite number"),
                "positive_bound",
            ));
        }
        if !(upper.is_finite() && upper > lower) {
            errors.push(ValidationError::with_rule(
                "yield_upper_bound",
                format!("Upper yield bound {upper} must be finite and above the lower bound {lower}"),
                "ordered_bracket",
            ));
        }

        if !(self.solver_tolerance > 0.0 && self.solver_tolerance <= 1e-4) {
            errors.push(ValidationError::with_rule(
                "solver_tolerance",
                "Solver tolerance must be between 0 and 1e-4",
                "valid_tolerance",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > 1000 {
            errors.push(ValidationError::with_rule(
                "max_iterations",
                "Max iterations must be between 1 and 1000",
                "valid_iterations",
            ));
        }

        if self.display_digits == 0 || self.display_digits > 17 {
            errors.push(ValidationError::with_rule(
                "display_digits",
                "Display digits must be between 1 and 17",
                "valid_precision",
            ));
        }

        errors
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref rule) = self.rule {
            write!(f, "{}: {} (rule: {})", self.field, self.message, rule)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> CalcResult<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CalcError::InvalidConfig(errors))
        }
    }
}
