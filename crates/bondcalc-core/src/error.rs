//! Error types for bond calculations.

use bondcalc_math::MathError;
use thiserror::Error;

use crate::config::ValidationError;
use crate::types::{Field, Formula};

/// A specialized Result type for bond calculations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur while evaluating a bond formula.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// Fields the formula needs were not supplied.
    #[error("{formula} requires {} but it was not supplied", join_fields(.fields))]
    MissingParameter {
        /// The formula being evaluated.
        formula: Formula,
        /// The missing fields, in the order the formula lists them.
        fields: Vec<Field>,
    },

    /// A supplied field is outside the domain of the formula.
    #[error("invalid {field} = {value}: {reason}")]
    InvalidParameter {
        /// The offending field.
        field: Field,
        /// The value that was supplied.
        value: f64,
        /// Why the value was rejected.
        reason: String,
    },

    /// The formula produced (or would produce) NaN or infinity.
    #[error("{formula} produced a non-finite result: {detail}")]
    NonFiniteResult {
        /// The formula being evaluated.
        formula: Formula,
        /// What went wrong.
        detail: String,
    },

    /// Text could not be read as a number.
    #[error("cannot read {field} from {text:?}")]
    UnparseableField {
        /// The field being read.
        field: Field,
        /// The rejected text.
        text: String,
    },

    /// Evaluator configuration failed validation.
    #[error("invalid configuration: {}", join_validation_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// Configuration could not be deserialized.
    #[error("cannot read configuration: {0}")]
    ConfigFormat(String),

    /// Root finding failed.
    ///
    /// Non-finite residuals at the yield bracket are reported as
    /// [`CalcError::NonFiniteResult`] before the solver runs, so this
    /// variant carries bracket and configuration failures.
    #[error("solver error: {0}")]
    Solver(#[from] MathError),
}

impl CalcError {
    /// Creates a non-finite result error.
    #[must_use]
    pub fn non_finite(formula: Formula, detail: impl Into<String>) -> Self {
        Self::NonFiniteResult {
            formula,
            detail: detail.into(),
        }
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(field: Field, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            value,
            reason: reason.into(),
        }
    }

    /// Returns true if the solver rejected its bracket for lack of a sign change.
    pub fn is_invalid_bracket(&self) -> bool {
        matches!(self, Self::Solver(err) if err.is_invalid_bracket())
    }

    /// Returns true if the failure is a NaN or infinite result.
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::NonFiniteResult { .. })
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::ConfigFormat(err.to_string())
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalcError::MissingParameter {
            formula: Formula::PvCoupon,
            fields: vec![Field::Coupon],
        };
        assert_eq!(
            err.to_string(),
            "pv-coupon requires CPN but it was not supplied"
        );

        let err = CalcError::MissingParameter {
            formula: Formula::PvZero,
            fields: vec![Field::Periods, Field::Yield],
        };
        assert_eq!(
            err.to_string(),
            "pv-zero requires N, y but it was not supplied"
        );

        let err = CalcError::non_finite(Formula::YtmZero, "division by zero: N = 0");
        assert!(err.is_non_finite());
        assert!(err.to_string().contains("N = 0"));
    }

    #[test]
    fn test_bracket_error_detection() {
        let err: CalcError = MathError::InvalidBracket {
            a: 1e-6,
            b: 5.0,
            fa: 1.0,
            fb: 2.0,
        }
        .into();
        assert!(err.is_invalid_bracket());
        assert!(!err.is_non_finite());

        let err: CalcError = MathError::invalid_input("bad").into();
        assert!(!err.is_invalid_bracket());
    }

    #[test]
    fn test_invalid_config_display() {
        let err = CalcError::InvalidConfig(vec![
            ValidationError::new("solver_tolerance", "must be positive"),
            ValidationError::new("max_iterations", "must be at least 1"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid configuration: solver_tolerance: must be positive; max_iterations: must be at least 1"
        );
    }
}
