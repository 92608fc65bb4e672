//! Formula evaluation.
//!
//! [`Evaluator::evaluate`] dispatches on the [`Formula`] selector, checks the
//! domain of the supplied fields, and either evaluates a closed form or
//! hands the coupon-bond residual to the bisection solver.

use bondcalc_math::solvers::bisection;
use serde::Serialize;

use crate::config::{EvaluatorConfig, Validate};
use crate::error::{CalcError, CalcResult};
use crate::fields::format_significant;
use crate::formulas::{self, CouponResidual};
use crate::types::{BondParameters, Field, Formula};

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Computation {
    /// The formula that was evaluated.
    pub formula: Formula,
    /// The computed price or periodic yield.
    pub value: f64,
    /// The yield in percent (`value * 100`), for yield formulas only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    /// False when the solver ran out of iterations and `value` is the
    /// midpoint of its last bracket. Always true for closed forms.
    pub converged: bool,
    /// Solver iterations used (zero for closed forms).
    pub iterations: u32,
}

impl Computation {
    fn closed_form(formula: Formula, value: f64) -> Self {
        Self {
            formula,
            value,
            percent: formula.is_yield().then_some(value * 100.0),
            converged: true,
            iterations: 0,
        }
    }

    /// Returns the field that was computed.
    pub fn field(&self) -> Field {
        self.formula.solves_for()
    }

    /// Renders the value with `digits` significant digits.
    pub fn display(&self, digits: usize) -> String {
        format_significant(self.value, digits)
    }

    /// Renders the percentage form (e.g. `5.6687176%`), for yields only.
    pub fn percent_display(&self, digits: usize) -> Option<String> {
        self.percent
            .map(|percent| format!("{}%", format_significant(percent, digits)))
    }
}

/// Evaluates bond formulas with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Creates an evaluator after validating `config`.
    pub fn new(config: EvaluatorConfig) -> CalcResult<Self> {
        config.validate_or_error()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Computes the quantity selected by `formula` from `params`.
    ///
    /// Fields not listed in [`Formula::required_fields`] are ignored. When
    /// required fields are absent, all of them are named in a single
    /// [`CalcError::MissingParameter`].
    pub fn evaluate(&self, formula: Formula, params: &BondParameters) -> CalcResult<Computation> {
        let missing = params.missing_for(formula);
        let result = if !missing.is_empty() {
            Err(CalcError::MissingParameter {
                formula,
                fields: missing,
            })
        } else {
            match formula {
                Formula::PvCoupon => self.pv_coupon(params),
                Formula::PvZero => self.pv_zero(params),
                Formula::YtmZero => self.ytm_zero(params),
                Formula::YtmCoupon => self.ytm_coupon(params),
            }
        };

        match &result {
            Ok(computation) => log::debug!(
                "{formula}: {} = {} ({} iterations)",
                computation.field(),
                computation.value,
                computation.iterations
            ),
            Err(err) => log::debug!("{formula} failed: {err}"),
        }
        result
    }

    fn pv_coupon(&self, params: &BondParameters) -> CalcResult<Computation> {
        let formula = Formula::PvCoupon;
        let coupon = params.require(formula, Field::Coupon)?;
        let face_value = params.require(formula, Field::FaceValue)?;
        let periods = params.require(formula, Field::Periods)?;
        let y = params.require(formula, Field::Yield)?;

        if y == 0.0 {
            return Err(CalcError::non_finite(formula, "division by zero: y = 0"));
        }
        check_discount_base(y)?;

        let price = formulas::pv_coupon(coupon, face_value, periods, y);
        ensure_finite(formula, price).map(|value| Computation::closed_form(formula, value))
    }

    fn pv_zero(&self, params: &BondParameters) -> CalcResult<Computation> {
        let formula = Formula::PvZero;
        let face_value = params.require(formula, Field::FaceValue)?;
        let periods = params.require(formula, Field::Periods)?;
        let y = params.require(formula, Field::Yield)?;

        check_discount_base(y)?;

        let price = formulas::pv_zero(face_value, periods, y);
        ensure_finite(formula, price).map(|value| Computation::closed_form(formula, value))
    }

    fn ytm_zero(&self, params: &BondParameters) -> CalcResult<Computation> {
        let formula = Formula::YtmZero;
        let price = params.require(formula, Field::Price)?;
        let face_value = params.require(formula, Field::FaceValue)?;
        let periods = params.require(formula, Field::Periods)?;

        if price == 0.0 {
            return Err(CalcError::non_finite(formula, "division by zero: P = 0"));
        }
        if periods == 0.0 {
            return Err(CalcError::non_finite(formula, "division by zero: N = 0"));
        }
        if price < 0.0 {
            return Err(CalcError::invalid_parameter(
                Field::Price,
                price,
                "price must be positive",
            ));
        }
        if face_value <= 0.0 {
            return Err(CalcError::invalid_parameter(
                Field::FaceValue,
                face_value,
                "face value must be positive",
            ));
        }

        let y = formulas::ytm_zero(face_value, price, periods);
        ensure_finite(formula, y).map(|value| Computation::closed_form(formula, value))
    }

    fn ytm_coupon(&self, params: &BondParameters) -> CalcResult<Computation> {
        let formula = Formula::YtmCoupon;
        let residual = CouponResidual::new(
            params.require(formula, Field::Price)?,
            params.require(formula, Field::FaceValue)?,
            params.require(formula, Field::Coupon)?,
            params.require(formula, Field::Periods)?,
        );

        if residual.periods == 0.0 {
            return Err(CalcError::invalid_parameter(
                Field::Periods,
                residual.periods,
                "number of periods must be non-zero",
            ));
        }

        let (lower, upper) = (self.config.yield_lower_bound, self.config.yield_upper_bound);
        for y in [lower, upper] {
            let value = residual.value(y);
            if !value.is_finite() {
                return Err(CalcError::non_finite(
                    formula,
                    format!("residual at y = {y} is {value}"),
                ));
            }
        }

        let result = bisection(residual.as_fn(), lower, upper, &self.config.solver_config())?;

        if !result.converged {
            log::warn!(
                "{formula}: no convergence within {} iterations, returning bracket midpoint {} (residual {:.3e})",
                result.iterations,
                result.root,
                result.residual
            );
        }

        let y = ensure_finite(formula, result.root)?;
        Ok(Computation {
            formula,
            value: y,
            percent: Some(y * 100.0),
            converged: result.converged,
            iterations: result.iterations,
        })
    }
}

/// Evaluates `formula` with the default configuration.
///
/// ```rust
/// use bondcalc_core::{evaluate, BondParameters, Formula};
///
/// let params = BondParameters::new()
///     .with_price(950.0)
///     .with_face_value(1000.0)
///     .with_coupon(50.0)
///     .with_periods(10.0);
///
/// let result = evaluate(Formula::YtmCoupon, &params).unwrap();
/// assert!((result.value - 0.0567).abs() < 1e-4);
/// assert_eq!(result.percent_display(4).as_deref(), Some("5.669%"));
/// ```
pub fn evaluate(formula: Formula, params: &BondParameters) -> CalcResult<Computation> {
    Evaluator::default().evaluate(formula, params)
}

/// `(1 + y)^-N` needs a positive base.
fn check_discount_base(y: f64) -> CalcResult<()> {
    if 1.0 + y > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_parameter(
            Field::Yield,
            y,
            "1 + y must be positive",
        ))
    }
}

fn ensure_finite(formula: Formula, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::non_finite(
            formula,
            format!("evaluated to {value}"),
        ))
    }
}
