//! Formula commands.
//!
//! One subcommand per formula. Each accepts exactly the fields its formula
//! needs, as text, and reports the computed price or yield.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use bondcalc_core::fields::format_significant;
use bondcalc_core::{BondParameters, Computation, Field, Formula};

use crate::cli::OutputFormat;
use crate::commands::RunContext;
use crate::error::CliError;
use crate::output::{print_header, print_output, print_warning, KeyValue};

/// Field text collected by a formula subcommand.
pub trait FormulaArgs {
    /// The formula this subcommand evaluates.
    const FORMULA: Formula;

    /// Returns each supplied field with its raw text.
    fn fields(&self) -> Vec<(Field, &str)>;
}

/// Arguments for `pv-coupon`.
#[derive(Args, Debug)]
pub struct PvCouponArgs {
    /// Coupon amount per period (CPN)
    #[arg(long, allow_hyphen_values = true)]
    pub coupon: String,

    /// Face value (FV)
    #[arg(long, allow_hyphen_values = true)]
    pub face: String,

    /// Number of periods (N)
    #[arg(long, allow_hyphen_values = true)]
    pub periods: String,

    /// Periodic yield as a fraction, e.g. 0.05 for 5% (y)
    #[arg(long = "yield", allow_hyphen_values = true)]
    pub yield_rate: String,
}

impl FormulaArgs for PvCouponArgs {
    const FORMULA: Formula = Formula::PvCoupon;

    fn fields(&self) -> Vec<(Field, &str)> {
        vec![
            (Field::Coupon, self.coupon.as_str()),
            (Field::FaceValue, self.face.as_str()),
            (Field::Periods, self.periods.as_str()),
            (Field::Yield, self.yield_rate.as_str()),
        ]
    }
}

/// Arguments for `pv-zero`.
#[derive(Args, Debug)]
pub struct PvZeroArgs {
    /// Face value (FV)
    #[arg(long, allow_hyphen_values = true)]
    pub face: String,

    /// Number of periods (N)
    #[arg(long, allow_hyphen_values = true)]
    pub periods: String,

    /// Periodic yield as a fraction, e.g. 0.05 for 5% (y)
    #[arg(long = "yield", allow_hyphen_values = true)]
    pub yield_rate: String,
}

impl FormulaArgs for PvZeroArgs {
    const FORMULA: Formula = Formula::PvZero;

    fn fields(&self) -> Vec<(Field, &str)> {
        vec![
            (Field::FaceValue, self.face.as_str()),
            (Field::Periods, self.periods.as_str()),
            (Field::Yield, self.yield_rate.as_str()),
        ]
    }
}

/// Arguments for `ytm-zero`.
#[derive(Args, Debug)]
pub struct YtmZeroArgs {
    /// Price (P)
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    /// Face value (FV)
    #[arg(long, allow_hyphen_values = true)]
    pub face: String,

    /// Number of periods (N)
    #[arg(long, allow_hyphen_values = true)]
    pub periods: String,
}

impl FormulaArgs for YtmZeroArgs {
    const FORMULA: Formula = Formula::YtmZero;

    fn fields(&self) -> Vec<(Field, &str)> {
        vec![
            (Field::Price, self.price.as_str()),
            (Field::FaceValue, self.face.as_str()),
            (Field::Periods, self.periods.as_str()),
        ]
    }
}

/// Arguments for `ytm-coupon`.
#[derive(Args, Debug)]
pub struct YtmCouponArgs {
    /// Price (P)
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    /// Face value (FV)
    #[arg(long, allow_hyphen_values = true)]
    pub face: String,

    /// Coupon amount per period (CPN)
    #[arg(long, allow_hyphen_values = true)]
    pub coupon: String,

    /// Number of periods (N)
    #[arg(long, allow_hyphen_values = true)]
    pub periods: String,
}

impl FormulaArgs for YtmCouponArgs {
    const FORMULA: Formula = Formula::YtmCoupon;

    fn fields(&self) -> Vec<(Field, &str)> {
        vec![
            (Field::Price, self.price.as_str()),
            (Field::FaceValue, self.face.as_str()),
            (Field::Coupon, self.coupon.as_str()),
            (Field::Periods, self.periods.as_str()),
        ]
    }
}

/// Structured calculation report for JSON output.
#[derive(Debug, Serialize)]
pub struct CalcReport {
    /// Formula name.
    pub formula: Formula,
    /// Formula label.
    pub label: &'static str,
    /// Relation that was evaluated.
    pub expression: &'static str,
    /// Inputs as read.
    pub inputs: BondParameters,
    /// Raw result.
    pub result: Computation,
    /// Result rendered with the configured significant digits.
    pub display: String,
    /// Percentage rendering, for yields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_display: Option<String>,
}

impl CalcReport {
    fn new(inputs: BondParameters, result: Computation, digits: usize) -> Self {
        Self {
            formula: result.formula,
            label: result.formula.label(),
            expression: result.formula.expression(),
            inputs,
            result,
            display: result.display(digits),
            percent_display: result.percent_display(digits),
        }
    }

    fn rows(&self, digits: usize) -> Vec<KeyValue> {
        let mut rows = vec![
            KeyValue::new("Formula", self.label),
            KeyValue::new("Expression", self.expression),
        ];

        for &field in self.formula.required_fields() {
            if let Some(value) = self.inputs.get(field) {
                rows.push(KeyValue::new(
                    field_label(field),
                    format_significant(value, digits),
                ));
            }
        }

        rows.push(KeyValue::new("", "")); // Separator
        rows.push(KeyValue::new(
            field_label(self.result.field()),
            self.display.clone(),
        ));
        if let Some(ref percent) = self.percent_display {
            rows.push(KeyValue::new("Yield (%)", percent.clone()));
        }
        if self.formula.needs_solver() {
            let converged = if self.result.converged { "yes" } else { "no" };
            rows.push(KeyValue::new("Converged", converged));
            rows.push(KeyValue::new("Iterations", self.result.iterations.to_string()));
        }
        rows
    }
}

fn field_label(field: Field) -> String {
    format!("{} ({})", field.symbol(), field.description())
}

/// Execute a formula command.
pub fn execute<A: FormulaArgs>(args: &A, ctx: &RunContext) -> Result<()> {
    let formula = A::FORMULA;

    let mut params = BondParameters::new();
    for (field, text) in args.fields() {
        params = params.with(field, ctx.read_field(field, text)?);
    }
    tracing::debug!(?params, "evaluating {formula}");

    let computation = ctx
        .evaluator
        .evaluate(formula, &params)
        .map_err(CliError::from)?;

    if !computation.converged {
        print_warning(&format!(
            "Solver stopped after {} iterations without reaching tolerance; result is approximate",
            computation.iterations
        ));
    }

    let digits = ctx.display_digits();
    let report = CalcReport::new(params, computation, digits);

    match ctx.format {
        OutputFormat::Table => {
            print_header("Bond Calculation Results");
            print_output(&report.rows(digits), ctx.format)?;
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            let rows: Vec<_> = report
                .rows(digits)
                .into_iter()
                .filter(|row| !row.key.is_empty())
                .collect();
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Minimal => {
            let row = KeyValue::new(field_label(report.result.field()), report.display.clone());
            print_output(&[row], ctx.format)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondcalc_core::evaluate;

    fn ytm_coupon_report() -> CalcReport {
        let params = BondParameters::new()
            .with_price(950.0)
            .with_face_value(1000.0)
            .with_coupon(50.0)
            .with_periods(10.0);
        let result = evaluate(Formula::YtmCoupon, &params).unwrap();
        CalcReport::new(params, result, 8)
    }

    #[test]
    fn test_args_fields_match_formula() {
        let args = YtmCouponArgs {
            price: "950".into(),
            face: "1000".into(),
            coupon: "50".into(),
            periods: "10".into(),
        };
        let fields: Vec<Field> = args.fields().into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, YtmCouponArgs::FORMULA.required_fields());
    }

    #[test]
    fn test_report_rows() {
        let report = ytm_coupon_report();
        let rows = report.rows(8);

        let value_of = |key: &str| {
            rows.iter()
                .find(|row| row.key == key)
                .map(|row| row.value.clone())
        };
        assert_eq!(value_of("Formula").as_deref(), Some("YTM Coupon Bond"));
        assert_eq!(value_of("P (price)").as_deref(), Some("950"));
        assert_eq!(value_of("y (periodic yield)").as_deref(), Some("0.056687176"));
        assert_eq!(value_of("Yield (%)").as_deref(), Some("5.6687176%"));
        assert_eq!(value_of("Converged").as_deref(), Some("yes"));
    }

    #[test]
    fn test_report_json() {
        let json = serde_json::to_value(ytm_coupon_report()).unwrap();
        assert_eq!(json["formula"], "ytm-coupon");
        assert_eq!(json["inputs"]["price"], 950.0);
        assert_eq!(json["display"], "0.056687176");
        assert_eq!(json["percent_display"], "5.6687176%");
    }
}
