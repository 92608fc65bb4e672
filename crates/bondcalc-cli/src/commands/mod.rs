//! CLI command implementations.

pub mod calc;
pub mod formulas;

pub use calc::{PvCouponArgs, PvZeroArgs, YtmCouponArgs, YtmZeroArgs};

use bondcalc_core::config::EvaluatorConfig;
use bondcalc_core::fields::{parse_field, parse_field_strict};
use bondcalc_core::{Evaluator, Field};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Settings shared by every command.
pub struct RunContext {
    /// Output format.
    pub format: OutputFormat,
    /// Whether unreadable field text is an error.
    pub strict: bool,
    /// Configured evaluator.
    pub evaluator: Evaluator,
}

impl RunContext {
    /// Builds the context, validating the evaluator configuration.
    pub fn new(format: OutputFormat, strict: bool, config: EvaluatorConfig) -> CliResult<Self> {
        Ok(Self {
            format,
            strict,
            evaluator: Evaluator::new(config)?,
        })
    }

    /// Significant digits for rendered numbers.
    pub fn display_digits(&self) -> usize {
        self.evaluator.config().display_digits
    }

    /// Reads a field from its text form.
    ///
    /// Unreadable text reads as zero unless `--strict` was given.
    pub fn read_field(&self, field: Field, text: &str) -> CliResult<f64> {
        if self.strict {
            return Ok(parse_field_strict(field, text)?);
        }

        let value = parse_field(text);
        if value == 0.0 && parse_field_strict(field, text).is_err() {
            tracing::warn!("{field}: could not read {text:?}, using 0");
        }
        Ok(value)
    }
}
