//! Formulas command implementation.
//!
//! Lists the supported formulas with the fields each one needs.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use bondcalc_core::Formula;

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output, MinimalRow};

/// One formula, as listed.
#[derive(Debug, Serialize, Tabled)]
pub struct FormulaRow {
    #[tabled(rename = "Command")]
    pub name: &'static str,
    #[tabled(rename = "Formula")]
    pub label: &'static str,
    #[tabled(rename = "Expression")]
    pub expression: &'static str,
    #[tabled(rename = "Inputs")]
    pub inputs: String,
    #[tabled(rename = "Solves For")]
    pub solves_for: &'static str,
}

impl MinimalRow for FormulaRow {
    fn minimal(&self) -> &str {
        self.name
    }
}

impl From<Formula> for FormulaRow {
    fn from(formula: Formula) -> Self {
        Self {
            name: formula.name(),
            label: formula.label(),
            expression: formula.expression(),
            inputs: formula
                .required_fields()
                .iter()
                .map(|field| field.symbol())
                .collect::<Vec<_>>()
                .join(", "),
            solves_for: formula.solves_for().symbol(),
        }
    }
}

/// Execute the formulas command.
pub fn execute(format: OutputFormat) -> Result<()> {
    let rows: Vec<FormulaRow> = Formula::ALL.into_iter().map(FormulaRow::from).collect();

    match format {
        OutputFormat::Table => {
            print_header("Supported Formulas");
            print_output(&rows, format)?;
        }
        OutputFormat::Json | OutputFormat::Csv | OutputFormat::Minimal => {
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
