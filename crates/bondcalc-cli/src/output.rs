//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// A row that reduces to a single token in minimal output.
pub trait MinimalRow {
    /// Returns the text printed for this row.
    fn minimal(&self) -> &str;
}

/// Formats and prints output based on the specified format.
pub fn print_output<T>(data: &[T], format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled + MinimalRow,
{
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output, one token per row.
fn print_minimal<T: MinimalRow>(data: &[T]) -> anyhow::Result<()> {
    for line in minimal_lines(data) {
        println!("{line}");
    }
    Ok(())
}

fn minimal_lines<T: MinimalRow>(data: &[T]) -> Vec<&str> {
    data.iter().map(MinimalRow::minimal).collect()
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl MinimalRow for KeyValue {
    fn minimal(&self) -> &str {
        &self.value
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_lines_take_values() {
        let rows = vec![
            KeyValue::new("P (price)", "613.91325"),
            KeyValue::new("Yield (%)", "5%"),
        ];
        assert_eq!(minimal_lines(&rows), vec!["613.91325", "5%"]);
    }

    #[test]
    fn test_minimal_lines_empty() {
        let rows: Vec<KeyValue> = Vec::new();
        assert!(minimal_lines(&rows).is_empty());
    }
}
