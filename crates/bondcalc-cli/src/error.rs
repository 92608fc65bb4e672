//! CLI error types.

use std::path::PathBuf;

use bondcalc_core::CalcError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error in {}: {message}", path.display())]
    Config {
        /// The configuration file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// Calculation error.
    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalcError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
