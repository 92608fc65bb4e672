//! Evaluator configuration loading.

use std::path::Path;

use bondcalc_core::config::{EvaluatorConfig, Validate};

use crate::error::{CliError, CliResult};

/// Loads the evaluator configuration, or the defaults when no file is given.
///
/// Files ending in `.json` are read as JSON, anything else as TOML. Absent
/// keys take their default values.
pub fn load(path: Option<&Path>) -> CliResult<EvaluatorConfig> {
    let Some(path) = path else {
        tracing::debug!("Using default evaluator configuration");
        return Ok(EvaluatorConfig::default());
    };

    tracing::info!("Loading configuration from {}", path.display());
    let config_error = |message: String| CliError::Config {
        path: path.to_path_buf(),
        message,
    };

    let text = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        return EvaluatorConfig::from_json(&text).map_err(|e| config_error(e.to_string()));
    }

    let config: EvaluatorConfig = toml::from_str(&text).map_err(|e| config_error(e.to_string()))?;
    config
        .validate_or_error()
        .map_err(|e| config_error(e.to_string()))?;
    Ok(config)
}
