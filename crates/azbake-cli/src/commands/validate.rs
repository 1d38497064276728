//! Validate command implementation
//!
//! Loads a config, applies overrides and reports validation errors and
//! warnings without generating anything.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use azbake_spec::{canonical_config_hash, validate_config};
use colored::Colorize;

use super::json_output::{print_json, JsonError, JsonWarning, ValidateOutput};
use super::{reporting, EXIT_CONFIG};
use crate::input::{load_config, ConfigOverrides};

/// Run the validate command
///
/// # Arguments
/// * `config_path` - Path to the config file (defaults when `None`)
/// * `overrides` - Flag overrides applied after loading
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(config_path, overrides)
    } else {
        run_human(config_path, overrides)
    }
}

fn run_human(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), describe(config_path));

    let config = match load_config(config_path, overrides) {
        Ok(config) => config,
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), e);
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };

    reporting::print_config_summary(&config);
    let hash = canonical_config_hash(&config)?;
    println!("{} {}", "Config hash:".dimmed(), &hash[..16]);

    let result = validate_config(&config);
    reporting::print_validation(&result);

    if result.is_ok() {
        println!(
            "\n{} Config is valid ({} warning(s))",
            "SUCCESS".green().bold(),
            result.warnings.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Config has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(EXIT_CONFIG))
    }
}

fn run_json(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<ExitCode> {
    let config = match load_config(config_path, overrides) {
        Ok(config) => config,
        Err(e) => {
            print_json(&ValidateOutput {
                success: false,
                config_hash: None,
                errors: vec![JsonError::from(&e)],
                warnings: Vec::new(),
            })?;
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };

    let result = validate_config(&config);
    let output = ValidateOutput {
        success: result.is_ok(),
        config_hash: Some(canonical_config_hash(&config)?),
        errors: result.errors.iter().map(JsonError::from).collect(),
        warnings: result.warnings.iter().map(JsonWarning::from).collect(),
    };
    print_json(&output)?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_CONFIG))
    }
}

/// Display name for the config source.
pub(crate) fn describe(config_path: Option<&Path>) -> String {
    match config_path {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    }
}
