//! Inspect command implementation
//!
//! Bakes a table in memory and prints per-bucket sourcing and levels without
//! writing any files.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use azbake_backend_audio::{generate_table, BinauralSample};
use colored::Colorize;

use super::json_output::{print_json, GenerateOutput, JsonError};
use super::validate::describe;
use super::{exit_code_for, reporting, EXIT_CONFIG};
use crate::input::{load_config, ConfigOverrides};

/// Samples shown per ear by `--bucket`.
const PREVIEW_SAMPLES: usize = 16;

/// Run the inspect command
///
/// # Arguments
/// * `config_path` - Path to the config file (defaults when `None`)
/// * `overrides` - Flag overrides applied after loading
/// * `bucket` - Bucket whose first samples to print
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 config error, 2 generation error
pub fn run(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    bucket: Option<usize>,
    json_output: bool,
) -> Result<ExitCode> {
    let config = match load_config(config_path, overrides) {
        Ok(config) => config,
        Err(e) => {
            if json_output {
                print_json(&GenerateOutput::failure(vec![JsonError::from(&e)], Vec::new()))?;
            } else {
                println!("{} {}", "FAILED".red().bold(), e);
            }
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };

    let prebake = match generate_table(&config) {
        Ok(prebake) => prebake,
        Err(e) => {
            if json_output {
                print_json(&GenerateOutput::failure(vec![JsonError::from(&e)], Vec::new()))?;
            } else {
                println!("{} {}", "FAILED".red().bold(), e);
            }
            return Ok(exit_code_for(&e));
        }
    };

    if json_output {
        print_json(&GenerateOutput {
            success: true,
            outputs: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            report: Some(prebake.report),
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), describe(config_path));
    reporting::print_config_summary(&config);
    println!("{} {}", "Config hash:".dimmed(), prebake.report.config_hash);
    println!("{} {}", "Table hash:".dimmed(), prebake.report.table_hash);
    reporting::print_buckets(&prebake.report);

    if let Some(index) = bucket {
        match prebake.table.get(index) {
            Some(sample) => print_samples(index, sample),
            None => println!(
                "  {} bucket {} out of range (0..{})",
                "!".yellow(),
                index,
                prebake.table.len()
            ),
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_samples(index: usize, sample: &BinauralSample) {
    println!("{} {}", "Bucket:".cyan().bold(), index);
    for (ear, samples) in [("L", &sample.left), ("R", &sample.right)] {
        let head: Vec<String> = samples
            .iter()
            .take(PREVIEW_SAMPLES)
            .map(|s| format!("{:4}", s))
            .collect();
        println!("  {} {} ...", ear.dimmed(), head.join(""));
    }
}
