//! Generate command implementation
//!
//! Bakes the table for a config and writes it as C header and source files,
//! optionally with per-bucket WAV previews.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use azbake_backend_audio::{generate_table, Prebake, PrebakeResult, TableSink, WavPreviewSink};
use azbake_spec::{validate_config, PrebakeConfig, ValidationWarning};
use colored::Colorize;

use super::json_output::{print_json, GenerateOutput, JsonError, JsonWarning};
use super::validate::describe;
use super::{exit_code_for, reporting, EXIT_CONFIG};
use crate::csource::CSourceSink;
use crate::input::{load_config, ConfigOverrides};

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Config file; built-in defaults when `None`.
    pub config: Option<PathBuf>,
    /// Flag overrides applied after loading.
    pub overrides: ConfigOverrides,
    /// Directory for the C files.
    pub out_dir: PathBuf,
    /// Symbol and file prefix; `az{bucket_count}` when `None`.
    pub prefix: Option<String>,
    /// Directory for per-bucket WAV previews, if wanted.
    pub wav_preview: Option<PathBuf>,
    /// Machine-readable output.
    pub json: bool,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 config error, 2 generation or output error
pub fn run(options: &GenerateOptions) -> Result<ExitCode> {
    if options.json {
        run_json(options)
    } else {
        run_human(options)
    }
}

fn run_human(options: &GenerateOptions) -> Result<ExitCode> {
    let start = Instant::now();
    println!(
        "{} {}",
        "Generating:".cyan().bold(),
        describe(options.config.as_deref())
    );

    let config = match load_config(options.config.as_deref(), &options.overrides) {
        Ok(config) => config,
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), e);
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };
    reporting::print_config_summary(&config);

    let validation = validate_config(&config);
    reporting::print_validation(&validation);
    if validation.is_err() {
        println!(
            "\n{} Config has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(EXIT_CONFIG));
    }

    let prebake = match generate_table(&config) {
        Ok(prebake) => prebake,
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), e);
            return Ok(exit_code_for(&e));
        }
    };
    reporting::print_buckets(&prebake.report);

    let outputs = match write_outputs(options, &config, &prebake) {
        Ok(outputs) => outputs,
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), e);
            return Ok(exit_code_for(&e));
        }
    };
    for path in &outputs {
        println!("{} {}", "Wrote:".cyan().bold(), path.display());
    }

    println!(
        "\n{} Baked table {} ({}ms)",
        "SUCCESS".green().bold(),
        &prebake.report.table_hash[..16],
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(options: &GenerateOptions) -> Result<ExitCode> {
    let config = match load_config(options.config.as_deref(), &options.overrides) {
        Ok(config) => config,
        Err(e) => {
            print_json(&GenerateOutput::failure(vec![JsonError::from(&e)], Vec::new()))?;
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };

    let validation = validate_config(&config);
    let warnings = json_warnings(&validation.warnings);
    if validation.is_err() {
        let errors = validation.errors.iter().map(JsonError::from).collect();
        print_json(&GenerateOutput::failure(errors, warnings))?;
        return Ok(ExitCode::from(EXIT_CONFIG));
    }

    let prebake = match generate_table(&config) {
        Ok(prebake) => prebake,
        Err(e) => {
            print_json(&GenerateOutput::failure(vec![JsonError::from(&e)], warnings))?;
            return Ok(exit_code_for(&e));
        }
    };

    match write_outputs(options, &config, &prebake) {
        Ok(outputs) => {
            print_json(&GenerateOutput {
                success: true,
                outputs: outputs.iter().map(|p| p.display().to_string()).collect(),
                errors: Vec::new(),
                warnings,
                report: Some(prebake.report),
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_json(&GenerateOutput::failure(vec![JsonError::from(&e)], warnings))?;
            Ok(exit_code_for(&e))
        }
    }
}

/// Writes the C files and, if requested, the WAV previews.
///
/// # Returns
/// Every path written, C header first. Sink failures come back as
/// [`azbake_backend_audio::PrebakeError::Sink`].
pub fn write_outputs(
    options: &GenerateOptions,
    config: &PrebakeConfig,
    prebake: &Prebake,
) -> PrebakeResult<Vec<PathBuf>> {
    let prefix = options
        .prefix
        .clone()
        .unwrap_or_else(|| default_prefix(config.bucket_count));

    let mut csource = CSourceSink::new(&options.out_dir, prefix.clone()).with_stamp(format!(
        "config {} table {}",
        prebake.report.config_hash, prebake.report.table_hash
    ));
    csource.write_table(&prebake.table)?;
    let mut outputs = vec![csource.header_path(), csource.source_path()];

    if let Some(ref dir) = options.wav_preview {
        let mut preview = WavPreviewSink::new(dir, prefix, config.sample_rate);
        preview.write_table(&prebake.table)?;
        outputs.extend(preview.written().iter().cloned());
    }
    Ok(outputs)
}

/// Symbol prefix used when none is given: `az32` for 32 buckets.
pub fn default_prefix(bucket_count: usize) -> String {
    format!("az{}", bucket_count)
}

fn json_warnings(warnings: &[ValidationWarning]) -> Vec<JsonWarning> {
    warnings.iter().map(JsonWarning::from).collect()
}
