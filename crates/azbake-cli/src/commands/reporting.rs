//! Shared human-readable output helpers.

use azbake_backend_audio::{CurveSource, PrebakeReport};
use azbake_spec::{PrebakeConfig, ValidationResult};
use colored::Colorize;

/// Prints the dimensions and dataset of a config.
pub(crate) fn print_config_summary(config: &PrebakeConfig) {
    println!(
        "{} {} x {} samples @ {} Hz (seed {})",
        "Table:".cyan().bold(),
        config.bucket_count,
        config.loop_len,
        config.sample_rate,
        config.seed
    );
    match config.dataset_dir {
        Some(ref dir) => println!("{} {}", "Dataset:".cyan().bold(), dir.display()),
        None => println!("{} {}", "Dataset:".cyan().bold(), "none (analytic)".dimmed()),
    }
}

/// Prints validation errors and warnings.
pub(crate) fn print_validation(result: &ValidationResult) {
    for error in &result.errors {
        println!("  {} {}", "x".red().bold(), error);
    }
    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
}

/// Prints one line per bucket.
pub(crate) fn print_buckets(report: &PrebakeReport) {
    println!(
        "{}",
        format!(
            "  {:>3}  {:>8}  {:>8}  {:<8}  {:<8}  {:>7}  {:>6}  {:>6}",
            "#", "table", "head", "left", "right", "gain", "pk L", "pk R"
        )
        .dimmed()
    );
    for bucket in &report.buckets {
        println!(
            "  {:>3}  {:>7.2}°  {:>7.2}°  {}  {}  {:>7.3}  {:>6.3}  {:>6.3}",
            bucket.index,
            bucket.angle_deg,
            bucket.head_azimuth_deg,
            source_label(bucket.left_source),
            source_label(bucket.right_source),
            bucket.gain,
            bucket.peak_left,
            bucket.peak_right
        );
    }
    println!(
        "{} {} of {} ear(s) from {} file(s)",
        "Measured:".cyan().bold(),
        report.measured_ear_count(),
        2 * report.bucket_count,
        report.measured_files
    );
}

fn source_label(source: CurveSource) -> String {
    let padded = format!("{:<8}", source.as_str());
    match source {
        CurveSource::Measured => padded.green().to_string(),
        CurveSource::Analytic => padded,
    }
}
