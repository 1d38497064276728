//! Init command implementation
//!
//! Writes the default config as a starting point for customization.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use azbake_spec::PrebakeConfig;
use colored::Colorize;

/// Run the init command
///
/// # Arguments
/// * `path` - Where to write the config
/// * `force` - Overwrite an existing file
///
/// # Returns
/// Exit code: 0 success
pub fn run(path: &Path, force: bool) -> Result<ExitCode> {
    write_default_config(path, force)?;
    println!("{} {}", "Wrote:".cyan().bold(), path.display());
    Ok(ExitCode::SUCCESS)
}

/// Writes the default config to `path`.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut json = PrebakeConfig::default().to_json_pretty()?;
    json.push('\n');
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
