//! azbake CLI - Command-line interface for baking binaural azimuth tables
//!
//! This binary provides commands for validating configs, inspecting a bake,
//! and writing the baked table as C source for firmware builds.

mod cli_args;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use azbake_cli::commands;
use azbake_cli::commands::generate::GenerateOptions;
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            config,
            out_dir,
            prefix,
            wav_preview,
            json,
        } => commands::generate::run(&GenerateOptions {
            config: config.config.clone(),
            overrides: config.overrides(),
            out_dir,
            prefix,
            wav_preview,
            json,
        }),
        Commands::Inspect {
            config,
            bucket,
            json,
        } => commands::inspect::run(config.config.as_deref(), &config.overrides(), bucket, json),
        Commands::Validate { config, json } => {
            commands::validate::run(config.config.as_deref(), &config.overrides(), json)
        }
        Commands::Init { path, force } => commands::init::run(&path, force),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::EXIT_GENERATE)
        }
    }
}

/// Installs `env_logger`; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
