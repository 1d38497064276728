//! CLI argument definitions for the azbake command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Args)]` and `#[derive(Subcommand)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use std::path::PathBuf;

use azbake_cli::input::ConfigOverrides;
use clap::{ArgAction, Args, Parser, Subcommand};

/// azbake - Prebaked binaural azimuth tables
#[derive(Parser)]
#[command(name = "azbake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Bake the table and write C header and source files
    Generate {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output directory for the C files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Symbol and file prefix (default: az<bucket count>)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Also write one stereo WAV per bucket into this directory
        #[arg(long)]
        wav_preview: Option<PathBuf>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Bake the table in memory and print per-bucket details
    Inspect {
        #[command(flatten)]
        config: ConfigArgs,

        /// Print the first samples of this bucket
        #[arg(short, long)]
        bucket: Option<usize>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a config without generating anything
    Validate {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write the default config to a file
    Init {
        /// Path of the config file to create
        #[arg(default_value = "azbake.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Config file and per-field overrides shared by every baking command.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct ConfigArgs {
    /// Path to the JSON config (default: built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(long)]
    pub seed: Option<u32>,

    /// Override the measured HRIR dataset directory
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Override the number of azimuth buckets
    #[arg(long)]
    pub buckets: Option<usize>,

    /// Override the loop length in samples
    #[arg(long)]
    pub loop_len: Option<usize>,

    /// Override the sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,
}

impl ConfigArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seed: self.seed,
            dataset: self.dataset.clone(),
            buckets: self.buckets,
            loop_len: self.loop_len,
            sample_rate: self.sample_rate,
        }
    }
}
