//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use crate::output::OutputFormat;

/// Detect tampering in images with the VeriFrame inference service
///
/// Submit a JPEG, PNG or WebP image (up to 10MB) and get an
/// Authentic/Tampered verdict with confidence scores.
/// Use --explain on any command to learn what it does.
#[derive(Parser, Debug)]
#[command(name = "veriframe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Inference service address (or set VERIFRAME_API_URL)
    #[arg(long, env = "VERIFRAME_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Explain what this command does (educational mode)
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit an image and show the authenticity verdict
    Detect(FileArgs),

    /// Check whether an image would be accepted, without uploading it
    Validate(FileArgs),

    /// Show inference service status
    Health(HealthArgs),

    /// Show inference service information
    Info,

    /// Ask the inference service to (re)load its model
    LoadModel(LoadModelArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Detect / validate commands
// ============================================================================

#[derive(Args, Debug)]
pub struct FileArgs {
    /// Image file to check
    pub path: PathBuf,

    /// Declare the media type instead of guessing from the extension
    #[arg(short = 't', long = "type")]
    pub media_type: Option<String>,
}

// ============================================================================
// Health command
// ============================================================================

#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Keep polling and print every status change until Ctrl-C
    #[arg(short, long)]
    pub watch: bool,

    /// Seconds between checks in watch mode
    #[arg(long, default_value = "30")]
    pub interval: u64,
}

// ============================================================================
// Load-model command
// ============================================================================

#[derive(Args, Debug)]
pub struct LoadModelArgs {
    /// Weights file on the server (defaults to the service's own path)
    #[arg(long)]
    pub path: Option<String>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., api_url, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
