//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Determine output format
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Service address from CLI/env, then config
    let api_url = cli.api_url.or_else(|| config.api_url.clone());

    // Create context for commands
    let ctx = commands::Context {
        api_url,
        output_format,
        explain: cli.explain || config.explain_by_default,
        verbose: cli.verbose,
        no_color: cli.no_color,
    };

    tracing::debug!(api_url = ?ctx.api_url, format = %ctx.output_format, "dispatching command");

    // Dispatch to appropriate command
    match cli.command {
        Commands::Detect(args) => commands::detect::execute(ctx, args).await,
        Commands::Validate(args) => commands::validate::execute(ctx, args).await,
        Commands::Health(args) => commands::health::execute(ctx, args).await,
        Commands::Info => commands::info::execute(ctx).await,
        Commands::LoadModel(args) => commands::load_model::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args).await,
    }
}

/// Log to stderr, honouring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
