//! `veriframe config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;
use veriframe::DEFAULT_BASE_URL;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&config)?);
        }
        _ => {
            println!("{}", "Current Configuration:".bold());
            println!();

            let url_display = config.api_url.clone().unwrap_or_else(|| {
                format!("{} {}", DEFAULT_BASE_URL, "(default)".dimmed())
            });
            println!("  {} {}", "api_url:".bold(), url_display);
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or(OutputFormat::Pretty)
            );
            println!("  {} {}", "explain_by_default:".bold(), config.explain_by_default);

            if let Some(active) = &ctx.api_url {
                if config.api_url.as_ref() != Some(active) {
                    println!();
                    println!("{} {}", "Active override (flag/env):".dimmed(), active.cyan());
                }
            }
        }
    }

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
