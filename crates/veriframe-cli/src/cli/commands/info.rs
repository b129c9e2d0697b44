//! `veriframe info` - What the inference service reports about itself.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::education::Explain;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context) -> Result<()> {
    if ctx.explain {
        Explain::info().print();
    }

    let client = ctx.client()?;
    let Some(info) = client.service().info().await else {
        match ctx.output_format {
            OutputFormat::Json => println!("null"),
            _ => println!("{}", "Service information unavailable".yellow()),
        }
        return Ok(());
    };

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&info)?);
        }
        OutputFormat::Csv => {
            println!("status,model_loaded,device,version");
            println!(
                "{},{},{},{}",
                info.status.as_deref().unwrap_or(""),
                info.model_loaded.map(|b| b.to_string()).unwrap_or_default(),
                info.device.as_deref().unwrap_or(""),
                info.version.as_deref().unwrap_or("")
            );
        }
        OutputFormat::Pretty => {
            if let Some(message) = &info.message {
                println!("{}", message.bold());
                println!();
            }
            println!("  {} {}", "Base URL:".bold(), client.base_url().cyan());
            println!("  {} {}", "Status:".bold(), info.status.as_deref().unwrap_or("N/A"));
            println!("  {} {}", "Model:".bold(), info.model.as_deref().unwrap_or("N/A"));
            println!(
                "  {} {}",
                "Model Loaded:".bold(),
                match info.model_loaded {
                    Some(true) => "Yes",
                    Some(false) => "No",
                    None => "N/A",
                }
            );
            println!("  {} {}", "Device:".bold(), info.device.as_deref().unwrap_or("N/A"));
            println!("  {} {}", "Version:".bold(), info.version.as_deref().unwrap_or("N/A"));
        }
    }

    Ok(())
}
