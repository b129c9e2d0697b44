//! `veriframe load-model` - Ask the service to (re)load its model.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::LoadModelArgs;
use crate::education::Explain;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: LoadModelArgs) -> Result<()> {
    if ctx.explain {
        Explain::load_model(args.path.as_deref()).print();
    }

    let client = ctx.client()?;
    let loaded = client.detection().load_model(args.path.as_deref()).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&loaded)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&loaded)?);
        }
        OutputFormat::Csv => {
            println!("model_path,device");
            println!(
                "{},{}",
                loaded.model_path.as_deref().unwrap_or(""),
                loaded.device.as_deref().unwrap_or("")
            );
        }
        OutputFormat::Pretty => {
            println!(
                "{} {}",
                "Success:".green().bold(),
                loaded.message.as_deref().unwrap_or("Model loaded")
            );
            if let Some(path) = &loaded.model_path {
                println!("  {} {}", "Path:".bold(), path);
            }
            if let Some(device) = &loaded.device {
                println!("  {} {}", "Device:".bold(), device);
            }
        }
    }

    Ok(())
}
