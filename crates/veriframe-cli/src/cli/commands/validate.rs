//! `veriframe validate` - Check a file locally without uploading it.

use anyhow::Result;
use colored::Colorize;
use veriframe::{validate, ValidationOutcome};

use super::{load_file, Context};
use crate::cli::args::FileArgs;
use crate::education::Explain;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: FileArgs) -> Result<()> {
    if ctx.explain {
        Explain::validate(&args.path.display().to_string()).print();
    }

    let file = load_file(&args.path, args.media_type.as_deref()).await?;
    let outcome = validate(&file);
    let accepted = outcome.is_accepted();
    let reason = match &outcome {
        ValidationOutcome::Accepted => None,
        ValidationOutcome::Rejected(reason) => Some(reason.to_string()),
    };

    match ctx.output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "file": file.name(),
                    "media_type": file.media_type(),
                    "size": file.size(),
                    "accepted": accepted,
                    "reason": reason,
                }))?
            );
        }
        OutputFormat::Yaml => {
            println!(
                "{}",
                serde_yaml::to_string(&serde_json::json!({
                    "file": file.name(),
                    "media_type": file.media_type(),
                    "size": file.size(),
                    "accepted": accepted,
                    "reason": reason,
                }))?
            );
        }
        OutputFormat::Csv => {
            println!("file,media_type,size,accepted");
            println!(
                "{},{},{},{}",
                file.name(),
                file.media_type().unwrap_or(""),
                file.size(),
                accepted
            );
        }
        OutputFormat::Pretty => {
            println!("{} {}", "File:".bold(), file.name());
            println!("{} {}", "Type:".bold(), file.media_type().unwrap_or("(unknown)"));
            println!("{} {} bytes", "Size:".bold(), file.size());
            if accepted {
                println!("{}", "Accepted".green().bold());
            }
        }
    }

    outcome.into_result()?;
    Ok(())
}
