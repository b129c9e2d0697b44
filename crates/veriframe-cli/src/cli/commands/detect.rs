//! `veriframe detect` - Submit an image and show the verdict.

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use veriframe::{DetectionSession, SessionState, SubmitOutcome, ValidationOutcome};

use super::{load_file, Context};
use crate::cli::args::FileArgs;
use crate::education::Explain;
use crate::output::{render_prediction, OutputFormat};

pub async fn execute(ctx: Context, args: FileArgs) -> Result<()> {
    if ctx.explain {
        Explain::detect(&args.path.display().to_string()).print();
    }

    let client = Arc::new(ctx.client()?);
    let mut session = DetectionSession::new(client);

    let file = load_file(&args.path, args.media_type.as_deref()).await?;
    if let ValidationOutcome::Rejected(reason) = session.select_file(file) {
        anyhow::bail!(reason);
    }

    match session.submit() {
        SubmitOutcome::Started { request_id } => tracing::debug!(request_id, "prediction started"),
        SubmitOutcome::AlreadySubmitting => anyhow::bail!("a prediction is already in flight"),
        SubmitOutcome::NoFileSelected => anyhow::bail!(veriframe::DetectError::NoFileSelected),
        SubmitOutcome::NoRuntime => {}
    }

    let spinner = spinner(&ctx);
    session.settle().await;
    spinner.finish_and_clear();
    tracing::debug!(state = session.state().name(), "prediction settled");

    match session.state() {
        SessionState::Succeeded(file, result) => {
            println!(
                "{}",
                render_prediction(file.name(), result, ctx.output_format, ctx.no_color)?
            );
            Ok(())
        }
        SessionState::Failed(_, err) => {
            if err.is_retryable() && ctx.output_format == OutputFormat::Pretty {
                eprintln!("{}", "Tip: check `veriframe health` and try again.".yellow());
            }
            anyhow::bail!(err.to_string())
        }
        other => anyhow::bail!("prediction did not settle (state: {})", other.name()),
    }
}

fn spinner(ctx: &Context) -> ProgressBar {
    if ctx.output_format != OutputFormat::Pretty {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message("Analyzing image...");
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
