//! `veriframe health` - Inference service status.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use veriframe::HealthMonitor;

use super::Context;
use crate::cli::args::HealthArgs;
use crate::education::Explain;
use crate::output::render_health;

pub async fn execute(ctx: Context, args: HealthArgs) -> Result<()> {
    if ctx.explain {
        Explain::health(args.watch).print();
    }

    let client = ctx.client()?;

    if !args.watch {
        let status = client.service().health().await;
        println!("{}", render_health(Some(&status), ctx.output_format, ctx.no_color)?);
        return Ok(());
    }

    let interval = Duration::from_secs(args.interval.max(1));
    let mut monitor = HealthMonitor::new(Arc::new(client), interval);
    let mut updates = monitor.subscribe();
    println!("{}", render_health(None, ctx.output_format, ctx.no_color)?);
    monitor.start();

    let mut last = None;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let status = updates.borrow_and_update().clone();
                let display = status.as_ref().map(veriframe::HealthStatus::display);
                if display != last {
                    println!("{}", render_health(status.as_ref(), ctx.output_format, ctx.no_color)?);
                    last = display;
                }
            }
        }
    }

    monitor.stop();
    Ok(())
}
