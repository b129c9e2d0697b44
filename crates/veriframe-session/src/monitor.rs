//! Periodic health polling.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use veriframe_client::HealthProbe;
use veriframe_core::{HealthDisplay, HealthStatus};

/// Polls a [`HealthProbe`] on a fixed interval and caches the last status.
///
/// `start` runs one check immediately and then one per interval; `stop`
/// aborts the polling task. Dropping the monitor stops it.
pub struct HealthMonitor {
    probe: Arc<dyn HealthProbe>,
    interval: Duration,
    status: Arc<watch::Sender<Option<HealthStatus>>>,
    task: Option<JoinHandle<()>>,
}

impl HealthMonitor {
    /// Create a stopped monitor
    #[must_use]
    pub fn new(probe: Arc<dyn HealthProbe>, interval: Duration) -> Self {
        let (status, _) = watch::channel(None);
        Self {
            probe,
            interval,
            status: Arc::new(status),
            task: None,
        }
    }

    /// Start polling on the current tokio runtime. No-op if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            debug!("health monitor already running");
            return;
        }

        let probe = Arc::clone(&self.probe);
        let status = Arc::clone(&self.status);
        let period = self.interval;

        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let checked = probe.check().await;
                debug!(
                    reachable = checked.reachable,
                    model_ready = checked.model_ready,
                    "health check completed"
                );
                status.send_replace(Some(checked));
            }
        }));
        info!(interval_secs = period.as_secs(), "health monitor started");
    }

    /// Stop polling. The last status stays cached.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("health monitor stopped");
        }
    }

    /// Returns true while the polling task is alive
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Last completed check; `None` until the first one finishes
    #[must_use]
    pub fn status(&self) -> Option<HealthStatus> {
        self.status.borrow().clone()
    }

    /// What the status indicator should show
    #[must_use]
    pub fn display(&self) -> HealthDisplay {
        HealthDisplay::from_status(self.status.borrow().as_ref())
    }

    /// Receive every status update
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<HealthStatus>> {
        self.status.subscribe()
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}
