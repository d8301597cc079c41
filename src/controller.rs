use crate::config::SequenceConfig;
use crate::monitor_api::models::monitor_status::MonitorStatus;
use crate::monitor_api::monitor_client::MonitorApiTrait;
use anyhow::Context;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How many times `/status` is polled and how long to wait before each poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencePlan {
    pub poll_count: usize,
    pub poll_interval: Duration,
}

impl Default for SequencePlan {
    fn default() -> Self {
        Self {
            poll_count: 5,
            poll_interval: Duration::from_secs(3),
        }
    }
}

impl From<&SequenceConfig> for SequencePlan {
    fn from(config: &SequenceConfig) -> Self {
        Self {
            poll_count: config.poll_count,
            poll_interval: config.poll_interval(),
        }
    }
}

/// Drives the monitoring app through start, a fixed number of status polls,
/// and stop, writing human-readable results to `out`.
pub struct MonitorController<T, W>
where
    T: MonitorApiTrait,
    W: Write,
{
    api: T,
    out: W,
    plan: SequencePlan,
}

impl<T, W> MonitorController<T, W>
where
    T: MonitorApiTrait,
    W: Write,
{
    pub fn new(api: T, out: W, plan: SequencePlan) -> Self {
        Self { api, out, plan }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn start_monitoring(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Starting monitoring...")?;
        let ack = self.api.start().await?;
        info!("Monitoring started: {}", ack);
        writeln!(self.out, "{}", ack)?;
        Ok(())
    }

    pub async fn get_status(&mut self) -> anyhow::Result<MonitorStatus> {
        let status = self.api.status().await?.into_status()?;

        if let MonitorStatus::Running(ctx) = &status {
            if !ctx.is_resolved() {
                warn!("Monitor is running but Wi-Fi context is unresolved: {:?}", ctx);
            }
            if let Some(expected) = ctx.channel_mismatch() {
                warn!(
                    "Reported channel {} does not match frequency {:?} MHz (expected {})",
                    ctx.ch, ctx.freq, expected
                );
            }
        }

        writeln!(self.out, "{}", status)?;
        Ok(status)
    }

    pub async fn stop_monitoring(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Stopping monitoring...")?;
        let ack = self.api.stop().await?;
        info!("Monitoring stopped: {}", ack);
        writeln!(self.out, "{}", ack)?;
        Ok(())
    }

    /// Start, poll, stop. The first fault ends the run; nothing after it is
    /// attempted, including the stop call.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.start_monitoring().await?;

        for poll in 1..=self.plan.poll_count {
            tokio::time::sleep(self.plan.poll_interval).await;
            debug!("Status poll {}/{}", poll, self.plan.poll_count);
            self.get_status()
                .await
                .with_context(|| format!("Status poll {} failed", poll))?;
        }

        self.stop_monitoring().await
    }
}
