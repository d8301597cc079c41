mod config;
mod controller;
pub mod monitor_api;

use anyhow::Context;
use std::io::Write;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt};

use crate::config::{Config, LoggingConfig};
use crate::controller::{MonitorController, SequencePlan};
use crate::monitor_api::monitor_client::MonitorClient;

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
pub async fn main() {
    let mut out = std::io::stdout();

    let config = match load_config(Path::new(CONFIG_PATH), &mut out) {
        Ok(config) => config,
        Err(e) => {
            report_outcome(Err(e), &mut out);
            return;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Logging disabled: {:#}", e);
    }

    let result = run(&config, &mut out).await;
    report_outcome(result, &mut out);
}

/// Reads `path`, or falls back to the example settings when it does not
/// exist. Writing the example file is best effort.
fn load_config<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<Config> {
    if path.exists() {
        return Config::from_file(path)
            .with_context(|| format!("Unable to load {}", path.display()));
    }

    writeln!(out, "Config file not found. Creating example {}...", path.display())?;
    match Config::save_example(path) {
        Ok(example) => {
            writeln!(
                out,
                "Edit {} to point at your device. Using the example settings for now.",
                path.display()
            )?;
            Ok(example)
        }
        Err(e) => {
            writeln!(
                out,
                "Unable to write {} ({:#}). Using the example settings for now.",
                path.display(),
                e
            )?;
            Ok(Config::default())
        }
    }
}

async fn run<W: Write>(config: &Config, out: W) -> anyhow::Result<()> {
    let client = MonitorClient::new(&config.monitor)?;
    info!("Driving monitor at {}", client.base_url());

    let mut controller =
        MonitorController::new(client, out, SequencePlan::from(&config.sequence));
    let result = controller.run().await;
    controller.into_output().flush()?;
    result
}

/// Every fault ends the sequence here; the process still exits normally.
fn report_outcome<W: Write>(result: anyhow::Result<()>, out: &mut W) {
    if let Err(e) = result {
        error!("Monitoring sequence aborted: {:?}", e);
        let _ = writeln!(out, "Error: {:#}", e);
        let _ = out.flush();
    }
}

fn file_appender(logging: &LoggingConfig) -> anyhow::Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(logging.file.clone())
        .build(&logging.directory)
        .with_context(|| format!("Unable to open log directory {}", logging.directory))
}

fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let (file_layer, file_error) = match file_appender(logging) {
        Ok(appender) => (
            Some(
                fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_filter(EnvFilter::new("wifi_monitor_control=debug")),
            ),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    // Console logs go to stderr so stdout only carries the monitor output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(&logging.console_level));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    if let Some(e) = file_error {
        warn!("File logging disabled: {:#}", e);
    }
    Ok(())
}
