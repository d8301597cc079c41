use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub logging: LoggingConfig,
    pub monitor: MonitorConfig,
    pub sequence: SequenceConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub directory: String,
    pub file: String,
    pub console_level: String,
}

/// Where the Android monitoring app listens.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MonitorConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Unset means the HTTP client's own default (no timeout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SequenceConfig {
    pub poll_count: usize,
    pub poll_interval_seconds: u64,
}

fn default_port() -> u16 {
    8080
}

impl MonitorConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl SequenceConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging: LoggingConfig {
                directory: "./logs".to_string(),
                file: "wifi_monitor.log".to_string(),
                console_level: "info".to_string(),
            },
            monitor: MonitorConfig {
                host: "172.16.198.199".to_string(),
                port: default_port(),
                request_timeout_seconds: None,
            },
            sequence: SequenceConfig {
                poll_count: 5,
                poll_interval_seconds: 3,
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_example<P: AsRef<Path>>(path: P) -> Result<Self> {
        let example_config = Config::default();
        let toml_content = toml::to_string_pretty(&example_config)?;
        fs::write(path, toml_content)?;
        Ok(example_config)
    }
}
