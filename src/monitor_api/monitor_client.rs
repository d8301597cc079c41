use crate::config::MonitorConfig;
use crate::monitor_api::models::response::ack_response::AckResponse;
use crate::monitor_api::models::response::status_response::StatusResponse;
use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP client for the Android Wi-Fi RSSI monitoring app.
pub struct MonitorClient {
    client: reqwest::Client,
    base_url: String,
}

impl MonitorClient {
    pub fn new(config: &MonitorConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().context("Unable to build HTTP client")?,
            base_url: config.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<R>(&self, endpoint: &str) -> anyhow::Result<R>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()?;

        let contents = response.text().await?;
        debug!("GET {} returned {}", url, contents);
        serde_json::from_str(&contents)
            .with_context(|| format!("Unable to deserialize response. Body was: \"{}\"", contents))
    }
}

impl MonitorApiTrait for MonitorClient {
    async fn start(&self) -> anyhow::Result<AckResponse> {
        self.get_json("start").await
    }

    async fn status(&self) -> anyhow::Result<StatusResponse> {
        self.get_json("status").await
    }

    async fn stop(&self) -> anyhow::Result<AckResponse> {
        self.get_json("stop").await
    }
}

pub trait MonitorApiTrait {
    fn start(&self) -> impl Future<Output = anyhow::Result<AckResponse>> + Send;
    fn status(&self) -> impl Future<Output = anyhow::Result<StatusResponse>> + Send;
    fn stop(&self) -> impl Future<Output = anyhow::Result<AckResponse>> + Send;
}
