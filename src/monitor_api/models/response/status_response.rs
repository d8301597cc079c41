use serde::Deserialize;
use serde_json::Value;

use crate::monitor_api::models::monitor_status::MonitorStatus;
use crate::monitor_api::models::wifi_context::WifiContext;

#[derive(Deserialize, Clone, Debug)]
pub struct StatusResponse {
    #[serde(rename = "isStarted")]
    pub is_started: bool,
    /// Only read once the monitor reports it is started.
    #[serde(rename = "wifiContext")]
    pub wifi_context: Option<Value>,
}

impl StatusResponse {
    /// A started monitor must report its Wi-Fi context; a stopped one may
    /// send anything there.
    pub fn into_status(self) -> anyhow::Result<MonitorStatus> {
        if !self.is_started {
            return Ok(MonitorStatus::Stopped);
        }
        match self.wifi_context {
            Some(Value::Null) | None => anyhow::bail!("missing field `wifiContext`"),
            Some(ctx) => Ok(MonitorStatus::Running(serde_json::from_value::<WifiContext>(ctx)?)),
        }
    }
}
