use std::fmt;

use crate::monitor_api::models::wifi_context::WifiContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorStatus {
    Running(WifiContext),
    Stopped,
}

impl fmt::Display for MonitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorStatus::Running(ctx) => write!(
                f,
                "Status: Running, RSSI: {} dBm, SSID: {}, Ch: {}",
                ctx.rssi, ctx.ssid, ctx.ch
            ),
            MonitorStatus::Stopped => write!(f, "Status: Stopped"),
        }
    }
}
