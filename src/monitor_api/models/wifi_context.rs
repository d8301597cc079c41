use serde::Deserialize;

use crate::monitor_api::models::channel::channel_for_frequency;

pub const UNRESOLVED_RSSI: i32 = -127;
pub const UNRESOLVED_SSID: &str = "<unresolved>";
/// Channel reported when the frequency has no known channel.
pub const UNKNOWN_CHANNEL: i32 = -1;
/// Channel reported when no scan result matched the connected SSID.
pub const UNSCANNED_CHANNEL: i32 = -127;

/// Wi-Fi state the monitoring app measured last.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WifiContext {
    pub rssi: i32,
    pub ssid: String,
    pub ch: i32,
    #[serde(default)]
    pub freq: Option<i32>,
}

impl WifiContext {
    /// False while the app still reports its placeholder values.
    pub fn is_resolved(&self) -> bool {
        self.rssi != UNRESOLVED_RSSI
            && self.ssid != UNRESOLVED_SSID
            && self.ch != UNKNOWN_CHANNEL
            && self.ch != UNSCANNED_CHANNEL
    }

    /// Channel implied by `freq` when it disagrees with `ch`.
    pub fn channel_mismatch(&self) -> Option<i32> {
        let expected = channel_for_frequency(self.freq?)?;
        (expected != self.ch).then_some(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(rssi: i32, ssid: &str, ch: i32, freq: Option<i32>) -> WifiContext {
        WifiContext {
            rssi,
            ssid: ssid.to_string(),
            ch,
            freq,
        }
    }

    #[test]
    fn freq_is_optional_on_the_wire() {
        let ctx: WifiContext = serde_json::from_str(r#"{"rssi":-55,"ssid":"Net1","ch":6}"#).unwrap();
        assert_eq!(ctx, context(-55, "Net1", 6, None));

        let ctx: WifiContext =
            serde_json::from_str(r#"{"rssi":-61,"ssid":"Lab","ch":36,"freq":5180}"#).unwrap();
        assert_eq!(ctx.freq, Some(5180));
    }

    #[test]
    fn missing_subfield_is_rejected() {
        let err = serde_json::from_str::<WifiContext>(r#"{"rssi":-55,"ssid":"Net1"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `ch`"));
    }

    #[test]
    fn placeholders_are_not_resolved() {
        assert!(context(-55, "Net1", 6, Some(2437)).is_resolved());
        assert!(!context(UNRESOLVED_RSSI, UNRESOLVED_SSID, UNKNOWN_CHANNEL, None).is_resolved());
        assert!(!context(-70, "Net1", UNSCANNED_CHANNEL, Some(0)).is_resolved());
    }

    #[test]
    fn reports_channel_that_disagrees_with_frequency() {
        assert_eq!(context(-55, "Net1", 6, Some(2437)).channel_mismatch(), None);
        assert_eq!(context(-55, "Net1", 1, Some(2437)).channel_mismatch(), Some(6));
        assert_eq!(context(-55, "Net1", 6, None).channel_mismatch(), None);
        assert_eq!(context(-55, "Net1", -127, Some(0)).channel_mismatch(), None);
    }
}
