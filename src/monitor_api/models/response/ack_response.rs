use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Acknowledgment body of `/start` and `/stop`. The app decides its shape,
/// so it is kept as raw JSON.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct AckResponse(pub Value);

impl fmt::Display for AckResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_body_as_compact_json() {
        let ack: AckResponse = serde_json::from_str(r#"{ "result" : "started" }"#).unwrap();
        assert_eq!(ack.to_string(), r#"{"result":"started"}"#);
    }

    #[test]
    fn rejects_non_json() {
        assert!(serde_json::from_str::<AckResponse>("<html>ok</html>").is_err());
    }
}
