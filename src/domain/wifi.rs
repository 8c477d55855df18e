// Wi-Fi scan and connect models
use super::display::PLACEHOLDER;
use super::telemetry::lenient_number;
use serde::{Deserialize, Serialize};

pub const SCANNING_ENTRY: &str = "Scanning…";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WifiNetwork {
    pub ssid: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub signal: Option<f64>,
    #[serde(default)]
    pub security: String,
}

impl WifiNetwork {
    /// List line, e.g. `garage — 72% — WPA2`.
    pub fn list_entry(&self) -> String {
        let signal = self
            .signal
            .map(|s| s.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        format!("{} — {}% — {}", self.ssid, signal, self.security)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub ssid: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ConnectReply {
    #[serde(default)]
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_entry() {
        let nets: Vec<WifiNetwork> = serde_json::from_str(
            r#"[{"ssid": "garage", "signal": 72, "security": "WPA2"},
                {"ssid": "cafe", "signal": null, "security": ""}]"#,
        )
        .unwrap();

        assert_eq!(nets[0].list_entry(), "garage — 72% — WPA2");
        assert_eq!(nets[1].list_entry(), "cafe — --% — ");
    }

    #[test]
    fn test_connect_reply_without_ok_is_failure() {
        let reply: ConnectReply = serde_json::from_str("{}").unwrap();
        assert!(!reply.ok);
    }
}
