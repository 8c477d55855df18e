// Telemetry domain models
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

/// Last known reading from `/api/stats`.
///
/// Every field is optional: a field that is missing, `null` or of the wrong
/// JSON type is treated as absent so the display falls back to its
/// placeholder instead of failing the whole poll.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default, deserialize_with = "lenient_number")]
    pub distance_m: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub bus_voltage_v: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub current_a: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub power_w: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub battery_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub wifi_signal: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub cpu_temp_c: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub load_1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub led_mode: Option<String>,
}

/// One row of `/api/history`. `pct` is `None` for minutes without samples.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryPoint {
    #[serde(deserialize_with = "unix_seconds")]
    pub ts: i64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pct: Option<f64>,
}

impl HistoryPoint {
    #[cfg(test)]
    pub fn new(ts: i64, pct: Option<f64>) -> Self {
        Self { ts, pct }
    }
}

pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// Unix seconds given as an integer or a float; fractions are truncated.
fn unix_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        .ok_or_else(|| de::Error::custom(format!("expected unix seconds, got {}", value)))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}
