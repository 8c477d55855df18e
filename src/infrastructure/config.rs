use crate::domain::chart::DEFAULT_CAPACITY;
use crate::domain::settings::{FieldKind, FormField};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_POLL_SECS: f64 = 2.0;
const FALLBACK_CORES: usize = 4;
const MIN_INTERVAL: Duration = Duration::from_millis(10);
const MAX_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Poll interval in seconds, injected as `DASHBOARD_POLL`.
    #[serde(default = "default_poll")]
    pub poll: f64,
    #[serde(default)]
    pub device: DeviceSettings,
    #[serde(default)]
    pub history: HistorySettings,
    #[serde(default)]
    pub chart: ChartSettings,
    #[serde(default)]
    pub server: ServerSettings,
    /// Overrides the detected core count used for the load percentage.
    #[serde(default)]
    pub cores: Option<usize>,
    #[serde(default = "default_settings_form")]
    pub settings_form: Vec<FormField>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeviceSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HistorySettings {
    pub metric: String,
    pub minutes: u32,
    pub interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartSettings {
    pub capacity: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            metric: "battery".to_string(),
            minutes: 180,
            interval_secs: 60,
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8090".to_string(),
        }
    }
}

fn default_poll() -> f64 {
    DEFAULT_POLL_SECS
}

fn default_settings_form() -> Vec<FormField> {
    vec![
        FormField::new("led_enabled", FieldKind::Checkbox),
        FormField::new("led_brightness", FieldKind::Text),
        FormField::new("warn_distance_m", FieldKind::Text),
        FormField::new("stop_distance_m", FieldKind::Text),
    ]
}

impl DashboardConfig {
    /// Poll period. Values that are negative, round to zero or overflow a
    /// `Duration` fall back to the default; the rest is clamped to 10ms..=24h.
    pub fn poll_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.poll)
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or(Duration::from_secs_f64(DEFAULT_POLL_SECS))
            .clamp(MIN_INTERVAL, MAX_INTERVAL)
    }

    pub fn history_interval(&self) -> Duration {
        Duration::from_secs(self.history.interval_secs).clamp(Duration::from_secs(1), MAX_INTERVAL)
    }

    /// Configured core count, else what the host reports, else 4.
    pub fn resolve_cores(&self) -> usize {
        self.cores
            .filter(|c| *c > 0)
            .or_else(|| std::thread::available_parallelism().ok().map(|n| n.get()))
            .unwrap_or(FALLBACK_CORES)
    }
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
