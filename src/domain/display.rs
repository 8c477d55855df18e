// Display fields rendered from a stats snapshot
use super::telemetry::StatsSnapshot;

pub const PLACEHOLDER: &str = "--";
pub const DISTANCE_PLACEHOLDER: &str = "--.-";

/// A named text slot on the dashboard, identified by its element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DisplayField {
    Distance,
    RevDistance,
    LedMode,
    LedModeDup,
    RevStatus,
    BusVoltage,
    Current,
    Power,
    BatteryPct,
    Wifi,
    CpuTemp,
    Load1,
}

impl DisplayField {
    pub const ALL: [DisplayField; 12] = [
        DisplayField::Distance,
        DisplayField::RevDistance,
        DisplayField::LedMode,
        DisplayField::LedModeDup,
        DisplayField::RevStatus,
        DisplayField::BusVoltage,
        DisplayField::Current,
        DisplayField::Power,
        DisplayField::BatteryPct,
        DisplayField::Wifi,
        DisplayField::CpuTemp,
        DisplayField::Load1,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            DisplayField::Distance => "distance",
            DisplayField::RevDistance => "rev_distance",
            DisplayField::LedMode => "led_mode",
            DisplayField::LedModeDup => "led_mode_dup",
            DisplayField::RevStatus => "rev_status",
            DisplayField::BusVoltage => "bus_v",
            DisplayField::Current => "curr_a",
            DisplayField::Power => "power_w",
            DisplayField::BatteryPct => "bat_pct",
            DisplayField::Wifi => "wifi",
            DisplayField::CpuTemp => "cpu_t",
            DisplayField::Load1 => "load1",
        }
    }

    /// Text shown before the first reading and whenever the source value is absent.
    pub fn placeholder(self) -> &'static str {
        match self {
            DisplayField::Distance => DISTANCE_PLACEHOLDER,
            DisplayField::RevDistance => "--.- m",
            DisplayField::RevStatus => "LED: --",
            _ => PLACEHOLDER,
        }
    }
}

/// Format with a fixed number of decimals, `None` when there is nothing to show.
/// Ties round away from zero (`72.5` → `73`), not to even.
pub fn format_fixed(value: Option<f64>, decimals: usize) -> Option<String> {
    value.filter(|v| v.is_finite()).map(|v| {
        let scale = 10f64.powi(decimals as i32);
        let rounded = (v * scale).round() / scale;
        let rounded = if rounded.is_finite() { rounded } else { v };
        format!("{:.*}", decimals, rounded)
    })
}

/// One-minute load average as a percentage of the available cores.
pub fn load_percent(load_1: f64, cores: usize) -> f64 {
    load_1 / cores.max(1) as f64 * 100.0
}

/// Render every display field for `snapshot`, substituting placeholders for
/// absent values.
pub fn render_snapshot(snapshot: &StatsSnapshot, cores: usize) -> Vec<(DisplayField, String)> {
    let led = snapshot.led_mode.as_deref().unwrap_or(PLACEHOLDER);
    let load = format_fixed(snapshot.load_1.map(|l| load_percent(l, cores)), 0)
        .map(|pct| format!("{} %", pct));

    let values = [
        (DisplayField::Distance, format_fixed(snapshot.distance_m, 1)),
        (
            DisplayField::RevDistance,
            format_fixed(snapshot.distance_m, 1).map(|d| format!("{} m", d)),
        ),
        (DisplayField::LedMode, Some(led.to_string())),
        (DisplayField::LedModeDup, Some(led.to_string())),
        (DisplayField::RevStatus, Some(format!("LED: {}", led))),
        (DisplayField::BusVoltage, format_fixed(snapshot.bus_voltage_v, 2)),
        (DisplayField::Current, format_fixed(snapshot.current_a, 2)),
        (DisplayField::Power, format_fixed(snapshot.power_w, 2)),
        (DisplayField::BatteryPct, format_fixed(snapshot.battery_pct, 0)),
        (DisplayField::Wifi, snapshot.wifi_signal.map(|w| w.to_string())),
        (DisplayField::CpuTemp, format_fixed(snapshot.cpu_temp_c, 1)),
        (DisplayField::Load1, load),
    ];

    values
        .into_iter()
        .map(|(field, text)| {
            let text = text.unwrap_or_else(|| field.placeholder().to_string());
            (field, text)
        })
        .collect()
}
