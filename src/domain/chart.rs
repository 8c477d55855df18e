// Battery chart domain model
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 120;
pub const SERIES_LABEL: &str = "Battery %";

const Y_MIN: f64 = 0.0;
const Y_MAX: f64 = 100.0;
const Y_STEP: f64 = 20.0;

/// Alpha suffix appended to the border color for the area fill.
const FILL_ALPHA: &str = "33";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryBand {
    Unknown,
    Critical,
    Low,
    Healthy,
}

impl BatteryBand {
    pub fn for_pct(pct: Option<f64>) -> Self {
        match pct {
            Some(p) if p.is_nan() => BatteryBand::Unknown,
            Some(p) if p < 20.0 => BatteryBand::Critical,
            Some(p) if p < 50.0 => BatteryBand::Low,
            Some(_) => BatteryBand::Healthy,
            None => BatteryBand::Unknown,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            BatteryBand::Unknown => "#9aa6b2",
            BatteryBand::Critical => "#ff4d4f",
            BatteryBand::Low => "#f0a500",
            BatteryBand::Healthy => "#2ecc71",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Option<f64>,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Rolling battery series. Never holds more than `capacity` points; the
/// oldest point is evicted first.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    pub capacity: usize,
    pub band: BatteryBand,
    pub border_color: String,
    pub background_color: String,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub y_step: Option<f64>,
    pub points: VecDeque<ChartPoint>,
}

impl ChartSeries {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut series = Self {
            label: SERIES_LABEL,
            capacity,
            band: BatteryBand::Unknown,
            border_color: String::new(),
            background_color: String::new(),
            y_min: Some(Y_MIN),
            y_max: Some(Y_MAX),
            y_step: Some(Y_STEP),
            points: VecDeque::with_capacity(capacity),
        };
        series.recolor(None);
        series
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append one live reading and restyle the series for it.
    pub fn push(&mut self, label: impl Into<String>, pct: f64) {
        self.points.push_back(ChartPoint::new(label, Some(pct)));
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
        self.recolor(Some(pct));
    }

    /// Swap in a whole historical window, keeping its newest `capacity`
    /// points, and restyle for the final value.
    pub fn replace(&mut self, points: Vec<ChartPoint>) {
        let skip = points.len().saturating_sub(self.capacity);
        self.points = points.into_iter().skip(skip).collect();
        let last = self.points.back().and_then(|p| p.value);
        self.recolor(last);
    }

    #[cfg(test)]
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.label.as_str())
    }

    fn recolor(&mut self, pct: Option<f64>) {
        self.band = BatteryBand::for_pct(pct);
        self.border_color = self.band.color().to_string();
        self.background_color = format!("{}{}", self.border_color, FILL_ALPHA);
    }
}

/// Wall-clock label for a chart point, `HH:MM:SS` in local time.
pub fn time_label(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

/// Label for a unix timestamp from the history endpoint.
pub fn unix_label(ts: i64) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(at) => time_label(&at.with_timezone(&Local)),
        None => ts.to_string(),
    }
}
