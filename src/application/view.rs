// Shared dashboard view - the in-memory stand-in for the page
use crate::domain::acknowledgment::Acknowledgment;
use crate::domain::chart::{ChartPoint, ChartSeries, unix_label};
use crate::domain::display::{DisplayField, render_snapshot};
use crate::domain::telemetry::{HistoryPoint, StatsSnapshot};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedView = Arc<RwLock<DashboardView>>;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Display text keyed by element id.
    pub fields: BTreeMap<&'static str, String>,
    pub chart: ChartSeries,
    pub wifi_list: Vec<String>,
    pub last_ack: Option<Acknowledgment>,
}

impl DashboardView {
    pub fn new(chart_capacity: usize) -> Self {
        let fields = DisplayField::ALL
            .iter()
            .map(|f| (f.element_id(), f.placeholder().to_string()))
            .collect();

        Self {
            fields,
            chart: ChartSeries::new(chart_capacity),
            wifi_list: Vec::new(),
            last_ack: None,
        }
    }

    pub fn shared(chart_capacity: usize) -> SharedView {
        Arc::new(RwLock::new(Self::new(chart_capacity)))
    }

    #[cfg(test)]
    pub fn field(&self, field: DisplayField) -> &str {
        self.fields
            .get(field.element_id())
            .map(String::as_str)
            .unwrap_or_else(|| field.placeholder())
    }

    /// Rewrite every display field from `snapshot` and, when it carries a
    /// battery reading, append it to the chart under `label`.
    pub fn apply_snapshot(&mut self, snapshot: &StatsSnapshot, cores: usize, label: String) {
        for (field, text) in render_snapshot(snapshot, cores) {
            self.fields.insert(field.element_id(), text);
        }

        if let Some(pct) = snapshot.battery_pct.filter(|p| p.is_finite()) {
            self.chart.push(label, pct);
        }
    }

    pub fn apply_history(&mut self, history: &[HistoryPoint]) {
        let points = history
            .iter()
            .map(|h| ChartPoint::new(unix_label(h.ts), h.pct))
            .collect();
        self.chart.replace(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::BatteryBand;

    #[test]
    fn test_new_view_shows_placeholders() {
        let view = DashboardView::new(120);

        assert_eq!(view.fields.len(), DisplayField::ALL.len());
        assert_eq!(view.field(DisplayField::Distance), "--.-");
        assert_eq!(view.field(DisplayField::BatteryPct), "--");
        assert!(view.chart.is_empty());
    }

    #[test]
    fn test_snapshot_without_battery_leaves_chart_alone() {
        let mut view = DashboardView::new(120);
        let snapshot = StatsSnapshot {
            distance_m: Some(3.0),
            ..Default::default()
        };

        view.apply_snapshot(&snapshot, 4, "12:00:00".into());

        assert_eq!(view.field(DisplayField::Distance), "3.0");
        assert!(view.chart.is_empty());
    }

    #[test]
    fn test_snapshot_with_battery_appends_and_recolors() {
        let mut view = DashboardView::new(120);
        let snapshot = StatsSnapshot {
            battery_pct: Some(42.0),
            ..Default::default()
        };

        view.apply_snapshot(&snapshot, 4, "12:00:00".into());

        assert_eq!(view.chart.len(), 1);
        assert_eq!(view.chart.band, BatteryBand::Low);
        assert_eq!(view.field(DisplayField::BatteryPct), "42");
    }

    #[test]
    fn test_view_serializes_by_element_id() {
        let view = DashboardView::new(120);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["fields"]["rev_status"], "LED: --");
        assert_eq!(json["chart"]["border_color"], "#9aa6b2");
        assert!(json["last_ack"].is_null());
    }
}
