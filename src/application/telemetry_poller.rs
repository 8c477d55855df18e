// Telemetry poller - Refreshes display fields from /api/stats on a timer
use crate::application::device_api::DeviceApi;
use crate::application::view::SharedView;
use crate::domain::chart::time_label;
use crate::infrastructure::error::ApiError;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

#[derive(Clone)]
pub struct TelemetryPoller {
    api: Arc<dyn DeviceApi>,
    view: SharedView,
    cores: usize,
}

impl TelemetryPoller {
    pub fn new(api: Arc<dyn DeviceApi>, view: SharedView, cores: usize) -> Self {
        Self { api, view, cores }
    }

    /// One poll. The view is only touched once a snapshot has decoded, so a
    /// failed fetch leaves whatever was displayed before.
    pub async fn tick(&self) -> Result<(), ApiError> {
        let snapshot = self.api.fetch_stats().await?;
        let label = time_label(&chrono::Local::now());

        self.view
            .write()
            .await
            .apply_snapshot(&snapshot, self.cores, label);
        Ok(())
    }

    /// Poll forever. The first tick fires immediately; ticks missed while a
    /// request is outstanding are dropped, not queued.
    pub async fn run(self, period: Duration) {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!("Polling stats every {:?} ({} cores)", period, self.cores);
        loop {
            ticker.tick().await;
            if let Err(e) = self.tick().await {
                tracing::debug!(path = e.path(), "Skipping stats tick: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::device_api::fake::FakeDevice;
    use crate::application::view::DashboardView;
    use crate::domain::display::DisplayField;
    use crate::domain::telemetry::StatsSnapshot;

    fn snapshot(pct: f64) -> StatsSnapshot {
        StatsSnapshot {
            distance_m: Some(1.25),
            battery_pct: Some(pct),
            load_1: Some(1.0),
            led_mode: Some("reverse".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_tick_updates_fields() {
        let device = Arc::new(FakeDevice::default());
        device.set_stats(Some(snapshot(55.0)));
        let view = DashboardView::shared(120);
        let poller = TelemetryPoller::new(device, view.clone(), 2);

        poller.tick().await.unwrap();

        let view = view.read().await;
        assert_eq!(view.field(DisplayField::Load1), "50 %");
        assert_eq!(view.field(DisplayField::RevStatus), "LED: reverse");
        assert_eq!(view.chart.len(), 1);
        assert_eq!(view.chart.border_color, "#2ecc71");
    }

    #[tokio::test]
    async fn test_failed_tick_keeps_previous_state() {
        let device = Arc::new(FakeDevice::default());
        device.set_stats(Some(snapshot(15.0)));
        let view = DashboardView::shared(120);
        let poller = TelemetryPoller::new(device.clone(), view.clone(), 4);
        poller.tick().await.unwrap();
        let before = serde_json::to_value(&*view.read().await).unwrap();

        device.set_stats(None);
        assert!(poller.tick().await.is_err());

        let after = serde_json::to_value(&*view.read().await).unwrap();
        assert_eq!(before, after);
        assert_eq!(view.read().await.field(DisplayField::BatteryPct), "15");
    }

    #[tokio::test]
    async fn test_repeated_polling_stays_within_window() {
        let device = Arc::new(FakeDevice::default());
        let view = DashboardView::shared(120);
        let poller = TelemetryPoller::new(device.clone(), view.clone(), 4);

        for i in 0..150 {
            device.set_stats(Some(snapshot(i as f64)));
            poller.tick().await.unwrap();
        }

        let view = view.read().await;
        assert_eq!(view.chart.len(), 120);
        assert_eq!(view.chart.points.front().unwrap().value, Some(30.0));
        assert_eq!(view.chart.points.back().unwrap().value, Some(149.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_polls_immediately_at_startup() {
        let device = Arc::new(FakeDevice::default());
        device.set_stats(Some(snapshot(35.0)));
        let view = DashboardView::shared(120);
        let poller = TelemetryPoller::new(device, view.clone(), 4);
        let start = tokio::time::Instant::now();
        let handle = tokio::spawn(poller.run(Duration::from_secs(2)));

        for _ in 0..8 {
            tokio::task::yield_now().await;
        }

        assert!(start.elapsed() < Duration::from_secs(2));
        let v = view.read().await;
        assert_eq!(v.field(DisplayField::BatteryPct), "35");
        assert_eq!(v.chart.len(), 1);
        drop(v);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_keeps_polling_after_failures() {
        let device = Arc::new(FakeDevice::default());
        let view = DashboardView::shared(120);
        let poller = TelemetryPoller::new(device.clone(), view.clone(), 4);
        let handle = tokio::spawn(poller.run(Duration::from_secs(2)));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(view.read().await.chart.is_empty());

        device.set_stats(Some(snapshot(80.0)));
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(view.read().await.field(DisplayField::BatteryPct), "80");

        handle.abort();
    }
}
