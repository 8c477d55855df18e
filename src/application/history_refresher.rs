// History refresher - Replaces the chart with a fetched window on a timer
use crate::application::device_api::DeviceApi;
use crate::application::view::SharedView;
use crate::infrastructure::config::HistorySettings;
use crate::infrastructure::error::ApiError;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

#[derive(Clone)]
pub struct HistoryRefresher {
    api: Arc<dyn DeviceApi>,
    view: SharedView,
    metric: String,
    minutes: u32,
}

impl HistoryRefresher {
    pub fn new(api: Arc<dyn DeviceApi>, view: SharedView, settings: &HistorySettings) -> Self {
        Self {
            api,
            view,
            metric: settings.metric.clone(),
            minutes: settings.minutes,
        }
    }

    /// Fetch the window and swap it in under a single write lock, so a poll
    /// never observes a mix of old and new points.
    pub async fn tick(&self) -> Result<usize, ApiError> {
        let history = self.api.fetch_history(&self.metric, self.minutes).await?;

        let mut view = self.view.write().await;
        view.apply_history(&history);
        Ok(view.chart.len())
    }

    pub async fn run(self, period: Duration) {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            "Refreshing {} history ({} min) every {:?}",
            self.metric,
            self.minutes,
            period
        );
        loop {
            ticker.tick().await;
            match self.tick().await {
                Ok(points) => tracing::debug!("History refreshed with {} points", points),
                Err(e) => tracing::debug!(path = e.path(), "Skipping history refresh: {}", e),
            }
        }
    }
}
