// Device API trait - the seam between use cases and the HTTP client
use crate::domain::telemetry::{HistoryPoint, StatsSnapshot};
use crate::domain::wifi::{ConnectReply, ConnectRequest, WifiNetwork};
use crate::infrastructure::error::ApiError;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
pub trait DeviceApi: Send + Sync {
    /// `GET /api/stats`
    async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError>;

    /// `GET /api/history?metric=..&minutes=..`
    async fn fetch_history(&self, metric: &str, minutes: u32) -> Result<Vec<HistoryPoint>, ApiError>;

    /// `POST /api/settings` with the flattened form values
    async fn save_settings(&self, values: &BTreeMap<String, String>) -> Result<(), ApiError>;

    /// `POST /api/led/test`
    async fn test_led(&self) -> Result<(), ApiError>;

    /// `POST /api/wifi/scan`
    async fn scan_wifi(&self) -> Result<Vec<WifiNetwork>, ApiError>;

    /// `POST /api/wifi/connect`
    async fn connect_wifi(&self, request: &ConnectRequest) -> Result<ConnectReply, ApiError>;
}
