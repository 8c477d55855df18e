// Wi-Fi service - Scan and connect actions
use crate::application::device_api::DeviceApi;
use crate::application::view::SharedView;
use crate::domain::acknowledgment::Acknowledgment;
use crate::domain::wifi::{ConnectRequest, SCANNING_ENTRY};
use crate::infrastructure::error::ApiError;
use std::sync::Arc;

#[derive(Clone)]
pub struct WifiService {
    api: Arc<dyn DeviceApi>,
    view: SharedView,
}

impl WifiService {
    pub fn new(api: Arc<dyn DeviceApi>, view: SharedView) -> Self {
        Self { api, view }
    }

    /// Show `Scanning…` while the scan runs, then one entry per network. A
    /// failed scan puts the previous list back.
    pub async fn scan(&self) -> Result<Vec<String>, ApiError> {
        let previous = self.show_scanning().await;

        match self.api.scan_wifi().await {
            Ok(networks) => {
                let entries: Vec<String> = networks.iter().map(|n| n.list_entry()).collect();
                tracing::info!("Wi-Fi scan found {} networks", entries.len());
                self.view.write().await.wifi_list = entries.clone();
                Ok(entries)
            }
            Err(e) => {
                self.restore_after_failure(previous).await;
                Err(e)
            }
        }
    }

    async fn show_scanning(&self) -> Vec<String> {
        std::mem::replace(
            &mut self.view.write().await.wifi_list,
            vec![SCANNING_ENTRY.to_string()],
        )
    }

    /// Only undo our own `Scanning…` marker; an overlapping scan may already
    /// have published its result.
    async fn restore_after_failure(&self, previous: Vec<String>) {
        let mut view = self.view.write().await;
        if is_scanning(&view.wifi_list) {
            view.wifi_list = previous;
        }
    }

    /// Ask the device to join `ssid`. Any failure, including an unreachable
    /// device, is reported as `Connect failed`.
    pub async fn connect(&self, request: &ConnectRequest) -> Acknowledgment {
        let ack = match self.api.connect_wifi(request).await {
            Ok(reply) if reply.ok => Acknowledgment::ConnectRequested,
            Ok(_) => Acknowledgment::ConnectFailed,
            Err(e) => {
                tracing::warn!("Wi-Fi connect to {} failed: {}", request.ssid, e);
                Acknowledgment::ConnectFailed
            }
        };

        self.view.write().await.last_ack = Some(ack);
        ack
    }
}

fn is_scanning(list: &[String]) -> bool {
    matches!(list, [only] if only == SCANNING_ENTRY)
}
