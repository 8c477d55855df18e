// Main entry point - Dependency injection, timers and view server
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::device_api::DeviceApi;
use crate::application::history_refresher::HistoryRefresher;
use crate::application::settings_service::SettingsService;
use crate::application::telemetry_poller::TelemetryPoller;
use crate::application::view::DashboardView;
use crate::application::wifi_service::WifiService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_device_api::HttpDeviceApi;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    let cores = config.resolve_cores();

    // Create device client (infrastructure layer)
    let api: Arc<dyn DeviceApi> = Arc::new(HttpDeviceApi::new(config.device.base_url.clone()));

    // Shared view and use cases (application layer)
    let view = DashboardView::shared(config.chart.capacity);
    let poller = TelemetryPoller::new(api.clone(), view.clone(), cores);
    let history = HistoryRefresher::new(api.clone(), view.clone(), &config.history);

    let state = Arc::new(AppState {
        view: view.clone(),
        settings_service: SettingsService::new(api.clone(), view.clone(), config.settings_form.clone()),
        wifi_service: WifiService::new(api, view),
    });

    // Both timers fire immediately, then on their own periods
    let poll_task = tokio::spawn(poller.run(config.poll_interval()));
    let history_task = tokio::spawn(history.run(config.history_interval()));

    // Start view server (presentation layer)
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!(
        "Starting telemetry dashboard on {} (device {})",
        addr,
        config.device.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, build_router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;

    poll_task.abort();
    history_task.abort();
    tracing::info!("Dashboard stopped");

    Ok(())
}
