// View server router
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_chart, get_dashboard, health_check, save_settings, test_led, wifi_connect, wifi_scan,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/chart", get(get_chart))
        .route("/actions/settings", post(save_settings))
        .route("/actions/led/test", post(test_led))
        .route("/actions/wifi/scan", post(wifi_scan))
        .route("/actions/wifi/connect", post(wifi_connect))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::device_api::fake::FakeDevice;
    use crate::application::settings_service::SettingsService;
    use crate::application::view::DashboardView;
    use crate::application::wifi_service::WifiService;
    use crate::domain::settings::{FieldKind, FormField};
    use crate::domain::telemetry::StatsSnapshot;
    use serde_json::{Value, json};

    async fn spawn_server(device: Arc<FakeDevice>) -> (String, Arc<AppState>) {
        let view = DashboardView::shared(120);
        let form = vec![
            FormField::new("led_enabled", FieldKind::Checkbox),
            FormField::new("units", FieldKind::Text),
        ];
        let state = Arc::new(AppState {
            view: view.clone(),
            settings_service: SettingsService::new(device.clone(), view.clone(), form),
            wifi_service: WifiService::new(device, view),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = build_router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (format!("http://{}", addr), state)
    }

    #[tokio::test]
    async fn test_health_and_dashboard() {
        let (base, state) = spawn_server(Arc::new(FakeDevice::default())).await;
        let snapshot = StatsSnapshot {
            battery_pct: Some(12.0),
            ..Default::default()
        };
        state.view.write().await.apply_snapshot(&snapshot, 4, "10:00:00".into());

        let health = reqwest::get(format!("{}/healthz", base)).await.unwrap();
        assert_eq!(health.text().await.unwrap(), "ok");

        let dashboard: Value = reqwest::get(format!("{}/dashboard", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(dashboard["fields"]["bat_pct"], "12");
        assert_eq!(dashboard["chart"]["border_color"], "#ff4d4f");

        let chart: Value = reqwest::get(format!("{}/dashboard/chart", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(chart["points"][0]["label"], "10:00:00");
        assert_eq!(chart["background_color"], "#ff4d4f33");
    }

    #[tokio::test]
    async fn test_settings_form_post() {
        let device = Arc::new(FakeDevice::default());
        let (base, _) = spawn_server(device.clone()).await;

        let response = reqwest::Client::new()
            .post(format!("{}/actions/settings", base))
            .header("content-type", "application/x-www-form-urlencoded")
            .body("led_enabled=on&units=metric")
            .send()
            .await
            .unwrap();

        assert!(response.status().is_success());
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"ok": true, "message": "Saved"}));
        assert_eq!(device.saved.lock().unwrap()[0]["led_enabled"], "true");
        assert_eq!(device.saved.lock().unwrap()[0]["units"], "metric");
    }

    #[tokio::test]
    async fn test_action_failure_is_bad_gateway() {
        let device = Arc::new(FakeDevice::default());
        *device.actions_fail.lock().unwrap() = true;
        let (base, state) = spawn_server(device).await;

        let client = reqwest::Client::new();
        let led = client
            .post(format!("{}/actions/led/test", base))
            .send()
            .await
            .unwrap();
        assert_eq!(led.status(), reqwest::StatusCode::BAD_GATEWAY);

        let scan = client
            .post(format!("{}/actions/wifi/scan", base))
            .send()
            .await
            .unwrap();
        assert_eq!(scan.status(), reqwest::StatusCode::BAD_GATEWAY);
        assert!(state.view.read().await.wifi_list.is_empty());
    }

    #[tokio::test]
    async fn test_wifi_connect() {
        let device = Arc::new(FakeDevice::default());
        *device.connect_ok.lock().unwrap() = Some(true);
        let (base, _) = spawn_server(device.clone()).await;

        let body: Value = reqwest::Client::new()
            .post(format!("{}/actions/wifi/connect", base))
            .json(&json!({"ssid": "garage", "password": "hunter2"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body, json!({"ok": true, "message": "Connect requested"}));
        assert_eq!(device.connects.lock().unwrap()[0].password, "hunter2");
    }
}
