// HTTP request handlers
use crate::domain::acknowledgment::Acknowledgment;
use crate::domain::wifi::ConnectRequest;
use crate::infrastructure::error::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Serialize)]
pub struct AckBody {
    pub ok: bool,
    pub message: Acknowledgment,
}

impl From<Acknowledgment> for AckBody {
    fn from(ack: Acknowledgment) -> Self {
        Self {
            ok: ack.is_success(),
            message: ack,
        }
    }
}

fn bad_gateway(e: ApiError) -> Response {
    tracing::warn!("Device request failed: {}", e);
    (StatusCode::BAD_GATEWAY, Json(json!({ "ok": false, "error": e.to_string() }))).into_response()
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Whole view: fields, chart, Wi-Fi list and last acknowledgment
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = state.view.read().await;
    Json(view.clone())
}

pub async fn get_chart(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = state.view.read().await;
    Json(view.chart.clone())
}

/// Settings form post (urlencoded)
pub async fn save_settings(
    State(state): State<Arc<AppState>>,
    Form(posted): Form<HashMap<String, String>>,
) -> Response {
    match state.settings_service.submit_post(&posted).await {
        Ok(ack) => Json(AckBody::from(ack)).into_response(),
        Err(e) => bad_gateway(e),
    }
}

pub async fn test_led(State(state): State<Arc<AppState>>) -> Response {
    match state.settings_service.test_led().await {
        Ok(ack) => Json(AckBody::from(ack)).into_response(),
        Err(e) => bad_gateway(e),
    }
}

pub async fn wifi_scan(State(state): State<Arc<AppState>>) -> Response {
    match state.wifi_service.scan().await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => bad_gateway(e),
    }
}

pub async fn wifi_connect(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConnectRequest>,
) -> Json<AckBody> {
    Json(AckBody::from(state.wifi_service.connect(&request).await))
}
