// HTTP device API implementation
use crate::application::device_api::DeviceApi;
use crate::domain::telemetry::{HistoryPoint, StatsSnapshot};
use crate::domain::wifi::{ConnectReply, ConnectRequest, WifiNetwork};
use crate::infrastructure::error::ApiError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct HttpDeviceApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDeviceApi {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn history_path(metric: &str, minutes: u32) -> String {
        format!(
            "/api/history?metric={}&minutes={}",
            urlencoding::encode(metric),
            minutes
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(path, self.request(Method::GET, path)).await
    }

    async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let mut request = self.request(Method::POST, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(path, request).await
    }

    async fn execute<T: DeserializeOwned>(&self, path: &str, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Request {
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| ApiError::Request {
            path: path.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl DeviceApi for HttpDeviceApi {
    async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        self.get("/api/stats").await
    }

    async fn fetch_history(&self, metric: &str, minutes: u32) -> Result<Vec<HistoryPoint>, ApiError> {
        let path = Self::history_path(metric, minutes);
        tracing::debug!("Fetching history: {}", path);
        self.get(&path).await
    }

    async fn save_settings(&self, values: &BTreeMap<String, String>) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post("/api/settings", Some(values)).await?;
        Ok(())
    }

    async fn test_led(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post::<_, ()>("/api/led/test", None).await?;
        Ok(())
    }

    async fn scan_wifi(&self) -> Result<Vec<WifiNetwork>, ApiError> {
        self.post::<_, ()>("/api/wifi/scan", None).await
    }

    async fn connect_wifi(&self, request: &ConnectRequest) -> Result<ConnectReply, ApiError> {
        self.post("/api/wifi/connect", Some(request)).await
    }
}
