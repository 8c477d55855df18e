// Device API errors
use reqwest::StatusCode;
use thiserror::Error;

/// Why a call to the device API produced nothing usable. Timer ticks treat
/// every variant the same way; the view server maps them to `502`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} answered with status {status}")]
    Status { path: String, status: StatusCode },

    #[error("malformed response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn path(&self) -> &str {
        match self {
            ApiError::Request { path, .. } | ApiError::Status { path, .. } | ApiError::Decode { path, .. } => path,
        }
    }
}
