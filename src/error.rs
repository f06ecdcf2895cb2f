use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API returned status {status}: {body}")]
    ExternalApi { status: u16, body: String },

    #[error("{message}")]
    Upstream {
        message: &'static str,
        status: Option<u16>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Status code reported by the upstream catalog, if the failure carried one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::HttpClient(e) => e.status().map(|s| s.as_u16()),
            AppError::ExternalApi { status, .. } => Some(*status),
            AppError::Upstream { status, .. } => *status,
            AppError::InvalidInput(_) | AppError::Config(_) => None,
        }
    }

    /// Whether the catalog could not be reached or answered with a failure.
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(
            self,
            AppError::HttpClient(_) | AppError::ExternalApi { .. } | AppError::Upstream { .. }
        )
    }

    /// Wraps a catalog failure with the message shown to the client.
    ///
    /// Errors that did not come from the catalog pass through unchanged.
    pub fn upstream(self, message: &'static str) -> Self {
        if !self.is_upstream_unavailable() {
            return self;
        }
        tracing::error!(
            error = %self,
            status = ?self.upstream_status(),
            "{}",
            message
        );
        AppError::Upstream {
            message,
            status: self.upstream_status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
            AppError::Upstream { message, status } => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "error": message,
                    "status": status.unwrap_or(StatusCode::BAD_GATEWAY.as_u16()),
                }),
            ),
            AppError::HttpClient(_) | AppError::ExternalApi { .. } => {
                let upstream = self.upstream_status();
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "error": self.to_string(),
                        "status": upstream.unwrap_or(StatusCode::BAD_GATEWAY.as_u16()),
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
