use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB v3 API key, sent as the `api_key` query parameter
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB v4 read access token, sent as a bearer header
    #[serde(default)]
    pub tmdb_bearer: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound for a single upstream request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Directory holding the built client bundle, served for unmatched paths
    #[serde(default)]
    pub static_dir: Option<String>,
}

/// How requests to TMDB are authenticated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// v4 token in the `Authorization` header
    Bearer(String),
    /// v3 key in the query string
    ApiKey(String),
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Picks the TMDB credential to use. The bearer token wins when both are set.
    pub fn credentials(&self) -> AppResult<Credentials> {
        if let Some(token) = non_blank(&self.tmdb_bearer) {
            return Ok(Credentials::Bearer(token.to_string()));
        }
        if let Some(key) = non_blank(&self.tmdb_api_key) {
            return Ok(Credentials::ApiKey(key.to_string()));
        }
        Err(AppError::Config(
            "TMDB credentials missing. Set TMDB_BEARER (v4) or TMDB_API_KEY (v3)".to_string(),
        ))
    }

    pub fn has_api_key(&self) -> bool {
        non_blank(&self.tmdb_api_key).is_some()
    }

    pub fn has_bearer(&self) -> bool {
        non_blank(&self.tmdb_bearer).is_some()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
