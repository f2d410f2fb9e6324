use std::env;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_API_BASE_URL: &str = "https://api.tesseractonline.com";
pub const DEFAULT_API_ORIGIN: &str = "https://tesseractonline.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub api_base_url: String,
    pub api_origin: String,
    pub api_timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            api_base_url: env::var("QUIZ_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            api_origin: env::var("QUIZ_API_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_API_ORIGIN.to_string()),
            api_timeout_secs: env::var("QUIZ_API_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok()),
        }
    }

    /// Upstream request timeout, if one was configured.
    pub fn api_timeout(&self) -> Option<Duration> {
        self.api_timeout_secs.map(Duration::from_secs)
    }

    /// Check that the upstream URLs are usable before the server starts.
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("QUIZ_API_BASE_URL", &self.api_base_url),
            ("QUIZ_API_ORIGIN", &self.api_origin),
        ] {
            reqwest::Url::parse(value).map_err(|e| {
                AppError::InternalError(format!("{name} is not a valid URL ({value}): {e}"))
            })?;
        }

        if self.api_timeout_secs == Some(0) {
            return Err(AppError::InternalError(
                "QUIZ_API_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3000,
            api_base_url: "http://127.0.0.1:9".to_string(),
            api_origin: "http://127.0.0.1:9".to_string(),
            api_timeout_secs: Some(5),
        }
    }
}
