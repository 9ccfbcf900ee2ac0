//! Configuration module
//!
//! Client settings read from the environment (and a `.env` file when present).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub timeout_secs: u64,
    /// Directory the downloaded report is written to.
    pub report_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            report_dir: PathBuf::from("."),
        }
    }
}

impl ClientConfig {
    /// Load from RESUMETWIN_API_URL (or API_URL), RESUMETWIN_TIMEOUT_SECS and RESUMETWIN_REPORT_DIR.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("RESUMETWIN_API_URL")
            .or_else(|| lookup("API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match lookup("RESUMETWIN_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config("RESUMETWIN_TIMEOUT_SECS must be a valid number".to_string())
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let report_dir = lookup("RESUMETWIN_REPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let config = Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            timeout_secs,
            report_dir,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_report_dir(mut self, report_dir: impl Into<PathBuf>) -> Self {
        self.report_dir = report_dir.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::Config(
                "RESUMETWIN_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
