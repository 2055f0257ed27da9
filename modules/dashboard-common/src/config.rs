use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOCATION: &str = "London";

/// Dashboard configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Backends
    pub ecoguard_api_url: String,
    pub infrapredict_api_url: String,

    // Requests
    pub request_timeout: Duration,

    // Environmental page
    pub default_location: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ecoguard_api_url: ecoguard_client::DEFAULT_BASE_URL.to_string(),
            infrapredict_api_url: infrapredict_client::DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_location: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unset or blank
    /// variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let request_timeout = match get("DASHBOARD_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("DASHBOARD_REQUEST_TIMEOUT_SECS must be a number, got {raw:?}"))?;
                if secs == 0 {
                    anyhow::bail!("DASHBOARD_REQUEST_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            ecoguard_api_url: get("ECOGUARD_API_URL")
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.ecoguard_api_url),
            infrapredict_api_url: get("INFRAPREDICT_API_URL")
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.infrapredict_api_url),
            request_timeout,
            default_location: get("DASHBOARD_DEFAULT_LOCATION").unwrap_or(defaults.default_location),
        })
    }

    pub fn log_redacted(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  ECOGUARD_API_URL: {}", self.ecoguard_api_url);
        tracing::info!("  INFRAPREDICT_API_URL: {}", self.infrapredict_api_url);
        tracing::info!(
            "  DASHBOARD_REQUEST_TIMEOUT_SECS: {}",
            self.request_timeout.as_secs()
        );
        tracing::info!("  DASHBOARD_DEFAULT_LOCATION: {}", self.default_location);
    }
}
