pub mod error;
pub mod types;

pub use error::{EcoGuardError, ParseEnumError, Result};
pub use types::{
    AirQuality, Alert, AlertLevel, AlertResponse, AlertType, Category, Coordinates,
    DownloadKind, EnvironmentalData, GeoLocation, MonitoringData, Pollutants, Pollution,
    ReportData, ReportSection, WaterQuality, WeatherConditions,
};

use std::time::Duration;

use serde::de::DeserializeOwned;
use types::ApiErrorBody;

pub const DEFAULT_BASE_URL: &str = "https://ecogurad-backend.vercel.app/api";

pub struct EcoGuardClient {
    client: reqwest::Client,
    base_url: String,
}

impl EcoGuardClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current weather and air quality for a location.
    pub async fn environmental_data(&self, location: &str) -> Result<EnvironmentalData> {
        self.get_json(
            "environmental-data",
            location,
            "Failed to fetch environmental data",
        )
        .await
    }

    /// Category-specific monitoring readings.
    pub async fn monitoring(&self, category: Category, location: &str) -> Result<MonitoringData> {
        self.get_json(
            &format!("monitoring/{category}"),
            location,
            &format!("Failed to fetch {category} data"),
        )
        .await
    }

    /// Generated narrative report for a category.
    pub async fn report(&self, category: Category, location: &str) -> Result<ReportData> {
        self.get_json(
            &format!("reports/{category}"),
            location,
            &format!("Failed to fetch {category} report"),
        )
        .await
    }

    pub async fn alerts(&self, alert_type: AlertType, location: &str) -> Result<AlertResponse> {
        self.get_json(
            &format!("alerts/{alert_type}"),
            location,
            &format!("Failed to fetch {alert_type} alerts"),
        )
        .await
    }

    /// Link for the browser-initiated export. Not fetched here.
    pub fn download_url(&self, location: &str, kind: DownloadKind) -> Result<reqwest::Url> {
        reqwest::Url::parse_with_params(
            &format!("{}/download", self.base_url),
            &[("location", location), ("type", kind.as_str())],
        )
        .map_err(|e| EcoGuardError::InvalidUrl(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        location: &str,
        fallback: &str,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, location, "GET");

        let resp = self
            .client
            .get(&url)
            .query(&[("location", location)])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(EcoGuardError::Api {
                status: status.as_u16(),
                message: error_message(&body, fallback),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Pull the `error` field out of an error body, or use `fallback`.
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
