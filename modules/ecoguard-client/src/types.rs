use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;

// --- Selection enums ---

/// One of the three monitoring domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AirQuality,
    WaterQuality,
    Pollution,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::AirQuality,
        Category::WaterQuality,
        Category::Pollution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AirQuality => "air_quality",
            Category::WaterQuality => "water_quality",
            Category::Pollution => "pollution",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::AirQuality => "Air Quality",
            Category::WaterQuality => "Water Quality",
            Category::Pollution => "Pollution",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("category", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Community,
    HealthRisk,
}

impl AlertType {
    pub const ALL: [AlertType; 2] = [AlertType::Community, AlertType::HealthRisk];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Community => "community",
            AlertType::HealthRisk => "health_risk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertType::Community => "Community Alerts",
            AlertType::HealthRisk => "Health Risk Alerts",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("alert type", s))
    }
}

/// What the `/download` endpoint should export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadKind {
    Category(Category),
    All,
}

impl DownloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadKind::Category(c) => c.as_str(),
            DownloadKind::All => "all",
        }
    }
}

impl fmt::Display for DownloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DownloadKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(DownloadKind::All);
        }
        s.parse::<Category>()
            .map(DownloadKind::Category)
            .map_err(|_| ParseEnumError::new("download type", s))
    }
}

// --- Location ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Geocoded location as resolved by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
}

// --- Readings ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pollutants {
    pub co: f64,
    pub no: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub nh3: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    /// 1 (good) through 5 (very poor).
    pub aqi: u32,
    pub quality_level: String,
    pub description: String,
    pub pollutants: Pollutants,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub weather_description: String,
    pub weather_icon: String,
    pub timestamp: String,
}

impl WeatherConditions {
    pub fn icon_url(&self) -> String {
        format!("http://openweathermap.org/img/wn/{}@2x.png", self.weather_icon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterQuality {
    pub overall_index: f64,
    pub ph_level: f64,
    pub turbidity: f64,
    pub dissolved_oxygen: f64,
    pub e_coli_presence: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pollution {
    pub overall_index: f64,
    pub noise_pollution: f64,
    pub light_pollution: f64,
    pub waste_management_index: f64,
    pub radiation_levels: String,
    pub soil_pollution: String,
    #[serde(default)]
    pub note: String,
}

// --- Endpoint payloads ---

/// Combined weather and air-quality reading (`GET /environmental-data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalData {
    pub location: GeoLocation,
    pub air_quality: AirQuality,
    pub weather_conditions: WeatherConditions,
    #[serde(default)]
    pub geocoded_from: String,
}

/// Category-specific readings (`GET /monitoring/{category}`). Only the
/// block matching `data_type` is normally present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringData {
    pub location: GeoLocation,
    pub data_type: String,
    #[serde(default)]
    pub air_quality: Option<AirQuality>,
    #[serde(default)]
    pub weather_conditions: Option<WeatherConditions>,
    #[serde(default)]
    pub water_quality: Option<WaterQuality>,
    #[serde(default)]
    pub pollution: Option<Pollution>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub geocoded_from: String,
}

/// A titled block of semi-structured narrative text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub content: String,
}

/// Generated report (`GET /reports/{category}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub report_type: String,
    pub location: String,
    pub timestamp: String,
    pub sections: Vec<ReportSection>,
    #[serde(default)]
    pub geocoded_from: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Success,
    Warning,
    Error,
    #[serde(other)]
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Alerts for a location (`GET /alerts/{alertType}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertResponse {
    pub location: GeoLocation,
    pub alert_type: String,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub geocoded_from: String,
}

/// Body shape of non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: Option<String>,
}
