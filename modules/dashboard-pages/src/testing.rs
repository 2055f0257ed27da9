// Test mocks for the page controllers.
//
// Two mocks matching the two trait boundaries:
// - MockEnvironmentalApi (EnvironmentalApi): HashMap-based (location, selector) → payload
// - MockInfrastructureApi (InfrastructureApi): same, for the infrastructure endpoints
//
// Both record every call, can fail a call with a given status, and can
// delay a call so tests under `start_paused` can reorder responses.
//
// Plus fixture builders for the payload types.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use ecoguard_client::{
    AirQuality, Alert, AlertLevel, AlertResponse, AlertType, Category, Coordinates,
    DownloadKind, EcoGuardError, EnvironmentalData, GeoLocation, MonitoringData, Pollutants,
    ReportData, ReportSection, WeatherConditions,
};
use infrapredict_client::{
    FundingOpportunities, FundingRequest, HazardType, InfraPredictError, MaintenancePlan,
    MaintenanceScenario, MapLayer, MapLayerData, ProjectPlan, ProjectPlanRequest,
    ResilienceResources,
};

use crate::traits::{EnvironmentalApi, InfrastructureApi};

// ---------------------------------------------------------------------------
// MockEnvironmentalApi
// ---------------------------------------------------------------------------

/// One environmental endpoint, with its selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcoCall {
    Snapshot,
    Monitoring(Category),
    Report(Category),
    Alerts(AlertType),
}

/// Returns a 404 `Api` error for unregistered (call, location) pairs.
/// Builder pattern: `.on_snapshot()`, `.on_monitoring()`, `.on_report()`,
/// `.on_alerts()`, `.failing()`, `.delayed()`.
#[derive(Default)]
pub struct MockEnvironmentalApi {
    snapshots: HashMap<String, EnvironmentalData>,
    monitoring: HashMap<(String, Category), MonitoringData>,
    reports: HashMap<(String, Category), ReportData>,
    alerts: HashMap<(String, AlertType), AlertResponse>,
    failures: HashMap<(EcoCall, String), (u16, String)>,
    delays: HashMap<(EcoCall, String), Duration>,
    calls: Mutex<Vec<(EcoCall, String)>>,
}

impl MockEnvironmentalApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_snapshot(mut self, location: &str, data: EnvironmentalData) -> Self {
        self.snapshots.insert(location.to_string(), data);
        self
    }

    pub fn on_monitoring(mut self, location: &str, category: Category, data: MonitoringData) -> Self {
        self.monitoring.insert((location.to_string(), category), data);
        self
    }

    pub fn on_report(mut self, location: &str, category: Category, report: ReportData) -> Self {
        self.reports.insert((location.to_string(), category), report);
        self
    }

    pub fn on_alerts(mut self, location: &str, alert_type: AlertType, response: AlertResponse) -> Self {
        self.alerts.insert((location.to_string(), alert_type), response);
        self
    }

    /// Answer `call` for `location` with an HTTP error carrying `message`.
    pub fn failing(mut self, call: EcoCall, location: &str, status: u16, message: &str) -> Self {
        self.failures
            .insert((call, location.to_string()), (status, message.to_string()));
        self
    }

    /// Sleep for `delay` before answering `call` for `location`.
    pub fn delayed(mut self, call: EcoCall, location: &str, delay: Duration) -> Self {
        self.delays.insert((call, location.to_string()), delay);
        self
    }

    pub fn calls(&self) -> Vec<(EcoCall, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, call: EcoCall) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == call)
            .count()
    }

    /// Number of report requests across all categories.
    pub fn report_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| matches!(c, EcoCall::Report(_)))
            .count()
    }

    async fn enter(&self, call: EcoCall, location: &str) -> ecoguard_client::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((call, location.to_string()));

        let key = (call, location.to_string());
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        match self.failures.get(&key) {
            Some((status, message)) => Err(EcoGuardError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn not_registered<T>(what: &str, location: &str) -> ecoguard_client::Result<T> {
    Err(EcoGuardError::Api {
        status: 404,
        message: format!("MockEnvironmentalApi: no {what} registered for {location}"),
    })
}

#[async_trait]
impl EnvironmentalApi for MockEnvironmentalApi {
    async fn environmental_data(
        &self,
        location: &str,
    ) -> ecoguard_client::Result<EnvironmentalData> {
        self.enter(EcoCall::Snapshot, location).await?;
        match self.snapshots.get(location) {
            Some(data) => Ok(data.clone()),
            None => not_registered("environmental data", location),
        }
    }

    async fn monitoring(
        &self,
        category: Category,
        location: &str,
    ) -> ecoguard_client::Result<MonitoringData> {
        self.enter(EcoCall::Monitoring(category), location).await?;
        match self.monitoring.get(&(location.to_string(), category)) {
            Some(data) => Ok(data.clone()),
            None => not_registered("monitoring data", location),
        }
    }

    async fn report(
        &self,
        category: Category,
        location: &str,
    ) -> ecoguard_client::Result<ReportData> {
        self.enter(EcoCall::Report(category), location).await?;
        match self.reports.get(&(location.to_string(), category)) {
            Some(report) => Ok(report.clone()),
            None => not_registered("report", location),
        }
    }

    async fn alerts(
        &self,
        alert_type: AlertType,
        location: &str,
    ) -> ecoguard_client::Result<AlertResponse> {
        self.enter(EcoCall::Alerts(alert_type), location).await?;
        match self.alerts.get(&(location.to_string(), alert_type)) {
            Some(response) => Ok(response.clone()),
            None => not_registered("alerts", location),
        }
    }

    fn download_link(&self, location: &str, kind: DownloadKind) -> ecoguard_client::Result<String> {
        Ok(format!("https://mock.test/api/download?location={location}&type={kind}"))
    }
}

// ---------------------------------------------------------------------------
// Environmental fixtures
// ---------------------------------------------------------------------------

pub fn geo(city: &str) -> GeoLocation {
    GeoLocation {
        city: city.to_string(),
        country: "GB".to_string(),
        coordinates: Coordinates {
            latitude: 51.5074,
            longitude: -0.1278,
        },
    }
}

pub fn air_quality(aqi: u32) -> AirQuality {
    AirQuality {
        aqi,
        quality_level: "Fair".to_string(),
        description: "Air quality is acceptable.".to_string(),
        pollutants: Pollutants {
            co: 230.0,
            no: 0.5,
            no2: 12.3,
            o3: 61.0,
            so2: 2.1,
            pm2_5: 8.4,
            pm10: 14.2,
            nh3: 0.9,
        },
        timestamp: "2024-05-01T12:00:00Z".to_string(),
    }
}

pub fn environmental_data(city: &str) -> EnvironmentalData {
    EnvironmentalData {
        location: geo(city),
        air_quality: air_quality(2),
        weather_conditions: WeatherConditions {
            temperature: 14.5,
            feels_like: 13.8,
            humidity: 72.0,
            pressure: 1012.0,
            wind_speed: 4.1,
            wind_direction: 230.0,
            weather_description: "light rain".to_string(),
            weather_icon: "10d".to_string(),
            timestamp: "2024-05-01T12:00:00Z".to_string(),
        },
        geocoded_from: city.to_string(),
    }
}

pub fn monitoring_data(city: &str, category: Category) -> MonitoringData {
    MonitoringData {
        location: geo(city),
        data_type: category.as_str().to_string(),
        air_quality: (category == Category::AirQuality).then(|| air_quality(2)),
        weather_conditions: None,
        water_quality: None,
        pollution: None,
        timestamp: None,
        geocoded_from: city.to_string(),
    }
}

pub fn report_data(city: &str, category: Category, sections: &[(&str, &str)]) -> ReportData {
    ReportData {
        report_type: category.as_str().to_string(),
        location: city.to_string(),
        timestamp: "2024-05-01T12:00:00Z".to_string(),
        sections: sections
            .iter()
            .map(|(title, content)| ReportSection {
                title: title.to_string(),
                content: content.to_string(),
            })
            .collect(),
        geocoded_from: city.to_string(),
    }
}

pub fn alert(level: AlertLevel, title: &str, message: &str) -> Alert {
    Alert {
        level,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: "2024-05-01T12:00:00Z".to_string(),
    }
}

pub fn alert_response(city: &str, alert_type: AlertType, alerts: Vec<Alert>) -> AlertResponse {
    AlertResponse {
        location: geo(city),
        alert_type: alert_type.as_str().to_string(),
        alerts,
        geocoded_from: city.to_string(),
    }
}

/// A mock with snapshot, alerts, monitoring and a one-section report for
/// every category registered for `city`.
pub fn environmental_city(city: &str) -> MockEnvironmentalApi {
    city_fixtures(MockEnvironmentalApi::new(), city)
}

/// Register the full fixture set for `city` on an existing mock.
pub fn city_fixtures(mut api: MockEnvironmentalApi, city: &str) -> MockEnvironmentalApi {
    api = api.on_snapshot(city, environmental_data(city));
    for alert_type in AlertType::ALL {
        api = api.on_alerts(city, alert_type, alert_response(city, alert_type, vec![]));
    }
    for category in Category::ALL {
        let content = format!("# {} in {city}\n\n- reading one\n- reading two", category.label());
        api = api
            .on_monitoring(city, category, monitoring_data(city, category))
            .on_report(
                city,
                category,
                report_data(city, category, &[("Overview", content.as_str())]),
            );
    }
    api
}

// ---------------------------------------------------------------------------
// MockInfrastructureApi
// ---------------------------------------------------------------------------

/// One infrastructure endpoint, with its selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfraCall {
    Map(MapLayer),
    Maintenance(MaintenanceScenario),
    ProjectPlan,
    Funding,
    Resources(HazardType),
}

/// Unregistered (call, location) pairs fail with a 404 that carries no
/// server message, so the page falls back to its own wording.
#[derive(Default)]
pub struct MockInfrastructureApi {
    maps: HashMap<(String, MapLayer), MapLayerData>,
    maintenance: HashMap<(String, MaintenanceScenario), MaintenancePlan>,
    plans: HashMap<String, ProjectPlan>,
    funding: HashMap<String, FundingOpportunities>,
    resources: HashMap<(String, HazardType), ResilienceResources>,
    failures: HashMap<(InfraCall, String), (u16, Option<String>)>,
    delays: HashMap<(InfraCall, String), Duration>,
    calls: Mutex<Vec<(InfraCall, String)>>,
    plan_requests: Mutex<Vec<ProjectPlanRequest>>,
    funding_requests: Mutex<Vec<FundingRequest>>,
}

impl MockInfrastructureApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_map(mut self, location: &str, layer: MapLayer, data: MapLayerData) -> Self {
        self.maps.insert((location.to_string(), layer), data);
        self
    }

    pub fn on_maintenance(
        mut self,
        location: &str,
        scenario: MaintenanceScenario,
        plan: MaintenancePlan,
    ) -> Self {
        self.maintenance.insert((location.to_string(), scenario), plan);
        self
    }

    pub fn on_project_plan(mut self, location: &str, plan: ProjectPlan) -> Self {
        self.plans.insert(location.to_string(), plan);
        self
    }

    pub fn on_funding(mut self, location: &str, funding: FundingOpportunities) -> Self {
        self.funding.insert(location.to_string(), funding);
        self
    }

    pub fn on_resources(
        mut self,
        location: &str,
        hazard_type: HazardType,
        resources: ResilienceResources,
    ) -> Self {
        self.resources.insert((location.to_string(), hazard_type), resources);
        self
    }

    /// Answer `call` with an HTTP error; `message` mimics the server's
    /// `error` field.
    pub fn failing(
        mut self,
        call: InfraCall,
        location: &str,
        status: u16,
        message: Option<&str>,
    ) -> Self {
        self.failures.insert(
            (call, location.to_string()),
            (status, message.map(str::to_string)),
        );
        self
    }

    pub fn delayed(mut self, call: InfraCall, location: &str, delay: Duration) -> Self {
        self.delays.insert((call, location.to_string()), delay);
        self
    }

    pub fn calls(&self) -> Vec<(InfraCall, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, call: InfraCall) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == call)
            .count()
    }

    pub fn plan_requests(&self) -> Vec<ProjectPlanRequest> {
        self.plan_requests.lock().unwrap().clone()
    }

    pub fn funding_requests(&self) -> Vec<FundingRequest> {
        self.funding_requests.lock().unwrap().clone()
    }

    async fn enter(&self, call: InfraCall, location: &str) -> infrapredict_client::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((call, location.to_string()));

        let key = (call, location.to_string());
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        match self.failures.get(&key) {
            Some((status, message)) => Err(InfraPredictError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn missing<T: Clone>(found: Option<&T>) -> infrapredict_client::Result<T> {
    found.cloned().ok_or(InfraPredictError::Api {
        status: 404,
        message: None,
    })
}

#[async_trait]
impl InfrastructureApi for MockInfrastructureApi {
    async fn map_analysis(
        &self,
        location: &str,
        layer: MapLayer,
    ) -> infrapredict_client::Result<MapLayerData> {
        self.enter(InfraCall::Map(layer), location).await?;
        missing(self.maps.get(&(location.to_string(), layer)))
    }

    async fn maintenance_plan(
        &self,
        location: &str,
        scenario: MaintenanceScenario,
    ) -> infrapredict_client::Result<MaintenancePlan> {
        self.enter(InfraCall::Maintenance(scenario), location).await?;
        missing(self.maintenance.get(&(location.to_string(), scenario)))
    }

    async fn project_plan(
        &self,
        request: &ProjectPlanRequest,
    ) -> infrapredict_client::Result<ProjectPlan> {
        self.plan_requests.lock().unwrap().push(request.clone());
        self.enter(InfraCall::ProjectPlan, &request.location).await?;
        missing(self.plans.get(&request.location))
    }

    async fn funding_opportunities(
        &self,
        request: &FundingRequest,
    ) -> infrapredict_client::Result<FundingOpportunities> {
        self.funding_requests.lock().unwrap().push(request.clone());
        self.enter(InfraCall::Funding, &request.location).await?;
        missing(self.funding.get(&request.location))
    }

    async fn resilience_resources(
        &self,
        location: &str,
        hazard_type: HazardType,
    ) -> infrapredict_client::Result<ResilienceResources> {
        self.enter(InfraCall::Resources(hazard_type), location).await?;
        missing(self.resources.get(&(location.to_string(), hazard_type)))
    }
}

// ---------------------------------------------------------------------------
// Infrastructure fixtures
// ---------------------------------------------------------------------------

pub fn map_layer_data(layer: MapLayer, score: f64) -> MapLayerData {
    let mut data = MapLayerData {
        detailed_analysis: format!("{} analysis", layer.label()),
        ..MapLayerData::default()
    };
    match layer {
        MapLayer::Vulnerability => data.vulnerability_score = Some(score),
        MapLayer::Durability => data.durability_score = Some(score),
        MapLayer::Risk => data.risk_score = Some(score),
    }
    data
}

pub fn maintenance_plan(recommendations: &str) -> MaintenancePlan {
    MaintenancePlan {
        recommendations: recommendations.to_string(),
        ..MaintenancePlan::default()
    }
}

pub fn project_plan(overview: &str) -> ProjectPlan {
    ProjectPlan {
        project_overview: overview.to_string(),
        ..ProjectPlan::default()
    }
}

pub fn funding_opportunities(recommended: &str) -> FundingOpportunities {
    FundingOpportunities {
        recommended_funding: recommended.to_string(),
        ..FundingOpportunities::default()
    }
}

pub fn resilience_resources(summary: &str) -> ResilienceResources {
    ResilienceResources {
        summary: summary.to_string(),
        ..ResilienceResources::default()
    }
}
