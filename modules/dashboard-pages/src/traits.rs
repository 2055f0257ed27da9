// Trait seams between the page controllers and the backends.
//
// The controllers only talk to these traits, so tests drive them with the
// in-memory mocks in `testing` instead of live HTTP.

use async_trait::async_trait;

use ecoguard_client::{
    AlertResponse, AlertType, Category, DownloadKind, EcoGuardClient, EnvironmentalData,
    MonitoringData, ReportData,
};
use infrapredict_client::{
    FundingOpportunities, FundingRequest, HazardType, InfraPredictClient, MaintenancePlan,
    MaintenanceScenario, MapLayer, MapLayerData, ProjectPlan, ProjectPlanRequest,
    ResilienceResources,
};

// ---------------------------------------------------------------------------
// EnvironmentalApi
// ---------------------------------------------------------------------------

#[async_trait]
pub trait EnvironmentalApi: Send + Sync {
    async fn environmental_data(&self, location: &str)
        -> ecoguard_client::Result<EnvironmentalData>;

    async fn monitoring(
        &self,
        category: Category,
        location: &str,
    ) -> ecoguard_client::Result<MonitoringData>;

    async fn report(&self, category: Category, location: &str)
        -> ecoguard_client::Result<ReportData>;

    async fn alerts(
        &self,
        alert_type: AlertType,
        location: &str,
    ) -> ecoguard_client::Result<AlertResponse>;

    /// Link for a browser-initiated export; never fetched by the page.
    fn download_link(&self, location: &str, kind: DownloadKind) -> ecoguard_client::Result<String>;
}

#[async_trait]
impl EnvironmentalApi for EcoGuardClient {
    async fn environmental_data(
        &self,
        location: &str,
    ) -> ecoguard_client::Result<EnvironmentalData> {
        EcoGuardClient::environmental_data(self, location).await
    }

    async fn monitoring(
        &self,
        category: Category,
        location: &str,
    ) -> ecoguard_client::Result<MonitoringData> {
        EcoGuardClient::monitoring(self, category, location).await
    }

    async fn report(
        &self,
        category: Category,
        location: &str,
    ) -> ecoguard_client::Result<ReportData> {
        EcoGuardClient::report(self, category, location).await
    }

    async fn alerts(
        &self,
        alert_type: AlertType,
        location: &str,
    ) -> ecoguard_client::Result<AlertResponse> {
        EcoGuardClient::alerts(self, alert_type, location).await
    }

    fn download_link(&self, location: &str, kind: DownloadKind) -> ecoguard_client::Result<String> {
        Ok(self.download_url(location, kind)?.to_string())
    }
}

// ---------------------------------------------------------------------------
// InfrastructureApi
// ---------------------------------------------------------------------------

#[async_trait]
pub trait InfrastructureApi: Send + Sync {
    async fn map_analysis(
        &self,
        location: &str,
        layer: MapLayer,
    ) -> infrapredict_client::Result<MapLayerData>;

    async fn maintenance_plan(
        &self,
        location: &str,
        scenario: MaintenanceScenario,
    ) -> infrapredict_client::Result<MaintenancePlan>;

    async fn project_plan(
        &self,
        request: &ProjectPlanRequest,
    ) -> infrapredict_client::Result<ProjectPlan>;

    async fn funding_opportunities(
        &self,
        request: &FundingRequest,
    ) -> infrapredict_client::Result<FundingOpportunities>;

    async fn resilience_resources(
        &self,
        location: &str,
        hazard_type: HazardType,
    ) -> infrapredict_client::Result<ResilienceResources>;
}

#[async_trait]
impl InfrastructureApi for InfraPredictClient {
    async fn map_analysis(
        &self,
        location: &str,
        layer: MapLayer,
    ) -> infrapredict_client::Result<MapLayerData> {
        InfraPredictClient::map_analysis(self, location, layer).await
    }

    async fn maintenance_plan(
        &self,
        location: &str,
        scenario: MaintenanceScenario,
    ) -> infrapredict_client::Result<MaintenancePlan> {
        InfraPredictClient::maintenance_plan(self, location, scenario).await
    }

    async fn project_plan(
        &self,
        request: &ProjectPlanRequest,
    ) -> infrapredict_client::Result<ProjectPlan> {
        InfraPredictClient::project_plan(self, request).await
    }

    async fn funding_opportunities(
        &self,
        request: &FundingRequest,
    ) -> infrapredict_client::Result<FundingOpportunities> {
        InfraPredictClient::funding_opportunities(self, request).await
    }

    async fn resilience_resources(
        &self,
        location: &str,
        hazard_type: HazardType,
    ) -> infrapredict_client::Result<ResilienceResources> {
        InfraPredictClient::resilience_resources(self, location, hazard_type).await
    }
}
