pub mod error;
pub mod types;

pub use error::{InfraPredictError, ParseEnumError, Result};
pub use types::{
    BudgetBreakdown, CaseStudy, CostEstimates, FundingOpportunities, FundingRequest,
    GovernmentGrant, HazardType, MaintenancePlan, MaintenancePlanRequest, MaintenanceScenario,
    MaintenanceSchedule, MapAnalysisRequest, MapLayer, MapLayerData, Partnership,
    PrivateFunding, ProjectPhase, ProjectPlan, ProjectPlanRequest, ProjectType,
    ResilienceRequest, ResilienceResources, RiskItem,
};

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use types::ApiErrorBody;

pub const DEFAULT_BASE_URL: &str = "https://infra-pred.vercel.app/api";

pub struct InfraPredictClient {
    client: reqwest::Client,
    base_url: String,
}

impl InfraPredictClient {
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

    pub async fn map_analysis(&self, location: &str, layer: MapLayer) -> Result<MapLayerData> {
        let body = MapAnalysisRequest {
            location: location.to_string(),
            layer,
        };
        self.post_json("map/analysis", &body).await
    }

    pub async fn maintenance_plan(
        &self,
        location: &str,
        scenario: MaintenanceScenario,
    ) -> Result<MaintenancePlan> {
        let body = MaintenancePlanRequest {
            location: location.to_string(),
            scenario,
        };
        self.post_json("maintenance/plan", &body).await
    }

    pub async fn project_plan(&self, request: &ProjectPlanRequest) -> Result<ProjectPlan> {
        self.post_json("project/plan", request).await
    }

    pub async fn funding_opportunities(
        &self,
        request: &FundingRequest,
    ) -> Result<FundingOpportunities> {
        self.post_json("funding/opportunities", request).await
    }

    pub async fn resilience_resources(
        &self,
        location: &str,
        hazard_type: HazardType,
    ) -> Result<ResilienceResources> {
        let body = ResilienceRequest {
            location: location.to_string(),
            hazard_type,
        };
        self.post_json("resilience/resources", &body).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let resp = self.client.post(&url).json(body).send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(InfraPredictError::Api {
                status: status.as_u16(),
                message: server_error(&text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

fn server_error(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
}
