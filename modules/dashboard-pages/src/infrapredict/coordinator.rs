use std::future::Future;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use dashboard_common::{Ticket, ViewState};
use infrapredict_client::{
    FundingOpportunities, FundingRequest, HazardType, MaintenancePlan, MaintenanceScenario,
    MapLayer, MapLayerData, ProjectPlan, ProjectPlanRequest, ProjectType, ResilienceResources,
};

use crate::traits::InfrastructureApi;

pub const MAP_FALLBACK: &str = "Failed to fetch analysis. Please try again.";
pub const MAINTENANCE_FALLBACK: &str = "Failed to fetch maintenance plan. Please try again.";
pub const PROJECT_PLAN_FALLBACK: &str = "Failed to generate project plan. Please try again.";
pub const FUNDING_FALLBACK: &str = "Failed to fetch funding opportunities. Please try again.";
pub const RESOURCES_FALLBACK: &str = "Failed to fetch resilience resources. Please try again.";

pub const MISSING_PROJECT_INPUTS: &str = "Location and project type are required";
pub const MISSING_HAZARD_INPUTS: &str = "Location and hazard type are required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfraView {
    Map,
    Maintenance,
    ProjectPlan,
    Funding,
    Resources,
}

/// Form inputs shared by every infrastructure request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfraInputs {
    pub location: String,
    pub map_layer: MapLayer,
    pub scenario: MaintenanceScenario,
    pub project_type: ProjectType,
    pub budget: String,
    pub timeline: String,
    pub hazard_type: HazardType,
}

impl Default for InfraInputs {
    fn default() -> Self {
        Self {
            location: String::new(),
            map_layer: MapLayer::default(),
            scenario: MaintenanceScenario::default(),
            project_type: ProjectType::default(),
            budget: String::new(),
            timeline: "12 months".to_string(),
            hazard_type: HazardType::default(),
        }
    }
}

impl InfraInputs {
    fn has_location(&self) -> bool {
        !self.location.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct InfraPredictView {
    pub inputs: InfraInputs,
    pub map: ViewState<MapLayerData>,
    pub maintenance: ViewState<MaintenancePlan>,
    pub project_plan: ViewState<ProjectPlan>,
    pub funding: ViewState<FundingOpportunities>,
    pub resources: ViewState<ResilienceResources>,
}

#[derive(Default)]
struct InfraState {
    inputs: InfraInputs,
    map: ViewState<MapLayerData>,
    maintenance: ViewState<MaintenancePlan>,
    project_plan: ViewState<ProjectPlan>,
    funding: ViewState<FundingOpportunities>,
    resources: ViewState<ResilienceResources>,
}

/// Coordinates the five infrastructure analysis views.
///
/// Every view blanks while its request runs and, like the environmental
/// page, ignores responses that are no longer the latest for that view.
pub struct InfraPredictPage<A> {
    api: A,
    state: Mutex<InfraState>,
}

impl<A: InfrastructureApi> InfraPredictPage<A> {
    pub fn new(api: A) -> Self {
        Self::with_inputs(api, InfraInputs::default())
    }

    pub fn with_inputs(api: A, inputs: InfraInputs) -> Self {
        Self {
            api,
            state: Mutex::new(InfraState {
                inputs,
                ..InfraState::default()
            }),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn view(&self) -> InfraPredictView {
        let state = self.state.lock().await;
        InfraPredictView {
            inputs: state.inputs.clone(),
            map: state.map.clone(),
            maintenance: state.maintenance.clone(),
            project_plan: state.project_plan.clone(),
            funding: state.funding.clone(),
            resources: state.resources.clone(),
        }
    }

    pub async fn set_location(&self, location: impl Into<String>) {
        self.state.lock().await.inputs.location = location.into();
    }

    pub async fn set_project_type(&self, project_type: ProjectType) {
        self.state.lock().await.inputs.project_type = project_type;
    }

    pub async fn set_budget(&self, budget: impl Into<String>) {
        self.state.lock().await.inputs.budget = budget.into();
    }

    pub async fn set_timeline(&self, timeline: impl Into<String>) {
        self.state.lock().await.inputs.timeline = timeline.into();
    }

    pub async fn set_hazard_type(&self, hazard_type: HazardType) {
        self.state.lock().await.inputs.hazard_type = hazard_type;
    }

    /// Run map analysis and maintenance planning for the current location.
    pub async fn submit_location(&self) {
        if !self.state.lock().await.inputs.has_location() {
            debug!("Ignoring submit without a location");
            return;
        }
        futures::join!(self.refresh_map(), self.refresh_maintenance());
    }

    pub async fn select_map_layer(&self, layer: MapLayer) {
        let ready = {
            let mut state = self.state.lock().await;
            state.inputs.map_layer = layer;
            state.inputs.has_location()
        };
        if ready {
            self.refresh_map().await;
        }
    }

    pub async fn select_scenario(&self, scenario: MaintenanceScenario) {
        let ready = {
            let mut state = self.state.lock().await;
            state.inputs.scenario = scenario;
            state.inputs.has_location()
        };
        if ready {
            self.refresh_maintenance().await;
        }
    }

    pub async fn generate_project_plan(&self) {
        let pending = {
            let mut state = self.state.lock().await;
            if state.inputs.has_location() {
                let request = ProjectPlanRequest::builder()
                    .location(state.inputs.location.clone())
                    .project_type(state.inputs.project_type)
                    .budget(state.inputs.budget.clone())
                    .timeline(state.inputs.timeline.clone())
                    .build();
                Some((request, state.project_plan.begin_fresh()))
            } else {
                state.project_plan.reject(MISSING_PROJECT_INPUTS);
                None
            }
        };
        let Some((request, ticket)) = pending else {
            return;
        };

        info!(
            location = %request.location,
            project_type = %request.project_type,
            "Generating project plan"
        );
        self.settle(
            |s| &mut s.project_plan,
            ticket,
            InfraView::ProjectPlan,
            PROJECT_PLAN_FALLBACK,
            self.api.project_plan(&request),
        )
        .await;
    }

    pub async fn find_funding(&self) {
        let pending = {
            let mut state = self.state.lock().await;
            if state.inputs.has_location() {
                let request = FundingRequest::builder()
                    .location(state.inputs.location.clone())
                    .project_type(state.inputs.project_type)
                    .budget(state.inputs.budget.clone())
                    .build();
                Some((request, state.funding.begin_fresh()))
            } else {
                state.funding.reject(MISSING_PROJECT_INPUTS);
                None
            }
        };
        let Some((request, ticket)) = pending else {
            return;
        };

        info!(
            location = %request.location,
            project_type = %request.project_type,
            "Finding funding opportunities"
        );
        self.settle(
            |s| &mut s.funding,
            ticket,
            InfraView::Funding,
            FUNDING_FALLBACK,
            self.api.funding_opportunities(&request),
        )
        .await;
    }

    pub async fn find_resources(&self) {
        let pending = {
            let mut state = self.state.lock().await;
            if state.inputs.has_location() {
                let target = (state.inputs.location.clone(), state.inputs.hazard_type);
                Some((target, state.resources.begin_fresh()))
            } else {
                state.resources.reject(MISSING_HAZARD_INPUTS);
                None
            }
        };
        let Some(((location, hazard_type), ticket)) = pending else {
            return;
        };

        info!(location = %location, hazard_type = %hazard_type, "Finding resilience resources");
        self.settle(
            |s| &mut s.resources,
            ticket,
            InfraView::Resources,
            RESOURCES_FALLBACK,
            self.api.resilience_resources(&location, hazard_type),
        )
        .await;
    }

    pub async fn dismiss_error(&self, view: InfraView) {
        let mut state = self.state.lock().await;
        match view {
            InfraView::Map => state.map.dismiss_error(),
            InfraView::Maintenance => state.maintenance.dismiss_error(),
            InfraView::ProjectPlan => state.project_plan.dismiss_error(),
            InfraView::Funding => state.funding.dismiss_error(),
            InfraView::Resources => state.resources.dismiss_error(),
        }
    }

    async fn refresh_map(&self) {
        let (location, layer, ticket) = {
            let mut state = self.state.lock().await;
            let location = state.inputs.location.clone();
            (location, state.inputs.map_layer, state.map.begin_fresh())
        };

        info!(location = %location, layer = %layer, "Requesting map analysis");
        self.settle(
            |s| &mut s.map,
            ticket,
            InfraView::Map,
            MAP_FALLBACK,
            self.api.map_analysis(&location, layer),
        )
        .await;
    }

    async fn refresh_maintenance(&self) {
        let (location, scenario, ticket) = {
            let mut state = self.state.lock().await;
            let location = state.inputs.location.clone();
            (location, state.inputs.scenario, state.maintenance.begin_fresh())
        };

        info!(location = %location, scenario = %scenario, "Requesting maintenance plan");
        self.settle(
            |s| &mut s.maintenance,
            ticket,
            InfraView::Maintenance,
            MAINTENANCE_FALLBACK,
            self.api.maintenance_plan(&location, scenario),
        )
        .await;
    }

    /// Await `request` and write its outcome into the view picked by `slot`,
    /// unless a newer request for that view was issued meanwhile.
    async fn settle<T, S, F>(
        &self,
        slot: S,
        ticket: Ticket,
        view: InfraView,
        fallback: &str,
        request: F,
    ) where
        S: Fn(&mut InfraState) -> &mut ViewState<T>,
        F: Future<Output = infrapredict_client::Result<T>>,
    {
        let result = request.await.map_err(|err| {
            warn!(?view, error = %err, "Infrastructure request failed");
            err.user_message(fallback)
        });

        let mut state = self.state.lock().await;
        if !slot(&mut *state).resolve(ticket, result) {
            debug!(?view, "Discarding stale response");
        }
    }
}
