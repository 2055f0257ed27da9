use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::ParseEnumError;

/// Stamps out `ALL`, `as_str`, `label`, `Display` and `FromStr` for a
/// selection enum whose wire form is its snake_case name.
macro_rules! wire_enum {
    ($name:ident, $kind:literal, { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseEnumError::new($kind, s))
            }
        }
    };
}

// --- Selection enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapLayer {
    #[default]
    Vulnerability,
    Durability,
    Risk,
}

wire_enum!(MapLayer, "map layer", {
    Vulnerability => ("vulnerability", "Infrastructure Vulnerability"),
    Durability => ("durability", "Durability Scores"),
    Risk => ("risk", "Risk Assessment"),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceScenario {
    #[default]
    Predictive,
    Scheduled,
}

wire_enum!(MaintenanceScenario, "maintenance scenario", {
    Predictive => ("predictive", "Predictive Maintenance"),
    Scheduled => ("scheduled", "Scheduled Maintenance"),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    Bridge,
    Road,
    Water,
    Energy,
    Building,
}

wire_enum!(ProjectType, "project type", {
    Bridge => ("bridge", "Bridge Construction/Repair"),
    Road => ("road", "Road Infrastructure"),
    Water => ("water", "Water Management"),
    Energy => ("energy", "Energy Infrastructure"),
    Building => ("building", "Building Reinforcement"),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardType {
    #[default]
    Flood,
    Storm,
    Earthquake,
    Fire,
    Drought,
}

wire_enum!(HazardType, "hazard type", {
    Flood => ("flood", "Flood Resilience"),
    Storm => ("storm", "Storm Resistance"),
    Earthquake => ("earthquake", "Earthquake Protection"),
    Fire => ("fire", "Fire Mitigation"),
    Drought => ("drought", "Drought Management"),
});

// --- Request bodies ---

#[derive(Debug, Clone, Serialize)]
pub struct MapAnalysisRequest {
    pub location: String,
    pub layer: MapLayer,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenancePlanRequest {
    pub location: String,
    pub scenario: MaintenanceScenario,
}

#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPlanRequest {
    #[builder(setter(into))]
    pub location: String,
    pub project_type: ProjectType,
    #[builder(default, setter(into))]
    pub budget: String,
    #[builder(default = "12 months".to_string(), setter(into))]
    pub timeline: String,
}

#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct FundingRequest {
    #[builder(setter(into))]
    pub location: String,
    pub project_type: ProjectType,
    #[builder(default, setter(into))]
    pub budget: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResilienceRequest {
    pub location: String,
    pub hazard_type: HazardType,
}

// --- Responses ---

/// Analysis for one map layer. Which score is set depends on the layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapLayerData {
    pub vulnerability_score: Option<f64>,
    pub durability_score: Option<f64>,
    pub risk_score: Option<f64>,
    pub primary_vulnerabilities: Vec<String>,
    pub primary_risks: Vec<String>,
    pub estimated_lifespan: Option<String>,
    pub material_condition: Option<String>,
    pub mitigation_opportunities: Vec<String>,
    pub critical_infrastructure: Vec<String>,
    pub detailed_analysis: String,
}

impl MapLayerData {
    /// The score relevant to `layer`, if the backend returned it.
    pub fn score_for(&self, layer: MapLayer) -> Option<f64> {
        match layer {
            MapLayer::Vulnerability => self.vulnerability_score,
            MapLayer::Durability => self.durability_score,
            MapLayer::Risk => self.risk_score,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaintenanceSchedule {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
    pub quarterly: Vec<String>,
    pub biannual: Vec<String>,
    pub annual: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CostEstimates {
    pub immediate: Option<String>,
    pub short_term: Option<String>,
    pub long_term: Option<String>,
    pub quarterly: Option<String>,
    pub biannual: Option<String>,
    pub annual: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaintenancePlan {
    pub maintenance_schedule: MaintenanceSchedule,
    pub cost_estimates: CostEstimates,
    pub resource_requirements: Vec<String>,
    pub expected_outcomes: Vec<String>,
    pub recommendations: String,
    pub risk_mitigation: Option<String>,
    pub comparison_to_predictive: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPhase {
    pub name: String,
    pub duration: String,
    pub tasks: Vec<String>,
    pub milestones: Vec<String>,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetBreakdown {
    pub materials: String,
    pub labor: String,
    pub equipment: String,
    pub overhead: String,
    pub contingency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskItem {
    pub risk: String,
    pub probability: String,
    pub impact: String,
    pub mitigation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectPlan {
    pub project_overview: String,
    pub phases: Vec<ProjectPhase>,
    pub budget_breakdown: BudgetBreakdown,
    pub risk_assessment: Vec<RiskItem>,
    pub expected_outcomes: Vec<String>,
    pub recommendations: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernmentGrant {
    pub name: String,
    pub agency: String,
    pub amount: String,
    pub deadline: String,
    pub eligibility: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivateFunding {
    pub name: String,
    pub organization: String,
    pub amount: String,
    pub focus: String,
    pub eligibility: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partnership {
    pub name: String,
    pub partners: Vec<String>,
    pub structure: String,
    pub benefits: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FundingOpportunities {
    pub government_grants: Vec<GovernmentGrant>,
    pub private_funding: Vec<PrivateFunding>,
    pub public_private_partnerships: Vec<Partnership>,
    pub application_tips: String,
    pub recommended_funding: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseStudy {
    pub title: String,
    pub location: String,
    pub scenario: String,
    pub solution: String,
    pub outcomes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResilienceResources {
    pub summary: String,
    pub best_practices: Vec<String>,
    pub case_studies: Vec<CaseStudy>,
    pub technical_guidance: Vec<String>,
    pub implementation_steps: Vec<String>,
    pub material_recommendations: Vec<String>,
    pub cost_effective_strategies: String,
}

/// Body shape of non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: Option<String>,
}
