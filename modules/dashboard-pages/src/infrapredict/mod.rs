mod coordinator;

pub use coordinator::{
    InfraInputs, InfraPredictPage, InfraPredictView, InfraView, FUNDING_FALLBACK,
    MAINTENANCE_FALLBACK, MAP_FALLBACK, MISSING_HAZARD_INPUTS, MISSING_PROJECT_INPUTS,
    PROJECT_PLAN_FALLBACK, RESOURCES_FALLBACK,
};
