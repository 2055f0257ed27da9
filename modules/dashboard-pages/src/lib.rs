pub mod ecoguard;
pub mod infrapredict;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use ecoguard::{EcoGuardPage, EcoView, ReportCache, Selection};
pub use infrapredict::{InfraInputs, InfraPredictPage, InfraView};
pub use traits::{EnvironmentalApi, InfrastructureApi};
