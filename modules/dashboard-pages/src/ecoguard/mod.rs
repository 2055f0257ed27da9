mod cache;
mod coordinator;

pub use cache::ReportCache;
pub use coordinator::{
    DisplayedReport, EcoGuardPage, EcoGuardView, EcoView, RenderedSection, Selection,
};
