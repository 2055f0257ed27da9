use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use dashboard_common::{Ticket, ViewState};
use dashboard_markup::{render_content, Markup};
use ecoguard_client::{
    AlertResponse, AlertType, Category, DownloadKind, EnvironmentalData, MonitoringData,
    ReportData,
};

use super::cache::ReportCache;
use crate::traits::EnvironmentalApi;

/// The four independently loading views of the environmental page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcoView {
    Snapshot,
    Monitoring,
    Report,
    Alerts,
}

/// What the user has chosen. `location` is the last *confirmed* location,
/// not in-progress input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub location: String,
    pub category: Category,
    pub alert_type: AlertType,
}

impl Selection {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            category: Category::AirQuality,
            alert_type: AlertType::Community,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedSection {
    pub title: String,
    pub body: Markup,
}

/// A report as displayed: the shared payload plus its rendered sections.
#[derive(Debug, Clone)]
pub struct DisplayedReport {
    pub payload: Arc<ReportData>,
    pub sections: Vec<RenderedSection>,
}

impl DisplayedReport {
    fn render(payload: Arc<ReportData>) -> Self {
        let sections = payload
            .sections
            .iter()
            .map(|section| RenderedSection {
                title: section.title.clone(),
                body: render_content(&section.content),
            })
            .collect();
        Self { payload, sections }
    }
}

/// Point-in-time copy of the page for presentation.
#[derive(Debug, Clone)]
pub struct EcoGuardView {
    pub selection: Selection,
    pub snapshot: ViewState<EnvironmentalData>,
    pub monitoring: ViewState<MonitoringData>,
    pub report: ViewState<DisplayedReport>,
    pub alerts: ViewState<AlertResponse>,
}

struct PageState {
    selection: Selection,
    cache: ReportCache,
    snapshot: ViewState<EnvironmentalData>,
    monitoring: ViewState<MonitoringData>,
    report: ViewState<DisplayedReport>,
    alerts: ViewState<AlertResponse>,
}

impl PageState {
    /// Location of the last successful snapshot. Category views follow it
    /// so cached reports always belong to the location on screen.
    fn active_location(&self) -> Option<String> {
        self.cache.last_location().map(str::to_string)
    }
}

/// Coordinates fetches for the environmental monitoring page.
///
/// State lives behind an async mutex that is never held across a request,
/// so any number of operations may be in flight at once. Each view accepts
/// only the response to its most recent request.
pub struct EcoGuardPage<A> {
    api: A,
    state: Mutex<PageState>,
}

impl<A: EnvironmentalApi> EcoGuardPage<A> {
    pub fn new(api: A, selection: Selection) -> Self {
        Self {
            api,
            state: Mutex::new(PageState {
                selection,
                cache: ReportCache::new(),
                snapshot: ViewState::new(),
                monitoring: ViewState::new(),
                report: ViewState::new(),
                alerts: ViewState::new(),
            }),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn view(&self) -> EcoGuardView {
        let state = self.state.lock().await;
        EcoGuardView {
            selection: state.selection.clone(),
            snapshot: state.snapshot.clone(),
            monitoring: state.monitoring.clone(),
            report: state.report.clone(),
            alerts: state.alerts.clone(),
        }
    }

    pub async fn selection(&self) -> Selection {
        self.state.lock().await.selection.clone()
    }

    pub async fn cached_report(&self, location: &str, category: Category) -> Option<Arc<ReportData>> {
        self.state.lock().await.cache.get(location, category)
    }

    pub async fn cached_report_count(&self) -> usize {
        self.state.lock().await.cache.len()
    }

    /// Load everything for the initially selected location.
    pub async fn initial_load(&self) {
        let location = self.selection().await.location;
        self.confirm_location(&location).await;
    }

    /// Commit a location: refresh the snapshot and alerts together, then
    /// monitoring and report once the snapshot lands. Blank input is ignored;
    /// anything else is stored, sent and cached exactly as typed.
    pub async fn confirm_location(&self, location: &str) {
        if location.trim().is_empty() {
            debug!("Ignoring blank location");
            return;
        }

        let (snapshot_ticket, alerts_ticket, alert_type) = {
            let mut state = self.state.lock().await;
            state.selection.location = location.to_string();
            (
                state.snapshot.begin(),
                state.alerts.begin(),
                state.selection.alert_type,
            )
        };

        info!(location, "Location confirmed");
        futures::join!(
            self.run_snapshot(location, snapshot_ticket),
            self.run_alerts(location, alert_type, alerts_ticket),
        );
    }

    /// Switch category. Monitoring and report refresh only once a snapshot
    /// has loaded.
    pub async fn select_category(&self, category: Category) {
        let ready = {
            let mut state = self.state.lock().await;
            state.selection.category = category;
            state.snapshot.data().is_some()
        };
        if ready {
            self.refresh_category_views().await;
        }
    }

    /// Switch alert type. Alerts refresh only once a snapshot has loaded.
    pub async fn select_alert_type(&self, alert_type: AlertType) {
        let pending = {
            let mut state = self.state.lock().await;
            state.selection.alert_type = alert_type;
            if state.snapshot.data().is_some() {
                Some((state.selection.location.clone(), state.alerts.begin()))
            } else {
                None
            }
        };
        if let Some((location, ticket)) = pending {
            self.run_alerts(&location, alert_type, ticket).await;
        }
    }

    pub async fn dismiss_error(&self, view: EcoView) {
        let mut state = self.state.lock().await;
        match view {
            EcoView::Snapshot => state.snapshot.dismiss_error(),
            EcoView::Monitoring => state.monitoring.dismiss_error(),
            EcoView::Report => state.report.dismiss_error(),
            EcoView::Alerts => state.alerts.dismiss_error(),
        }
    }

    /// Export link for the confirmed location. `None` while no location is
    /// set or when the link cannot be built.
    pub async fn download_link(&self, kind: DownloadKind) -> Option<String> {
        let location = self.selection().await.location;
        if location.trim().is_empty() {
            return None;
        }
        match self.api.download_link(&location, kind) {
            Ok(link) => Some(link),
            Err(err) => {
                warn!(error = %err, "Failed to build download link");
                None
            }
        }
    }

    async fn run_snapshot(&self, location: &str, ticket: Ticket) {
        let result = self.api.environmental_data(location).await;

        let loaded = {
            let mut state = self.state.lock().await;
            if !state.snapshot.is_current(ticket) {
                debug!(location, "Discarding stale environmental data");
                return;
            }
            match result {
                Ok(data) => {
                    if state.cache.reset_if_location_changed(location) {
                        info!(location, "Active location changed, report cache cleared");
                    }
                    state.snapshot.resolve(ticket, Ok(data));
                    true
                }
                Err(err) => {
                    warn!(location, error = %err, "Environmental data request failed");
                    state.snapshot.resolve(ticket, Err(err.user_message()));
                    false
                }
            }
        };

        if loaded {
            self.refresh_category_views().await;
        }
    }

    async fn run_alerts(&self, location: &str, alert_type: AlertType, ticket: Ticket) {
        let result = self.api.alerts(alert_type, location).await;

        let mut state = self.state.lock().await;
        let result = result.map_err(|err| {
            warn!(location, alert_type = %alert_type, error = %err, "Alerts request failed");
            err.user_message()
        });
        if !state.alerts.resolve(ticket, result) {
            debug!(location, alert_type = %alert_type, "Discarding stale alerts");
        }
    }

    async fn refresh_category_views(&self) {
        futures::join!(self.refresh_monitoring(), self.refresh_report());
    }

    async fn refresh_monitoring(&self) {
        let (location, category, ticket) = {
            let mut state = self.state.lock().await;
            let Some(location) = state.active_location() else {
                return;
            };
            let category = state.selection.category;
            (location, category, state.monitoring.begin())
        };

        let result = self.api.monitoring(category, &location).await;

        let mut state = self.state.lock().await;
        let result = result.map_err(|err| {
            warn!(location = %location, category = %category, error = %err, "Monitoring request failed");
            err.user_message()
        });
        if !state.monitoring.resolve(ticket, result) {
            debug!(location = %location, category = %category, "Discarding stale monitoring data");
        }
    }

    async fn refresh_report(&self) {
        let (location, category, ticket) = {
            let mut state = self.state.lock().await;
            let Some(location) = state.active_location() else {
                return;
            };
            let category = state.selection.category;
            if let Some(cached) = state.cache.get(&location, category) {
                debug!(location = %location, category = %category, "Report served from cache");
                state.report.show(DisplayedReport::render(cached));
                return;
            }
            (location, category, state.report.begin_fresh())
        };

        info!(location = %location, category = %category, "Generating report");
        let result = self.api.report(category, &location).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(report) => {
                let report = Arc::new(report);
                // A report for a location that is no longer active would be
                // dropped by the next reset anyway.
                if state.cache.last_location() == Some(location.as_str()) {
                    state.cache.put(&location, category, report.clone());
                }
                if state.report.is_current(ticket) {
                    state.report.resolve(ticket, Ok(DisplayedReport::render(report)));
                } else {
                    debug!(location = %location, category = %category, "Discarding stale report");
                }
            }
            Err(err) => {
                warn!(location = %location, category = %category, error = %err, "Report request failed");
                if !state.report.resolve(ticket, Err(err.user_message())) {
                    debug!(location = %location, category = %category, "Discarding stale report error");
                }
            }
        }
    }
}
