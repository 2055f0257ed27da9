use std::collections::HashMap;
use std::sync::Arc;

use ecoguard_client::{Category, ReportData};

/// Report payloads keyed by location, then category.
///
/// Entries are shared `Arc`s: a hit hands back the exact payload that was
/// stored, so the page never refetches or re-deserializes it. Only the most
/// recently observed location's entries are meaningful; observing a new
/// location drops everything.
#[derive(Debug, Default)]
pub struct ReportCache {
    last_location: Option<String>,
    reports: HashMap<String, HashMap<Category, Arc<ReportData>>>,
}

impl ReportCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, location: &str, category: Category) -> Option<Arc<ReportData>> {
        self.reports
            .get(location)
            .and_then(|by_category| by_category.get(&category))
            .cloned()
    }

    /// Store a report, overwriting any previous entry for the pair.
    pub fn put(&mut self, location: &str, category: Category, report: Arc<ReportData>) {
        self.reports
            .entry(location.to_string())
            .or_default()
            .insert(category, report);
    }

    /// Clear every entry when `location` differs from the last one observed,
    /// then remember it. Returns whether the cache was reset.
    pub fn reset_if_location_changed(&mut self, location: &str) -> bool {
        if self.last_location.as_deref() == Some(location) {
            return false;
        }
        self.reports.clear();
        self.last_location = Some(location.to_string());
        true
    }

    pub fn last_location(&self) -> Option<&str> {
        self.last_location.as_deref()
    }

    /// Number of cached reports across all locations.
    pub fn len(&self) -> usize {
        self.reports.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
