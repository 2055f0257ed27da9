//! Behaviour of the environmental page controller against the mock backend.

use std::sync::Arc;
use std::time::Duration;

use dashboard_common::ViewStatus;
use dashboard_pages::testing::{
    alert, alert_response, city_fixtures, environmental_city, report_data, EcoCall,
    MockEnvironmentalApi,
};
use dashboard_pages::{EcoGuardPage, EcoView, Selection};
use ecoguard_client::{AlertLevel, AlertType, Category, DownloadKind};

async fn loaded_page(api: MockEnvironmentalApi, city: &str) -> EcoGuardPage<MockEnvironmentalApi> {
    let page = EcoGuardPage::new(api, Selection::new(city));
    page.initial_load().await;
    page
}

// =========================================================================
// Loading
// =========================================================================

#[tokio::test]
async fn cold_page_is_idle() {
    let page = EcoGuardPage::new(environmental_city("London"), Selection::new("London"));
    let view = page.view().await;

    assert_eq!(view.snapshot.status(), ViewStatus::Idle);
    assert_eq!(view.monitoring.status(), ViewStatus::Idle);
    assert_eq!(view.report.status(), ViewStatus::Idle);
    assert_eq!(view.alerts.status(), ViewStatus::Idle);
    assert!(page.api().calls().is_empty());
}

#[tokio::test]
async fn initial_load_fills_every_view() {
    let page = loaded_page(environmental_city("London"), "London").await;
    let view = page.view().await;

    assert_eq!(view.snapshot.data().unwrap().location.city, "London");
    assert_eq!(view.monitoring.data().unwrap().data_type, "air_quality");
    assert_eq!(view.alerts.status(), ViewStatus::Success);

    let report = view.report.data().unwrap();
    assert_eq!(report.sections.len(), 1);
    assert!(report.sections[0].body.as_str().contains("<ul"));
    assert!(view.report.fetched_at().is_some());

    let api = page.api();
    assert_eq!(api.call_count(EcoCall::Snapshot), 1);
    assert_eq!(api.call_count(EcoCall::Alerts(AlertType::Community)), 1);
    assert_eq!(api.call_count(EcoCall::Monitoring(Category::AirQuality)), 1);
    assert_eq!(api.call_count(EcoCall::Report(Category::AirQuality)), 1);
}

#[tokio::test]
async fn blank_location_is_ignored() {
    let page = EcoGuardPage::new(environmental_city("London"), Selection::new("London"));
    page.confirm_location("   ").await;

    assert!(page.api().calls().is_empty());
    assert_eq!(page.selection().await.location, "London");
}

#[tokio::test]
async fn category_change_before_snapshot_only_records_selection() {
    let page = EcoGuardPage::new(environmental_city("London"), Selection::new("London"));
    page.select_category(Category::Pollution).await;

    assert_eq!(page.selection().await.category, Category::Pollution);
    assert!(page.api().calls().is_empty());
}

// =========================================================================
// Report cache
// =========================================================================

#[tokio::test]
async fn revisiting_a_category_serves_the_cached_instance() {
    let page = loaded_page(environmental_city("Paris"), "Paris").await;

    let first = page.view().await.report.data().unwrap().payload.clone();

    page.select_category(Category::WaterQuality).await;
    page.select_category(Category::AirQuality).await;

    let again = page.view().await.report.data().unwrap().payload.clone();
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(page.api().call_count(EcoCall::Report(Category::AirQuality)), 1);
    assert_eq!(page.api().call_count(EcoCall::Report(Category::WaterQuality)), 1);
    assert_eq!(page.cached_report_count().await, 2);
}

#[tokio::test]
async fn cache_hit_makes_no_network_call() {
    let page = loaded_page(environmental_city("Paris"), "Paris").await;
    let before = page.api().report_calls();

    page.select_category(Category::AirQuality).await;

    assert_eq!(page.api().report_calls(), before);
    let cached = page.cached_report("Paris", Category::AirQuality).await.unwrap();
    let shown = page.view().await.report.data().unwrap().payload.clone();
    assert!(Arc::ptr_eq(&cached, &shown));
}

#[tokio::test]
async fn new_location_drops_previous_reports() {
    let api = city_fixtures(environmental_city("Paris"), "Tokyo");
    let page = loaded_page(api, "Paris").await;
    assert!(page.cached_report("Paris", Category::AirQuality).await.is_some());

    page.confirm_location("Tokyo").await;

    assert!(page.cached_report("Paris", Category::AirQuality).await.is_none());
    assert!(page.cached_report("Tokyo", Category::AirQuality).await.is_some());
    assert_eq!(page.cached_report_count().await, 1);

    // Coming back to Paris has to refetch.
    page.confirm_location("Paris").await;
    assert_eq!(page.api().call_count(EcoCall::Report(Category::AirQuality)), 3);
}

#[tokio::test]
async fn reconfirming_the_same_location_keeps_the_cache() {
    let page = loaded_page(environmental_city("Paris"), "Paris").await;
    page.confirm_location("Paris").await;

    assert_eq!(page.api().call_count(EcoCall::Snapshot), 2);
    assert_eq!(page.api().call_count(EcoCall::Report(Category::AirQuality)), 1);
}

#[tokio::test]
async fn locations_are_used_exactly_as_typed() {
    let api = city_fixtures(environmental_city("Paris"), "Paris ");
    let page = loaded_page(api, "Paris").await;

    page.confirm_location("Paris ").await;

    assert_eq!(page.selection().await.location, "Paris ");
    assert!(page
        .api()
        .calls()
        .contains(&(EcoCall::Snapshot, "Paris ".to_string())));
    assert_eq!(page.view().await.snapshot.error(), None);
    assert!(page.cached_report("Paris ", Category::AirQuality).await.is_some());
    assert!(page.cached_report("Paris", Category::AirQuality).await.is_none());
    assert_eq!(page.api().call_count(EcoCall::Report(Category::AirQuality)), 2);
}

#[tokio::test]
async fn failed_report_is_not_cached() {
    let api = environmental_city("Paris").failing(
        EcoCall::Report(Category::Pollution),
        "Paris",
        500,
        "Report generation failed",
    );
    let page = loaded_page(api, "Paris").await;

    page.select_category(Category::Pollution).await;
    let view = page.view().await;
    assert_eq!(view.report.error(), Some("Report generation failed"));
    assert!(view.report.data().is_none());
    assert!(page.cached_report("Paris", Category::Pollution).await.is_none());

    page.select_category(Category::AirQuality).await;
    page.select_category(Category::Pollution).await;
    assert_eq!(page.api().call_count(EcoCall::Report(Category::Pollution)), 2);
}

// =========================================================================
// Stale responses
// =========================================================================

#[tokio::test(start_paused = true)]
async fn slow_report_for_old_category_is_discarded() {
    let api = environmental_city("Paris").delayed(
        EcoCall::Report(Category::WaterQuality),
        "Paris",
        Duration::from_secs(10),
    );
    let page = loaded_page(api, "Paris").await;

    // Water report is slow; switch to pollution while it is in flight.
    let slow = page.select_category(Category::WaterQuality);
    let fast = async {
        tokio::time::sleep(Duration::from_secs(1)).await;
        page.select_category(Category::Pollution).await;
    };
    tokio::join!(slow, fast);

    let view = page.view().await;
    assert_eq!(view.selection.category, Category::Pollution);
    assert_eq!(view.report.data().unwrap().payload.report_type, "pollution");
    assert_eq!(view.monitoring.data().unwrap().data_type, "pollution");
    assert_eq!(view.report.status(), ViewStatus::Success);

    // The late response still lands in the cache for its own key.
    assert!(page.cached_report("Paris", Category::WaterQuality).await.is_some());
}

#[tokio::test(start_paused = true)]
async fn slow_report_does_not_overwrite_a_cache_hit() {
    let api = environmental_city("Paris").delayed(
        EcoCall::Report(Category::Pollution),
        "Paris",
        Duration::from_secs(10),
    );
    let page = loaded_page(api, "Paris").await;

    let slow = page.select_category(Category::Pollution);
    let back = async {
        tokio::time::sleep(Duration::from_secs(1)).await;
        page.select_category(Category::AirQuality).await;
    };
    tokio::join!(slow, back);

    let view = page.view().await;
    assert_eq!(view.report.data().unwrap().payload.report_type, "air_quality");
}

#[tokio::test(start_paused = true)]
async fn slow_snapshot_for_old_location_is_discarded() {
    let api = city_fixtures(environmental_city("Paris"), "Tokyo").delayed(
        EcoCall::Snapshot,
        "Paris",
        Duration::from_secs(10),
    );
    let page = EcoGuardPage::new(api, Selection::new("Paris"));

    let slow = page.confirm_location("Paris");
    let fast = async {
        tokio::time::sleep(Duration::from_secs(1)).await;
        page.confirm_location("Tokyo").await;
    };
    tokio::join!(slow, fast);

    let view = page.view().await;
    assert_eq!(view.snapshot.data().unwrap().location.city, "Tokyo");
    assert_eq!(view.report.data().unwrap().payload.location, "Tokyo");
    assert!(page.cached_report("Paris", Category::AirQuality).await.is_none());
    assert_eq!(page.api().call_count(EcoCall::Report(Category::AirQuality)), 1);
}

// =========================================================================
// Errors
// =========================================================================

#[tokio::test]
async fn failures_stay_in_their_own_view() {
    let api = environmental_city("London").failing(
        EcoCall::Monitoring(Category::AirQuality),
        "London",
        502,
        "Failed to fetch air_quality data",
    );
    let page = loaded_page(api, "London").await;
    let view = page.view().await;

    assert_eq!(view.monitoring.status(), ViewStatus::Error);
    assert_eq!(view.monitoring.error(), Some("Failed to fetch air_quality data"));
    assert_eq!(view.snapshot.status(), ViewStatus::Success);
    assert_eq!(view.report.status(), ViewStatus::Success);
    assert_eq!(view.alerts.status(), ViewStatus::Success);
}

#[tokio::test]
async fn failed_snapshot_skips_category_views() {
    let api = MockEnvironmentalApi::new().failing(EcoCall::Snapshot, "Atlantis", 404, "City not found");
    let page = loaded_page(api, "Atlantis").await;
    let view = page.view().await;

    assert_eq!(view.snapshot.error(), Some("City not found"));
    assert_eq!(view.monitoring.status(), ViewStatus::Idle);
    assert_eq!(view.report.status(), ViewStatus::Idle);
    assert_eq!(page.api().report_calls(), 0);
}

#[tokio::test]
async fn dismissing_clears_only_that_view() {
    let api = environmental_city("London")
        .failing(EcoCall::Alerts(AlertType::Community), "London", 500, "Alerts down")
        .failing(EcoCall::Report(Category::AirQuality), "London", 500, "Report down");
    let page = loaded_page(api, "London").await;
    let calls_before = page.api().calls().len();

    page.dismiss_error(EcoView::Alerts).await;

    let view = page.view().await;
    assert_eq!(view.alerts.error(), None);
    assert_eq!(view.report.error(), Some("Report down"));
    assert_eq!(page.api().calls().len(), calls_before);
}

// =========================================================================
// Alerts and downloads
// =========================================================================

#[tokio::test]
async fn alert_type_change_refreshes_only_alerts() {
    let api = environmental_city("London").on_alerts(
        "London",
        AlertType::HealthRisk,
        alert_response(
            "London",
            AlertType::HealthRisk,
            vec![alert(AlertLevel::Warning, "Pollen", "High pollen count")],
        ),
    );
    let page = loaded_page(api, "London").await;
    let calls_before = page.api().calls().len();

    page.select_alert_type(AlertType::HealthRisk).await;

    let view = page.view().await;
    assert_eq!(view.alerts.data().unwrap().alerts[0].title, "Pollen");
    assert_eq!(page.api().calls().len(), calls_before + 1);
    assert_eq!(page.api().call_count(EcoCall::Alerts(AlertType::HealthRisk)), 1);
}

#[tokio::test]
async fn report_sections_render_once_from_raw_content() {
    let api = environmental_city("Oslo").on_report(
        "Oslo",
        Category::AirQuality,
        report_data(
            "Oslo",
            Category::AirQuality,
            &[("Risks", "**Ozone** is <high>"), ("Advice", "- stay in\n- close windows")],
        ),
    );
    let page = loaded_page(api, "Oslo").await;
    let report = page.view().await.report.data().cloned().unwrap();

    assert_eq!(report.sections[0].title, "Risks");
    assert_eq!(
        report.sections[0].body.as_str(),
        r#"<p class="mb-3"><strong>Ozone</strong> is &lt;high&gt;</p>"#
    );
    assert_eq!(report.payload.sections[0].content, "**Ozone** is <high>");
}

#[test]
fn download_link_uses_confirmed_location() {
    let page = EcoGuardPage::new(environmental_city("London"), Selection::new("London"));
    let link = tokio_test::block_on(page.download_link(DownloadKind::Category(Category::Pollution)));
    assert_eq!(
        link.as_deref(),
        Some("https://mock.test/api/download?location=London&type=pollution")
    );

    let blank = EcoGuardPage::new(MockEnvironmentalApi::new(), Selection::new(""));
    assert_eq!(tokio_test::block_on(blank.download_link(DownloadKind::All)), None);
}
