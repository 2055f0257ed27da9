use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dashboard_common::{Config, ViewState};
use dashboard_markup::panels::{
    alert_banner, alerts_panel, build_page, monitoring_panel, report_section_panel, snapshot_panel,
};
use dashboard_markup::Markup;
use dashboard_pages::ecoguard::EcoGuardView;
use dashboard_pages::{EcoGuardPage, InfraInputs, InfraPredictPage, Selection};
use ecoguard_client::{AlertLevel, AlertType, Category, DownloadKind, EcoGuardClient};
use infrapredict_client::{
    HazardType, InfraPredictClient, MaintenanceScenario, MapLayer, ProjectType,
};

#[derive(Parser)]
#[command(name = "dashboard", about = "EcoGuard and InfraPredict dashboards")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the environmental dashboard for a location and write it as HTML
    Eco {
        /// Defaults to DASHBOARD_DEFAULT_LOCATION
        #[arg(long)]
        location: Option<String>,
        #[arg(long, default_value = "air_quality")]
        category: Category,
        #[arg(long, default_value = "community")]
        alert_type: AlertType,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the export link for a location
    DownloadUrl {
        #[arg(long)]
        location: Option<String>,
        /// A category name or "all"
        #[arg(long, default_value = "all")]
        kind: DownloadKind,
    },
    /// Run the infrastructure analyses for a location and print JSON
    Infra {
        #[arg(long)]
        location: String,
        #[arg(long, default_value = "vulnerability")]
        layer: MapLayer,
        #[arg(long, default_value = "predictive")]
        scenario: MaintenanceScenario,
        #[arg(long, default_value = "bridge")]
        project_type: ProjectType,
        #[arg(long, default_value = "")]
        budget: String,
        #[arg(long, default_value = "12 months")]
        timeline: String,
        #[arg(long, default_value = "flood")]
        hazard: HazardType,
        /// Also generate the project plan, funding and resilience views
        #[arg(long)]
        plan: bool,
    },
}

fn init_tracing(json: bool) -> Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("dashboard=info".parse()?)
        .add_directive("ecoguard_client=info".parse()?)
        .add_directive("infrapredict_client=info".parse()?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs)?;

    let config = Config::from_env()?;
    config.log_redacted();

    match cli.command {
        Command::Eco {
            location,
            category,
            alert_type,
            out,
        } => {
            let selection = Selection {
                location: location.unwrap_or_else(|| config.default_location.clone()),
                category,
                alert_type,
            };
            run_eco(&config, selection, out).await
        }
        Command::DownloadUrl { location, kind } => {
            let location = location.unwrap_or_else(|| config.default_location.clone());
            let client = EcoGuardClient::new(&config.ecoguard_api_url, config.request_timeout)?;
            let page = EcoGuardPage::new(client, Selection::new(location));
            match page.download_link(kind).await {
                Some(link) => {
                    println!("{link}");
                    Ok(())
                }
                None => bail!("No download link: location is blank or the API URL is invalid"),
            }
        }
        Command::Infra {
            location,
            layer,
            scenario,
            project_type,
            budget,
            timeline,
            hazard,
            plan,
        } => {
            let inputs = InfraInputs {
                location,
                map_layer: layer,
                scenario,
                project_type,
                budget,
                timeline,
                hazard_type: hazard,
            };
            run_infra(&config, inputs, plan).await
        }
    }
}

async fn run_eco(config: &Config, selection: Selection, out: Option<PathBuf>) -> Result<()> {
    let client = EcoGuardClient::new(&config.ecoguard_api_url, config.request_timeout)?;
    let page = EcoGuardPage::new(client, selection);

    page.initial_load().await;
    let view = page.view().await;
    if let Some(error) = view.snapshot.error() {
        warn!(error, "Environmental data unavailable");
    }

    let html = render_eco_page(&view);
    match out {
        Some(path) => {
            std::fs::write(&path, html.as_str())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Dashboard written");
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn error_banner(message: &str) -> Markup {
    alert_banner(AlertLevel::Error, "Error", message, true)
}

fn render_eco_page(view: &EcoGuardView) -> Markup {
    let mut parts = Vec::new();

    if let Some(error) = view.snapshot.error() {
        parts.push(error_banner(error));
    }
    if let Some(data) = view.snapshot.data() {
        parts.push(snapshot_panel(data));
    }

    if let Some(error) = view.alerts.error() {
        parts.push(error_banner(error));
    }
    if let Some(alerts) = view.alerts.data() {
        parts.push(alerts_panel(alerts));
    }

    if let Some(error) = view.monitoring.error() {
        parts.push(error_banner(error));
    }
    if let Some(data) = view.monitoring.data() {
        parts.push(monitoring_panel(view.selection.category, data));
    }

    if let Some(error) = view.report.error() {
        parts.push(error_banner(error));
    }
    if let Some(report) = view.report.data() {
        for (index, section) in report.sections.iter().enumerate() {
            parts.push(report_section_panel(&section.title, &section.body, index));
        }
    }

    let body: Markup = parts.into_iter().collect();
    build_page(&format!("EcoGuard: {}", view.selection.location), &body)
}

async fn run_infra(config: &Config, inputs: InfraInputs, plan: bool) -> Result<()> {
    let client = InfraPredictClient::new(&config.infrapredict_api_url, config.request_timeout)?;
    let page = InfraPredictPage::with_inputs(client, inputs);

    page.submit_location().await;
    if plan {
        futures::join!(
            page.generate_project_plan(),
            page.find_funding(),
            page.find_resources(),
        );
    }

    let view = page.view().await;
    let mut report = json!({
        "location": view.inputs.location,
        "map": view_json(&view.map),
        "maintenance": view_json(&view.maintenance),
    });
    if plan {
        report["projectPlan"] = view_json(&view.project_plan);
        report["funding"] = view_json(&view.funding);
        report["resources"] = view_json(&view.resources);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn view_json<T: Serialize>(view: &ViewState<T>) -> serde_json::Value {
    json!({
        "status": format!("{:?}", view.status()).to_lowercase(),
        "error": view.error(),
        "data": view.data(),
        "fetchedAt": view.fetched_at(),
    })
}
