// Main entry point - Load configuration, build the dashboard, write artifacts
mod domain;
mod application;
mod infrastructure;
#[cfg(test)]
mod test_support;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::{build_definition, load_dashboard_config, load_metrics_config};
use crate::infrastructure::file_store::FileArtifactStore;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let dashboard_config = load_dashboard_config()?;
    let metrics_config = load_metrics_config()?;
    let definition = build_definition(&dashboard_config, &metrics_config)?;

    let store = Arc::new(FileArtifactStore::new(&dashboard_config.dashboard.output_dir));
    let service = DashboardService::new(store, definition);

    let report = service.generate()?;
    tracing::debug!("Dashboard holds {} widgets", report.widget_count);
    for artifact in &report.artifacts {
        tracing::info!("Wrote {}/{}", dashboard_config.dashboard.output_dir, artifact);
    }

    Ok(())
}
