use crate::application::dashboard_service::DashboardDefinition;
use crate::application::layout::LayoutSettings;
use crate::application::query_builder::QueryOptions;
use crate::domain::environment::Environments;
use crate::domain::error::DashboardError;
use crate::domain::metric::{MetricCatalog, MetricDefinition, Section};
use crate::domain::token::ResourceName;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "RDS_DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub query: QueryConfig,
    pub environments: EnvironmentsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardSettings {
    pub name: String,
    pub stack_name: String,
    pub region: String,
    pub output_dir: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            name: "RDS-All-Environments".to_string(),
            stack_name: "RdsDashboardStack".to_string(),
            region: "us-east-1".to_string(),
            output_dir: "out".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LayoutConfig {
    pub grid_width: u32,
    pub header_height: u32,
    pub graph_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let defaults = LayoutSettings::default();
        Self {
            grid_width: defaults.grid_width,
            header_height: defaults.header_height,
            graph_height: defaults.graph_height,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct QueryConfig {
    pub statistic: String,
    pub period_seconds: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            statistic: "Average".to_string(),
            period_seconds: 60,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EnvironmentsConfig {
    pub display_order: Vec<String>,
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AccountConfig {
    pub environment: String,
    pub id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricsConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_dimension")]
    pub dimension: String,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SectionConfig {
    pub title: String,
    #[serde(default)]
    pub metrics: Vec<MetricConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricConfig {
    pub name: String,
    pub title: String,
    pub unit: String,
    pub namespace: Option<String>,
    pub dimension: Option<String>,
}

fn default_namespace() -> String {
    "AWS/RDS".to_string()
}

fn default_dimension() -> String {
    "DBInstanceIdentifier".to_string()
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_dashboard_config_from("config/dashboard", None)
}

/// Load dashboard settings from `path`, then apply `RDS_DASHBOARD_*` overrides.
///
/// `env` replaces the process environment when given.
pub fn load_dashboard_config_from(
    path: &str,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_metrics_config() -> anyhow::Result<MetricsConfig> {
    load_metrics_config_from("config/metrics")
}

pub fn load_metrics_config_from(path: &str) -> anyhow::Result<MetricsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Validate both configuration files and combine them into a buildable definition
pub fn build_definition(
    dashboard: &DashboardConfig,
    metrics: &MetricsConfig,
) -> Result<DashboardDefinition, DashboardError> {
    let name = ResourceName::parse("dashboard name", &dashboard.dashboard.name)?;
    let stack_name = ResourceName::parse("stack name", &dashboard.dashboard.stack_name)?;

    let envs = &dashboard.environments;
    for account in &envs.accounts {
        if !envs.display_order.contains(&account.environment) {
            tracing::warn!(
                "Account {} for environment '{}' is not in the display order, skipping",
                account.id,
                account.environment
            );
        }
    }

    let environments = Environments::from_mapping(
        &envs.display_order,
        envs.accounts.iter().map(|a| (a.environment.as_str(), a.id.as_str())),
    )?;

    Ok(DashboardDefinition {
        name,
        stack_name,
        region: dashboard.dashboard.region.clone(),
        catalog: build_catalog(metrics)?,
        environments,
        layout: LayoutSettings {
            grid_width: dashboard.layout.grid_width,
            header_height: dashboard.layout.header_height,
            graph_height: dashboard.layout.graph_height,
        },
        query: QueryOptions::new(&dashboard.query.statistic, dashboard.query.period_seconds)?,
    })
}

pub fn build_catalog(metrics: &MetricsConfig) -> Result<MetricCatalog, DashboardError> {
    let sections = metrics
        .sections
        .iter()
        .map(|section| {
            let definitions = section
                .metrics
                .iter()
                .map(|m| {
                    MetricDefinition::new(
                        &m.name,
                        &m.title,
                        &m.unit,
                        m.namespace.as_deref().unwrap_or(&metrics.namespace),
                        m.dimension.as_deref().unwrap_or(&metrics.dimension),
                    )
                })
                .collect::<Result<Vec<_>, _>>()?;
            Section::new(section.title.clone(), definitions)
        })
        .collect::<Result<Vec<_>, _>>()?;

    MetricCatalog::new(sections)
}
