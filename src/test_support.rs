// Shared fixtures for unit tests
use crate::application::artifact_store::ArtifactStore;
use crate::application::dashboard_service::DashboardDefinition;
use crate::application::layout::{LayoutSequencer, LayoutSettings};
use crate::application::query_builder::QueryOptions;
use crate::domain::dashboard::Dashboard;
use crate::domain::environment::Environments;
use crate::domain::metric::{MetricCatalog, MetricDefinition, Section};
use crate::domain::token::ResourceName;
use std::collections::BTreeMap;
use std::sync::Mutex;

pub fn sample_environments() -> Environments {
    let order: Vec<String> = ["Production", "QA", "Dev", "Staging"].iter().map(|s| s.to_string()).collect();
    let accounts = [
        ("Staging", "444444444444"),
        ("Dev", "333333333333"),
        ("QA", "222222222222"),
        ("Production", "111111111111"),
    ];
    Environments::from_mapping(&order, accounts).unwrap()
}

fn rds(name: &str, title: &str, unit: &str) -> MetricDefinition {
    MetricDefinition::new(name, title, unit, "AWS/RDS", "DBInstanceIdentifier").unwrap()
}

pub fn sample_catalog() -> MetricCatalog {
    MetricCatalog::new(vec![
        Section::new(
            "Resource Utilization".to_string(),
            vec![
                rds("CPUUtilization", "CPU Utilization", "Percent"),
                rds("DatabaseConnections", "Database Connections", "Count"),
            ],
        )
        .unwrap(),
        Section::new(
            "I/O Performance".to_string(),
            vec![rds("ReadLatency", "Read Latency", "Seconds")],
        )
        .unwrap(),
    ])
    .unwrap()
}

pub fn sample_definition() -> DashboardDefinition {
    DashboardDefinition {
        name: ResourceName::parse("dashboard name", "RDS-All-Environments").unwrap(),
        stack_name: ResourceName::parse("stack name", "RdsDashboardStack").unwrap(),
        region: "us-east-1".to_string(),
        catalog: sample_catalog(),
        environments: sample_environments(),
        layout: LayoutSettings::default(),
        query: QueryOptions::new("Average", 60).unwrap(),
    }
}

pub fn sample_dashboard() -> Dashboard {
    let def = sample_definition();
    LayoutSequencer::new(&def.catalog, &def.environments, def.layout, &def.query)
        .unwrap()
        .build(def.name.as_str())
}

#[derive(Default)]
pub struct MemoryStore {
    artifacts: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn get(&self, name: &str) -> Option<String> {
        self.artifacts.lock().unwrap().get(name).cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.artifacts.lock().unwrap().clone()
    }
}

impl ArtifactStore for MemoryStore {
    fn put(&self, name: &str, contents: &str) -> anyhow::Result<()> {
        self.artifacts.lock().unwrap().insert(name.to_string(), contents.to_string());
        Ok(())
    }
}
