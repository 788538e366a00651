// Dashboard service - Use case for generating the dashboard artifacts
use crate::application::artifact_store::ArtifactStore;
use crate::application::layout::{LayoutSequencer, LayoutSettings};
use crate::application::query_builder::QueryOptions;
use crate::domain::dashboard::Dashboard;
use crate::domain::environment::Environments;
use crate::domain::metric::MetricCatalog;
use crate::domain::token::ResourceName;
use crate::domain::widget::Widget;
use crate::infrastructure::cloudformation::render_template;
use crate::infrastructure::dashboard_body::render_body;
use std::sync::Arc;

/// Everything needed to build one dashboard, already validated.
#[derive(Debug, Clone)]
pub struct DashboardDefinition {
    pub name: ResourceName,
    pub stack_name: ResourceName,
    pub region: String,
    pub catalog: MetricCatalog,
    pub environments: Environments,
    pub layout: LayoutSettings,
    pub query: QueryOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub widget_count: usize,
    pub artifacts: Vec<String>,
}

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn ArtifactStore>,
    definition: DashboardDefinition,
}

impl DashboardService {
    pub fn new(store: Arc<dyn ArtifactStore>, definition: DashboardDefinition) -> Self {
        Self { store, definition }
    }

    pub fn build_dashboard(&self) -> anyhow::Result<Dashboard> {
        let def = &self.definition;
        let sequencer = LayoutSequencer::new(&def.catalog, &def.environments, def.layout, &def.query)?;
        Ok(sequencer.build(def.name.as_str()))
    }

    /// Build the dashboard and write the body and template artifacts.
    ///
    /// Both documents are rendered before anything is stored, so a build or
    /// render failure writes nothing. A failed store write may leave the body
    /// written without the template.
    pub fn generate(&self) -> anyhow::Result<GenerationReport> {
        let dashboard = self.build_dashboard()?;
        let def = &self.definition;

        let body = render_body(&dashboard, def.layout.grid_width, &def.region)?;
        let template = render_template(&dashboard, def.stack_name.as_str(), def.layout.grid_width, &def.region)?;

        let body_name = format!("{}.dashboard.json", def.name);
        let template_name = format!("{}.template.json", def.stack_name);
        self.store.put(&body_name, &body)?;
        self.store.put(&template_name, &template)?;

        tracing::info!(
            "Generated dashboard '{}': {} metrics, {} graphs across {} environments",
            def.name,
            def.catalog.metric_count(),
            dashboard.widgets().filter_map(Widget::as_graph).count(),
            def.environments.len()
        );

        Ok(GenerationReport {
            widget_count: dashboard.widget_count(),
            artifacts: vec![body_name, template_name],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryStore, sample_definition};

    #[test]
    fn test_generate_writes_body_and_template() {
        let store = Arc::new(MemoryStore::default());
        let service = DashboardService::new(store.clone(), sample_definition());

        let report = service.generate().unwrap();

        // 2 headers, 3 metrics x (1 aggregate + 4 details)
        assert_eq!(report.widget_count, 17);
        assert_eq!(
            report.artifacts,
            vec![
                "RDS-All-Environments.dashboard.json".to_string(),
                "RdsDashboardStack.template.json".to_string()
            ]
        );

        let body: serde_json::Value = serde_json::from_str(&store.get("RDS-All-Environments.dashboard.json").unwrap()).unwrap();
        assert_eq!(body["widgets"].as_array().unwrap().len(), 17);

        let template: serde_json::Value = serde_json::from_str(&store.get("RdsDashboardStack.template.json").unwrap()).unwrap();
        assert_eq!(
            template["Resources"]["RDSAllEnvironments"]["Properties"]["DashboardName"],
            "RDS-All-Environments"
        );
    }

    #[test]
    fn test_generation_is_byte_identical() {
        let first = Arc::new(MemoryStore::default());
        let second = Arc::new(MemoryStore::default());
        DashboardService::new(first.clone(), sample_definition()).generate().unwrap();
        DashboardService::new(second.clone(), sample_definition()).generate().unwrap();

        assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn test_invalid_layout_writes_nothing() {
        let store = Arc::new(MemoryStore::default());
        let mut definition = sample_definition();
        definition.layout.grid_width = 10;

        let err = DashboardService::new(store.clone(), definition).generate().unwrap_err();

        assert!(err.to_string().contains("cannot be split evenly"));
        assert!(store.snapshot().is_empty());
    }

    struct RejectTemplates(MemoryStore);

    impl ArtifactStore for RejectTemplates {
        fn put(&self, name: &str, contents: &str) -> anyhow::Result<()> {
            if name.ends_with(".template.json") {
                anyhow::bail!("disk full");
            }
            self.0.put(name, contents)
        }
    }

    #[test]
    fn test_failed_template_write_keeps_body() {
        let store = Arc::new(RejectTemplates(MemoryStore::default()));

        let err = DashboardService::new(store.clone(), sample_definition()).generate().unwrap_err();

        assert_eq!(err.to_string(), "disk full");
        let written: Vec<String> = store.0.snapshot().into_keys().collect();
        assert_eq!(written, vec!["RDS-All-Environments.dashboard.json".to_string()]);
    }
}
