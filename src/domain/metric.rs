// Metric catalog - what the dashboard plots and how it is grouped
use super::error::DashboardError;
use super::token::SearchToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDefinition {
    pub name: SearchToken,
    pub title: String,
    pub unit: String,
    pub namespace: SearchToken,
    pub dimension: SearchToken,
}

impl MetricDefinition {
    pub fn new(
        name: &str,
        title: &str,
        unit: &str,
        namespace: &str,
        dimension: &str,
    ) -> Result<Self, DashboardError> {
        Ok(Self {
            name: SearchToken::parse("metric name", name)?,
            title: title.to_string(),
            unit: unit.to_string(),
            namespace: SearchToken::parse("namespace", namespace)?,
            dimension: SearchToken::parse("dimension", dimension)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub metrics: Vec<MetricDefinition>,
}

impl Section {
    pub fn new(title: String, metrics: Vec<MetricDefinition>) -> Result<Self, DashboardError> {
        if metrics.is_empty() {
            return Err(DashboardError::EmptySection(title));
        }
        Ok(Self { title, metrics })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCatalog {
    sections: Vec<Section>,
}

impl MetricCatalog {
    pub fn new(sections: Vec<Section>) -> Result<Self, DashboardError> {
        if sections.is_empty() {
            return Err(DashboardError::EmptyCatalog);
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn metric_count(&self) -> usize {
        self.sections.iter().map(|s| s.metrics.len()).sum()
    }
}
