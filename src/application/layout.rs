// Layout sequencer - turns the metric catalog into ordered dashboard rows
use crate::application::query_builder::{QueryOptions, metric_expression};
use crate::domain::dashboard::Dashboard;
use crate::domain::environment::Environments;
use crate::domain::error::DashboardError;
use crate::domain::metric::{MetricCatalog, MetricDefinition};
use crate::domain::widget::{GraphWidget, LegendPosition, TextWidget, Widget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSettings {
    pub grid_width: u32,
    pub header_height: u32,
    pub graph_height: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            grid_width: 24,
            header_height: 1,
            graph_height: 6,
        }
    }
}

pub struct LayoutSequencer<'a> {
    catalog: &'a MetricCatalog,
    environments: &'a Environments,
    layout: LayoutSettings,
    query: &'a QueryOptions,
    detail_width: u32,
}

impl<'a> LayoutSequencer<'a> {
    pub fn new(
        catalog: &'a MetricCatalog,
        environments: &'a Environments,
        layout: LayoutSettings,
        query: &'a QueryOptions,
    ) -> Result<Self, DashboardError> {
        if layout.grid_width == 0 {
            return Err(DashboardError::ZeroSizedLayout("grid width"));
        }
        if layout.header_height == 0 {
            return Err(DashboardError::ZeroSizedLayout("header height"));
        }
        if layout.graph_height == 0 {
            return Err(DashboardError::ZeroSizedLayout("graph height"));
        }

        let count = environments.len() as u32;
        if count == 0 || layout.grid_width % count != 0 {
            return Err(DashboardError::UnevenDetailRow {
                grid_width: layout.grid_width,
                environments: environments.len(),
            });
        }

        Ok(Self {
            catalog,
            environments,
            layout,
            query,
            detail_width: layout.grid_width / count,
        })
    }

    /// Build the whole dashboard: per section a header row, then per metric an
    /// aggregate row followed by a row of per-environment detail widgets.
    pub fn build(&self, name: &str) -> Dashboard {
        let mut dashboard = Dashboard::new(name.to_string());

        for section in self.catalog.sections() {
            tracing::debug!("Laying out section '{}' with {} metrics", section.title, section.metrics.len());
            dashboard.add_row(vec![self.section_header(&section.title)]);

            for metric in &section.metrics {
                dashboard.add_row(vec![self.aggregate_widget(metric)]);
                dashboard.add_row(self.detail_widgets(metric));
            }
        }

        dashboard
    }

    fn section_header(&self, title: &str) -> Widget {
        Widget::Text(TextWidget {
            markdown: format!("# {}", title),
            width: self.layout.grid_width,
            height: self.layout.header_height,
        })
    }

    fn aggregate_widget(&self, metric: &MetricDefinition) -> Widget {
        Widget::Graph(GraphWidget {
            title: format!("{} - Environment Comparison", metric.title),
            width: self.layout.grid_width,
            height: self.layout.graph_height,
            query: metric_expression(metric, self.query, None),
            y_axis_label: metric.unit.clone(),
            legend: LegendPosition::Right,
        })
    }

    fn detail_widgets(&self, metric: &MetricDefinition) -> Vec<Widget> {
        self.environments
            .iter()
            .map(|env| {
                Widget::Graph(GraphWidget {
                    title: env.name.clone(),
                    width: self.detail_width,
                    height: self.layout.graph_height,
                    query: metric_expression(metric, self.query, Some(&env.account_id)),
                    y_axis_label: metric.unit.clone(),
                    legend: LegendPosition::Bottom,
                })
            })
            .collect()
    }
}
