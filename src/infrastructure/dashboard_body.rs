// Mapper to convert the domain dashboard into a CloudWatch dashboard body
use crate::domain::dashboard::Dashboard;
use crate::domain::widget::{GraphWidget, Widget};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardBody<'a> {
    pub widgets: Vec<BodyWidget<'a>>,
}

#[derive(Debug, Serialize)]
pub struct BodyWidget<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
    pub properties: WidgetProperties<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WidgetProperties<'a> {
    Text { markdown: &'a str },
    Metric(MetricProperties<'a>),
}

#[derive(Debug, Serialize)]
pub struct MetricProperties<'a> {
    pub view: &'static str,
    pub title: &'a str,
    pub region: &'a str,
    pub metrics: Vec<Vec<ExpressionEntry<'a>>>,
    #[serde(rename = "yAxis")]
    pub y_axis: YAxis<'a>,
    pub legend: Legend,
}

#[derive(Debug, Serialize)]
pub struct ExpressionEntry<'a> {
    pub expression: &'a str,
    pub id: String,
    pub label: &'a str,
    pub period: u32,
}

#[derive(Debug, Serialize)]
pub struct YAxis<'a> {
    pub left: AxisSide<'a>,
}

#[derive(Debug, Serialize)]
pub struct AxisSide<'a> {
    pub label: &'a str,
    #[serde(rename = "showUnits")]
    pub show_units: bool,
}

#[derive(Debug, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

/// Pretty-printed body, as written next to the template
pub fn render_body(dashboard: &Dashboard, grid_width: u32, region: &str) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&dashboard_body(dashboard, grid_width, region))?)
}

/// Compact body, as embedded in the CloudFormation resource
pub fn render_body_compact(dashboard: &Dashboard, grid_width: u32, region: &str) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&dashboard_body(dashboard, grid_width, region))?)
}

pub fn dashboard_body<'a>(dashboard: &'a Dashboard, grid_width: u32, region: &'a str) -> DashboardBody<'a> {
    let positions = place_rows(dashboard, grid_width);
    let mut expression_ids = 0;

    let widgets = dashboard
        .widgets()
        .zip(positions)
        .map(|(widget, (x, y))| {
            let properties = match widget {
                Widget::Text(text) => WidgetProperties::Text {
                    markdown: &text.markdown,
                },
                Widget::Graph(graph) => {
                    expression_ids += 1;
                    WidgetProperties::Metric(metric_properties(graph, region, expression_ids))
                }
            };
            BodyWidget {
                kind: match widget {
                    Widget::Text(_) => "text",
                    Widget::Graph(_) => "metric",
                },
                width: widget.width(),
                height: widget.height(),
                x,
                y,
                properties,
            }
        })
        .collect();

    DashboardBody { widgets }
}

fn metric_properties<'a>(graph: &'a GraphWidget, region: &'a str, expression_id: usize) -> MetricProperties<'a> {
    MetricProperties {
        view: "timeSeries",
        title: &graph.title,
        region,
        metrics: vec![vec![ExpressionEntry {
            expression: &graph.query.expression,
            id: format!("expr{}", expression_id),
            label: &graph.query.label,
            period: graph.query.period_seconds,
        }]],
        y_axis: YAxis {
            left: AxisSide {
                label: &graph.y_axis_label,
                show_units: false,
            },
        },
        legend: Legend {
            position: graph.legend.as_str(),
        },
    }
}

/// Grid coordinates for every widget, in `Dashboard::widgets` order.
///
/// Widgets of a row flow left to right and wrap when the grid is full; each
/// row starts below the lowest edge of the previous one.
pub fn place_rows(dashboard: &Dashboard, grid_width: u32) -> Vec<(u32, u32)> {
    let mut positions = Vec::with_capacity(dashboard.widget_count());
    let mut top = 0;

    for row in dashboard.rows() {
        let mut x = 0;
        let mut line_top = top;
        let mut line_height = 0;

        for widget in row {
            if x > 0 && x + widget.width() > grid_width {
                line_top += line_height;
                x = 0;
                line_height = 0;
            }
            positions.push((x, line_top));
            x += widget.width();
            line_height = line_height.max(widget.height());
        }

        top = line_top + line_height;
    }

    positions
}
