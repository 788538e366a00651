// Widget descriptors - one visual element each, immutable once built

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Right,
    Bottom,
}

impl LegendPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegendPosition::Right => "right",
            LegendPosition::Bottom => "bottom",
        }
    }
}

/// A metric-math expression plotted by a graph widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricExpression {
    pub expression: String,
    pub label: String,
    pub period_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWidget {
    pub markdown: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphWidget {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub query: MetricExpression,
    pub y_axis_label: String,
    pub legend: LegendPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Text(TextWidget),
    Graph(GraphWidget),
}

impl Widget {
    pub fn width(&self) -> u32 {
        match self {
            Widget::Text(w) => w.width,
            Widget::Graph(w) => w.width,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Widget::Text(w) => w.height,
            Widget::Graph(w) => w.height,
        }
    }

    pub fn as_graph(&self) -> Option<&GraphWidget> {
        match self {
            Widget::Graph(w) => Some(w),
            Widget::Text(_) => None,
        }
    }
}
