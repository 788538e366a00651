// Dashboard domain model
use super::widget::Widget;

/// Widgets in rendering order, grouped into the rows they were added in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub name: String,
    rows: Vec<Vec<Widget>>,
}

impl Dashboard {
    pub fn new(name: String) -> Self {
        Self {
            name,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, widgets: Vec<Widget>) {
        if !widgets.is_empty() {
            self.rows.push(widgets);
        }
    }

    pub fn rows(&self) -> &[Vec<Widget>] {
        &self.rows
    }

    /// Flattened top-to-bottom, left-to-right order.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.rows.iter().flatten()
    }

    pub fn widget_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}
