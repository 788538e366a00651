// Mapper to wrap the dashboard body in a CloudFormation template
use crate::domain::dashboard::Dashboard;
use crate::infrastructure::dashboard_body::render_body_compact;
use serde::Serialize;
use std::collections::BTreeMap;

pub const DASHBOARD_RESOURCE_TYPE: &str = "AWS::CloudWatch::Dashboard";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    format_version: &'static str,
    description: String,
    resources: BTreeMap<String, Resource>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Resource {
    #[serde(rename = "Type")]
    kind: &'static str,
    properties: DashboardProperties,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct DashboardProperties {
    dashboard_name: String,
    dashboard_body: String,
}

pub fn render_template(dashboard: &Dashboard, stack_name: &str, grid_width: u32, region: &str) -> anyhow::Result<String> {
    let mut resources = BTreeMap::new();
    resources.insert(
        logical_id(&dashboard.name),
        Resource {
            kind: DASHBOARD_RESOURCE_TYPE,
            properties: DashboardProperties {
                dashboard_name: dashboard.name.clone(),
                dashboard_body: render_body_compact(dashboard, grid_width, region)?,
            },
        },
    );

    let template = Template {
        format_version: "2010-09-09",
        description: format!("{} - CloudWatch dashboard {}", stack_name, dashboard.name),
        resources,
    };

    Ok(serde_json::to_string_pretty(&template)?)
}

/// CloudFormation logical ids are alphanumeric only
pub fn logical_id(name: &str) -> String {
    let id: String = name.chars().filter(char::is_ascii_alphanumeric).collect();
    if id.is_empty() { "Dashboard".to_string() } else { id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_dashboard;
    use serde_json::Value;

    #[test]
    fn test_logical_id() {
        assert_eq!(logical_id("RDS-All-Environments"), "RDSAllEnvironments");
        assert_eq!(logical_id("--"), "Dashboard");
    }

    #[test]
    fn test_template_embeds_body_as_string() {
        let dashboard = sample_dashboard();
        let rendered = render_template(&dashboard, "RdsDashboardStack", 24, "us-east-1").unwrap();
        let template: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(template["AWSTemplateFormatVersion"], "2010-09-09");
        let resource = &template["Resources"]["RDSAllEnvironments"];
        assert_eq!(resource["Type"], DASHBOARD_RESOURCE_TYPE);
        assert_eq!(resource["Properties"]["DashboardName"], "RDS-All-Environments");

        let body = resource["Properties"]["DashboardBody"].as_str().unwrap();
        assert_eq!(body, render_body_compact(&dashboard, 24, "us-east-1").unwrap());
    }
}
