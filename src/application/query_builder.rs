// Query expression builder - CloudWatch SEARCH expressions per metric and account
use crate::domain::error::DashboardError;
use crate::domain::metric::MetricDefinition;
use crate::domain::token::SearchToken;
use crate::domain::widget::MetricExpression;

pub const ACCOUNT_ID_KEY: &str = "aws.AccountId";

/// Statistic and period shared by every query on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub statistic: SearchToken,
    pub period_seconds: u32,
}

impl QueryOptions {
    pub fn new(statistic: &str, period_seconds: u32) -> Result<Self, DashboardError> {
        // CloudWatch only accepts high-resolution periods or whole minutes
        if !matches!(period_seconds, 1 | 5 | 10 | 30) && (period_seconds == 0 || period_seconds % 60 != 0) {
            return Err(DashboardError::InvalidPeriod(period_seconds));
        }
        Ok(Self {
            statistic: SearchToken::parse("statistic", statistic)?,
            period_seconds,
        })
    }
}

/// Build the search expression for `metric`.
///
/// Without an account the result is one series per account
/// (`GROUP BY aws.AccountId`); with one it is filtered to that account.
pub fn search_expression(metric: &MetricDefinition, statistic: &SearchToken, account: Option<&SearchToken>) -> String {
    let schema = format!("{{{},{}}}", metric.namespace, metric.dimension);
    match account {
        None => format!(
            "SEARCH('{} {}', '{}') GROUP BY {}",
            schema, metric.name, statistic, ACCOUNT_ID_KEY
        ),
        Some(account) => format!(
            "SEARCH('{} {} AND {}=\"{}\"', '{}')",
            schema, metric.name, ACCOUNT_ID_KEY, account, statistic
        ),
    }
}

pub fn metric_expression(metric: &MetricDefinition, options: &QueryOptions, account: Option<&SearchToken>) -> MetricExpression {
    MetricExpression {
        expression: search_expression(metric, &options.statistic, account),
        label: String::new(),
        period_seconds: options.period_seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu() -> MetricDefinition {
        MetricDefinition::new("CPUUtilization", "CPU Utilization", "Percent", "AWS/RDS", "DBInstanceIdentifier")
            .unwrap()
    }

    fn average() -> SearchToken {
        SearchToken::parse("statistic", "Average").unwrap()
    }

    #[test]
    fn test_aggregate_expression_groups_by_account() {
        assert_eq!(
            search_expression(&cpu(), &average(), None),
            "SEARCH('{AWS/RDS,DBInstanceIdentifier} CPUUtilization', 'Average') GROUP BY aws.AccountId"
        );
    }

    #[test]
    fn test_account_expression_filters_single_account() {
        let account = SearchToken::parse("account id", "813627167089").unwrap();
        let expression = search_expression(&cpu(), &average(), Some(&account));

        assert_eq!(
            expression,
            "SEARCH('{AWS/RDS,DBInstanceIdentifier} CPUUtilization AND aws.AccountId=\"813627167089\"', 'Average')"
        );
        assert!(!expression.contains("GROUP BY"));
        assert_eq!(expression.matches(ACCOUNT_ID_KEY).count(), 1);
    }

    #[test]
    fn test_metric_expression_uses_options() {
        let options = QueryOptions::new("Maximum", 300).unwrap();
        let query = metric_expression(&cpu(), &options, None);
        assert_eq!(query.period_seconds, 300);
        assert_eq!(query.label, "");
        assert!(query.expression.contains("'Maximum'"));
    }

    #[test]
    fn test_query_options_validate_period() {
        assert!(QueryOptions::new("Average", 60).is_ok());
        assert!(QueryOptions::new("Average", 10).is_ok());
        assert_eq!(QueryOptions::new("Average", 0).unwrap_err(), DashboardError::InvalidPeriod(0));
        assert_eq!(QueryOptions::new("Average", 90).unwrap_err(), DashboardError::InvalidPeriod(90));
        assert!(QueryOptions::new("Average Sum", 60).is_err());
    }
}
