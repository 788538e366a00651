// Errors raised while turning configuration into a dashboard
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("no environments configured")]
    NoEnvironments,

    #[error("environment '{0}' has no account identifier in the account mapping")]
    UnknownEnvironment(String),

    #[error("environment '{0}' is listed more than once")]
    DuplicateEnvironment(String),

    #[error("environment '{0}' has more than one account identifier in the account mapping")]
    DuplicateAccount(String),

    #[error("{field} '{value}' contains characters not allowed in a search expression")]
    UnsafeQueryToken { field: &'static str, value: String },

    #[error("{field} '{value}' may only contain letters, digits, '-' and '_'")]
    InvalidName { field: &'static str, value: String },

    #[error("metric catalog has no sections")]
    EmptyCatalog,

    #[error("section '{0}' has no metrics")]
    EmptySection(String),

    #[error("grid width {grid_width} cannot be split evenly across {environments} environments")]
    UnevenDetailRow { grid_width: u32, environments: usize },

    #[error("layout {0} must be greater than zero")]
    ZeroSizedLayout(&'static str),

    #[error("period of {0}s is not supported; use 1, 5, 10, 30 or a multiple of 60")]
    InvalidPeriod(u32),
}
