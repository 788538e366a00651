// Validated fragments that get interpolated into CloudWatch search expressions
use super::error::DashboardError;
use std::fmt;

/// A string that is safe to splice into a `SEARCH(...)` expression verbatim.
///
/// Only ASCII alphanumerics and `_ - . / :` are admitted, so a token can never
/// close a quote, open a schema brace or introduce another search term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchToken(String);

impl SearchToken {
    pub fn parse(field: &'static str, value: &str) -> Result<Self, DashboardError> {
        if value.is_empty() || !value.chars().all(is_allowed) {
            return Err(DashboardError::UnsafeQueryToken {
                field,
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':')
}

impl fmt::Display for SearchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a dashboard or stack. Also used as an output file stem, so it is
/// restricted to what CloudWatch accepts in a dashboard name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub const MAX_LEN: usize = 255;

    pub fn parse(field: &'static str, value: &str) -> Result<Self, DashboardError> {
        let valid = !value.is_empty()
            && value.len() <= Self::MAX_LEN
            && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(DashboardError::InvalidName {
                field,
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
