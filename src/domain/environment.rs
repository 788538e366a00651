// Deployment environments and the accounts they live in
use super::error::DashboardError;
use super::token::SearchToken;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub name: String,
    pub account_id: SearchToken,
}

impl Environment {
    pub fn new(name: &str, account_id: &str) -> Result<Self, DashboardError> {
        Ok(Self {
            name: name.to_string(),
            account_id: SearchToken::parse("account id", account_id)?,
        })
    }
}

/// Environments in display order. Never empty, names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environments(Vec<Environment>);

impl Environments {
    /// Resolve each name in `order` against the `(name, account)` mapping.
    ///
    /// A name missing from the mapping, or mapped twice, aborts the whole
    /// resolution.
    pub fn from_mapping<'a>(
        order: &[String],
        accounts: impl IntoIterator<Item = (&'a str, &'a str)> + Clone,
    ) -> Result<Self, DashboardError> {
        if order.is_empty() {
            return Err(DashboardError::NoEnvironments);
        }

        let mut mapped = HashSet::new();
        for (env, _) in accounts.clone() {
            if !mapped.insert(env) {
                return Err(DashboardError::DuplicateAccount(env.to_string()));
            }
        }

        let mut seen = HashSet::new();
        let mut environments = Vec::with_capacity(order.len());
        for name in order {
            if !seen.insert(name.as_str()) {
                return Err(DashboardError::DuplicateEnvironment(name.clone()));
            }
            let account_id = accounts
                .clone()
                .into_iter()
                .find(|(env, _)| *env == name.as_str())
                .map(|(_, account)| account)
                .ok_or_else(|| DashboardError::UnknownEnvironment(name.clone()))?;
            environments.push(Environment::new(name, account_id)?);
        }

        Ok(Self(environments))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Environment> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
