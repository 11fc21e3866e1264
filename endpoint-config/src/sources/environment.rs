//! Environment variable snapshot

use endpoint_names::IGNORE_CONFIGURED_ENDPOINT_URLS_ENV_VAR;
use std::collections::BTreeMap;

/// Read-only view over environment variables
///
/// Taken once per resolution pass. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentView {
    vars: BTreeMap<String, String>,
}

impl EnvironmentView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the process environment, skipping non-unicode entries
    pub fn from_env() -> Self {
        std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Value of `name`, or `None` when unset or empty
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Whether endpoint URLs from the environment and shared config file
    /// should be ignored
    pub fn ignore_configured_endpoint_urls(&self) -> bool {
        self.get(IGNORE_CONFIGURED_ENDPOINT_URLS_ENV_VAR)
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentView
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
