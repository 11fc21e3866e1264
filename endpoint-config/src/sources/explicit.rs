//! Endpoints block from declarative configuration

use crate::error::{ConfigError, ConfigResult};
use endpoint_names::AliasTable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Explicit endpoint overrides keyed by canonical or alias key
///
/// A missing key and a key mapped to the empty string both mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExplicitConfig {
    endpoints: BTreeMap<String, String>,
}

impl ExplicitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert the host framework's loosely typed endpoints block
    ///
    /// Accepts `null`, an empty sequence, a sequence holding exactly one
    /// mapping, or a bare mapping. Non-string values are skipped.
    pub fn from_value(value: &Value) -> ConfigResult<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Array(items) => match items.as_slice() {
                [] => Ok(Self::default()),
                [single] => Self::from_value(single),
                _ => Err(ConfigError::InvalidEndpointsBlock(format!(
                    "expected at most one mapping, found {}",
                    items.len()
                ))),
            },
            Value::Object(map) => {
                let mut config = Self::default();
                for (key, value) in map {
                    match value {
                        Value::String(endpoint) => config.insert(key.clone(), endpoint.clone()),
                        Value::Null => {}
                        other => {
                            log::warn!(
                                "Ignoring non-string endpoint for '{}': {}",
                                key,
                                other
                            );
                        }
                    }
                }
                Ok(config)
            }
            other => Err(ConfigError::InvalidEndpointsBlock(format!(
                "expected a mapping or a sequence, found {}",
                other
            ))),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, endpoint: impl Into<String>) {
        self.endpoints.insert(key.into(), endpoint.into());
    }

    pub fn with_endpoint(mut self, key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        self.insert(key, endpoint);
        self
    }

    /// Endpoint for `key`, or `None` when absent or empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.endpoints
            .get(key)
            .map(String::as_str)
            .filter(|endpoint| !endpoint.is_empty())
    }

    /// Keys carrying a non-empty endpoint that no service in `table` claims
    pub fn unknown_keys<'a>(&'a self, table: &AliasTable) -> Vec<&'a str> {
        self.endpoints
            .iter()
            .filter(|(key, endpoint)| !endpoint.is_empty() && !table.contains(key))
            .map(|(key, _)| key.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ExplicitConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            endpoints: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
