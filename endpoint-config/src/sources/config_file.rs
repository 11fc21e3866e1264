//! Pre-parsed shared configuration file view

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Endpoint overrides extracted from the shared config file
///
/// The file itself is parsed upstream; this only carries the results.
/// Per-service entries are keyed by canonical service key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFileView {
    /// Endpoint applied to every service without a more specific override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-service endpoints
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub services: BTreeMap<String, String>,
}

impl ConfigFileView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_service_url(mut self, key: impl Into<String>, url: impl Into<String>) -> Self {
        self.services.insert(key.into(), url.into());
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn service_url(&self, key: &str) -> Option<&str> {
        self.services
            .get(key)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}
