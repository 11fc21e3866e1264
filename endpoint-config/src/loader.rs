//! Configuration source loading

use crate::error::ConfigResult;
use crate::sources::{ConfigFileView, ConfigurationSources, EnvironmentView, ExplicitConfig};
use endpoint_names::AliasTable;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Provider configuration document as read from YAML
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProviderDocument {
    /// Loosely typed until converted by `ExplicitConfig::from_value`
    endpoints: Value,

    /// Output of the shared config file parser
    shared_config: Option<ConfigFileView>,
}

/// Collects the sources for one resolution pass
pub struct SourcesLoader<'a> {
    table: &'a AliasTable,
    environment: Option<EnvironmentView>,
    config_file: Option<ConfigFileView>,
}

impl<'a> SourcesLoader<'a> {
    /// Create a loader that snapshots the process environment
    pub fn new(table: &'a AliasTable) -> Self {
        Self {
            table,
            environment: None,
            config_file: None,
        }
    }

    /// Use a fixed environment instead of the process environment
    pub fn with_environment(mut self, environment: EnvironmentView) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Use the shared config file view produced by the external parser.
    /// Takes precedence over a `shared_config` section in a loaded file.
    pub fn with_config_file(mut self, config_file: ConfigFileView) -> Self {
        self.config_file = Some(config_file);
        self
    }

    /// Load sources from the host framework's provider map
    pub fn from_value(&self, provider: &Value) -> ConfigResult<ConfigurationSources> {
        let endpoints = provider.get("endpoints").unwrap_or(&Value::Null);
        let explicit = ExplicitConfig::from_value(endpoints)?;
        Ok(self.assemble(explicit, None))
    }

    /// Load sources from a YAML provider configuration file
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<ConfigurationSources> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let document: ProviderDocument = if content.trim().is_empty() {
            ProviderDocument::default()
        } else {
            serde_yaml::from_str(&content)?
        };

        log::debug!("Loaded provider configuration from {}", path.display());

        let explicit = ExplicitConfig::from_value(&document.endpoints)?;
        Ok(self.assemble(explicit, document.shared_config))
    }

    /// Load sources from the environment only
    pub fn from_env(&self) -> ConfigurationSources {
        self.assemble(ExplicitConfig::default(), None)
    }

    /// Load sources with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<ConfigurationSources> {
        match config_path {
            Some(path) => self.from_file(path),
            None => Ok(self.from_env()),
        }
    }

    fn assemble(
        &self,
        explicit: ExplicitConfig,
        file_section: Option<ConfigFileView>,
    ) -> ConfigurationSources {
        for key in explicit.unknown_keys(self.table) {
            log::warn!("Ignoring endpoint for unknown service '{}'", key);
        }

        let environment = self
            .environment
            .clone()
            .unwrap_or_else(EnvironmentView::from_env);
        let config_file = self.config_file.clone().or(file_section);

        ConfigurationSources::new(explicit, environment, config_file)
    }
}
