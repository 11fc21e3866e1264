//! Endpoint precedence resolution
//!
//! For every canonical service the resolver walks the sources below in
//! descending precedence and stops at the first non-empty value:
//!
//! 1. explicit config under the canonical key
//! 2. explicit config under each alias, in declared order
//! 3. `AWS_ENDPOINT_URL_<SERVICE>`
//! 4. `TF_AWS_<SERVICE>_ENDPOINT` (deprecated, warns)
//! 5. `AWS_<SERVICE>_ENDPOINT` (deprecated, warns)
//! 6. `AWS_ENDPOINT_URL`
//! 7. the shared config file's service entry
//! 8. the shared config file's base entry
//!
//! A service with no value in any source is left out of the result so the
//! caller falls back to the SDK default. Only the selected source can produce
//! a diagnostic.

use crate::diagnostics::Diagnostics;
use crate::sources::ConfigurationSources;
use endpoint_names::{AliasTable, ServiceDefinition, ServiceKey, BASE_ENDPOINT_ENV_VAR};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Where a resolved endpoint came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EndpointSource {
    ExplicitCanonical,
    ExplicitAlias { alias: ServiceKey },
    EnvVar { name: String },
    TfAwsEnvVar { name: String },
    DeprecatedEnvVar { name: String },
    BaseEnvVar { name: String },
    ConfigFileService,
    ConfigFileBase,
}

impl EndpointSource {
    /// Whether selecting this source warrants a deprecation warning
    pub fn is_deprecated(&self) -> bool {
        matches!(
            self,
            EndpointSource::TfAwsEnvVar { .. } | EndpointSource::DeprecatedEnvVar { .. }
        )
    }
}

impl fmt::Display for EndpointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointSource::ExplicitCanonical => write!(f, "explicit configuration"),
            EndpointSource::ExplicitAlias { alias } => {
                write!(f, "explicit configuration (alias '{}')", alias)
            }
            EndpointSource::EnvVar { name }
            | EndpointSource::TfAwsEnvVar { name }
            | EndpointSource::DeprecatedEnvVar { name }
            | EndpointSource::BaseEnvVar { name } => write!(f, "environment variable {}", name),
            EndpointSource::ConfigFileService => write!(f, "shared config file (service)"),
            EndpointSource::ConfigFileBase => write!(f, "shared config file (base)"),
        }
    }
}

/// An endpoint override and the source that supplied it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEndpoint {
    pub url: String,
    pub source: EndpointSource,
}

impl ResolvedEndpoint {
    fn new(url: &str, source: EndpointSource) -> Self {
        Self {
            url: url.to_string(),
            source,
        }
    }
}

/// Outcome of one resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionResult {
    resolved: BTreeMap<ServiceKey, ResolvedEndpoint>,
    diagnostics: Diagnostics,
}

impl ResolutionResult {
    /// Endpoint override for a service, looked up by canonical key or alias
    /// when `table` knows the alias
    pub fn endpoint_in(&self, table: &AliasTable, key: &str) -> Option<&str> {
        self.endpoint(table.canonical_of(key))
    }

    /// Endpoint override for a canonical key
    pub fn endpoint(&self, canonical: &str) -> Option<&str> {
        self.resolved.get(canonical).map(|r| r.url.as_str())
    }

    pub fn source(&self, canonical: &str) -> Option<&EndpointSource> {
        self.resolved.get(canonical).map(|r| &r.source)
    }

    pub fn resolved(&self, canonical: &str) -> Option<&ResolvedEndpoint> {
        self.resolved.get(canonical)
    }

    /// Canonical key to endpoint, ordered by key
    pub fn endpoints(&self) -> BTreeMap<&str, &str> {
        self.resolved
            .iter()
            .map(|(key, r)| (key.as_str(), r.url.as_str()))
            .collect()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Fold another result into this one. Existing endpoints win.
    pub fn merge(&mut self, other: ResolutionResult) {
        for (key, endpoint) in other.resolved {
            self.resolved.entry(key).or_insert(endpoint);
        }
        self.diagnostics.append(other.diagnostics);
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Plain canonical key to endpoint map plus diagnostics
    pub fn into_parts(self) -> (BTreeMap<String, String>, Diagnostics) {
        let endpoints = self
            .resolved
            .into_iter()
            .map(|(key, r)| (key.to_string(), r.url))
            .collect();
        (endpoints, self.diagnostics)
    }
}

/// Applies the precedence chain to every service in an alias table
#[derive(Debug, Clone, Copy)]
pub struct EndpointResolver<'a> {
    table: &'a AliasTable,
}

impl<'a> EndpointResolver<'a> {
    pub fn new(table: &'a AliasTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a AliasTable {
        self.table
    }

    /// Resolve every service in the table
    pub fn resolve(&self, sources: &ConfigurationSources) -> ResolutionResult {
        let mut result = ResolutionResult::default();

        if sources.environment.ignore_configured_endpoint_urls() {
            log::info!("Ignoring endpoint URLs from the environment and shared config file");
        }

        for service in self.table.services() {
            if let Some(endpoint) = self.resolve_definition(service, sources, &mut result.diagnostics)
            {
                result.resolved.insert(service.key().clone(), endpoint);
            }
        }

        result
    }

    /// Resolve a single service by canonical key or alias
    ///
    /// Keys unknown to the table never resolve.
    pub fn resolve_service(
        &self,
        key: &str,
        sources: &ConfigurationSources,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResolvedEndpoint> {
        let service = self.table.service(key)?;
        self.resolve_definition(service, sources, diagnostics)
    }

    fn resolve_definition(
        &self,
        service: &ServiceDefinition,
        sources: &ConfigurationSources,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResolvedEndpoint> {
        let endpoint = select(service, sources)?;

        match &endpoint.source {
            EndpointSource::TfAwsEnvVar { name } | EndpointSource::DeprecatedEnvVar { name } => {
                diagnostics.push_deprecated_env_var(name, service.env_var());
            }
            _ => {}
        }

        log::debug!(
            "Resolved endpoint for '{}' from {}: {}",
            service.key(),
            endpoint.source,
            endpoint.url
        );

        Some(endpoint)
    }
}

fn select(service: &ServiceDefinition, sources: &ConfigurationSources) -> Option<ResolvedEndpoint> {
    let explicit = &sources.explicit;
    let env = &sources.environment;
    let use_configured = !env.ignore_configured_endpoint_urls();

    if let Some(url) = explicit.get(service.key().as_str()) {
        return Some(ResolvedEndpoint::new(url, EndpointSource::ExplicitCanonical));
    }

    for alias in service.aliases() {
        if let Some(url) = explicit.get(alias.as_str()) {
            return Some(ResolvedEndpoint::new(
                url,
                EndpointSource::ExplicitAlias {
                    alias: alias.clone(),
                },
            ));
        }
    }

    if use_configured {
        if let Some(url) = env.get(service.env_var()) {
            return Some(ResolvedEndpoint::new(
                url,
                EndpointSource::EnvVar {
                    name: service.env_var().to_string(),
                },
            ));
        }
    }

    if let Some(name) = service.tf_aws_env_var() {
        if let Some(url) = env.get(name) {
            return Some(ResolvedEndpoint::new(
                url,
                EndpointSource::TfAwsEnvVar {
                    name: name.to_string(),
                },
            ));
        }
    }

    if let Some(name) = service.deprecated_env_var() {
        if let Some(url) = env.get(name) {
            return Some(ResolvedEndpoint::new(
                url,
                EndpointSource::DeprecatedEnvVar {
                    name: name.to_string(),
                },
            ));
        }
    }

    if !use_configured {
        return None;
    }

    if let Some(url) = env.get(BASE_ENDPOINT_ENV_VAR) {
        return Some(ResolvedEndpoint::new(
            url,
            EndpointSource::BaseEnvVar {
                name: BASE_ENDPOINT_ENV_VAR.to_string(),
            },
        ));
    }

    let file = sources.config_file.as_ref()?;

    if let Some(url) = file.service_url(service.key().as_str()) {
        return Some(ResolvedEndpoint::new(url, EndpointSource::ConfigFileService));
    }

    file.base_url()
        .map(|url| ResolvedEndpoint::new(url, EndpointSource::ConfigFileBase))
}
