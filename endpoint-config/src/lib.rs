//! Layered endpoint override resolution
//!
//! This crate decides which endpoint URL each service client should use by
//! merging explicit configuration, environment variables and the shared
//! config file in a fixed precedence order, and reports deprecated
//! configuration as warnings.

pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod sources;

// Re-export main types
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{ConfigError, ConfigResult};
pub use loader::SourcesLoader;
pub use resolver::{EndpointResolver, EndpointSource, ResolutionResult, ResolvedEndpoint};
pub use sources::{ConfigFileView, ConfigurationSources, EnvironmentView, ExplicitConfig};

pub use endpoint_names::{AliasTable, ServiceDefinition, ServiceKey};

/// Resolve endpoints for the built-in service registry
pub fn resolve_endpoints(sources: &ConfigurationSources) -> ConfigResult<ResolutionResult> {
    let table = endpoint_names::default_alias_table()?;
    Ok(EndpointResolver::new(table).resolve(sources))
}
