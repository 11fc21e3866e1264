//! Service naming registry for endpoint resolution
//!
//! This crate holds the reference data the endpoint resolver works from:
//! every service's canonical key, its ordered aliases, and the environment
//! variable names derived from its SDK identifier.

pub mod error;
pub mod registry;
pub mod service;
pub mod table;

// Re-export main types
pub use error::{NamesError, NamesResult};
pub use registry::{
    default_alias_table, BASE_ENDPOINT_ENV_VAR, CURRENT_ENV_VAR_PREFIX,
    IGNORE_CONFIGURED_ENDPOINT_URLS_ENV_VAR,
};
pub use service::{ServiceDefinition, ServiceKey};
pub use table::AliasTable;
