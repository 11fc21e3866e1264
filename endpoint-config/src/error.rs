//! Configuration error types

use endpoint_names::NamesError;
use thiserror::Error;

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
///
/// These only arise while collecting sources. Resolution itself reports
/// problems as diagnostics.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading configuration file
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// JSON conversion error
    #[error("Failed to convert config: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The service alias table could not be built
    #[error("Invalid service registry: {0}")]
    Names(#[from] NamesError),

    /// The `endpoints` block has an unsupported shape
    #[error("Invalid endpoints block: {0}")]
    InvalidEndpointsBlock(String),
}
