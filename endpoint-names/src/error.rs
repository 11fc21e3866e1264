//! Alias table error types

use thiserror::Error;

/// Alias table result type
pub type NamesResult<T> = Result<T, NamesError>;

/// Errors raised while building an alias table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamesError {
    /// A canonical key or alias was the empty string
    #[error("Service keys cannot be empty")]
    EmptyKey,

    /// The same key is claimed by two services
    #[error("Service key '{key}' is claimed by both '{first}' and '{second}'")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    /// A service lists its own canonical key among its aliases
    #[error("Service '{key}' lists itself as an alias")]
    SelfAlias { key: String },
}
