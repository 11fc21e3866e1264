//! Service keys and per-service naming data

use crate::registry::CURRENT_ENV_VAR_PREFIX;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Short identifier for one external service, canonical or alias
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceKey(String);

impl ServiceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ServiceKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServiceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServiceKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ServiceKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Everything the resolver needs to know about one service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDefinition {
    key: ServiceKey,
    aliases: Vec<ServiceKey>,
    sdk_id: String,
    env_var: String,
    tf_aws_env_var: Option<String>,
    deprecated_env_var: Option<String>,
}

impl ServiceDefinition {
    /// Create a service whose SDK identifier is its canonical key
    pub fn new(key: impl Into<ServiceKey>) -> Self {
        let key = key.into();
        let sdk_id = key.as_str().to_string();
        Self {
            env_var: current_env_var(&sdk_id),
            key,
            aliases: Vec::new(),
            sdk_id,
            tf_aws_env_var: None,
            deprecated_env_var: None,
        }
    }

    /// Set the ordered alias list. Earlier aliases take precedence.
    pub fn with_aliases<I, K>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ServiceKey>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the SDK identifier, which names the current environment variable
    pub fn with_sdk_id(mut self, sdk_id: impl Into<String>) -> Self {
        self.sdk_id = sdk_id.into();
        self.env_var = current_env_var(&self.sdk_id);
        self
    }

    /// Register both legacy variables, `TF_AWS_<KEY>_ENDPOINT` and
    /// `AWS_<KEY>_ENDPOINT`, derived from the canonical key
    pub fn with_legacy_env_vars(self) -> Self {
        let upper = self.key.as_str().to_ascii_uppercase();
        self.with_tf_aws_env_var(format!("TF_AWS_{upper}_ENDPOINT"))
            .with_deprecated_env_var(format!("AWS_{upper}_ENDPOINT"))
    }

    pub fn with_tf_aws_env_var(mut self, name: impl Into<String>) -> Self {
        self.tf_aws_env_var = Some(name.into());
        self
    }

    pub fn with_deprecated_env_var(mut self, name: impl Into<String>) -> Self {
        self.deprecated_env_var = Some(name.into());
        self
    }

    pub fn key(&self) -> &ServiceKey {
        &self.key
    }

    pub fn aliases(&self) -> &[ServiceKey] {
        &self.aliases
    }

    pub fn sdk_id(&self) -> &str {
        &self.sdk_id
    }

    /// Current environment variable, e.g. `AWS_ENDPOINT_URL_STS`
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// Terraform-specific deprecated variable, e.g. `TF_AWS_STS_ENDPOINT`
    pub fn tf_aws_env_var(&self) -> Option<&str> {
        self.tf_aws_env_var.as_deref()
    }

    /// Legacy deprecated variable, e.g. `AWS_STS_ENDPOINT`
    pub fn deprecated_env_var(&self) -> Option<&str> {
        self.deprecated_env_var.as_deref()
    }

    /// Canonical key followed by the aliases in declared order
    pub fn keys(&self) -> impl Iterator<Item = &ServiceKey> {
        std::iter::once(&self.key).chain(self.aliases.iter())
    }
}

fn current_env_var(sdk_id: &str) -> String {
    let suffix: String = sdk_id
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect();
    format!("{CURRENT_ENV_VAR_PREFIX}{suffix}")
}
