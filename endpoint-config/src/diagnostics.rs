//! Diagnostics returned alongside resolution results

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

/// A single user-facing diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Warning for a deprecated environment variable and its replacement
    pub fn deprecated_env_var(deprecated: &str, replacement: &str) -> Self {
        Self::warning(
            "Deprecated Environment Variable",
            format!(
                "The environment variable \"{deprecated}\" is deprecated. \
                 Use environment variable \"{replacement}\" instead."
            ),
        )
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.summary, self.detail)
    }
}

/// Ordered diagnostic list, deduplicated by deprecated variable name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
    /// Deprecated variable behind each item, parallel to `items`
    origins: Vec<Option<String>>,
    deprecated_seen: BTreeSet<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
        self.origins.push(None);
    }

    /// Record use of a deprecated variable. Returns `false` when that variable
    /// was already reported in this batch.
    pub fn push_deprecated_env_var(&mut self, deprecated: &str, replacement: &str) -> bool {
        if !self.deprecated_seen.insert(deprecated.to_string()) {
            return false;
        }
        self.items
            .push(Diagnostic::deprecated_env_var(deprecated, replacement));
        self.origins.push(Some(deprecated.to_string()));
        true
    }

    /// Append another batch, keeping deprecation warnings unique
    pub fn append(&mut self, other: Diagnostics) {
        for (diagnostic, origin) in other.items.into_iter().zip(other.origins) {
            match origin {
                Some(name) => {
                    if self.deprecated_seen.insert(name.clone()) {
                        self.items.push(diagnostic);
                        self.origins.push(Some(name));
                    }
                }
                None => self.push(diagnostic),
            }
        }
    }

    /// Deprecated variable names reported so far, sorted
    pub fn deprecated_env_vars(&self) -> impl Iterator<Item = &str> {
        self.deprecated_seen.iter().map(String::as_str)
    }

    pub fn has_error(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
