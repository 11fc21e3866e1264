//! Alias table mapping every known key to its canonical service

use crate::error::{NamesError, NamesResult};
use crate::service::{ServiceDefinition, ServiceKey};
use std::collections::HashMap;

/// Immutable registry of services and their aliases
///
/// Built once and shared read-only. Every key, canonical or alias, belongs to
/// exactly one service; construction fails otherwise.
#[derive(Debug, Clone)]
pub struct AliasTable {
    /// Services ordered by canonical key
    services: Vec<ServiceDefinition>,
    /// Any key to its service's position in `services`
    index: HashMap<ServiceKey, usize>,
}

impl AliasTable {
    /// Build a table, rejecting empty, duplicated or self-referencing keys
    pub fn new(definitions: impl IntoIterator<Item = ServiceDefinition>) -> NamesResult<Self> {
        let mut services: Vec<ServiceDefinition> = definitions.into_iter().collect();
        services.sort_by(|a, b| a.key().cmp(b.key()));

        let mut index = HashMap::new();
        for (position, service) in services.iter().enumerate() {
            if service.aliases().contains(service.key()) {
                return Err(NamesError::SelfAlias {
                    key: service.key().to_string(),
                });
            }

            for key in service.keys() {
                if key.as_str().is_empty() {
                    return Err(NamesError::EmptyKey);
                }
                if let Some(&existing) = index.get(key) {
                    let first: &ServiceDefinition = &services[existing];
                    return Err(NamesError::DuplicateKey {
                        key: key.to_string(),
                        first: first.key().to_string(),
                        second: service.key().to_string(),
                    });
                }
                index.insert(key.clone(), position);
            }
        }

        log::debug!(
            "Built alias table with {} services and {} keys",
            services.len(),
            index.len()
        );

        Ok(Self { services, index })
    }

    /// Ordered aliases of a canonical key; empty when there are none or the
    /// key is not canonical
    pub fn aliases_of(&self, canonical: &str) -> &[ServiceKey] {
        match self.service(canonical) {
            Some(service) if service.key().as_str() == canonical => service.aliases(),
            _ => &[],
        }
    }

    /// Canonical form of any key. Unknown keys are their own canonical form.
    pub fn canonical_of<'a>(&'a self, key: &'a str) -> &'a str {
        self.service(key)
            .map(|service| service.key().as_str())
            .unwrap_or(key)
    }

    /// Look up a service by canonical key or alias
    pub fn service(&self, key: &str) -> Option<&ServiceDefinition> {
        self.index.get(key).map(|&position| &self.services[position])
    }

    pub fn is_canonical(&self, key: &str) -> bool {
        self.service(key)
            .is_some_and(|service| service.key().as_str() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Services in canonical key order
    pub fn services(&self) -> impl Iterator<Item = &ServiceDefinition> {
        self.services.iter()
    }

    pub fn canonical_keys(&self) -> impl Iterator<Item = &ServiceKey> {
        self.services.iter().map(ServiceDefinition::key)
    }

    /// Every canonical and alias key, sorted
    pub fn all_keys(&self) -> Vec<&ServiceKey> {
        let mut keys: Vec<&ServiceKey> = self.index.keys().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
