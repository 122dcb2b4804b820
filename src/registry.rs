//! Environment registry
//!
//! Holds the set of deployment targets. Seeded once at startup from
//! configuration (those entries are protected defaults); additional
//! environments may be registered and removed at runtime. All mutations
//! take the write lock so name uniqueness holds under concurrent callers.

use std::sync::RwLock;
use tracing::info;

use crate::config::EnvironmentSeed;
use crate::domain::environment::{Environment, EnvironmentSummary, NewEnvironment};
use crate::error::RegistryError;

/// Insertion-ordered registry of deployment targets
pub struct EnvironmentRegistry {
    environments: RwLock<Vec<Environment>>,
}

impl EnvironmentRegistry {
    /// Build the registry from the validated seed set.
    ///
    /// Every seeded entry is a default and cannot be removed at runtime.
    pub fn from_seeds(seeds: Vec<EnvironmentSeed>) -> Self {
        let environments = seeds
            .into_iter()
            .map(EnvironmentSeed::into_environment)
            .collect();
        Self {
            environments: RwLock::new(environments),
        }
    }

    /// Non-sensitive summaries of all environments, in insertion order
    pub fn list(&self) -> Vec<EnvironmentSummary> {
        self.environments
            .read()
            .expect("registry lock poisoned")
            .iter()
            .map(Environment::summary)
            .collect()
    }

    /// Register a new non-default environment.
    ///
    /// Returns the created environment's name, or `Conflict` if the name
    /// is already taken.
    pub fn register(&self, request: NewEnvironment) -> Result<String, RegistryError> {
        let mut environments = self.environments.write().expect("registry lock poisoned");

        if environments.iter().any(|e| e.name == request.name) {
            return Err(RegistryError::Conflict { name: request.name });
        }

        let environment = Environment {
            display_name: request
                .display_name
                .unwrap_or_else(|| request.name.clone()),
            environment_code: request
                .environment_code
                .unwrap_or_else(|| request.name.clone()),
            url: request.url,
            login: request.login,
            credential_ref: request.password,
            description: request.description.unwrap_or_default(),
            is_default: false,
            name: request.name,
        };

        info!(environment = %environment.name, url = %environment.url, "Registered environment");

        let name = environment.name.clone();
        environments.push(environment);
        Ok(name)
    }

    /// Remove a runtime-registered environment.
    ///
    /// Defaults are reconfigured through startup configuration, never
    /// through this operation.
    pub fn remove(&self, name: &str) -> Result<(), RegistryError> {
        let mut environments = self.environments.write().expect("registry lock poisoned");

        let position = environments
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })?;

        if environments[position].is_default {
            return Err(RegistryError::Protected {
                name: name.to_string(),
            });
        }

        environments.remove(position);
        info!(environment = %name, "Removed environment");
        Ok(())
    }

    /// Full environment record including credentials.
    ///
    /// Internal-only: callers are the command resolver and the status
    /// prober. The snapshot is taken at call time; later removal does not
    /// affect work already resolved against it.
    pub fn resolve(&self, name: &str) -> Result<Environment, RegistryError> {
        self.environments
            .read()
            .expect("registry lock poisoned")
            .iter()
            .find(|e| e.name == name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }
}
