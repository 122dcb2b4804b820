//! # Portal Configuration System
//!
//! Layered configuration loading: built-in defaults → optional YAML file
//! → environment variable overrides. Loaded and validated exactly once at
//! startup; the running portal never re-reads configuration.
//!
//! ## Sources
//!
//! 1. **Built-in defaults** — the four seeded environments, the clio
//!    command set, the package-type table, and the demo package list.
//! 2. **Config file** (`portal.yaml`, or `--config <path>`) — any subset
//!    of the configuration may be overridden.
//! 3. **Environment variables** — `PORT`, `CORS_ORIGIN`, `CLIO_MOCK`,
//!    `CLIO_COMMAND_TIMEOUT`, and per-environment
//!    `CREATIO_{DEV,TEST,STAGING,PROD}_{URL,LOGIN,PASSWORD}` triples.

mod clio;
mod environment;
mod mock;
mod server;

pub use clio::ClioConfig;
pub use environment::EnvironmentSeed;
pub use mock::MockConfig;
pub use server::ServerConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use crate::domain::package::PackageTypeDescriptor;
use crate::error::ConfigError;

/// Complete portal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortalConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Seeded environments; every entry becomes a protected default
    #[serde(default = "environment::default_environments")]
    pub environments: Vec<EnvironmentSeed>,

    #[serde(default)]
    pub clio: ClioConfig,

    #[serde(default = "default_package_types")]
    pub package_types: Vec<PackageTypeDescriptor>,

    #[serde(default)]
    pub mock: MockConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            environments: environment::default_environments(),
            clio: ClioConfig::default(),
            package_types: default_package_types(),
            mock: MockConfig::default(),
        }
    }
}

/// The package-type table the original portal ships with
fn default_package_types() -> Vec<PackageTypeDescriptor> {
    vec![
        PackageTypeDescriptor {
            key: "app".to_string(),
            display_name: "Application Package".to_string(),
            description: "Complete Creatio application with business logic".to_string(),
            command: "install-app".to_string(),
        },
        PackageTypeDescriptor {
            key: "pkg".to_string(),
            display_name: "Custom Package".to_string(),
            description: "Custom development package".to_string(),
            command: "install-pkg".to_string(),
        },
        PackageTypeDescriptor {
            key: "template".to_string(),
            display_name: "Template Package".to_string(),
            description: "Reusable template package".to_string(),
            command: "install-pkg".to_string(),
        },
    ]
}

impl PortalConfig {
    /// Load configuration: defaults, then the optional config file, then
    /// environment variable overrides, then validate.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let conventional = Path::new("portal.yaml");
                if conventional.exists() {
                    Self::from_file(conventional)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config: {}\n  Check YAML syntax and field names.",
                path.display()
            )
        })
    }

    /// Environment variables override file values
    fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(origin) = std::env::var("CORS_ORIGIN") {
            self.server.cors_origin = origin;
        }
        if let Ok(mock) = std::env::var("CLIO_MOCK") {
            self.mock.enabled = matches!(mock.as_str(), "1" | "true" | "yes");
        }
        if let Ok(timeout) = std::env::var("CLIO_COMMAND_TIMEOUT") {
            self.clio.command_timeout = timeout;
        }

        for seed in &mut self.environments {
            seed.apply_env_overrides();
        }
    }

    /// Validate the merged configuration before any component is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for seed in &self.environments {
            if seed.name.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "environments[].name".to_string(),
                });
            }
            if seed.environment_code.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: format!("environments.{}.environment_code", seed.name),
                });
            }
            if !seen.insert(seed.name.clone()) {
                return Err(ConfigError::InvalidValue {
                    field: "environments[].name".to_string(),
                    value: format!("duplicate environment '{}'", seed.name),
                });
            }
        }

        if self.package_types.is_empty() {
            return Err(ConfigError::MissingField {
                field: "package_types".to_string(),
            });
        }
        if !self
            .package_types
            .iter()
            .any(|pt| pt.key == crate::domain::package::DEFAULT_PACKAGE_TYPE)
        {
            return Err(ConfigError::InvalidValue {
                field: "package_types".to_string(),
                value: format!(
                    "default type '{}' is not configured",
                    crate::domain::package::DEFAULT_PACKAGE_TYPE
                ),
            });
        }

        // Parse eagerly so a bad duration fails at startup, not mid-deploy
        self.clio.parsed_timeout()?;

        Ok(())
    }

    /// The bounded timeout applied to every external clio invocation
    pub fn command_timeout(&self) -> Duration {
        // validate() has already proven this parses
        self.clio
            .parsed_timeout()
            .expect("command_timeout validated at startup")
    }
}
