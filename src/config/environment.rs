//! Seeded environment configuration
//!
//! The default set mirrors the standard Creatio landscape: development,
//! test, staging, production. Each entry may be overridden per-environment
//! through `CREATIO_{PREFIX}_{URL,LOGIN,PASSWORD}` variables, where the
//! prefix is declared on the seed entry.

use serde::{Deserialize, Serialize};

use crate::domain::environment::Environment;

/// One environment as declared in configuration.
///
/// Every seed entry becomes a protected default in the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentSeed {
    pub name: String,

    #[serde(default)]
    pub display_name: String,

    pub url: String,

    pub login: String,

    #[serde(default)]
    pub password: Option<String>,

    /// Deploy-target code passed to clio (`-e <code>`)
    pub environment_code: String,

    #[serde(default)]
    pub description: String,

    /// Prefix for `CREATIO_{prefix}_*` variable overrides; entries without
    /// a prefix are file/defaults-only
    #[serde(default)]
    pub env_prefix: Option<String>,
}

impl EnvironmentSeed {
    /// Overlay `CREATIO_{prefix}_{URL,LOGIN,PASSWORD}` onto this entry
    pub fn apply_env_overrides(&mut self) {
        let Some(prefix) = &self.env_prefix else {
            return;
        };

        if let Ok(url) = std::env::var(format!("CREATIO_{}_URL", prefix)) {
            self.url = url;
        }
        if let Ok(login) = std::env::var(format!("CREATIO_{}_LOGIN", prefix)) {
            self.login = login;
        }
        if let Ok(password) = std::env::var(format!("CREATIO_{}_PASSWORD", prefix)) {
            self.password = Some(password);
        }
    }

    /// Materialize the seed as a protected default environment
    pub fn into_environment(self) -> Environment {
        let display_name = if self.display_name.is_empty() {
            self.name.clone()
        } else {
            self.display_name
        };

        Environment {
            name: self.name,
            display_name,
            url: self.url,
            login: self.login,
            credential_ref: self.password,
            environment_code: self.environment_code,
            description: self.description,
            is_default: true,
        }
    }
}

/// The built-in landscape, matching the portal's standard deployment chain
pub fn default_environments() -> Vec<EnvironmentSeed> {
    vec![
        EnvironmentSeed {
            name: "development".to_string(),
            display_name: "Development".to_string(),
            url: "https://dev.yourcompany.creatio.com".to_string(),
            login: "admin@dev.creatio.com".to_string(),
            password: None,
            environment_code: "dev".to_string(),
            description: "Development environment for testing".to_string(),
            env_prefix: Some("DEV".to_string()),
        },
        EnvironmentSeed {
            name: "test".to_string(),
            display_name: "Test/QA".to_string(),
            url: "https://test.yourcompany.creatio.com".to_string(),
            login: "admin@test.creatio.com".to_string(),
            password: None,
            environment_code: "test".to_string(),
            description: "Test environment for QA validation".to_string(),
            env_prefix: Some("TEST".to_string()),
        },
        EnvironmentSeed {
            name: "staging".to_string(),
            display_name: "Staging".to_string(),
            url: "https://staging.yourcompany.creatio.com".to_string(),
            login: "admin@staging.creatio.com".to_string(),
            password: None,
            environment_code: "staging".to_string(),
            description: "Pre-production staging environment".to_string(),
            env_prefix: Some("STAGING".to_string()),
        },
        EnvironmentSeed {
            name: "production".to_string(),
            display_name: "Production".to_string(),
            url: "https://yourcompany.creatio.com".to_string(),
            login: "admin@yourcompany.creatio.com".to_string(),
            password: None,
            environment_code: "prod".to_string(),
            description: "Live production environment".to_string(),
            env_prefix: Some("PROD".to_string()),
        },
    ]
}
