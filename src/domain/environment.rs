//! Environment domain types
//!
//! An environment is a named Creatio deployment target with connection
//! metadata. The full record carries credentials and is internal-only;
//! external callers see the `EnvironmentSummary` projection.

use serde::{Deserialize, Serialize};

/// A registered deployment target.
///
/// `login` and `credential_ref` are connection secrets: they never appear
/// in the external summary and are never logged in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    /// Unique registry key, immutable once created
    pub name: String,

    /// Human-readable label
    pub display_name: String,

    /// Base URL of the Creatio instance
    pub url: String,

    /// Login used by the clio tool
    pub login: String,

    /// Opaque secret reference (password or vault key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_ref: Option<String>,

    /// Short code passed to clio as the deploy target (`-e <code>`)
    pub environment_code: String,

    pub description: String,

    /// Seeded from startup configuration; protected from runtime removal
    pub is_default: bool,
}

impl Environment {
    /// External projection exposing only non-sensitive fields
    pub fn summary(&self) -> EnvironmentSummary {
        EnvironmentSummary {
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
        }
    }
}

/// Non-sensitive view of an environment, as returned by list operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSummary {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub url: String,
}

/// Runtime registration request for a new environment
#[derive(Debug, Clone)]
pub struct NewEnvironment {
    pub name: String,
    pub display_name: Option<String>,
    pub url: String,
    pub login: String,
    pub password: Option<String>,
    pub description: Option<String>,
    /// Deploy-target code; defaults to the environment name when omitted
    pub environment_code: Option<String>,
}
