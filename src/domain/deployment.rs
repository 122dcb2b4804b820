//! Deployment domain types
//!
//! A deployment is a single attempt to apply a package to an environment
//! via the clio tool. Every attempt produces exactly one record in the
//! history, successful or not.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome classification of a deployment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Success,
    Failed,
}

/// Immutable audit record of one deployment attempt.
///
/// `environment` and `package` are the requested name strings, not
/// references: the environment may later be removed from the registry
/// while the record keeps the name it was deployed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub id: Uuid,
    pub package: String,
    pub environment: String,
    pub package_type: String,
    pub timestamp: DateTime<Utc>,
    pub status: DeploymentStatus,

    /// The exact resolved command; absent when resolution itself failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeploymentRecord {
    pub fn success(
        package: &str,
        environment: &str,
        package_type: &str,
        command: String,
        output: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            package: package.to_string(),
            environment: environment.to_string(),
            package_type: package_type.to_string(),
            timestamp: Utc::now(),
            status: DeploymentStatus::Success,
            command: Some(command),
            output: Some(output),
            error: None,
        }
    }

    pub fn failure(
        package: &str,
        environment: &str,
        package_type: &str,
        command: Option<String>,
        error: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            package: package.to_string(),
            environment: environment.to_string(),
            package_type: package_type.to_string(),
            timestamp: Utc::now(),
            status: DeploymentStatus::Failed,
            command,
            output: None,
            error: Some(error),
        }
    }
}

/// Structured result returned to the caller of a deploy operation.
///
/// Failures are always converted into this shape; deploy never throws
/// past its boundary.
#[derive(Debug, Clone, Serialize)]
pub struct DeployOutcome {
    pub success: bool,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Point-in-time health summary for an environment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentStatus {
    pub environment: String,

    /// `healthy` or `error`
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_deployment: Option<DateTime<Utc>>,

    pub active_packages: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
