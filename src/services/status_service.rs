//! Status prober - point-in-time environment health
//!
//! Mirrors the deploy service's no-throw discipline: probe failures are
//! wrapped into a `status: error` summary, never propagated. Only an
//! unknown environment name is an error to the caller.

use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::domain::deployment::EnvironmentStatus;
use crate::error::ProbeError;
use crate::history::DeploymentHistory;
use crate::infrastructure::clio::CommandRunner;
use crate::registry::EnvironmentRegistry;

pub struct StatusProber {
    registry: Arc<EnvironmentRegistry>,
    history: Arc<DeploymentHistory>,
    probe: ProbeMode,
}

enum ProbeMode {
    /// Summary derived from local state only (mock mode)
    Derived,
    /// `clio get-env-info` through the runner
    Clio {
        runner: Arc<dyn CommandRunner>,
        subcommand: String,
        timeout: Duration,
    },
}

impl StatusProber {
    pub fn derived(registry: Arc<EnvironmentRegistry>, history: Arc<DeploymentHistory>) -> Self {
        Self {
            registry,
            history,
            probe: ProbeMode::Derived,
        }
    }

    pub fn clio(
        registry: Arc<EnvironmentRegistry>,
        history: Arc<DeploymentHistory>,
        runner: Arc<dyn CommandRunner>,
        subcommand: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            registry,
            history,
            probe: ProbeMode::Clio {
                runner,
                subcommand: subcommand.to_string(),
                timeout,
            },
        }
    }

    /// Health summary for the named environment.
    ///
    /// `last_deployment` and `active_packages` come from the local audit
    /// history in both modes; the external query only decides
    /// healthy-vs-error.
    pub async fn check(&self, environment: &str) -> Result<EnvironmentStatus, ProbeError> {
        let env = self
            .registry
            .resolve(environment)
            .map_err(|_| ProbeError::UnknownEnvironment {
                name: environment.to_string(),
            })?;

        let last_deployment = self
            .history
            .last_for_environment(environment)
            .map(|r| r.timestamp);
        let active_packages = self.history.active_package_count(environment);

        let probe_result = match &self.probe {
            ProbeMode::Derived => Ok(()),
            ProbeMode::Clio {
                runner,
                subcommand,
                timeout,
            } => {
                let command = format!("clio {} -e {}", subcommand, env.environment_code);
                runner.run(&command, *timeout).await.map(|_| ())
            }
        };

        Ok(match probe_result {
            Ok(()) => EnvironmentStatus {
                environment: environment.to_string(),
                status: "healthy".to_string(),
                last_deployment,
                active_packages,
                error: None,
            },
            Err(err) => {
                let message = err.to_string();
                warn!(environment = %environment, error = %message, "Status probe failed");
                EnvironmentStatus {
                    environment: environment.to_string(),
                    status: "error".to_string(),
                    last_deployment,
                    active_packages,
                    error: Some(message),
                }
            }
        })
    }
}
