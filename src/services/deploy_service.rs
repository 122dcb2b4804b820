//! Deploy service - orchestrates a single deployment attempt
//!
//! Resolves the command, runs it through the injected runner, classifies
//! the result, and appends exactly one history record per attempt. Errors
//! never escape this boundary: every failure becomes a structured
//! [`DeployOutcome`] plus a `failed` record.

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::domain::deployment::{DeployOutcome, DeploymentRecord};
use crate::domain::package::DEFAULT_PACKAGE_TYPE;
use crate::history::DeploymentHistory;
use crate::infrastructure::clio::CommandRunner;
use crate::resolver::CommandResolver;

pub struct DeployService {
    resolver: Arc<CommandResolver>,
    history: Arc<DeploymentHistory>,
    runner: Arc<dyn CommandRunner>,
    timeout: Duration,
}

impl DeployService {
    pub fn new(
        resolver: Arc<CommandResolver>,
        history: Arc<DeploymentHistory>,
        runner: Arc<dyn CommandRunner>,
        timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            history,
            runner,
            timeout,
        }
    }

    /// Deploy `package` to `environment`.
    ///
    /// The external tool is only invoked once the command resolves; an
    /// unknown environment is recorded as a failed attempt without a
    /// command. Retries are the caller's responsibility.
    pub async fn deploy(
        &self,
        package: &str,
        environment: &str,
        package_type: Option<&str>,
    ) -> DeployOutcome {
        let recorded_type = package_type.unwrap_or(DEFAULT_PACKAGE_TYPE);

        let command = match self.resolver.build(package, environment, package_type) {
            Ok(command) => command,
            Err(err) => {
                let message = err.to_string();
                warn!(package = %package, environment = %environment, error = %message,
                    "Deployment rejected before execution");

                self.history.append(DeploymentRecord::failure(
                    package,
                    environment,
                    recorded_type,
                    None,
                    message.clone(),
                ));

                return DeployOutcome {
                    success: false,
                    message: format!("Deployment failed: {}", message),
                    output: None,
                    command: None,
                    error: Some(message),
                };
            }
        };

        info!(package = %package, environment = %environment, command = %command,
            "Executing deployment");

        match self.runner.run(&command, self.timeout).await {
            Ok(output) => {
                self.history.append(DeploymentRecord::success(
                    package,
                    environment,
                    recorded_type,
                    command.clone(),
                    output.stdout.clone(),
                ));

                info!(package = %package, environment = %environment, "Deployment completed");

                DeployOutcome {
                    success: true,
                    message: "Deployment completed successfully".to_string(),
                    output: Some(output.stdout),
                    command: Some(command),
                    error: None,
                }
            }
            Err(err) => {
                let message = err.to_string();
                warn!(package = %package, environment = %environment, error = %message,
                    "Deployment failed");

                self.history.append(DeploymentRecord::failure(
                    package,
                    environment,
                    recorded_type,
                    Some(command.clone()),
                    message.clone(),
                ));

                DeployOutcome {
                    success: false,
                    message: format!("Deployment failed: {}", message),
                    output: None,
                    command: Some(command),
                    error: Some(message),
                }
            }
        }
    }
}
