//! Portal assembly
//!
//! Wires the registry, history, resolver, catalog, deploy service, and
//! status prober into one instance, constructed once at startup and passed
//! by reference into every request handler. There is no ambient global
//! state.

use std::sync::Arc;

use crate::catalog::PackageCatalog;
use crate::config::PortalConfig;
use crate::history::DeploymentHistory;
use crate::infrastructure::clio::{ClioRunner, CommandRunner, MockRunner};
use crate::registry::EnvironmentRegistry;
use crate::resolver::CommandResolver;
use crate::services::{DeployService, StatusProber};

pub struct Portal {
    pub registry: Arc<EnvironmentRegistry>,
    pub history: Arc<DeploymentHistory>,
    pub resolver: Arc<CommandResolver>,
    pub catalog: PackageCatalog,
    pub deployer: DeployService,
    pub prober: StatusProber,
}

impl Portal {
    /// Build the portal from validated configuration, selecting the real
    /// or mock runner based on the mock toggle.
    pub fn new(config: &PortalConfig) -> Self {
        let runner: Arc<dyn CommandRunner> = if config.mock.enabled {
            Arc::new(MockRunner::new())
        } else {
            Arc::new(ClioRunner::new())
        };
        Self::with_runner(config, runner)
    }

    /// Build the portal around an explicit runner (used by tests to
    /// script external-tool behavior without spawning processes).
    pub fn with_runner(config: &PortalConfig, runner: Arc<dyn CommandRunner>) -> Self {
        let timeout = config.command_timeout();

        let registry = Arc::new(EnvironmentRegistry::from_seeds(config.environments.clone()));
        let history = Arc::new(DeploymentHistory::new());
        let resolver = Arc::new(CommandResolver::new(
            Arc::clone(&registry),
            config.package_types.clone(),
        ));

        let catalog = if config.mock.enabled {
            PackageCatalog::fixed(config.mock.packages.clone())
        } else {
            PackageCatalog::clio(Arc::clone(&runner), &config.clio.pkg_list_command, timeout)
        };

        let deployer = DeployService::new(
            Arc::clone(&resolver),
            Arc::clone(&history),
            Arc::clone(&runner),
            timeout,
        );

        let prober = if config.mock.enabled {
            StatusProber::derived(Arc::clone(&registry), Arc::clone(&history))
        } else {
            StatusProber::clio(
                Arc::clone(&registry),
                Arc::clone(&history),
                Arc::clone(&runner),
                &config.clio.env_info_command,
                timeout,
            )
        };

        Self {
            registry,
            history,
            resolver,
            catalog,
            deployer,
            prober,
        }
    }
}
