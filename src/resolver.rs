//! Command resolver
//!
//! Maps a (package, environment, package type) request onto the concrete
//! clio command line. Pure: the output depends only on the inputs and the
//! registry snapshot at call time.

use std::sync::Arc;

use crate::domain::package::{PackageTypeDescriptor, DEFAULT_PACKAGE_TYPE};
use crate::error::{RegistryError, ResolveError};
use crate::registry::EnvironmentRegistry;

pub struct CommandResolver {
    registry: Arc<EnvironmentRegistry>,
    package_types: Vec<PackageTypeDescriptor>,
}

impl CommandResolver {
    pub fn new(
        registry: Arc<EnvironmentRegistry>,
        package_types: Vec<PackageTypeDescriptor>,
    ) -> Self {
        Self {
            registry,
            package_types,
        }
    }

    /// The configured package-type table (served by GET /package-types)
    pub fn package_types(&self) -> &[PackageTypeDescriptor] {
        &self.package_types
    }

    /// Build the clio command for deploying `package` to `environment`.
    ///
    /// An absent or unrecognized package type falls back to the
    /// application-package template.
    pub fn build(
        &self,
        package: &str,
        environment: &str,
        package_type: Option<&str>,
    ) -> Result<String, ResolveError> {
        let env = self.registry.resolve(environment).map_err(|err| match err {
            RegistryError::NotFound { name } => ResolveError::UnknownEnvironment { name },
            // resolve() only fails with NotFound
            _ => ResolveError::UnknownEnvironment {
                name: environment.to_string(),
            },
        })?;

        let subcommand = self.subcommand_for(package_type);
        Ok(format!(
            "clio {} {} -e {}",
            subcommand, package, env.environment_code
        ))
    }

    fn subcommand_for(&self, package_type: Option<&str>) -> &str {
        let requested = package_type.unwrap_or(DEFAULT_PACKAGE_TYPE);

        self.package_types
            .iter()
            .find(|pt| pt.key == requested)
            .or_else(|| {
                self.package_types
                    .iter()
                    .find(|pt| pt.key == DEFAULT_PACKAGE_TYPE)
            })
            .map(|pt| pt.command.as_str())
            // validate() guarantees the default type is configured
            .unwrap_or("install-app")
    }
}
