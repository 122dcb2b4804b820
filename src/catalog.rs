//! Package catalog
//!
//! Read-only view over the deployable artifacts. In mock mode the catalog
//! serves the configured package list; otherwise it queries the clio tool
//! and parses its package table.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::domain::package::PackageDescriptor;
use crate::error::CatalogError;
use crate::infrastructure::clio::CommandRunner;

pub struct PackageCatalog {
    mode: CatalogMode,
}

enum CatalogMode {
    /// Configured static list (mock mode)
    Static(Vec<PackageDescriptor>),
    /// `clio get-pkg-list` through the runner
    Clio {
        runner: Arc<dyn CommandRunner>,
        command: String,
        timeout: Duration,
    },
}

impl PackageCatalog {
    pub fn fixed(packages: Vec<PackageDescriptor>) -> Self {
        Self {
            mode: CatalogMode::Static(packages),
        }
    }

    pub fn clio(runner: Arc<dyn CommandRunner>, subcommand: &str, timeout: Duration) -> Self {
        Self {
            mode: CatalogMode::Clio {
                runner,
                command: format!("clio {}", subcommand),
                timeout,
            },
        }
    }

    pub async fn list(&self) -> Result<Vec<PackageDescriptor>, CatalogError> {
        match &self.mode {
            CatalogMode::Static(packages) => Ok(packages.clone()),
            CatalogMode::Clio {
                runner,
                command,
                timeout,
            } => {
                let output = runner
                    .run(command, *timeout)
                    .await
                    .map_err(|err| CatalogError::QueryFailed {
                        message: err.to_string(),
                    })?;

                let packages = parse_package_table(&output.stdout);
                debug!(count = packages.len(), "Parsed package list");
                Ok(packages)
            }
        }
    }
}

/// Parse clio's package table: one package per content line, first column
/// name, second column version when present. Rules and headers are
/// skipped; an empty result is a valid (empty) catalog.
fn parse_package_table(stdout: &str) -> Vec<PackageDescriptor> {
    stdout
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with(['-', '=', '+', '|']) {
                return None;
            }

            let mut columns = line.split_whitespace();
            let name = columns.next()?;
            if name.eq_ignore_ascii_case("name") {
                return None;
            }

            Some(PackageDescriptor {
                name: name.to_string(),
                version: columns.next().unwrap_or_default().to_string(),
                description: String::new(),
                package_type: crate::domain::package::DEFAULT_PACKAGE_TYPE.to_string(),
                last_modified: String::new(),
            })
        })
        .collect()
}
