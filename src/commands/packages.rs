//! Packages command - list deployable packages

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::PortalConfig;
use crate::portal::Portal;

pub async fn execute(config: PortalConfig) -> Result<()> {
    let portal = Portal::new(&config);

    let packages = portal
        .catalog
        .list()
        .await
        .context("Failed to fetch packages")?;

    if packages.is_empty() {
        println!("No packages available");
        return Ok(());
    }

    for pkg in packages {
        println!(
            "{:<20} {:<10} {}",
            pkg.name.bright_green(),
            pkg.version,
            pkg.description.dimmed()
        );
    }

    Ok(())
}
