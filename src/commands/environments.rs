//! Environments command - list registered deployment targets

use anyhow::Result;
use colored::Colorize;

use crate::config::PortalConfig;
use crate::portal::Portal;

pub async fn execute(config: PortalConfig) -> Result<()> {
    let portal = Portal::new(&config);

    for env in portal.registry.list() {
        println!(
            "{:<15} {:<20} {}",
            env.name.bright_green(),
            env.display_name,
            env.url.dimmed()
        );
    }

    Ok(())
}
