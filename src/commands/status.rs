//! Status command - probe the health of an environment

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::PortalConfig;
use crate::portal::Portal;

pub async fn execute(config: PortalConfig, environment: String) -> Result<()> {
    let portal = Portal::new(&config);

    let status = portal
        .prober
        .check(&environment)
        .await
        .context("Failed to check environment status")?;

    let label = match status.status.as_str() {
        "healthy" => status.status.bright_green(),
        _ => status.status.bright_red(),
    };

    println!("{}: {}", status.environment.bright_yellow(), label);
    match status.last_deployment {
        Some(ts) => println!("  Last deployment: {}", ts.to_rfc3339()),
        None => println!("  Last deployment: never"),
    }
    println!("  Active packages: {}", status.active_packages);
    if let Some(error) = &status.error {
        println!("  Error: {}", error.red());
    }

    Ok(())
}
