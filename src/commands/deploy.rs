//! Deploy command - one-shot deployment from the terminal

use anyhow::Result;
use colored::Colorize;

use crate::config::PortalConfig;
use crate::portal::Portal;

pub async fn execute(
    config: PortalConfig,
    package: String,
    environment: String,
    package_type: Option<String>,
) -> Result<()> {
    let portal = Portal::new(&config);

    println!(
        "Deploying {} to {}",
        package.bright_green(),
        environment.bright_yellow()
    );

    let outcome = portal
        .deployer
        .deploy(&package, &environment, package_type.as_deref())
        .await;

    if let Some(command) = &outcome.command {
        println!("  Command: {}", command.dimmed());
    }

    if outcome.success {
        println!("{} {}", "✅".green(), outcome.message);
        if let Some(output) = &outcome.output {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Ok(())
    } else {
        println!("{} {}", "❌".red(), outcome.message);
        anyhow::bail!("deployment failed")
    }
}
