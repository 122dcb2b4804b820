use anyhow::Result;
use clap::Parser;

use clio_portal::cli::{Cli, Commands};
use clio_portal::commands;
use clio_portal::config::PortalConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with LOG_LEVEL env var support
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
        if cli.verbose {
            "debug".to_string()
        } else {
            "info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .init();

    let config = PortalConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port } => {
            commands::serve::execute(config, port).await?;
        }
        Commands::Deploy {
            package,
            environment,
            package_type,
        } => {
            commands::deploy::execute(config, package, environment, package_type).await?;
        }
        Commands::Environments => {
            commands::environments::execute(config).await?;
        }
        Commands::Packages => {
            commands::packages::execute(config).await?;
        }
        Commands::Status { environment } => {
            commands::status::execute(config, environment).await?;
        }
    }

    Ok(())
}
