//! CLI definitions for clio-portal
//!
//! This module contains all CLI argument parsing structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "clio-portal",
    version,
    about = "Deployment portal for Creatio environments",
    long_about = "HTTP portal and operator CLI for deploying Creatio packages.\nTranslates deploy requests into clio commands and records every attempt."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a portal.yaml config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// TCP port to bind (overrides config)
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },

    /// Deploy a package to an environment
    Deploy {
        /// Package name
        #[arg(long)]
        package: String,

        /// Target environment name
        #[arg(long)]
        environment: String,

        /// Package type (app, pkg, template)
        #[arg(long)]
        package_type: Option<String>,
    },

    /// List registered environments
    Environments,

    /// List deployable packages
    Packages,

    /// Probe the health of an environment
    Status {
        /// Environment name
        environment: String,
    },
}
