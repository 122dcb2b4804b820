//! Centralized error types for clio-portal
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Top-level error type for portal operations
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Command resolution error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Environment registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Environment '{name}' is already registered")]
    Conflict { name: String },

    #[error("Environment '{name}' is not registered")]
    NotFound { name: String },

    #[error("Environment '{name}' is a default environment and cannot be removed")]
    Protected { name: String },
}

/// Command resolution errors
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Unknown environment: {name}")]
    UnknownEnvironment { name: String },
}

/// External command execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command exited with status {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("Failed to spawn '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    #[error("Command timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

/// Environment status probe errors
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Unknown environment: {name}")]
    UnknownEnvironment { name: String },

    #[error("Status query failed: {message}")]
    QueryFailed { message: String },
}

/// Package catalog errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Package query failed: {message}")]
    QueryFailed { message: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required configuration missing: {field}")]
    MissingField { field: String },

    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },
}
