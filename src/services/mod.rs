//! Orchestration services

pub mod deploy_service;
pub mod status_service;

pub use deploy_service::DeployService;
pub use status_service::StatusProber;
