//! API request handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::{ApiError, ApiResult};
use crate::domain::deployment::{DeploymentRecord, EnvironmentStatus};
use crate::domain::environment::{EnvironmentSummary, NewEnvironment};
use crate::domain::package::{PackageDescriptor, PackageTypeDescriptor};
use crate::portal::Portal;

/// GET /packages
pub async fn list_packages(
    State(portal): State<Arc<Portal>>,
) -> ApiResult<Json<Vec<PackageDescriptor>>> {
    let packages = portal.catalog.list().await?;
    Ok(Json(packages))
}

/// GET /environments
pub async fn list_environments(
    State(portal): State<Arc<Portal>>,
) -> Json<Vec<EnvironmentSummary>> {
    Json(portal.registry.list())
}

/// GET /package-types
pub async fn list_package_types(
    State(portal): State<Arc<Portal>>,
) -> Json<Vec<PackageTypeDescriptor>> {
    Json(portal.resolver.package_types().to_vec())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEnvironmentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub login: String,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub environment_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterEnvironmentResponse {
    pub message: String,
    pub environment: String,
}

/// POST /environments
pub async fn register_environment(
    State(portal): State<Arc<Portal>>,
    Json(request): Json<RegisterEnvironmentRequest>,
) -> ApiResult<Json<RegisterEnvironmentResponse>> {
    if request.name.trim().is_empty()
        || request.url.trim().is_empty()
        || request.login.trim().is_empty()
    {
        return Err(ApiError::bad_request(
            "Name, URL and login are required",
        ));
    }

    let name = portal.registry.register(NewEnvironment {
        name: request.name,
        display_name: request.display_name,
        url: request.url,
        login: request.login,
        password: request.password,
        description: request.description,
        environment_code: request.environment_code,
    })?;

    Ok(Json(RegisterEnvironmentResponse {
        message: format!("Environment '{}' registered", name),
        environment: name,
    }))
}

#[derive(Debug, Serialize)]
pub struct RemoveEnvironmentResponse {
    pub message: String,
}

/// DELETE /environments/:name
pub async fn remove_environment(
    State(portal): State<Arc<Portal>>,
    Path(name): Path<String>,
) -> ApiResult<Json<RemoveEnvironmentResponse>> {
    portal.registry.remove(&name)?;
    Ok(Json(RemoveEnvironmentResponse {
        message: format!("Environment '{}' removed", name),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRequest {
    #[serde(default)]
    pub selected_package: String,
    #[serde(default)]
    pub target_environment: String,
    pub package_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeployResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// POST /deploy
pub async fn deploy(
    State(portal): State<Arc<Portal>>,
    Json(request): Json<DeployRequest>,
) -> ApiResult<Json<DeployResponse>> {
    if request.selected_package.trim().is_empty()
        || request.target_environment.trim().is_empty()
    {
        return Err(ApiError::bad_request(
            "Package and environment are required",
        ));
    }

    let outcome = portal
        .deployer
        .deploy(
            &request.selected_package,
            &request.target_environment,
            request.package_type.as_deref(),
        )
        .await;

    if !outcome.success {
        return Err(ApiError::with_details(
            outcome.message,
            outcome.error.unwrap_or_default(),
        ));
    }

    Ok(Json(DeployResponse {
        message: outcome.message,
        output: outcome.output,
        command: outcome.command,
    }))
}

/// GET /history
pub async fn list_history(State(portal): State<Arc<Portal>>) -> Json<Vec<DeploymentRecord>> {
    Json(portal.history.list())
}

/// GET /status/:environment
pub async fn environment_status(
    State(portal): State<Arc<Portal>>,
    Path(environment): Path<String>,
) -> ApiResult<Json<EnvironmentStatus>> {
    let status = portal.prober.check(&environment).await?;
    Ok(Json(status))
}
