//! API router configuration

use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::portal::Portal;

/// Create the portal router
pub fn create_router(portal: Arc<Portal>, cors_origin: &str) -> Router {
    let cors = match cors_origin {
        "*" => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        origin => {
            let origin = origin
                .parse::<HeaderValue>()
                .unwrap_or_else(|_| HeaderValue::from_static("*"));
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    Router::new()
        .route("/packages", get(handlers::list_packages))
        .route("/environments", get(handlers::list_environments))
        .route("/environments", post(handlers::register_environment))
        .route("/environments/:name", delete(handlers::remove_environment))
        .route("/package-types", get(handlers::list_package_types))
        .route("/deploy", post(handlers::deploy))
        .route("/history", get(handlers::list_history))
        .route("/status/:environment", get(handlers::environment_status))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(portal)
}
