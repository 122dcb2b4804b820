//! HTTP surface tests: the JSON contract of every endpoint, exercised
//! in-process with tower's oneshot (no network, no spawned processes).

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use clio_portal::api;
use clio_portal::config::PortalConfig;
use clio_portal::infrastructure::clio::MockRunner;
use clio_portal::portal::Portal;

fn app() -> Router {
    let config = PortalConfig::default();
    let portal = Arc::new(Portal::with_runner(&config, Arc::new(MockRunner::new())));
    api::create_router(portal, "*")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

fn post_json(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(path: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn environments_listing_hides_credentials() {
    let app = app();
    let response = app.oneshot(get("/environments")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let envs = json.as_array().unwrap();
    assert_eq!(envs.len(), 4);
    assert_eq!(envs[0]["name"], "development");
    assert!(envs[0].get("login").is_none());
    assert!(envs[0].get("credentialRef").is_none());
}

#[tokio::test]
async fn packages_endpoint_serves_catalog() {
    let app = app();
    let response = app.oneshot(get("/packages")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 4);
    assert_eq!(json[0]["name"], "CustomerApp");
}

#[tokio::test]
async fn package_types_endpoint_serves_configured_table() {
    let app = app();
    let response = app.oneshot(get("/package-types")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let types = json.as_array().unwrap();
    assert_eq!(types.len(), 3);
    assert!(types.iter().any(|t| t["type"] == "app"));
}

#[tokio::test]
async fn register_environment_requires_name_url_login() {
    let app = app();
    let response = app
        .oneshot(post_json(
            "/environments",
            serde_json::json!({"name": "qa2", "login": "a@b.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn register_conflict_maps_to_500() {
    let app = app();
    let body = serde_json::json!({
        "name": "qa2",
        "url": "https://qa2.example.com",
        "login": "a@b.com"
    });

    let response = app.clone().oneshot(post_json("/environments", body.clone())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(post_json("/environments", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("already registered"));
}

#[tokio::test]
async fn register_then_deploy_then_history_scenario() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/environments",
            serde_json::json!({
                "name": "qa2",
                "url": "https://qa2.example.com",
                "login": "a@b.com"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["environment"], "qa2");

    let response = app.clone().oneshot(get("/environments")).await.unwrap();
    let json = body_json(response).await;
    assert!(json
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["name"] == "qa2"));

    let response = app
        .clone()
        .oneshot(post_json(
            "/deploy",
            serde_json::json!({
                "selectedPackage": "Foo",
                "targetEnvironment": "qa2",
                "packageType": "pkg"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["command"], "clio install-pkg Foo -e qa2");
    assert!(json["output"].as_str().is_some());

    let response = app.oneshot(get("/history")).await.unwrap();
    let json = body_json(response).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["environment"], "qa2");
    assert_eq!(records[0]["status"], "success");
}

#[tokio::test]
async fn deploy_requires_package_and_environment() {
    let app = app();
    let response = app
        .oneshot(post_json(
            "/deploy",
            serde_json::json!({"selectedPackage": "Foo"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Package and environment are required");
}

#[tokio::test]
async fn deploy_to_unknown_environment_returns_500_and_failed_record() {
    let app = app();
    let response = app
        .clone()
        .oneshot(post_json(
            "/deploy",
            serde_json::json!({
                "selectedPackage": "Foo",
                "targetEnvironment": "doesnotexist"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("failed"));
    assert!(json["details"].as_str().unwrap().contains("doesnotexist"));

    let response = app.oneshot(get("/history")).await.unwrap();
    let json = body_json(response).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "failed");
    assert!(records[0].get("command").is_none());
}

#[tokio::test]
async fn history_is_most_recent_first() {
    let app = app();

    for package in ["First", "Second"] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/deploy",
                serde_json::json!({
                    "selectedPackage": package,
                    "targetEnvironment": "staging"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/history")).await.unwrap();
    let json = body_json(response).await;
    let records = json.as_array().unwrap();
    assert_eq!(records[0]["package"], "Second");
    assert_eq!(records[1]["package"], "First");
}

#[tokio::test]
async fn removing_default_environment_returns_500() {
    let app = app();
    let response = app
        .clone()
        .oneshot(delete("/environments/development"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = app.oneshot(get("/environments")).await.unwrap();
    let json = body_json(response).await;
    assert!(json
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["name"] == "development"));
}

#[tokio::test]
async fn removing_registered_environment_succeeds() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/environments",
            serde_json::json!({
                "name": "qa2",
                "url": "https://qa2.example.com",
                "login": "a@b.com"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(delete("/environments/qa2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/environments")).await.unwrap();
    let json = body_json(response).await;
    assert!(!json.as_array().unwrap().iter().any(|e| e["name"] == "qa2"));
}

#[tokio::test]
async fn status_endpoint_reports_environment_health() {
    let app = app();

    let response = app.clone().oneshot(get("/status/staging")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["environment"], "staging");
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["activePackages"], 0);

    let response = app.oneshot(get("/status/doesnotexist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
