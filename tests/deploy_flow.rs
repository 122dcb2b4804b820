//! End-to-end deployment flow tests against the assembled portal core,
//! with scripted runners in place of the real clio tool.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use clio_portal::config::PortalConfig;
use clio_portal::domain::deployment::DeploymentStatus;
use clio_portal::domain::environment::NewEnvironment;
use clio_portal::error::ExecutionError;
use clio_portal::infrastructure::clio::{CommandOutput, CommandRunner, MockRunner};
use clio_portal::portal::Portal;

/// Runner that fails every invocation with a fixed error
struct BrokenRunner;

#[async_trait]
impl CommandRunner for BrokenRunner {
    async fn run(
        &self,
        _command: &str,
        _timeout: Duration,
    ) -> Result<CommandOutput, ExecutionError> {
        Err(ExecutionError::NonZeroExit {
            code: 1,
            stderr: "environment unreachable".to_string(),
        })
    }
}

fn mock_portal() -> Portal {
    Portal::with_runner(&PortalConfig::default(), Arc::new(MockRunner::new()))
}

fn register_qa2(portal: &Portal) {
    portal
        .registry
        .register(NewEnvironment {
            name: "qa2".to_string(),
            display_name: None,
            url: "https://qa2.example.com".to_string(),
            login: "a@b.com".to_string(),
            password: None,
            description: None,
            environment_code: None,
        })
        .unwrap();
}

#[tokio::test]
async fn register_then_deploy_to_new_environment() {
    let portal = mock_portal();

    register_qa2(&portal);
    assert!(portal.registry.list().iter().any(|e| e.name == "qa2"));

    let outcome = portal.deployer.deploy("Foo", "qa2", Some("pkg")).await;
    assert!(outcome.success);
    assert_eq!(outcome.command.as_deref(), Some("clio install-pkg Foo -e qa2"));

    let history = portal.history.list();
    assert_eq!(history[0].environment, "qa2");
    assert_eq!(history[0].status, DeploymentStatus::Success);
}

#[tokio::test]
async fn deploy_to_unknown_environment_records_failure_without_command() {
    let portal = mock_portal();

    let outcome = portal.deployer.deploy("Foo", "doesnotexist", None).await;
    assert!(!outcome.success);

    let history = portal.history.list();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, DeploymentStatus::Failed);
    assert!(history[0].command.is_none());
    assert_eq!(history[0].environment, "doesnotexist");
}

#[tokio::test]
async fn removing_seeded_default_is_rejected() {
    let portal = mock_portal();

    let err = portal.registry.remove("development").unwrap_err();
    assert!(err.to_string().contains("cannot be removed"));
    assert!(portal
        .registry
        .list()
        .iter()
        .any(|e| e.name == "development"));
}

#[tokio::test]
async fn history_length_tracks_every_attempt() {
    let portal = Portal::with_runner(&PortalConfig::default(), Arc::new(BrokenRunner));

    portal.deployer.deploy("A", "staging", None).await;
    portal.deployer.deploy("B", "production", None).await;
    portal.deployer.deploy("C", "doesnotexist", None).await;

    assert_eq!(portal.history.len(), 3);
    // Every attempt failed: broken runner + unknown environment
    assert!(portal
        .history
        .list()
        .iter()
        .all(|r| r.status == DeploymentStatus::Failed));
}

#[tokio::test]
async fn record_status_matches_returned_outcome() {
    let ok_portal = mock_portal();
    let outcome = ok_portal.deployer.deploy("Foo", "staging", None).await;
    assert_eq!(
        outcome.success,
        ok_portal.history.list()[0].status == DeploymentStatus::Success
    );

    let broken_portal = Portal::with_runner(&PortalConfig::default(), Arc::new(BrokenRunner));
    let outcome = broken_portal.deployer.deploy("Foo", "staging", None).await;
    assert_eq!(
        outcome.success,
        broken_portal.history.list()[0].status == DeploymentStatus::Success
    );
}

#[tokio::test]
async fn resolver_is_pure_under_unchanged_registry() {
    let portal = mock_portal();
    let first = portal.resolver.build("Foo", "test", Some("template")).unwrap();
    let second = portal.resolver.build("Foo", "test", Some("template")).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn status_reflects_deployments_after_environment_removal_survives_history() {
    let portal = mock_portal();
    register_qa2(&portal);

    portal.deployer.deploy("Foo", "qa2", None).await;
    portal.registry.remove("qa2").unwrap();

    // History keeps the name of the removed environment
    let history = portal.history.list();
    assert_eq!(history[0].environment, "qa2");
    assert!(!portal.registry.list().iter().any(|e| e.name == "qa2"));
}

#[tokio::test]
async fn derived_status_counts_active_packages() {
    let portal = mock_portal();

    portal.deployer.deploy("CustomerApp", "staging", None).await;
    portal.deployer.deploy("OrderSystem", "staging", None).await;

    let status = portal.prober.check("staging").await.unwrap();
    assert_eq!(status.status, "healthy");
    assert_eq!(status.active_packages, 2);
    assert!(status.last_deployment.is_some());
}
