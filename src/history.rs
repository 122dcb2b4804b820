//! Deployment history
//!
//! Append-only audit log of every deployment attempt for the lifetime of
//! the process. Records are never edited or deleted; `list()` hands out
//! snapshots, so callers cannot mutate history through the returned value.

use std::sync::RwLock;

use crate::domain::deployment::{DeploymentRecord, DeploymentStatus};

#[derive(Default)]
pub struct DeploymentHistory {
    records: RwLock<Vec<DeploymentRecord>>,
}

impl DeploymentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the log
    pub fn append(&self, record: DeploymentRecord) {
        self.records
            .write()
            .expect("history lock poisoned")
            .push(record);
    }

    /// Snapshot of all records, most recent first
    pub fn list(&self) -> Vec<DeploymentRecord> {
        let records = self.records.read().expect("history lock poisoned");
        records.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().expect("history lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most recent record for the named environment, if any
    pub fn last_for_environment(&self, environment: &str) -> Option<DeploymentRecord> {
        let records = self.records.read().expect("history lock poisoned");
        records
            .iter()
            .rev()
            .find(|r| r.environment == environment)
            .cloned()
    }

    /// Number of distinct packages whose most recent attempt against the
    /// named environment succeeded.
    pub fn active_package_count(&self, environment: &str) -> u64 {
        let records = self.records.read().expect("history lock poisoned");

        let mut latest: Vec<(&str, DeploymentStatus)> = Vec::new();
        // Walk newest-first; the first record seen per package is its latest
        for record in records.iter().rev().filter(|r| r.environment == environment) {
            if !latest.iter().any(|(name, _)| *name == record.package) {
                latest.push((record.package.as_str(), record.status));
            }
        }

        latest
            .iter()
            .filter(|(_, status)| *status == DeploymentStatus::Success)
            .count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(package: &str, environment: &str) -> DeploymentRecord {
        DeploymentRecord::success(
            package,
            environment,
            "app",
            format!("clio install-app {} -e {}", package, environment),
            "ok".to_string(),
        )
    }

    fn failure(package: &str, environment: &str) -> DeploymentRecord {
        DeploymentRecord::failure(package, environment, "app", None, "boom".to_string())
    }

    #[test]
    fn test_list_is_most_recent_first() {
        let history = DeploymentHistory::new();
        history.append(success("First", "staging"));
        history.append(success("Second", "staging"));

        let records = history.list();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].package, "Second");
        assert_eq!(records[1].package, "First");
    }

    #[test]
    fn test_list_snapshot_does_not_mutate_history() {
        let history = DeploymentHistory::new();
        history.append(success("Only", "staging"));

        let mut snapshot = history.list();
        snapshot.clear();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_last_for_environment() {
        let history = DeploymentHistory::new();
        history.append(success("A", "staging"));
        history.append(success("B", "production"));
        history.append(failure("C", "staging"));

        let last = history.last_for_environment("staging").unwrap();
        assert_eq!(last.package, "C");
        assert!(history.last_for_environment("qa").is_none());
    }

    #[test]
    fn test_active_packages_counts_latest_status_per_package() {
        let history = DeploymentHistory::new();
        history.append(success("A", "staging"));
        history.append(success("B", "staging"));
        history.append(success("B", "production"));
        // A's redeploy to staging fails: it is no longer active there
        history.append(failure("A", "staging"));

        assert_eq!(history.active_package_count("staging"), 1);
        assert_eq!(history.active_package_count("production"), 1);
        assert_eq!(history.active_package_count("qa"), 0);
    }
}
