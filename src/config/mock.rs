//! Mock-mode configuration
//!
//! With mock mode enabled the portal never spawns the clio tool: deploys
//! run against a canned-response runner and the catalog serves the
//! configured package list. This is the out-of-the-box mode; disable it
//! once real clio environments are registered.

use serde::{Deserialize, Serialize};

use crate::domain::package::PackageDescriptor;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MockConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Catalog contents served while mock mode is enabled
    #[serde(default = "default_packages")]
    pub packages: Vec<PackageDescriptor>,
}

fn default_enabled() -> bool {
    true
}

fn default_packages() -> Vec<PackageDescriptor> {
    vec![
        PackageDescriptor {
            name: "CustomerApp".to_string(),
            version: "1.2.3".to_string(),
            description: "Customer management application".to_string(),
            package_type: "app".to_string(),
            last_modified: "2024-01-15".to_string(),
        },
        PackageDescriptor {
            name: "OrderSystem".to_string(),
            version: "2.1.0".to_string(),
            description: "Order processing system".to_string(),
            package_type: "app".to_string(),
            last_modified: "2024-01-10".to_string(),
        },
        PackageDescriptor {
            name: "InventoryTracker".to_string(),
            version: "1.5.7".to_string(),
            description: "Inventory management tracker".to_string(),
            package_type: "pkg".to_string(),
            last_modified: "2024-01-08".to_string(),
        },
        PackageDescriptor {
            name: "ReportingTool".to_string(),
            version: "3.0.1".to_string(),
            description: "Business reporting tool".to_string(),
            package_type: "pkg".to_string(),
            last_modified: "2024-01-12".to_string(),
        },
    ]
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            packages: default_packages(),
        }
    }
}
