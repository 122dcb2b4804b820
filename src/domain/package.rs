//! Package domain types

use serde::{Deserialize, Serialize};

/// The package type the portal falls back to when a deploy request omits
/// or misnames its type.
pub const DEFAULT_PACKAGE_TYPE: &str = "app";

/// A deployable Creatio artifact, as reported by the catalog.
///
/// Read-only: the portal never mutates package metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub description: String,

    /// One of the configured package-type keys (see [`PackageTypeDescriptor`])
    #[serde(default = "default_package_type")]
    pub package_type: String,

    #[serde(default)]
    pub last_modified: String,
}

fn default_package_type() -> String {
    DEFAULT_PACKAGE_TYPE.to_string()
}

/// A package type tag and the clio subcommand used to install it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageTypeDescriptor {
    /// Stable key used in deploy requests (e.g. `app`, `pkg`, `template`)
    #[serde(rename = "type")]
    pub key: String,

    pub display_name: String,

    pub description: String,

    /// clio subcommand (e.g. `install-app`, `install-pkg`)
    pub command: String,
}
