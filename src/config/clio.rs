//! clio tool configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClioConfig {
    /// Bounded timeout for every external clio invocation,
    /// in humantime format (e.g. `5m`, `90s`)
    #[serde(default = "default_command_timeout")]
    pub command_timeout: String,

    /// clio subcommand used by the status prober
    #[serde(default = "default_env_info_command")]
    pub env_info_command: String,

    /// clio subcommand used by the package catalog in real mode
    #[serde(default = "default_pkg_list_command")]
    pub pkg_list_command: String,
}

fn default_command_timeout() -> String {
    "5m".to_string()
}

fn default_env_info_command() -> String {
    "get-env-info".to_string()
}

fn default_pkg_list_command() -> String {
    "get-pkg-list".to_string()
}

impl Default for ClioConfig {
    fn default() -> Self {
        Self {
            command_timeout: default_command_timeout(),
            env_info_command: default_env_info_command(),
            pkg_list_command: default_pkg_list_command(),
        }
    }
}

impl ClioConfig {
    pub fn parsed_timeout(&self) -> Result<Duration, ConfigError> {
        let timeout = humantime::parse_duration(&self.command_timeout).map_err(|_| {
            ConfigError::InvalidValue {
                field: "clio.command_timeout".to_string(),
                value: self.command_timeout.clone(),
            }
        })?;

        if timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "clio.command_timeout".to_string(),
                value: self.command_timeout.clone(),
            });
        }

        Ok(timeout)
    }
}
