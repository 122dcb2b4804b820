//! Runtime tool path resolution
//!
//! Resolves paths to external tools using the environment-variable
//! override pattern: for a tool `clio`, check `CLIO_BIN` first and fall
//! back to PATH-based invocation when it is not set. Packaged deployments
//! can pin an exact binary while development machines use whatever is on
//! PATH.

use std::env;

/// Get the path to an external tool.
///
/// Checks `{TOOL}_BIN` (uppercase tool name + "_BIN"); falls back to the
/// tool name itself, which relies on PATH.
pub fn get_tool_path(tool: &str) -> String {
    let env_var = format!("{}_BIN", tool.to_uppercase().replace('-', "_"));
    env::var(&env_var).unwrap_or_else(|_| tool.to_string())
}

/// Common tool names
pub mod tools {
    pub const CLIO: &str = "clio";
}
