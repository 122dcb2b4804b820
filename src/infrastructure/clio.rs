//! External command execution
//!
//! The portal treats the clio tool as an opaque command executor behind
//! the [`CommandRunner`] capability: one `run` operation taking the full
//! command line and a bounded timeout. Production uses [`ClioRunner`]
//! (real process spawn); mock mode uses [`MockRunner`]; tests script their
//! own fakes against the same trait.

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::ExecutionError;
use crate::tools::get_tool_path;

/// Captured result of an external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Capability for running external commands.
///
/// Implementations must resolve to a [`CommandOutput`] on normal process
/// completion (any exit code) and reserve errors for spawn failures,
/// timeouts, and non-zero exits.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str, timeout: Duration) -> Result<CommandOutput, ExecutionError>;
}

/// Spawns the real external process.
///
/// The first token of the command line is resolved through the
/// `{TOOL}_BIN` override (see [`crate::tools`]); remaining tokens are
/// passed as arguments. Quoting is not interpreted: package and
/// environment codes contain no whitespace.
#[derive(Default)]
pub struct ClioRunner;

impl ClioRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ClioRunner {
    async fn run(&self, command: &str, timeout: Duration) -> Result<CommandOutput, ExecutionError> {
        let mut tokens = command.split_whitespace();
        let program = tokens.next().ok_or_else(|| ExecutionError::SpawnFailed {
            program: String::new(),
            message: "empty command".to_string(),
        })?;
        let program = get_tool_path(program);

        debug!(command = %command, program = %program, "Executing external command");

        let mut cmd = Command::new(&program);
        cmd.args(tokens);
        cmd.kill_on_drop(true);

        let output = match tokio::time::timeout(timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) => {
                return Err(ExecutionError::SpawnFailed {
                    program,
                    message: err.to_string(),
                })
            }
            Err(_) => {
                warn!(command = %command, timeout_secs = timeout.as_secs(), "Command timed out");
                return Err(ExecutionError::Timeout {
                    timeout_secs: timeout.as_secs(),
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(ExecutionError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        Ok(CommandOutput {
            exit_code: 0,
            stdout,
            stderr,
        })
    }
}

/// Canned-response runner used while mock mode is enabled.
///
/// Never spawns a process; always succeeds and echoes the command it was
/// asked to run.
#[derive(Default)]
pub struct MockRunner;

impl MockRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(
        &self,
        command: &str,
        _timeout: Duration,
    ) -> Result<CommandOutput, ExecutionError> {
        debug!(command = %command, "Mock execution");
        Ok(CommandOutput {
            exit_code: 0,
            stdout: format!("[mock] executed: {}", command),
            stderr: String::new(),
        })
    }
}
