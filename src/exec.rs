//! Command execution — the only side effect of completion generation.
//!
//! The generator never spawns processes itself; it asks a [`CommandExecutor`]
//! for the captured stdout of a command string. The binary uses
//! [`ShellExecutor`]; `--input` mode and tests use [`CannedExecutor`].

use crate::error::ExecError;
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::process::Command;

/// Runs a command line and returns its captured standard output.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, command: &str) -> Result<String, ExecError>;
}

/// Executes commands through the platform shell.
///
/// No timeout is applied; a hung listing command hangs the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellExecutor;

impl ShellExecutor {
    fn shell_command(command: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(&self, command: &str) -> Result<String, ExecError> {
        tracing::debug!(command, "running listing command");
        let output = Self::shell_command(command)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ExecError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExecError::Status {
                command: command.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Returns fixed text for every command and remembers what was asked.
#[derive(Debug, Default)]
pub struct CannedExecutor {
    output: String,
    commands: Mutex<Vec<String>>,
}

impl CannedExecutor {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            commands: Mutex::new(Vec::new()),
        }
    }

    /// Commands received so far, in call order.
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CommandExecutor for CannedExecutor {
    async fn execute(&self, command: &str) -> Result<String, ExecError> {
        if let Ok(mut seen) = self.commands.lock() {
            seen.push(command.to_string());
        }
        Ok(self.output.clone())
    }
}
