//! Helper program invocation shared by the sound and voice channels.

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::NotifyError;

/// A helper program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name, looked up on `PATH`.
    pub program: &'static str,
    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Creates a command specification.
    #[must_use]
    pub const fn new(program: &'static str, args: Vec<String>) -> Self {
        Self { program, args }
    }

    /// Runs the program to completion.
    ///
    /// A non-zero exit status is reported through `on_failure`, which
    /// receives a description including the captured stderr.
    pub(crate) async fn run(
        self,
        on_failure: fn(String) -> NotifyError,
    ) -> Result<(), NotifyError> {
        debug!(program = self.program, args = ?self.args, "running helper program");
        let output = Command::new(self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| NotifyError::SpawnFailed {
                program: self.program.to_owned(),
                message: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.trim();
        let message = if detail.is_empty() {
            format!("{} exited with {}", self.program, output.status)
        } else {
            format!("{} exited with {}: {detail}", self.program, output.status)
        };
        Err(on_failure(message))
    }
}
