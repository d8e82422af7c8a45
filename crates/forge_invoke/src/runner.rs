//! Process runner behind the generic invocation path.

use crate::outcome::CompilationOutcome;
use async_trait::async_trait;
use forge_core::{ExecOptions, ForgeError, ForgeResult};
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

/// Spawns external processes for the invocation path
///
/// Implementations do not retry: each spawn is a single blocking,
/// cancelable unit awaited to completion. Timeout policy comes from
/// the supplied [`ExecOptions`], never from callers' own clocks.
#[async_trait]
pub trait Runner: Send + Sync {
    /// Spawn the executable with the given argument vector
    ///
    /// # Errors
    ///
    /// Returns error if the process cannot be spawned or exceeds the
    /// wall-clock limit; a nonzero exit is carried in the outcome.
    async fn spawn(
        &self,
        executable: &Path,
        args: &[String],
        exec: &ExecOptions,
    ) -> ForgeResult<CompilationOutcome>;
}

/// Production runner backed by `tokio::process`
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new runner
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Runner for ProcessRunner {
    async fn spawn(
        &self,
        executable: &Path,
        args: &[String],
        exec: &ExecOptions,
    ) -> ForgeResult<CompilationOutcome> {
        tracing::debug!(
            executable = %executable.display(),
            args = ?args,
            "spawning compiler process"
        );

        let mut cmd = Command::new(executable);
        cmd.args(args).kill_on_drop(true);
        if let Some(cwd) = &exec.cwd {
            cmd.current_dir(cwd);
        }
        for (key, value) in &exec.env {
            cmd.env(key, value);
        }

        let output = if exec.timeout_ms > 0 {
            match tokio::time::timeout(Duration::from_millis(exec.timeout_ms), cmd.output()).await
            {
                Ok(result) => result,
                Err(_) => {
                    return Err(ForgeError::Timeout {
                        executable: executable.display().to_string(),
                    });
                }
            }
        } else {
            cmd.output().await
        };

        let output = output.map_err(|e| ForgeError::SpawnFailed {
            executable: executable.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(CompilationOutcome {
            code: output.status.code(),
            stdout: capped_lossy(&output.stdout, exec.max_output_bytes),
            stderr: capped_lossy(&output.stderr, exec.max_output_bytes),
            output_path: None,
        })
    }
}

/// Decode captured bytes, retaining at most `cap` bytes
fn capped_lossy(bytes: &[u8], cap: usize) -> String {
    let end = bytes.len().min(cap);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
