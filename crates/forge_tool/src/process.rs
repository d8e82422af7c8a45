//! Process-backed tool implementation.

use crate::context::ToolContext;
use crate::tool::{Tool, ToolOutput};
use async_trait::async_trait;
use forge_core::{ForgeError, ForgeResult};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// A tool backed by an external executable
///
/// Invoked as `<executable> <extra_args..> <input>`. The capability id
/// is decoupled from the executable path so the same capability can be
/// served by different binaries across installations.
pub struct ProcessTool {
    /// Capability id
    id: String,
    /// Path to the executable
    executable: PathBuf,
}

impl ProcessTool {
    /// Create a tool for the given capability id and executable
    #[must_use]
    pub fn new(id: &str, executable: PathBuf) -> Self {
        Self {
            id: id.to_string(),
            executable,
        }
    }

    /// Path to the underlying executable
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

#[async_trait]
impl Tool for ProcessTool {
    fn id(&self) -> &str {
        &self.id
    }

    async fn run_tool(
        &self,
        ctx: &ToolContext,
        input: &Path,
        extra_args: &[String],
    ) -> ForgeResult<ToolOutput> {
        tracing::debug!(
            tool = %self.id,
            lang = %ctx.lang,
            input = %input.display(),
            "running auxiliary tool"
        );

        let output = Command::new(&self.executable)
            .args(extra_args)
            .arg(input)
            .output()
            .await
            .map_err(|e| ForgeError::SpawnFailed {
                executable: self.executable.display().to_string(),
                reason: e.to_string(),
            })?;

        let result = ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.succeeded() {
            tracing::warn!(tool = %self.id, code = ?result.code, "auxiliary tool reported failure");
        }

        Ok(result)
    }
}
