//! Tool trait and invocation output.

use crate::context::ToolContext;
use async_trait::async_trait;
use forge_core::ForgeResult;
use std::path::Path;

/// Output of a single tool invocation
///
/// A nonzero exit code is data, not an error: callers decide whether a
/// failed invocation aborts their pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Captured stdout
    pub stdout: String,
    /// Captured stderr
    pub stderr: String,
}

impl ToolOutput {
    /// Create a successful output with no captured streams
    #[must_use]
    pub fn success() -> Self {
        Self {
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Create a failed output with the given code and stderr
    #[must_use]
    pub fn failure(code: i32, stderr: &str) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    /// Whether the invocation exited with code zero
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.code == Some(0)
    }
}

/// An auxiliary tool resolvable by capability id
///
/// Implementations must not retry internally: each invocation is a
/// single deterministic external run.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable capability id used for registry lookup
    fn id(&self) -> &str;

    /// Run the tool on the given input
    ///
    /// # Errors
    ///
    /// Returns error if the tool process cannot be spawned; a run that
    /// starts but exits nonzero is reported through [`ToolOutput`].
    async fn run_tool(
        &self,
        ctx: &ToolContext,
        input: &Path,
        extra_args: &[String],
    ) -> ForgeResult<ToolOutput>;
}

impl std::fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool").field("id", &self.id()).finish()
    }
}
