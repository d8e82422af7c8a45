//! Execution options for external process invocations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Options governing a single external process invocation
///
/// Timeout and cancellation policy live here, not in backends: a
/// backend awaits each invocation to completion and inherits whatever
/// limits the caller supplied. `ExecOptions::default()` is the
/// framework-provided default set used when the caller supplies none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecOptions {
    /// Working directory for the spawned process
    pub cwd: Option<PathBuf>,
    /// Environment variables set on top of the inherited environment
    pub env: BTreeMap<String, String>,
    /// Wall-clock limit in milliseconds (0 = no limit)
    pub timeout_ms: u64,
    /// Maximum bytes of stdout/stderr retained per stream
    pub max_output_bytes: usize,
}

impl ExecOptions {
    /// Create options with framework defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            cwd: None,
            env: BTreeMap::new(),
            timeout_ms: 30_000,
            max_output_bytes: 1024 * 1024,
        }
    }

    /// Set the working directory
    #[must_use]
    pub fn with_cwd(mut self, cwd: PathBuf) -> Self {
        self.cwd = Some(cwd);
        self
    }

    /// Set an environment variable
    #[must_use]
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    /// Set the wall-clock limit in milliseconds
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the captured-output cap per stream
    #[must_use]
    pub fn with_max_output_bytes(mut self, max: usize) -> Self {
        self.max_output_bytes = max;
        self
    }
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self::new()
    }
}
