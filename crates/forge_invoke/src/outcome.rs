//! Compiler identity and invocation outcome.

use std::path::PathBuf;

/// Identity of a main compiler binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerDescriptor {
    /// Stable compiler id (e.g. `wasmer`)
    pub id: String,
    /// Path to the compiler executable
    pub executable: PathBuf,
}

impl CompilerDescriptor {
    /// Create a descriptor
    #[must_use]
    pub fn new(id: &str, executable: PathBuf) -> Self {
        Self {
            id: id.to_string(),
            executable,
        }
    }
}

/// Result of one pass through the generic invocation path
///
/// A nonzero compiler exit is carried here unchanged; it is the
/// compiler's own failure taxonomy, not the framework's. Only
/// spawn failures, timeouts, and aborted pipeline steps surface as
/// errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationOutcome {
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Captured stdout (capped per execution options)
    pub stdout: String,
    /// Captured stderr (capped per execution options)
    pub stderr: String,
    /// Resolved output artifact path, filled in by the session
    pub output_path: Option<PathBuf>,
}

impl CompilationOutcome {
    /// Create an outcome with no captured streams
    #[must_use]
    pub fn new(code: Option<i32>) -> Self {
        Self {
            code,
            stdout: String::new(),
            stderr: String::new(),
            output_path: None,
        }
    }

    /// Attach the resolved output path
    #[must_use]
    pub fn with_output_path(mut self, output_path: PathBuf) -> Self {
        self.output_path = Some(output_path);
        self
    }

    /// Whether the compiler exited with code zero
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.code == Some(0)
    }
}
