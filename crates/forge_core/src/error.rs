//! Shared error taxonomy for FORGE.

/// Shared result type
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Framework-wide error type
///
/// Auxiliary-tool errors are fatal for the whole request: a missing or
/// failed converter aborts the pipeline before the main compiler step.
/// A nonzero exit from the main compiler is not an error here; it is
/// carried in the invocation outcome unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForgeError {
    /// Auxiliary tool not registered for the requested capability id
    #[error("Auxiliary tool not found: {capability}")]
    ToolNotFound {
        /// Capability id that could not be resolved
        capability: String,
    },

    /// Auxiliary tool ran but reported failure
    #[error("Tool {tool} failed with code {code:?}: {stderr}")]
    ToolFailed {
        /// Capability id of the failing tool
        tool: String,
        /// Exit code, if the process exited normally
        code: Option<i32>,
        /// Captured stderr
        stderr: String,
    },

    /// Process could not be started at all
    #[error("Failed to spawn {executable}: {reason}")]
    SpawnFailed {
        /// Executable path or name
        executable: String,
        /// Underlying OS error text
        reason: String,
    },

    /// Process exceeded the wall-clock limit from its execution options
    #[error("Timeout running {executable}")]
    Timeout {
        /// Executable path or name
        executable: String,
    },

    /// Filesystem error surfaced by a collaborator
    #[error("I/O error: {0}")]
    Io(String),

    /// Unknown backend identifier at configuration time
    #[error("Backend not found: {id}")]
    BackendNotFound {
        /// Requested backend id
        id: String,
    },
}

impl From<std::io::Error> for ForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
