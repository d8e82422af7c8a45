//! Per-request compile session.

use crate::backend::Backend;
use crate::outcome::{CompilationOutcome, CompilerDescriptor};
use crate::runner::Runner;
use forge_core::{CompilationRequest, ExecOptions, ForgeResult};
use forge_tool::ToolRegistry;
use std::path::Path;
use std::sync::Arc;

/// Context for one compilation request
///
/// Owns no shared mutable state: the compiler identity, tool registry
/// handle, and runner are all read-only for the duration of the
/// request. Pipeline steps run strictly sequentially.
pub struct Session {
    /// Compiler identity and executable
    compiler: CompilerDescriptor,
    /// Tools known to this compilation context
    tools: Arc<ToolRegistry>,
    /// Process runner for the invocation path
    runner: Arc<dyn Runner>,
}

impl Session {
    /// Create a session
    #[must_use]
    pub fn new(
        compiler: CompilerDescriptor,
        tools: Arc<ToolRegistry>,
        runner: Arc<dyn Runner>,
    ) -> Self {
        Self {
            compiler,
            tools,
            runner,
        }
    }

    /// Compiler descriptor for this session
    #[must_use]
    pub fn compiler(&self) -> &CompilerDescriptor {
        &self.compiler
    }

    /// Compiler identity for this session
    #[must_use]
    pub fn compiler_id(&self) -> &str {
        &self.compiler.id
    }

    /// Tools known to this compilation context
    #[must_use]
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// The generic invocation routine: spawn the main compiler
    ///
    /// `input` is the (possibly rewritten) input path, used for
    /// logging; the argument vector already names it.
    ///
    /// # Errors
    ///
    /// Returns error if the spawn fails or times out.
    pub async fn spawn_compiler(
        &self,
        args: &[String],
        input: &Path,
        exec: ExecOptions,
    ) -> ForgeResult<CompilationOutcome> {
        tracing::debug!(
            compiler = %self.compiler.id,
            input = %input.display(),
            "invoking main compiler"
        );
        self.runner.spawn(&self.compiler.executable, args, &exec).await
    }

    /// Run a full compilation request through a backend
    ///
    /// Assembles the output path, filter-driven flags, and argument
    /// vector via the backend's extension points, then hands control
    /// to the backend's `run_compiler` so it can insert pipeline
    /// steps before delegating back to [`Session::spawn_compiler`].
    ///
    /// # Errors
    ///
    /// Returns error if a pipeline step fails; a nonzero compiler
    /// exit is carried in the outcome.
    pub async fn compile(
        &self,
        backend: &dyn Backend,
        request: &CompilationRequest,
    ) -> ForgeResult<CompilationOutcome> {
        // Output lands next to the input, named from the base alone.
        let dir = request
            .input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(&request.working_dir);
        let output_path = backend.output_filename(dir, &request.output_base);

        let mut filters = request.filters.clone();
        let mut options = backend.options_for_filter(&mut filters, &output_path);
        options.extend(backend.shared_library_path_args(&request.lib_paths));

        let args = backend.order_arguments(options, &request.input, request);

        let outcome = backend
            .run_compiler(self, &args, &request.input, request.exec.clone())
            .await?;
        Ok(outcome.with_output_path(output_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Records every spawn instead of running a process
    struct RecordingRunner {
        calls: Mutex<Vec<(PathBuf, Vec<String>, ExecOptions)>>,
    }

    impl RecordingRunner {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(PathBuf, Vec<String>, ExecOptions)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Runner for RecordingRunner {
        async fn spawn(
            &self,
            executable: &Path,
            args: &[String],
            exec: &ExecOptions,
        ) -> ForgeResult<CompilationOutcome> {
            self.calls
                .lock()
                .unwrap()
                .push((executable.to_path_buf(), args.to_vec(), exec.clone()));
            Ok(CompilationOutcome::new(Some(0)))
        }
    }

    struct PlainBackend;

    #[async_trait]
    impl Backend for PlainBackend {
        fn id(&self) -> &str {
            "plain"
        }
    }

    fn make_session(runner: Arc<RecordingRunner>) -> Session {
        Session::new(
            CompilerDescriptor::new("plain", PathBuf::from("/usr/bin/cc")),
            Arc::new(ToolRegistry::new()),
            runner,
        )
    }

    #[tokio::test]
    async fn test_session_spawns_descriptor_executable() {
        let runner = Arc::new(RecordingRunner::new());
        let session = make_session(Arc::clone(&runner));
        assert_eq!(session.compiler_id(), "plain");
        assert_eq!(session.compiler().executable, PathBuf::from("/usr/bin/cc"));

        session
            .spawn_compiler(&[], Path::new("/work/main.c"), ExecOptions::default())
            .await
            .unwrap();
        let (executable, _, _) = &runner.calls()[0];
        assert_eq!(executable, &session.compiler().executable);
    }

    #[tokio::test]
    async fn test_compile_assembles_and_delegates() {
        let runner = Arc::new(RecordingRunner::new());
        let session = make_session(Arc::clone(&runner));
        let request = CompilationRequest::new(
            PathBuf::from("/work/main.c"),
            "output",
            PathBuf::from("/work"),
        )
        .with_user_options(vec!["-O2".to_string()]);

        let outcome = session.compile(&PlainBackend, &request).await.unwrap();
        assert!(outcome.succeeded());
        assert_eq!(outcome.output_path, Some(PathBuf::from("/work/output.s")));

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        let (executable, args, exec) = &calls[0];
        assert_eq!(executable, &PathBuf::from("/usr/bin/cc"));
        assert_eq!(
            args,
            &vec!["-S", "-o", "/work/output.s", "-O2", "/work/main.c"]
        );
        // No caller-supplied exec options: framework defaults apply
        assert_eq!(exec, &ExecOptions::default());
    }

    #[tokio::test]
    async fn test_compile_rpath_flags_follow_filter_options() {
        let runner = Arc::new(RecordingRunner::new());
        let session = make_session(Arc::clone(&runner));
        let request = CompilationRequest::new(
            PathBuf::from("/work/main.c"),
            "output",
            PathBuf::from("/work"),
        )
        .with_lib_paths(vec!["/lib/x".to_string()]);

        session.compile(&PlainBackend, &request).await.unwrap();
        let (_, args, _) = &runner.calls()[0];
        assert_eq!(
            args,
            &vec![
                "-S",
                "-o",
                "/work/output.s",
                "-Wl,-rpath,/lib/x",
                "/lib/x",
                "/work/main.c"
            ]
        );
    }

    #[tokio::test]
    async fn test_compile_passes_caller_exec_options() {
        let runner = Arc::new(RecordingRunner::new());
        let session = make_session(Arc::clone(&runner));
        let request = CompilationRequest::new(
            PathBuf::from("/work/main.c"),
            "output",
            PathBuf::from("/work"),
        )
        .with_exec(ExecOptions::default().with_timeout_ms(100));

        session.compile(&PlainBackend, &request).await.unwrap();
        let (_, _, exec) = &runner.calls()[0];
        assert_eq!(exec.timeout_ms, 100);
    }
}
