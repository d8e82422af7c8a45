//! The Wasmer backend adapter.

use async_trait::async_trait;
use forge_core::{CompilationRequest, ExecOptions, ForgeError, ForgeResult, OutputFilters};
use forge_invoke::{Backend, CompilationOutcome, Session};
use forge_tool::ToolContext;
use std::path::{Path, PathBuf};

/// Capability id of the text-to-binary converter tool
pub const WAT2WASM: &str = "wat2wasm";

/// Leading subcommand of the wasmer object-compilation driver
const CREATE_OBJ: &str = "create-obj";

/// Backend for `wasmer create-obj`
pub struct WasmerBackend;

impl WasmerBackend {
    /// Create the backend
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Rewrite a `.wat` filename to its `.wasm` sibling
    ///
    /// Same directory, same base name. Anything without a `.wat`
    /// extension passes through untouched, including paths that only
    /// contain `.wat` in a directory component.
    #[must_use]
    pub fn wasm_filename(input: &Path) -> PathBuf {
        if Self::is_wat(input) {
            input.with_extension("wasm")
        } else {
            input.to_path_buf()
        }
    }

    /// Whether the input is in the textual intermediate format
    fn is_wat(input: &Path) -> bool {
        input.extension().is_some_and(|ext| ext == "wat")
    }
}

impl Default for WasmerBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for WasmerBackend {
    fn id(&self) -> &str {
        "wasmer"
    }

    /// `create-obj` only ever emits an object artifact, so binary
    /// output is forced regardless of what the caller asked for.
    fn options_for_filter(&self, filters: &mut OutputFilters, output_path: &Path) -> Vec<String> {
        filters.binary = true;
        vec!["-o".to_string(), output_path.display().to_string()]
    }

    /// The object format is fixed: always `<base>.obj`.
    fn output_filename(&self, dir: &Path, output_base: &str) -> PathBuf {
        dir.join(format!("{output_base}.obj"))
    }

    /// The wasmer driver has no equivalent of `-Wl,-rpath`.
    fn shared_library_path_args(&self, _lib_paths: &[String]) -> Vec<String> {
        Vec::new()
    }

    /// Subcommand first, then options, then the six groups in request
    /// order, then the (rewritten) input filename last.
    fn order_arguments(
        &self,
        options: Vec<String>,
        input: &Path,
        request: &CompilationRequest,
    ) -> Vec<String> {
        let mut args = vec![CREATE_OBJ.to_string()];
        args.extend(options);
        args.extend(request.lib_includes.iter().cloned());
        args.extend(request.lib_options.iter().cloned());
        args.extend(request.lib_paths.iter().cloned());
        args.extend(request.lib_links.iter().cloned());
        args.extend(request.user_options.iter().cloned());
        args.extend(request.static_lib_links.iter().cloned());
        args.push(Self::wasm_filename(input).display().to_string());
        args
    }

    /// `create-obj` does not accept `.wat` input, so a textual input
    /// is first converted by the `wat2wasm` tool, then the main step
    /// runs on the resulting `.wasm` file.
    async fn run_compiler(
        &self,
        session: &Session,
        args: &[String],
        input: &Path,
        exec: Option<ExecOptions>,
    ) -> ForgeResult<CompilationOutcome> {
        let exec = exec.unwrap_or_default();

        if !Self::is_wat(input) {
            return session.spawn_compiler(args, input, exec).await;
        }

        // A missing converter aborts the whole request before any
        // artifact is produced.
        let wat2wasm = session.tools().get(WAT2WASM)?;

        let wasm_input = Self::wasm_filename(input);
        let ctx = ToolContext::new("wasm");
        let output = wat2wasm
            .run_tool(
                &ctx,
                input,
                &["-o".to_string(), wasm_input.display().to_string()],
            )
            .await?;
        if !output.succeeded() {
            return Err(ForgeError::ToolFailed {
                tool: WAT2WASM.to_string(),
                code: output.code,
                stderr: output.stderr,
            });
        }

        tracing::debug!(
            wat = %input.display(),
            wasm = %wasm_input.display(),
            "converted textual input for wasmer"
        );

        session.spawn_compiler(args, &wasm_input, exec).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasm_filename_rewrites_wat() {
        let path = WasmerBackend::wasm_filename(Path::new("/work/foo.wat"));
        assert_eq!(path, PathBuf::from("/work/foo.wasm"));
    }

    #[test]
    fn test_wasm_filename_leaves_wasm_alone() {
        let path = WasmerBackend::wasm_filename(Path::new("/work/foo.wasm"));
        assert_eq!(path, PathBuf::from("/work/foo.wasm"));
    }

    #[test]
    fn test_wasm_filename_ignores_wat_directory_component() {
        let path = WasmerBackend::wasm_filename(Path::new("/work/a.wat/foo.wasm"));
        assert_eq!(path, PathBuf::from("/work/a.wat/foo.wasm"));
    }

    #[test]
    fn test_wasm_filename_ignores_bare_dot_wat() {
        // ".wat" is a hidden file with no extension, not textual input
        let path = WasmerBackend::wasm_filename(Path::new("/work/.wat"));
        assert_eq!(path, PathBuf::from("/work/.wat"));
    }

    #[test]
    fn test_output_filename_always_obj() {
        let backend = WasmerBackend::new();
        assert_eq!(
            backend.output_filename(Path::new("/work"), "output"),
            PathBuf::from("/work/output.obj")
        );
        assert_eq!(
            backend.output_filename(Path::new("/elsewhere"), "x"),
            PathBuf::from("/elsewhere/x.obj")
        );
    }

    #[test]
    fn test_options_for_filter_forces_binary() {
        let backend = WasmerBackend::new();
        let mut filters = OutputFilters::new();
        let options = backend.options_for_filter(&mut filters, Path::new("/work/output.obj"));
        assert!(filters.binary);
        assert_eq!(options, vec!["-o", "/work/output.obj"]);
    }

    #[test]
    fn test_options_for_filter_binary_even_when_assembly_requested() {
        let backend = WasmerBackend::new();
        let mut filters = OutputFilters::new().with_binary(false).with_demangle(true);
        backend.options_for_filter(&mut filters, Path::new("/work/output.obj"));
        assert!(filters.binary);
        // Unrelated filter fields untouched
        assert!(filters.demangle);
    }

    #[test]
    fn test_shared_library_path_args_always_empty() {
        let backend = WasmerBackend::new();
        assert!(backend.shared_library_path_args(&[]).is_empty());
        assert!(backend
            .shared_library_path_args(&["/lib/a".to_string(), "/lib/b".to_string()])
            .is_empty());
    }

    #[test]
    fn test_order_arguments_subcommand_first_input_last() {
        let backend = WasmerBackend::new();
        let request = CompilationRequest::new(
            PathBuf::from("/work/foo.wat"),
            "output",
            PathBuf::from("/work"),
        )
        .with_lib_includes(vec!["-I/inc".to_string()])
        .with_lib_options(vec!["--libopt".to_string()])
        .with_lib_paths(vec!["-L/lib".to_string()])
        .with_lib_links(vec!["-lfoo".to_string()])
        .with_user_options(vec!["--user".to_string()])
        .with_static_lib_links(vec!["-lstatic".to_string()]);

        let args = backend.order_arguments(
            vec!["-o".to_string(), "/work/output.obj".to_string()],
            Path::new("/work/foo.wat"),
            &request,
        );
        assert_eq!(
            args,
            vec![
                "create-obj",
                "-o",
                "/work/output.obj",
                "-I/inc",
                "--libopt",
                "-L/lib",
                "-lfoo",
                "--user",
                "-lstatic",
                "/work/foo.wasm"
            ]
        );
    }

    #[test]
    fn test_order_arguments_empty_groups() {
        let backend = WasmerBackend::new();
        let request = CompilationRequest::new(
            PathBuf::from("/work/foo.wasm"),
            "output",
            PathBuf::from("/work"),
        );
        let args = backend.order_arguments(Vec::new(), Path::new("/work/foo.wasm"), &request);
        assert_eq!(args, vec!["create-obj", "/work/foo.wasm"]);
    }

    #[test]
    fn test_order_arguments_preserves_group_order_verbatim() {
        let backend = WasmerBackend::new();
        let request = CompilationRequest::new(
            PathBuf::from("/work/foo.wasm"),
            "output",
            PathBuf::from("/work"),
        )
        .with_user_options(vec!["-b".to_string(), "-a".to_string(), "-b".to_string()]);
        let args = backend.order_arguments(Vec::new(), Path::new("/work/foo.wasm"), &request);
        assert_eq!(args, vec!["create-obj", "-b", "-a", "-b", "/work/foo.wasm"]);
    }
}
