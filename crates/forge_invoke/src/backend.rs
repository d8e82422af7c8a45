//! Backend strategy contract.
//!
//! A backend teaches the framework how to drive one concrete
//! toolchain. The fixed interface here is the set of extension points
//! a toolchain can differ on: filter-driven flags, output naming,
//! runtime-library-path translation, argument ordering, and the
//! invocation itself. Backends are registered strategy objects
//! selected by id; there is no inheritance.

use crate::outcome::CompilationOutcome;
use crate::session::Session;
use async_trait::async_trait;
use forge_core::{CompilationRequest, ExecOptions, ForgeResult, OutputFilters};
use std::path::{Path, PathBuf};

/// One toolchain's customization of the generic invocation path
///
/// Every method has a default matching the common compiler contract;
/// an adapter overrides only the points where its toolchain deviates.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Backend identifier used for configuration-time selection
    fn id(&self) -> &str;

    /// Flags derived from the requested output shape
    ///
    /// May mutate `filters` when the toolchain cannot honor the
    /// requested shape. The default asks for assembly unless binary
    /// output was requested, then names the output path.
    fn options_for_filter(&self, filters: &mut OutputFilters, output_path: &Path) -> Vec<String> {
        let mut options = Vec::new();
        if !filters.binary {
            options.push("-S".to_string());
        }
        options.push("-o".to_string());
        options.push(output_path.display().to_string());
        options
    }

    /// Resolve the output artifact path for a given base name
    fn output_filename(&self, dir: &Path, output_base: &str) -> PathBuf {
        dir.join(format!("{output_base}.s"))
    }

    /// Translate library search paths into runtime-search-path flags
    ///
    /// An empty result is a valid contract for toolchains whose driver
    /// has no such flag.
    fn shared_library_path_args(&self, lib_paths: &[String]) -> Vec<String> {
        lib_paths
            .iter()
            .map(|path| format!("-Wl,-rpath,{path}"))
            .collect()
    }

    /// Produce the final ordered argument vector
    ///
    /// Group ordering within the request is preserved verbatim; no
    /// reordering, filtering, or deduplication.
    fn order_arguments(
        &self,
        options: Vec<String>,
        input: &Path,
        request: &CompilationRequest,
    ) -> Vec<String> {
        let mut args = options;
        args.extend(request.lib_includes.iter().cloned());
        args.extend(request.lib_options.iter().cloned());
        args.extend(request.lib_paths.iter().cloned());
        args.extend(request.lib_links.iter().cloned());
        args.extend(request.user_options.iter().cloned());
        args.push(input.display().to_string());
        args.extend(request.static_lib_links.iter().cloned());
        args
    }

    /// Run the main compiler on an already-assembled argument vector
    ///
    /// Adapters override this to insert prerequisite pipeline steps
    /// before delegating to the session. A `None` exec falls back to
    /// the framework default set.
    ///
    /// # Errors
    ///
    /// Returns error if a pipeline step or the spawn itself fails; a
    /// nonzero compiler exit is carried in the outcome.
    async fn run_compiler(
        &self,
        session: &Session,
        args: &[String],
        input: &Path,
        exec: Option<ExecOptions>,
    ) -> ForgeResult<CompilationOutcome> {
        session
            .spawn_compiler(args, input, exec.unwrap_or_default())
            .await
    }
}

impl std::fmt::Debug for dyn Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend").field("id", &self.id()).finish()
    }
}
