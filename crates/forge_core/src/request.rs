//! The generic unit of compilation work.

use crate::exec::ExecOptions;
use crate::filters::OutputFilters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single compilation request
///
/// The six option groups are already ordered by the caller and must be
/// preserved verbatim: backends concatenate, never reorder, filter, or
/// deduplicate within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationRequest {
    /// Input source or intermediate file
    pub input: PathBuf,
    /// Base name for the output artifact (extension chosen by backend)
    pub output_base: String,
    /// Working directory for the compilation
    pub working_dir: PathBuf,
    /// Library include paths
    pub lib_includes: Vec<String>,
    /// Library-specific compile options
    pub lib_options: Vec<String>,
    /// Library search paths
    pub lib_paths: Vec<String>,
    /// Library link names
    pub lib_links: Vec<String>,
    /// Free-form user options
    pub user_options: Vec<String>,
    /// Static library links
    pub static_lib_links: Vec<String>,
    /// Desired output shape; backends may mutate a working copy
    pub filters: OutputFilters,
    /// Execution options; `None` means the framework default set
    pub exec: Option<ExecOptions>,
}

impl CompilationRequest {
    /// Create a request with empty option groups
    #[must_use]
    pub fn new(input: PathBuf, output_base: &str, working_dir: PathBuf) -> Self {
        Self {
            input,
            output_base: output_base.to_string(),
            working_dir,
            lib_includes: Vec::new(),
            lib_options: Vec::new(),
            lib_paths: Vec::new(),
            lib_links: Vec::new(),
            user_options: Vec::new(),
            static_lib_links: Vec::new(),
            filters: OutputFilters::new(),
            exec: None,
        }
    }

    /// Set the library include paths
    #[must_use]
    pub fn with_lib_includes(mut self, lib_includes: Vec<String>) -> Self {
        self.lib_includes = lib_includes;
        self
    }

    /// Set the library compile options
    #[must_use]
    pub fn with_lib_options(mut self, lib_options: Vec<String>) -> Self {
        self.lib_options = lib_options;
        self
    }

    /// Set the library search paths
    #[must_use]
    pub fn with_lib_paths(mut self, lib_paths: Vec<String>) -> Self {
        self.lib_paths = lib_paths;
        self
    }

    /// Set the library link names
    #[must_use]
    pub fn with_lib_links(mut self, lib_links: Vec<String>) -> Self {
        self.lib_links = lib_links;
        self
    }

    /// Set the user options
    #[must_use]
    pub fn with_user_options(mut self, user_options: Vec<String>) -> Self {
        self.user_options = user_options;
        self
    }

    /// Set the static library links
    #[must_use]
    pub fn with_static_lib_links(mut self, static_lib_links: Vec<String>) -> Self {
        self.static_lib_links = static_lib_links;
        self
    }

    /// Set the desired output filters
    #[must_use]
    pub fn with_filters(mut self, filters: OutputFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Set explicit execution options
    #[must_use]
    pub fn with_exec(mut self, exec: ExecOptions) -> Self {
        self.exec = Some(exec);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request() -> CompilationRequest {
        CompilationRequest::new(
            PathBuf::from("/work/foo.wat"),
            "output",
            PathBuf::from("/work"),
        )
    }

    #[test]
    fn test_request_new_empty_groups() {
        let req = make_request();
        assert!(req.lib_includes.is_empty());
        assert!(req.static_lib_links.is_empty());
        assert!(req.exec.is_none());
    }

    #[test]
    fn test_request_builders_preserve_order() {
        let req = make_request()
            .with_user_options(vec!["-O2".to_string(), "-O1".to_string(), "-O2".to_string()]);
        // Caller ordering kept verbatim, duplicates included
        assert_eq!(req.user_options, vec!["-O2", "-O1", "-O2"]);
    }

    #[test]
    fn test_request_json_round_trip() {
        let req = make_request()
            .with_lib_links(vec!["-lfoo".to_string()])
            .with_exec(ExecOptions::new().with_timeout_ms(250));
        let json = serde_json::to_string(&req).unwrap();
        let back: CompilationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn test_request_with_exec() {
        let req = make_request().with_exec(ExecOptions::new().with_timeout_ms(100));
        assert_eq!(req.exec.unwrap().timeout_ms, 100);
    }
}
