//! FORGE Tool System
//!
//! Auxiliary tools resolved by capability id. A pipeline step looks a
//! tool up by a stable string key, independent of the underlying
//! binary name or version, and "not found" is a first-class outcome.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod process;
pub mod registry;
pub mod tool;

pub use context::ToolContext;
pub use process::ProcessTool;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolOutput};
