//! FORGE Core Types
//!
//! This crate contains pure types and logic with no I/O: the shared
//! error taxonomy, execution options, output filters, and the generic
//! compilation request that backends transform before delegating.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod exec;
pub mod filters;
pub mod request;

// Re-exports
pub use error::{ForgeError, ForgeResult};
pub use exec::ExecOptions;
pub use filters::OutputFilters;
pub use request::CompilationRequest;
