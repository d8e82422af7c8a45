//! FORGE Generic Invocation Path
//!
//! The framework-owned machinery that actually drives a compiler:
//! the [`Backend`] strategy contract with its extension points, the
//! process [`Runner`], the per-request [`Session`] that assembles
//! arguments and delegates, and the [`BackendRegistry`] that selects
//! a backend by identifier at configuration time.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod outcome;
pub mod registry;
pub mod runner;
pub mod session;

pub use backend::Backend;
pub use outcome::{CompilationOutcome, CompilerDescriptor};
pub use registry::BackendRegistry;
pub use runner::{ProcessRunner, Runner};
pub use session::Session;
