//! FORGE Wasmer Backend
//!
//! Adapter for the `wasmer create-obj` ahead-of-time object compiler.
//! Wasmer deviates from the generic compiler contract in three ways:
//! a leading subcommand with the input filename last, a fixed `.obj`
//! output extension, and no direct support for textual `.wat` input,
//! which requires a `wat2wasm` conversion step ahead of the main
//! invocation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;

pub use backend::{WasmerBackend, WAT2WASM};
