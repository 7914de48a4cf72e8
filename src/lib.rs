#![forbid(unsafe_code)]
//! TNSL front end
//!
//! This crate provides the `tnsl` command-line tool: it lexes a TNSL source file, builds its
//! syntax tree, and writes either the token stream or the tree to an output file.
//!
//! The lexer and parser live in `tnsl_syntax`; the reserved vocabulary lives in `tnsl_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: Registry lookups by id use `.expect("... info missing")`; a panic there is
//!   a registry bug.

pub mod cli;
pub mod version;

pub use tnsl_syntax::ast;
pub use tnsl_syntax::diagnostics;
pub use tnsl_syntax::lexer;
pub use tnsl_syntax::parser;
pub use tnsl_syntax::render;
