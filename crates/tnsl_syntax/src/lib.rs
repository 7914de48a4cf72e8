//! Syntax front end for the TNSL language: lexer, syntax tree, parser, diagnostics.
//!
//! The crate turns source text into a homogeneous syntax tree that downstream tools (the world
//! builder and the evaluator) walk by node kind.
//!
//! ## Notes
//! - This crate is "syntax-only": it does not resolve names, check types, or evaluate anything.
//! - Vocabulary identity (reserved words, rune groups, operator orders) comes from
//!   `tnsl_core::lang` registries.
//! - The parser stops at the first grammar violation; there is no error recovery.
//!
//! ## Examples
//! ```rust
//! use tnsl_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("/; main ;/\n");
//! let root = parser::build_tree(&tokens, "main.tnsl").unwrap();
//! assert_eq!(root.children.len(), 1);
//! ```
//!
//! ## See also
//! - `tnsl_core::lang` for the registries and the token classifier.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod token_helpers;
